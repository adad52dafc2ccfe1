use super::{ContactError, ContactField, ContactSubmission, SubmissionResult};

pub const FALLBACK_FAILURE: &str = "There was an error sending your message. Please try again.";
/// Shown when the relay answers `success: false` without saying why.
pub const UNEXPLAINED_FAILURE: &str = "Failed to send message";

const SUCCESS_TITLE: &str = "Message Sent Successfully!";
const SUCCESS_DESCRIPTION: &str = "Thank you for your message. I'll get back to you soon!";
const FAILURE_TITLE: &str = "Failed to Send Message";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Failure,
}

/// The one notification shown for a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: &'static str,
    pub description: String,
}

impl Toast {
    fn success() -> Self {
        Self {
            kind: ToastKind::Success,
            title: SUCCESS_TITLE,
            description: SUCCESS_DESCRIPTION.to_string(),
        }
    }

    fn failure(description: Option<String>, fallback: &str) -> Self {
        Self {
            kind: ToastKind::Failure,
            title: FAILURE_TITLE,
            description: description
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| fallback.to_string()),
        }
    }
}

/// Contact form state. The busy flag is raised by [`ContactForm::begin_submit`]
/// and only [`ContactForm::settle`] lowers it again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactSubmission,
    busy: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.fields.name,
            ContactField::Email => &self.fields.email,
            ContactField::Message => &self.fields.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.fields.name = value,
            ContactField::Email => self.fields.email = value,
            ContactField::Message => self.fields.message = value,
        }
    }

    /// Updates the field whose form control is named `name`.
    pub fn set_named(&mut self, name: &str, value: String) -> Result<(), ContactError> {
        self.set(name.parse()?, value);
        Ok(())
    }

    pub fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Marks the form busy and hands back the snapshot to send.
    /// `None` while another submission is still in flight.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.busy {
            return None;
        }
        self.busy = true;
        Some(self.fields.clone())
    }

    pub fn settle(&mut self, outcome: Result<SubmissionResult, ContactError>) -> Toast {
        self.busy = false;
        match outcome {
            Ok(res) if res.success => {
                self.fields = ContactSubmission::default();
                Toast::success()
            }
            Ok(res) => Toast::failure(res.error, UNEXPLAINED_FAILURE),
            Err(_) => Toast::failure(None, FALLBACK_FAILURE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(ContactField::Name, "Jane".to_string());
        form.set(ContactField::Email, "jane@x.com".to_string());
        form.set(ContactField::Message, "Hello".to_string());
        form
    }

    #[test]
    fn test_starts_empty_and_idle() {
        let form = ContactForm::new();
        assert_eq!(form.fields(), &ContactSubmission::default());
        assert!(!form.is_busy());
    }

    #[test]
    fn test_set_only_touches_one_field() {
        let mut form = filled();
        form.set(ContactField::Email, "jane@y.org".to_string());
        assert_eq!(form.get(ContactField::Name), "Jane");
        assert_eq!(form.get(ContactField::Email), "jane@y.org");
        assert_eq!(form.get(ContactField::Message), "Hello");
    }

    #[test]
    fn test_busy_while_in_flight() {
        let mut form = filled();
        let sent = form.begin_submit().expect("idle form should submit");
        assert_eq!(sent.name, "Jane");
        assert!(form.is_busy());

        // a second submit while busy does not produce another request
        assert!(form.begin_submit().is_none());
        assert!(form.is_busy());

        form.settle(Ok(SubmissionResult::sent("id")));
        assert!(!form.is_busy());
    }

    #[test]
    fn test_success_resets_fields() {
        let mut form = filled();
        form.begin_submit();
        let toast = form.settle(Ok(SubmissionResult::sent("id")));
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.title, "Message Sent Successfully!");
        assert_eq!(form.fields(), &ContactSubmission::default());
    }

    #[test]
    fn test_failure_shows_error_and_keeps_fields() {
        let mut form = filled();
        form.begin_submit();
        let toast = form.settle(Ok(SubmissionResult::failed("X")));
        assert_eq!(toast.kind, ToastKind::Failure);
        assert_eq!(toast.description, "X");
        assert!(!form.is_busy());
        assert_eq!(form.get(ContactField::Name), "Jane");
    }

    #[test]
    fn test_failure_without_error_uses_fallback() {
        let mut form = filled();
        form.begin_submit();
        let toast = form.settle(Ok(SubmissionResult::default()));
        assert_eq!(toast.kind, ToastKind::Failure);
        assert_eq!(toast.description, "Failed to send message");

        form.begin_submit();
        let toast = form.settle(Ok(SubmissionResult::failed("")));
        assert_eq!(toast.description, UNEXPLAINED_FAILURE);
    }

    #[test]
    fn test_set_named() {
        let mut form = ContactForm::new();
        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            form.set_named(field.name(), format!("{field:?}")).unwrap();
        }
        assert_eq!(form.get(ContactField::Name), "Name");
        assert_eq!(form.get(ContactField::Email), "Email");
        assert_eq!(form.get(ContactField::Message), "Message");

        let before = form.clone();
        assert_eq!(
            form.set_named("phone", "555".to_string()),
            Err(ContactError::UnknownField("phone".to_string()))
        );
        assert_eq!(form, before);
    }

    #[test]
    fn test_transport_error_releases_busy() {
        let mut form = filled();
        form.begin_submit();
        let toast = form.settle(Err(ContactError::Transport(
            "error sending request".to_string(),
        )));
        assert!(!form.is_busy());
        assert_eq!(toast.kind, ToastKind::Failure);
        assert_eq!(toast.description, FALLBACK_FAILURE);
    }
}
