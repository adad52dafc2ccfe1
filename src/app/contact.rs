use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local, web_sys};

use crate::contact::{ContactField, ContactForm, RelayClient, Toast, ToastKind};

struct ContactInfo {
    icon: &'static str,
    label: &'static str,
    value: &'static str,
    href: Option<&'static str>,
}

const CONTACT_INFO: [ContactInfo; 4] = [
    ContactInfo {
        icon: "✉",
        label: "Email",
        value: "dakarapualekya@gmail.com",
        href: Some("mailto:dakarapualekya@gmail.com"),
    },
    ContactInfo {
        icon: "⌖",
        label: "Location",
        value: "London, UK",
        href: None,
    },
    ContactInfo {
        icon: "in",
        label: "LinkedIn",
        value: "alekyadakarapu",
        href: Some("https://linkedin.com/in/alekyadakarapu"),
    },
    ContactInfo {
        icon: "gh",
        label: "GitHub",
        value: "alekyadakarapu",
        href: Some("https://github.com/alekyadakarapu"),
    },
];

const INPUT_CLASS: &str = "w-full px-4 py-2 rounded-md border border-muted bg-background text-foreground placeholder-muted focus:outline-none focus:ring-2 focus:ring-primary";

#[component]
fn ToastView(
    toast: ReadSignal<Option<Toast>>,
    set_toast: WriteSignal<Option<Toast>>,
) -> impl IntoView {
    move || {
        toast.get().map(|t| {
            let class = match t.kind {
                ToastKind::Success => "border-green bg-green/10",
                ToastKind::Failure => "border-red bg-red/10",
            };
            view! {
                <div
                    role="status"
                    class=format!("fixed bottom-6 right-6 max-w-sm p-4 rounded-md border {class}")
                >
                    <div class="flex justify-between gap-4">
                        <p class="font-semibold">{t.title}</p>
                        <button aria-label="Dismiss" on:click=move |_| set_toast.set(None)>
                            "✕"
                        </button>
                    </div>
                    <p class="text-sm mt-1">{t.description}</p>
                </div>
            }
        })
    }
}

#[component]
fn ContactDetails() -> impl IntoView {
    view! {
        <div>
            <h3 class="text-2xl font-semibold mb-8">"Let's Connect"</h3>
            <div class="space-y-6">
                {CONTACT_INFO
                    .iter()
                    .map(|item| {
                        view! {
                            <div class="flex items-center p-4 rounded-lg bg-card">
                                <div class="bg-primary/30 p-3 rounded-lg mr-4 w-12 text-center">
                                    {item.icon}
                                </div>
                                <div>
                                    <p class="font-medium">{item.label}</p>
                                    {match item.href {
                                        Some(href) => {
                                            view! {
                                                <a href=href class="text-muted hover:text-primary">
                                                    {item.value}
                                                </a>
                                            }
                                                .into_any()
                                        }
                                        None => view! { <p class="text-muted">{item.value}</p> }.into_any(),
                                    }}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="mt-8 p-6 rounded-xl bg-primary/10">
                <h4 class="font-semibold mb-2">"Open to Opportunities"</h4>
                <p class="text-muted text-sm">
                    "I'm actively seeking data analyst positions where I can contribute to data-driven decision making and continue growing my expertise in machine learning and analytics."
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let (toast, set_toast) = signal(None::<Toast>);

    let field = move |f: ContactField| move || form.with(|s| s.get(f).to_string());
    let on_input = move |ev: leptos::ev::Event| {
        let name = event_target::<web_sys::Element>(&ev)
            .get_attribute("name")
            .unwrap_or_default();
        let value = event_target_value(&ev);
        if let Some(Err(e)) = form.try_update(|s| s.set_named(&name, value)) {
            log::error!("{e}");
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(submission) = form.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };
        log::debug!("Submitting contact form for {}", submission.name);
        let origin = window().location().origin().unwrap_or_default();
        let client = RelayClient::for_origin(&origin);
        spawn_local(async move {
            let outcome = client.submit(&submission).await;
            if let Err(e) = &outcome {
                log::error!("Error sending message: {e}");
            }
            if let Some(t) = form.try_update(|s| s.settle(outcome)) {
                set_toast.set(Some(t));
            }
        });
    };

    let busy = move || form.with(|s| s.is_busy());

    view! {
        <section id="contact" class="py-24 px-4">
            <div class="text-center mb-16">
                <h2 class="text-4xl md:text-5xl font-bold mb-6">"Get In Touch"</h2>
                <div class="w-20 h-1 bg-primary mx-auto mb-8"></div>
                <p class="text-lg text-muted max-w-3xl mx-auto">
                    "Ready to collaborate on your next data project? Let's discuss how we can turn your data into actionable insights."
                </p>
            </div>
            <div class="grid lg:grid-cols-2 gap-12 max-w-6xl mx-auto">
                <ContactDetails />
                <div>
                    <h3 class="text-2xl font-semibold mb-8">"Send a Message"</h3>
                    <form class="space-y-6" on:submit=on_submit>
                        <input
                            name=ContactField::Name.name()
                            placeholder="Your Name"
                            required
                            class=INPUT_CLASS
                            prop:value=field(ContactField::Name)
                            on:input=on_input
                        />
                        <input
                            name=ContactField::Email.name()
                            type="email"
                            placeholder="Your Email"
                            required
                            class=INPUT_CLASS
                            prop:value=field(ContactField::Email)
                            on:input=on_input
                        />
                        <textarea
                            name=ContactField::Message.name()
                            placeholder="Your Message"
                            required
                            rows="6"
                            class=format!("{INPUT_CLASS} resize-none")
                            prop:value=field(ContactField::Message)
                            on:input=on_input
                        ></textarea>
                        <button
                            type="submit"
                            disabled=busy
                            class="w-full px-6 py-3 rounded-md bg-primary font-medium transition-all duration-200 disabled:opacity-50"
                        >
                            {move || if busy() { "Sending..." } else { "➤ Send Message" }}
                        </button>
                    </form>
                </div>
            </div>
            <ToastView toast set_toast />
        </section>
    }
}
