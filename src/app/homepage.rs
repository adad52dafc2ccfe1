use leptos::prelude::*;
use leptos_meta::Title;

use super::{background::DataBackground, contact::ContactSection, hero::HeroSection};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Data Analyst" />
        <div class="relative">
            <DataBackground />
            <HeroSection />
            <ContactSection />
        </div>
    }
}
