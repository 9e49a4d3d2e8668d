use crate::demo::DemoSection;
use crate::landing::{Advantages, ContactSection, Hero, Solutions, Testimonials};
use crate::layout::footer::Footer;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::header::Header;
use crate::shared::notifications::{ToastHost, ToastService};
use crate::shared::page_config::load_page_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_page_config();

    // Toasts are shown from every section, the menu from header and CTAs.
    provide_context(ToastService::new(&config.notifications));
    provide_context(AppGlobalContext::new(config));

    view! {
        <Header />
        <main class="page">
            <Hero />
            <Solutions />
            <DemoSection />
            <Advantages />
            <Testimonials />
            <ContactSection />
        </main>
        <Footer />
        <ToastHost />
    }
}
