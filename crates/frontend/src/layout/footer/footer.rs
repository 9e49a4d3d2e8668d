use crate::shared::components::ui::{Button, InputKind, TextField};
use crate::shared::components::AnchorLink;
use crate::shared::notifications::use_toasts;
use chrono::Datelike;
use contracts::landing::forms::{payload_json, validate_newsletter, NEWSLETTER_SUCCESS};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let toasts = use_toasts();
    let email = RwSignal::new(String::new());
    let invalid = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_newsletter(&email.get_untracked()) {
            Ok(subscription) => {
                invalid.set(false);
                match payload_json(&subscription) {
                    Ok(json) => log::debug!("newsletter subscription: {}", json),
                    Err(e) => log::error!("newsletter payload: {}", e),
                }
                toasts.success(NEWSLETTER_SUCCESS);
                email.set(String::new());
            }
            Err(err) => {
                invalid.set(true);
                toasts.error(err.to_string());
            }
        }
    };

    let year = chrono::Local::now().year();

    view! {
        <footer class="footer">
            <div class="footer__content">
                <div class="footer__brand">
                    <span class="footer__logo">"Cardápio Digital"</span>
                    <p>"Tecnologia para restaurantes que querem vender mais."</p>
                </div>
                <nav class="footer__links">
                    <AnchorLink href="#solucoes" label="Soluções" />
                    <AnchorLink href="#demo" label="Demonstração" />
                    <AnchorLink href="#contato" label="Contato" />
                </nav>
                <form id="newsletter-form" class="newsletter" novalidate=true on:submit=on_submit>
                    <TextField
                        id="newsletter-email"
                        kind=InputKind::Email
                        label="Receba novidades"
                        placeholder="seu@email.com"
                        value=email
                        invalid=invalid
                        on_input=Callback::new(move |v| {
                            email.set(v);
                            invalid.set(false);
                        })
                    />
                    <Button button_type="submit" small=true>"Inscrever"</Button>
                </form>
            </div>
            <div class="footer__bottom">
                {format!("© {} Cardápio Digital. Todos os direitos reservados.", year)}
            </div>
        </footer>
    }
}
