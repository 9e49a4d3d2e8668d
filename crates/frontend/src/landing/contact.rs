//! Contact form. Submission is simulated: the payload goes to the debug
//! log after a short delay.

use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::{Button, ChoiceField, InputKind, NoteField, TextField};
use crate::shared::components::SectionHeader;
use crate::shared::notifications::use_toasts;
use contracts::landing::forms::{
    payload_json, ContactField, ContactForm, CONTACT_SUCCESS, PLANS, SENDING_LABEL,
};
use contracts::landing::scroll::CONTACT_SECTION_ID;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ContactSection() -> impl IntoView {
    let ctx = use_app_context();
    let toasts = use_toasts();
    let form = RwSignal::new(ContactForm::default());
    let invalid = RwSignal::new(Vec::<ContactField>::new());
    let sending = RwSignal::new(false);

    let value_of = move |field: ContactField| {
        Signal::derive(move || form.with(|f| f.value(field).to_string()))
    };
    let is_invalid = move |field: ContactField| {
        Signal::derive(move || invalid.with(|list| list.contains(&field)))
    };
    let setter = move |field: ContactField| {
        Callback::new(move |v: String| {
            form.update(|f| f.set(field, v));
            invalid.update(|list| list.retain(|f| *f != field));
        })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let request = match form.with_untracked(|f| f.validate()) {
            Ok(request) => request,
            Err(err) => {
                invalid.set(err.fields());
                toasts.error(err.to_string());
                return;
            }
        };
        invalid.set(Vec::new());
        sending.set(true);
        let delay = ctx.config.with_value(|c| c.forms.submit_delay_ms);
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            match payload_json(&request) {
                Ok(json) => log::debug!("contact request: {}", json),
                Err(e) => log::error!("contact payload: {}", e),
            }
            toasts.success(CONTACT_SUCCESS);
            form.update(|f| f.reset());
            sending.set(false);
        });
    };

    let text_input = move |field: ContactField, kind: InputKind, placeholder: &'static str| {
        view! {
            <TextField
                id=field.code()
                label=field.display_name()
                kind=kind
                placeholder=placeholder
                required=true
                value=value_of(field)
                invalid=is_invalid(field)
                on_input=setter(field)
            />
        }
    };

    view! {
        <section id=CONTACT_SECTION_ID class="section contact">
            <SectionHeader
                title="Fale com a gente"
                subtitle="Conte sobre o seu restaurante e agendamos uma demonstração."
            />
            <form id="contact-form" class="form contact__form" novalidate=true on:submit=on_submit>
                {text_input(ContactField::Name, InputKind::Text, "Seu nome")}
                {text_input(ContactField::Email, InputKind::Email, "voce@restaurante.com.br")}
                {text_input(ContactField::Phone, InputKind::Tel, "(11) 99999-0000")}
                {text_input(ContactField::Restaurant, InputKind::Text, "Nome do restaurante")}
                <ChoiceField
                    id=ContactField::Plan.code()
                    label=ContactField::Plan.display_name()
                    options=PLANS
                    placeholder="Selecione um plano"
                    required=true
                    value=value_of(ContactField::Plan)
                    invalid=is_invalid(ContactField::Plan)
                    on_change=setter(ContactField::Plan)
                />
                <NoteField
                    id="mensagem"
                    label="Mensagem"
                    placeholder="Quantas mesas, horários de pico, dúvidas..."
                    value=Signal::derive(move || form.with(|f| f.message.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.message = v))
                />
                <Button button_type="submit" busy=sending busy_label=SENDING_LABEL>
                    "Solicitar contato"
                </Button>
            </form>
        </section>
    }
}
