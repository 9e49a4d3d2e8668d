//! Labelled form controls. Each control is named after its `id`, so the
//! same string serves `id`, `name` and the label's `for`.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Tel,
}

impl InputKind {
    fn attr(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Tel => "tel",
        }
    }
}

#[component]
fn FieldShell(
    id: &'static str,
    label: &'static str,
    invalid: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form__group" class:form__group--invalid=move || invalid.get()>
            <label class="form__label" for=id>{label}</label>
            {children()}
        </div>
    }
}

/// Single-line input
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(optional)] kind: InputKind,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] invalid: Signal<bool>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <FieldShell id=id label=label invalid=invalid>
            <input
                id=id
                name=id
                class="form__input"
                type=kind.attr()
                placeholder=placeholder
                required=required
                aria-invalid=move || if invalid.get() { "true" } else { "false" }
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </FieldShell>
    }
}

/// Select with an empty placeholder option first
#[component]
pub fn ChoiceField(
    id: &'static str,
    label: &'static str,
    /// (value, label) pairs
    options: &'static [(&'static str, &'static str)],
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] invalid: Signal<bool>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <FieldShell id=id label=label invalid=invalid>
            <select
                id=id
                name=id
                class="form__select"
                required=required
                aria-invalid=move || if invalid.get() { "true" } else { "false" }
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">{placeholder}</option>
                {options
                    .iter()
                    .map(|(code, text)| view! { <option value=*code>{*text}</option> })
                    .collect_view()}
            </select>
        </FieldShell>
    }
}

/// Optional multi-line text; never marked invalid
#[component]
pub fn NoteField(
    id: &'static str,
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = 4)] rows: u32,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <FieldShell id=id label=label invalid=Signal::stored(false)>
            <textarea
                id=id
                name=id
                class="form__textarea"
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </FieldShell>
    }
}
