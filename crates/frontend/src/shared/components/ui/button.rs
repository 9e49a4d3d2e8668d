use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
}

impl ButtonVariant {
    fn css_class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button--primary",
            ButtonVariant::Ghost => "button--ghost",
        }
    }
}

/// Button with a variant, an optional small size and a busy state.
///
/// While `busy` is set the button is disabled and shows `busy_label`
/// instead of its children.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] small: bool,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// `type` attribute, "button" by default
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    #[prop(optional, into)] busy: Signal<bool>,
    #[prop(optional)] busy_label: &'static str,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: ChildrenFn,
) -> impl IntoView {
    let class_list = move || {
        let size = if small { "button--small" } else { "" };
        format!(
            "button {} {} {}",
            variant.css_class(),
            size,
            class.get().unwrap_or_default()
        )
    };
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=class_list
            disabled=move || busy.get()
            aria-busy=move || if busy.get() { "true" } else { "false" }
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {move || if busy.get() { busy_label.into_any() } else { children().into_any() }}
        </button>
    }
}
