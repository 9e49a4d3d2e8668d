use crate::shared::icons::icon;
use leptos::prelude::*;

/// Dashboard counter. `value_id` lets the mock updater rewrite the value
/// text in place.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Initial value text
    #[prop(into)]
    value: String,
    /// `id` of the value element
    #[prop(optional, into)]
    value_id: Option<String>,
    /// Optional subtitle below the value
    #[prop(optional, into)]
    subtitle: Option<String>,
) -> impl IntoView {
    let subtitle_view = subtitle.map(|s| {
        view! { <div class="stat-card__subtitle">{s}</div> }
    });

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value" id=value_id>
                    {value}
                </div>
                {subtitle_view}
            </div>
        </div>
    }
}
