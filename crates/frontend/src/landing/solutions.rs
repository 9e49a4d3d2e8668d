use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::{Button, ButtonVariant};
use crate::shared::components::{FadeInCard, SectionHeader};
use crate::shared::icons::icon;
use crate::shared::notifications::use_toasts;
use crate::shared::scroll::scroll_to_section;
use contracts::landing::scroll::{redirect_message, CONTACT_SECTION_ID};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

struct Solution {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const SOLUTIONS: &[Solution] = &[
    Solution {
        icon: "qr",
        title: "Cardápio QR",
        text: "O cliente escaneia, escolhe e pede direto da mesa.",
    },
    Solution {
        icon: "kitchen",
        title: "Gestão de Cozinha",
        text: "Fila de pedidos por status, do recebimento à entrega.",
    },
    Solution {
        icon: "table",
        title: "Controle de Mesas",
        text: "Ocupação e tempo de permanência de cada mesa em um só painel.",
    },
    Solution {
        icon: "campaign",
        title: "Campanhas",
        text: "Promoções segmentadas enviadas para quem já visitou a casa.",
    },
];

#[component]
pub fn Solutions() -> impl IntoView {
    let ctx = use_app_context();
    let toasts = use_toasts();

    let learn_more = move |title: &'static str| {
        toasts.success(redirect_message(title));
        let delay = ctx.config.with_value(|c| c.forms.redirect_delay_ms);
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            scroll_to_section(CONTACT_SECTION_ID);
        });
    };

    view! {
        <section id="solucoes" class="section solutions">
            <SectionHeader
                title="Soluções"
                subtitle="Tudo o que o salão e a cozinha precisam, integrado."
            />
            <div class="solutions__grid">
                {SOLUTIONS
                    .iter()
                    .map(|s| {
                        let title = s.title;
                        view! {
                            <FadeInCard class="solution-card">
                                <div class="solution-card__icon">{icon(s.icon)}</div>
                                <h3>{title}</h3>
                                <p>{s.text}</p>
                                <Button
                                    variant=ButtonVariant::Ghost
                                    class="solution-button"
                                    on_click=Callback::new(move |_| learn_more(title))
                                >
                                    "Saiba mais"
                                </Button>
                            </FadeInCard>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
