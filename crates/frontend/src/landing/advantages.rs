use crate::shared::components::{FadeInCard, SectionHeader};
use crate::shared::icons::icon;
use leptos::prelude::*;

const ADVANTAGES: &[(&str, &str, &str)] = &[
    ("clock", "Atendimento mais rápido", "Menos espera entre o pedido e a cozinha."),
    ("chart", "Decisões com dados", "Acompanhe ticket médio, giro de mesas e pratos mais vendidos."),
    ("star", "Clientes que voltam", "Campanhas e avaliações no mesmo lugar."),
];

#[component]
pub fn Advantages() -> impl IntoView {
    view! {
        <section id="vantagens" class="section advantages">
            <SectionHeader title="Vantagens" />
            <div class="advantages__grid">
                {ADVANTAGES
                    .iter()
                    .map(|(icon_name, title, text)| view! {
                        <FadeInCard class="advantage-card">
                            <div class="advantage-card__icon">{icon(icon_name)}</div>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </FadeInCard>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
