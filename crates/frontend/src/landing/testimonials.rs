use crate::shared::components::{FadeInCard, SectionHeader};
use leptos::prelude::*;

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    place: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Os pedidos chegam na cozinha sem papel e sem erro de anotação.",
        author: "Marina Souza",
        place: "Bistrô Jardim, São Paulo",
    },
    Testimonial {
        quote: "O giro de mesas no almoço aumentou já no primeiro mês.",
        author: "Carlos Menezes",
        place: "Cantina do Porto, Recife",
    },
    Testimonial {
        quote: "As campanhas de terça lotaram a casa num dia que era fraco.",
        author: "Júlia Ramos",
        place: "Sabor da Serra, Belo Horizonte",
    },
];

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="depoimentos" class="section testimonials">
            <SectionHeader title="Quem usa recomenda" />
            <div class="testimonials__grid">
                {TESTIMONIALS
                    .iter()
                    .map(|t| view! {
                        <FadeInCard class="testimonial-card">
                            <blockquote>{t.quote}</blockquote>
                            <p class="testimonial-card__author">
                                <strong>{t.author}</strong>
                                <span>{t.place}</span>
                            </p>
                        </FadeInCard>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
