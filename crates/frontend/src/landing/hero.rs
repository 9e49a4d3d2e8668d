use crate::shared::components::{AnchorLink, CtaButton};
use contracts::demo::catalog::dashboard_seed;
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    let seed = dashboard_seed();

    view! {
        <section id="inicio" class="hero">
            <div class="hero__content">
                <h1 class="hero__title">
                    "O cardápio digital que organiza o seu restaurante"
                </h1>
                <p class="hero__subtitle">
                    "Pedidos pelo QR code, cozinha em tempo real e campanhas que trazem o cliente de volta."
                </p>
                <div class="hero__actions">
                    <CtaButton id="hero-cta" label="Quero conhecer" />
                    <AnchorLink href="#demo" label="Ver demonstração" class="button button--secondary" />
                </div>
                <ul class="hero__facts">
                    <li>{format!("{} pedidos hoje no painel de exemplo", seed.orders_today)}</li>
                    <li>"Sem taxa de instalação"</li>
                </ul>
            </div>
        </section>
    }
}
