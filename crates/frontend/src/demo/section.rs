use super::screens::{CampaignsScreen, DashboardScreen, KitchenScreen};
use crate::layout::global_context::use_app_context;
use crate::shared::components::SectionHeader;
use crate::shared::dom_surface::WebSurface;
use crate::shared::timers::BrowserScheduler;
use contracts::demo::catalog::DEMO_SCREENS;
use contracts::demo::tab_switcher::screen_id;
use contracts::demo::DemoController;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;

type LiveDemo = DemoController<WebSurface, BrowserScheduler>;

/// `?demo=kitchen` opens the demo on that screen
#[derive(Debug, Default, Deserialize)]
struct DemoQuery {
    demo: Option<String>,
}

/// Screen key named by the query string, if it is a known screen
fn parse_demo_query(search: &str) -> Option<String> {
    let query: DemoQuery = match serde_qs::from_str(search.trim_start_matches('?')) {
        Ok(q) => q,
        Err(e) => {
            log::debug!("ignoring query string {:?}: {}", search, e);
            return None;
        }
    };
    let key = query.demo?;
    if DEMO_SCREENS.iter().any(|(k, _)| *k == key) {
        Some(key)
    } else {
        log::warn!("unknown demo screen {:?} in query string", key);
        None
    }
}

fn requested_screen() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    parse_demo_query(&search)
}

#[component]
pub fn DemoSection() -> impl IntoView {
    let ctx = use_app_context();
    let controller = StoredValue::new_local(None::<LiveDemo>);
    let preselected = requested_screen();

    // The controller reads the rendered markup, so it starts after mount
    Effect::new(move |_| {
        if controller.with_value(|c| c.is_some()) {
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            if controller.is_disposed() {
                return;
            }
            let Some(surface) = WebSurface::new() else {
                log::error!("document unavailable, demo not started");
                return;
            };
            let demo = ctx
                .config
                .with_value(|config| DemoController::new(surface, BrowserScheduler::new(), config));
            demo.start(StdRng::from_entropy());
            controller.set_value(Some(demo));
        });
    });

    on_cleanup(move || {
        let _ = controller.try_update_value(|c| {
            if let Some(demo) = c.take() {
                demo.teardown();
            }
        });
    });

    let screen = |key: &str| match key {
        "dashboard" => view! { <DashboardScreen /> }.into_any(),
        "kitchen" => view! { <KitchenScreen /> }.into_any(),
        _ => view! { <CampaignsScreen /> }.into_any(),
    };

    view! {
        <section id="demo" class="section demo">
            <SectionHeader
                title="Veja o sistema funcionando"
                subtitle="Os números mudam sozinhos, clique nas mesas e nos pedidos."
            />
            <div class="demo-tabs" role="tablist">
                {DEMO_SCREENS
                    .iter()
                    .map(|(key, label)| {
                        let active = preselected.as_deref() == Some(*key);
                        view! {
                            <button type="button" role="tab" class="demo-tab" class:active=active data-tab=*key>
                                {*label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="demo-screens">
                {DEMO_SCREENS
                    .iter()
                    .map(|(key, _)| view! {
                        <div id=screen_id(key) class="demo-screen" role="tabpanel">
                            {screen(*key)}
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
