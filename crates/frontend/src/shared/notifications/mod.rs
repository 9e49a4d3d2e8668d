//! Toast notifications: one at a time, auto-dismissed, slide-out before removal.

use contracts::enums::ToastKind;
use contracts::shared::config::NotificationConfig;
use contracts::shared::notification::{Toast, ToastSlot};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

#[derive(Clone, Copy)]
pub struct ToastService {
    slot: RwSignal<ToastSlot>,
    lifetime_ms: u32,
    exit_ms: u32,
}

impl ToastService {
    pub fn new(config: &NotificationConfig) -> Self {
        Self {
            slot: RwSignal::new(ToastSlot::new()),
            lifetime_ms: config.lifetime_ms,
            exit_ms: config.exit_ms,
        }
    }

    /// Show a toast, replacing the current one, and schedule its dismissal
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        let message = message.into();
        let Some(id) = self.slot.try_update(|slot| slot.show(message, kind)) else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(this.lifetime_ms).await;
            this.dismiss(id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Error);
    }

    /// Play the exit animation of toast `id`, then remove it.
    /// Stale ids of replaced toasts are ignored.
    pub fn dismiss(&self, id: Uuid) {
        if self.slot.try_update(|slot| slot.begin_dismiss(id)) != Some(true) {
            return;
        }
        let slot = self.slot;
        let exit_ms = self.exit_ms;
        spawn_local(async move {
            TimeoutFuture::new(exit_ms).await;
            slot.update(|slot| {
                slot.remove(id);
            });
        });
    }

    pub fn current(&self) -> Option<Toast> {
        self.slot.with(|slot| slot.current().cloned())
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Renders the current toast, if any
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        {move || {
            toasts.current().map(|toast| {
                let id = toast.id;
                let class = toast.css_class();
                view! {
                    <div class=class role="status" aria-live="polite">
                        <p>{toast.message}</p>
                        <button
                            class="notification-close"
                            aria-label="Fechar"
                            on:click=move |_| toasts.dismiss(id)
                        >
                            "×"
                        </button>
                    </div>
                }
            })
        }}
    }
}
