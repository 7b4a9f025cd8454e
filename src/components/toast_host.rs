//! Toast rendering with timed auto-dismiss.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders whatever `ToastState` currently holds. Each shown toast starts a
//! dismiss timer; the state's sequence counter lets a timer detect that a
//! newer toast replaced the one it was started for.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// How long a toast stays on screen.
#[cfg(feature = "hydrate")]
const TOAST_DURATION: std::time::Duration = std::time::Duration::from_secs(4);

/// Fixed overlay that displays the current transient notification.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let state = toasts.get();
        if state.current.is_none() {
            return;
        }
        let shown_seq = state.seq;
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(TOAST_DURATION).await;
            toasts.update(|t| t.dismiss(shown_seq));
        });
    });

    view! {
        <Show when=move || toasts.get().current.is_some()>
            <div
                class=move || {
                    toasts
                        .get()
                        .current
                        .map(|t| t.kind.css_class())
                        .unwrap_or("toast")
                }
                role="status"
            >
                {move || toasts.get().current.map(|t| t.message).unwrap_or_default()}
            </div>
        </Show>
    }
}
