//! Stack of transient notifications.

use leptos::prelude::*;

use crate::app::SessionHandle;
use crate::state::toast::Toast;

/// Toasts in arrival order. Clicking one dismisses it immediately; expiry
/// timers are scheduled by [`SessionHandle`].
#[component]
pub fn ToastStack() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let snapshot = session.view();

    view! {
        <div class="toast-container">
            <For
                each=move || snapshot.get().toasts
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast {}", toast.kind.class())
                            title="Click to dismiss"
                            on:click=move |_| {
                                session.run(|s| s.dismiss(id));
                            }
                        >
                            <i class=format!("fas fa-{}", toast.kind.icon())></i>
                            <span>{toast.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
