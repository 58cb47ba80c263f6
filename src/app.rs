//! Root application component with routing and the shared session context.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::api::HttpPropertyApi;
use crate::pages::properties::PropertiesPage;
use crate::state::session::PropertySession;
use crate::state::toast::ToastId;
use crate::state::view::SessionView;
use crate::util::confirm::BrowserConfirm;

/// Session wired to the browser transport and prompt.
pub type BrowserSession = PropertySession<HttpPropertyApi, BrowserConfirm>;

/// Copyable handle that components use to reach the session.
///
/// The session itself is not `Send`, so it lives in local storage; the
/// projected [`SessionView`] lives in a signal that components render from.
/// Every operation dispatched through the handle republishes the view when
/// it finishes.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    session: StoredValue<Rc<BrowserSession>, LocalStorage>,
    view: RwSignal<SessionView>,
    last_scheduled_toast: StoredValue<ToastId>,
}

impl SessionHandle {
    pub fn new(config: ClientConfig) -> Self {
        let api = HttpPropertyApi::new(config.api_base_url.clone());
        let session = Rc::new(PropertySession::new(api, BrowserConfirm, config));
        let view = RwSignal::new(session.view());
        Self {
            session: StoredValue::new_local(session),
            view,
            last_scheduled_toast: StoredValue::new(0),
        }
    }

    /// Current display-ready session state.
    pub fn view(&self) -> RwSignal<SessionView> {
        self.view
    }

    /// Run a synchronous session operation and republish the view.
    ///
    /// Returns `None` once the owning page has been torn down.
    pub fn run<R>(&self, f: impl FnOnce(&BrowserSession) -> R) -> Option<R> {
        let out = self.session.try_with_value(|s| f(s))?;
        self.refresh();
        Some(out)
    }

    /// Run an asynchronous session operation on the UI event loop and
    /// republish the view when it completes.
    pub fn spawn<F, Fut>(&self, f: F)
    where
        F: FnOnce(Rc<BrowserSession>) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let Some(session) = self.session.try_get_value() else {
            return;
        };
        #[cfg(feature = "csr")]
        {
            let handle = *self;
            leptos::task::spawn_local(async move {
                f(session).await;
                handle.refresh();
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (f, session);
        }
    }

    fn refresh(&self) {
        let Some(next) = self.session.try_with_value(|s| s.view()) else {
            return;
        };
        self.schedule_toast_expiry(&next);
        self.view.set(next);
    }

    /// Give every toast that has no timer yet one expiry timer.
    fn schedule_toast_expiry(&self, next: &SessionView) {
        let last = self.last_scheduled_toast.get_value();
        let newest = next.toasts.iter().map(|t| t.id).max().unwrap_or(last);
        if newest <= last {
            return;
        }
        self.last_scheduled_toast.set_value(newest);

        #[cfg(feature = "csr")]
        {
            let Some(ttl) = self.session.try_with_value(|s| s.toast_ttl()) else {
                return;
            };
            for id in next.toasts.iter().map(|t| t.id).filter(|&id| id > last) {
                let handle = *self;
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(ttl).await;
                    handle.run(|s| s.dismiss(id));
                });
            }
        }
    }
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionHandle::new(ClientConfig::from_document());
    provide_context(session);

    view! {
        <Title text="Property Listings"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=PropertiesPage/>
            </Routes>
        </Router>
    }
}
