//! Property listing page with create, edit, detail and delete flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It triggers the initial list fetch, swaps the
//! list for the form while one is open, and hosts the modal and toasts.

use leptos::prelude::*;

use crate::app::SessionHandle;
use crate::components::property_card::PropertyCard;
use crate::components::property_form::PropertyForm;
use crate::components::property_modal::PropertyModal;
use crate::components::toast_stack::ToastStack;
use crate::net::types::PropertyId;
use crate::state::view::{EMPTY_LIST_MESSAGE, ListView};

/// Listing page: header, card grid or form, detail modal, toast stack.
#[component]
pub fn PropertiesPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let snapshot = session.view();

    session.spawn(|s| async move {
        let _ = s.load().await;
    });

    let on_add = move |_| {
        session.run(|s| s.show_add());
    };
    let on_view = Callback::new(move |id: PropertyId| {
        session.spawn(move |s| async move {
            let _ = s.show_details(id).await;
        });
    });
    let on_edit = Callback::new(move |id: PropertyId| {
        session.run(|s| s.edit(id));
    });
    let on_delete = Callback::new(move |id: PropertyId| {
        session.spawn(move |s| async move {
            let _ = s.confirm_delete(id).await;
        });
    });

    let list = move || match snapshot.get().list {
        ListView::Loading => view! {
            <div class="loading">
                <i class="fas fa-spinner fa-spin"></i>
                <p>"Loading properties..."</p>
            </div>
        }
        .into_any(),
        ListView::Empty => view! {
            <div class="empty-message">
                <i class="fas fa-home"></i>
                <p>{EMPTY_LIST_MESSAGE}</p>
            </div>
        }
        .into_any(),
        ListView::Cards(cards) => view! {
            <div class="properties-grid">
                {cards
                    .into_iter()
                    .map(|card| view! { <PropertyCard card=card on_view=on_view on_edit=on_edit on_delete=on_delete/> })
                    .collect_view()}
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="container">
            <header class="header">
                <h1>
                    <i class="fas fa-building"></i>
                    " Property Listings"
                </h1>
            </header>
            <Show when=move || snapshot.get().show_list fallback=|| view! { <PropertyForm/> }>
                <section class="property-list">
                    <div class="section-header">
                        <h2>"Properties"</h2>
                        <button class="btn btn-primary" on:click=on_add>
                            <i class="fas fa-plus"></i>
                            " New Property"
                        </button>
                    </div>
                    {list}
                </section>
            </Show>
            <PropertyModal/>
            <ToastStack/>
        </div>
    }
}
