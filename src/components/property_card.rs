//! Card component for one property in the list grid.
//!
//! DESIGN
//! ======
//! The whole card opens the detail modal. Action buttons stop propagation so
//! they never also trigger the card click.

use leptos::prelude::*;

use crate::net::types::PropertyId;
use crate::state::view::PropertyCard as CardView;

/// A clickable card representing a property.
#[component]
pub fn PropertyCard(
    card: CardView,
    on_view: Callback<PropertyId>,
    on_edit: Callback<PropertyId>,
    on_delete: Callback<PropertyId>,
) -> impl IntoView {
    let id = card.id;

    view! {
        <div class="property-card" on:click=move |_| on_view.run(id)>
            <h3>
                <i class="fas fa-home"></i>
                " "
                {card.title}
            </h3>
            <div class="address">
                <i class="fas fa-map-marker-alt"></i>
                " "
                {card.address}
            </div>
            <div class="property-details">
                <div class="property-detail">
                    <span class="label">"Price"</span>
                    <span class="value price">{card.price}</span>
                </div>
                <div class="property-detail">
                    <span class="label">"Size"</span>
                    <span class="value size">{card.size}</span>
                </div>
            </div>
            {card.description.map(|text| view! { <div class="property-description">{text}</div> })}
            <div class="property-actions">
                <button
                    class="btn btn-primary"
                    title="View details"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        on_view.run(id);
                    }
                >
                    <i class="fas fa-eye"></i>
                    " View"
                </button>
                <button
                    class="btn btn-success"
                    title="Edit property"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        on_edit.run(id);
                    }
                >
                    <i class="fas fa-edit"></i>
                    " Edit"
                </button>
                <button
                    class="btn btn-danger"
                    title="Delete property"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        on_delete.run(id);
                    }
                >
                    <i class="fas fa-trash"></i>
                    " Delete"
                </button>
            </div>
        </div>
    }
}
