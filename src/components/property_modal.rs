//! Read-only detail modal for the targeted property.

use leptos::prelude::*;

use crate::app::SessionHandle;

/// Overlay with the freshly fetched property; hidden while nothing is targeted.
#[component]
pub fn PropertyModal() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let snapshot = session.view();
    // Re-render only when the modal content itself changes.
    let modal = Memo::new(move |_| snapshot.with(|v| v.modal.clone()));

    let close = move || {
        session.run(|s| s.close_details());
    };
    let on_edit = move |_| {
        session.run(|s| s.edit_current());
    };
    let on_delete = move |_| {
        session.spawn(|s| async move {
            let _ = s.delete_current().await;
        });
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    move || {
        modal.get().map(|modal| {
            view! {
                <div class="modal" on:click=move |_| close()>
                    <div class="modal-content" on:click=move |ev| ev.stop_propagation() on:keydown=on_keydown tabindex="0">
                        <div class="modal-header">
                            <h2>{format!("Property #{}", modal.id)}</h2>
                            <button class="close" on:click=move |_| close() title="Close">
                                "✕"
                            </button>
                        </div>
                        <div class="modal-body property-details-full">
                            <div class="detail-group">
                                <h4>
                                    <i class="fas fa-map-marker-alt"></i>
                                    " Address"
                                </h4>
                                <p>{modal.address}</p>
                            </div>
                            <div class="detail-group">
                                <h4>
                                    <i class="fas fa-dollar-sign"></i>
                                    " Price"
                                </h4>
                                <p class="price">{modal.price}</p>
                            </div>
                            <div class="detail-group">
                                <h4>
                                    <i class="fas fa-expand-arrows-alt"></i>
                                    " Size"
                                </h4>
                                <p>{modal.size}</p>
                            </div>
                            {modal.description.map(|text| {
                                view! {
                                    <div class="detail-group">
                                        <h4>
                                            <i class="fas fa-align-left"></i>
                                            " Description"
                                        </h4>
                                        <p>{text}</p>
                                    </div>
                                }
                            })}
                        </div>
                        <div class="modal-actions">
                            <button class="btn btn-success" on:click=on_edit>
                                <i class="fas fa-edit"></i>
                                " Edit"
                            </button>
                            <button class="btn btn-danger" on:click=on_delete>
                                <i class="fas fa-trash"></i>
                                " Delete"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
