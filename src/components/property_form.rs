//! Create/edit form bound to the session's form state.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use wasm_bindgen::JsCast as _;

use crate::app::SessionHandle;
use crate::state::view::{FieldView, SessionView};
use crate::util::validation::Field;

fn field_state(view: &SessionView, field: Field) -> Option<FieldView> {
    view.form.as_ref()?.fields.iter().find(|f| f.field == field).cloned()
}

/// Form section replacing the list while a create or edit is in progress.
#[component]
pub fn PropertyForm() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let snapshot = session.view();

    #[cfg(feature = "csr")]
    Effect::new(move || {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Field::Address.key()))
        else {
            return;
        };
        if let Ok(input) = el.dyn_into::<web_sys::HtmlElement>() {
            let _ = input.focus();
        }
    });

    let title = move || snapshot.with(|v| v.form.as_ref().map_or("", |f| f.title));
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        session.spawn(|s| async move {
            let _ = s.submit().await;
        });
    };
    let on_cancel = move |_| {
        session.run(|s| s.hide_form());
    };

    view! {
        <section class="property-form">
            <h2>{title}</h2>
            <form on:submit=on_submit novalidate=true>
                <FormField field=Field::Address input_type="text"/>
                <FormField field=Field::Price input_type="number"/>
                <FormField field=Field::Size input_type="number"/>
                <FormField field=Field::Description input_type="textarea"/>
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary">
                        <i class="fas fa-save"></i>
                        " Save"
                    </button>
                    <button type="button" class="btn btn-secondary" on:click=on_cancel>
                        <i class="fas fa-times"></i>
                        " Cancel"
                    </button>
                </div>
            </form>
        </section>
    }
}

/// One labelled input with its error line.
#[component]
fn FormField(field: Field, input_type: &'static str) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let snapshot = session.view();

    let state = move || snapshot.with(|v| field_state(v, field));
    let label = move || state().map_or("", |f| f.label);
    let value = move || state().map(|f| f.value).unwrap_or_default();
    let error = move || state().and_then(|f| f.error);
    let has_error = move || error().is_some();

    let on_input = move |ev| {
        let text = event_target_value(&ev);
        session.run(|s| s.input(field, text));
    };
    let on_blur = move |_| {
        session.run(|s| s.blur(field));
    };

    let input = if input_type == "textarea" {
        view! {
            <textarea
                id=field.key()
                name=field.key()
                rows="4"
                class:error=has_error
                prop:value=value
                on:input=on_input
                on:blur=on_blur
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=field.key()
                name=field.key()
                type=input_type
                step="any"
                class:error=has_error
                prop:value=value
                on:input=on_input
                on:blur=on_blur
            />
        }
        .into_any()
    };

    view! {
        <div class="form-group">
            <label for=field.key()>{label}</label>
            {input}
            <div class="error-message" class:show=has_error>
                {move || error().unwrap_or_default()}
            </div>
        </div>
    }
}
