//! Labeled form input with inline validation error display.

use leptos::prelude::*;

/// A labeled input field that surfaces its validation error inline.
///
/// The parent derives `error` from the current field values and gates it on
/// touched/attempted state; this component only renders what it is given.
/// Blur marks the field touched so errors appear once the user moves on.
#[component]
pub fn FieldInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] input_type: String,
    value: RwSignal<String>,
    touched: RwSignal<bool>,
    error: Signal<Option<&'static str>>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-field__label" for=name.clone()>
                {label}
            </label>
            <input
                class=move || {
                    if error.get().is_some() {
                        "form-field__input form-field__input--invalid"
                    } else {
                        "form-field__input"
                    }
                }
                type=input_type
                id=name.clone()
                name=name
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:blur=move |_| touched.set(true)
            />
            <Show when=move || error.get().is_some()>
                <p class="form-field__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
