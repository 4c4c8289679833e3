//! Labelled input bound to one field of a `FormDraft`.

use leptos::prelude::*;

use crate::validation::{FieldErrors, FormDraft};

/// Text input whose value lives in `draft[field]`, with the field's
/// validation message underneath.
#[component]
pub fn FormField(
    field: &'static str,
    label: &'static str,
    id: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    draft: RwSignal<FormDraft>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-field__label" for=id>{label}</label>
            <input
                id=id
                name=field
                class="form-field__input"
                type=input_type
                placeholder=placeholder
                prop:value=move || draft.with(|d| d.get(field).to_owned())
                on:input=move |ev| draft.update(|d| d.set(field, event_target_value(&ev)))
            />
            <p class="form-field__error">{move || errors.with(|e| e.get(field).copied().unwrap_or_default())}</p>
        </div>
    }
}

/// `<select>` bound to `draft[field]`; the first, disabled option is the
/// prompt shown while nothing is chosen.
#[component]
pub fn SelectField(
    field: &'static str,
    label: &'static str,
    id: &'static str,
    prompt: &'static str,
    /// `(value, label)` pairs.
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    draft: RwSignal<FormDraft>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-field__label" for=id>{label}</label>
            <select
                id=id
                name=field
                class="form-field__input form-field__select"
                prop:value=move || draft.with(|d| d.get(field).to_owned())
                on:change=move |ev| draft.update(|d| d.set(field, event_target_value(&ev)))
            >
                <option value="" disabled=true>{prompt}</option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(value, text)| view! { <option value=value>{text}</option> })
                        .collect::<Vec<_>>()
                }}
            </select>
            <p class="form-field__error">{move || errors.with(|e| e.get(field).copied().unwrap_or_default())}</p>
        </div>
    }
}
