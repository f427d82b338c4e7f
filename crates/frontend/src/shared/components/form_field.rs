use leptos::prelude::*;

/// Label + control + inline validation message. Every form field renders
/// through this so error placement is uniform across resources.
#[component]
pub fn FormField(
    #[prop(into)] label: String,
    /// Error for this field from the form's error map, if any.
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional)] required: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form-field" class:form-field--invalid=move || error.get().is_some()>
            <label class="form-field__label">
                {label}
                {required.then(|| view! { <span class="form-field__required">"*"</span> })}
            </label>
            {children()}
            {move || error.get().map(|msg| view! {
                <p class="form-field__error">{msg}</p>
            })}
        </div>
    }
}

/// Lookup helper for the per-field error maps the view models keep.
pub fn field_error(
    errors: RwSignal<std::collections::BTreeMap<String, String>>,
    field: &'static str,
) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.get(field).cloned()))
}

/// Blur-time validation: copy one field's verdict from a freshly
/// computed error map into the live one, leaving other fields alone.
pub fn sync_field_error(
    errors: RwSignal<std::collections::BTreeMap<String, String>>,
    field: &str,
    found: &std::collections::BTreeMap<String, String>,
) {
    errors.update(|e| match found.get(field) {
        Some(msg) => {
            e.insert(field.to_string(), msg.clone());
        }
        None => {
            e.remove(field);
        }
    });
}
