use contracts::domain::category::Category;
use leptos::prelude::*;

use super::view_model::CategoryFormModel;
use crate::shared::api::QueryClient;
use crate::shared::components::{field_error, sync_field_error, FormField};
use crate::shared::toast::ToastService;

#[component]
pub fn CategoryForm(existing: Option<Category>, on_close: Callback<()>) -> impl IntoView {
    let client = QueryClient::expect();
    let toasts = ToastService::expect();
    let vm = CategoryFormModel::new(existing.as_ref());

    let title = if vm.editing_id.is_some() {
        "Edit Category"
    } else {
        "Add Category"
    };

    let form = vm.form;
    let errors = vm.errors;
    let saving = vm.saving;

    let validate_field = move |field: &'static str| {
        let found = CategoryFormModel::validate(&form.get_untracked());
        sync_field_error(errors, field, &found);
    };

    let submit_vm = vm.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_vm.save(client, toasts, on_close);
    };

    view! {
        <div class="form-panel">
            <h3>{title}</h3>
            <form on:submit=on_submit>
                <FormField label="Name" required=true error=field_error(errors, "name")>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| {
                            form.update(|f| f.name = event_target_value(&ev))
                        }
                        on:blur=move |_| validate_field("name")
                        disabled=move || saving.get()
                    />
                </FormField>

                <FormField label="Description" error=field_error(errors, "description")>
                    <textarea
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| {
                            form.update(|f| f.description = event_target_value(&ev))
                        }
                        disabled=move || saving.get()
                    ></textarea>
                </FormField>

                <div class="form-actions">
                    <button type="submit" class="btn-primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                    <button
                        type="button"
                        class="btn-secondary"
                        on:click=move |_| on_close.run(())
                        disabled=move || saving.get()
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
