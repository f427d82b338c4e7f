use contracts::domain::category::Category;
use contracts::domain::subcategory::Subcategory;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::view_model::SubcategoryFormModel;
use crate::domain::category;
use crate::shared::api::QueryClient;
use crate::shared::components::{field_error, sync_field_error, FormField};
use crate::shared::toast::ToastService;

#[component]
pub fn SubcategoryForm(existing: Option<Subcategory>, on_close: Callback<()>) -> impl IntoView {
    let client = QueryClient::expect();
    let toasts = ToastService::expect();
    let vm = SubcategoryFormModel::new(existing.as_ref());

    let title = if vm.editing_id.is_some() {
        "Edit Subcategory"
    } else {
        "Add Subcategory"
    };

    let form = vm.form;
    let errors = vm.errors;
    let saving = vm.saving;

    let categories = RwSignal::new(Vec::<Category>::new());
    spawn_local(async move {
        match category::api::fetch_all_for_dropdown().await {
            Ok(list) => categories.set(list),
            Err(e) => toasts.error(e.user_message()),
        }
    });

    let validate_field = move |field: &'static str| {
        let found = SubcategoryFormModel::validate(&form.get_untracked());
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

                <FormField label="Category" required=true error=field_error(errors, "category")>
                    <select
                        on:change=move |ev| {
                            form.update(|f| f.category = event_target_value(&ev))
                        }
                        on:blur=move |_| validate_field("category")
                        disabled=move || saving.get()
                    >
                        <option value="" selected=move || form.with(|f| f.category.is_empty())>
                            "Select a category"
                        </option>
                        <For
                            each=move || categories.get()
                            key=|c| c.id.clone()
                            children=move |c| {
                                let id = c.id.clone();
                                let selected_id = c.id.clone();
                                view! {
                                    <option
                                        value=id
                                        selected=move || {
                                            form.with(|f| f.category == selected_id)
                                        }
                                    >
                                        {c.name.clone()}
                                    </option>
                                }
                            }
                        />
                    </select>
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
