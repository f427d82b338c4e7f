use contracts::domain::workshop::Workshop;
use leptos::prelude::*;

use super::view_model::WorkshopFormModel;
use crate::shared::api::QueryClient;
use crate::shared::components::{field_error, sync_field_error, FormField};
use crate::shared::toast::ToastService;
use crate::shared::upload::widget::FileUploader;

#[component]
pub fn WorkshopForm(existing: Option<Workshop>, on_close: Callback<()>) -> impl IntoView {
    let client = QueryClient::expect();
    let toasts = ToastService::expect();
    let vm = WorkshopFormModel::new(existing.as_ref());

    let title = if vm.editing_id.is_some() {
        "Edit Workshop"
    } else {
        "Add Workshop"
    };

    let form = vm.form;
    let errors = vm.errors;
    let saving = vm.saving;
    let image_file = vm.image_file;

    let validate_field = move |field: &'static str| {
        let found = WorkshopFormModel::validate(&form.get_untracked());
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
                <FormField label="Title" required=true error=field_error(errors, "title")>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |ev| {
                            form.update(|f| f.title = event_target_value(&ev))
                        }
                        on:blur=move |_| validate_field("title")
                        disabled=move || saving.get()
                    />
                </FormField>

                <FormField label="Date" required=true error=field_error(errors, "date")>
                    <input
                        type="date"
                        prop:value=move || form.with(|f| f.date.clone())
                        on:input=move |ev| {
                            form.update(|f| f.date = event_target_value(&ev))
                        }
                        on:blur=move |_| validate_field("date")
                        disabled=move || saving.get()
                    />
                </FormField>

                <FormField label="Location" error=field_error(errors, "location")>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.location.clone())
                        on:input=move |ev| {
                            form.update(|f| f.location = event_target_value(&ev))
                        }
                        disabled=move || saving.get()
                    />
                </FormField>

                <FormField label="Price" required=true error=field_error(errors, "price")>
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        prop:value=move || form.with(|f| f.price.to_string())
                        on:input=move |ev| {
                            form.update(|f| {
                                f.price = event_target_value(&ev).parse().unwrap_or(0.0)
                            })
                        }
                        on:blur=move |_| validate_field("price")
                        disabled=move || saving.get()
                    />
                </FormField>

                <FormField label="Capacity" required=true error=field_error(errors, "capacity")>
                    <input
                        type="number"
                        min="0"
                        step="1"
                        prop:value=move || form.with(|f| f.capacity.to_string())
                        on:input=move |ev| {
                            form.update(|f| {
                                f.capacity = event_target_value(&ev).parse().unwrap_or(0)
                            })
                        }
                        on:blur=move |_| validate_field("capacity")
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

                <FormField label="Image" error=field_error(errors, "image")>
                    {move || {
                        let url = form.with(|f| f.image.clone());
                        url.filter(|_| image_file.with(|f| f.is_empty())).map(|url| view! {
                            <img class="form-panel__current-image" src=url alt="current image"/>
                        })
                    }}
                    <FileUploader files=image_file max=1 label="Select Image"/>
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
