use contracts::domain::banner::Banner;
use leptos::prelude::*;

use super::view_model::BannerFormModel;
use crate::shared::api::QueryClient;
use crate::shared::components::{field_error, sync_field_error, FormField};
use crate::shared::toast::ToastService;
use crate::shared::upload::widget::FileUploader;

#[component]
pub fn BannerForm(existing: Option<Banner>, on_close: Callback<()>) -> impl IntoView {
    let client = QueryClient::expect();
    let toasts = ToastService::expect();
    let vm = BannerFormModel::new(existing.as_ref());

    let title = if vm.editing_id.is_some() {
        "Edit Banner"
    } else {
        "Add Banner"
    };

    let form = vm.form;
    let errors = vm.errors;
    let saving = vm.saving;
    let image_file = vm.image_file;

    let validate_field = move |field: &'static str| {
        let has_file = image_file.with_untracked(|f| !f.is_empty());
        let found = BannerFormModel::validate(&form.get_untracked(), has_file);
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

                <FormField label="Link" error=field_error(errors, "link")>
                    <input
                        type="text"
                        placeholder="https://..."
                        prop:value=move || form.with(|f| f.link.clone().unwrap_or_default())
                        on:input=move |ev| {
                            form.update(|f| {
                                let value = event_target_value(&ev);
                                f.link = (!value.trim().is_empty()).then_some(value);
                            })
                        }
                        disabled=move || saving.get()
                    />
                </FormField>

                <FormField label="Image" required=true error=field_error(errors, "image")>
                    {move || {
                        let url = form.with(|f| f.image.clone());
                        (!url.is_empty() && image_file.with(|f| f.is_empty())).then(|| view! {
                            <img class="form-panel__current-image" src=url alt="current banner"/>
                        })
                    }}
                    <FileUploader
                        files=image_file
                        max=1
                        label="Select Image"
                        disabled=saving.get()
                    />
                </FormField>

                <FormField label="Active" error=field_error(errors, "isActive")>
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.is_active)
                        on:change=move |ev| {
                            form.update(|f| f.is_active = event_target_checked(&ev))
                        }
                        disabled=move || saving.get()
                    />
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
