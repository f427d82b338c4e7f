use contracts::domain::reel::Reel;
use leptos::prelude::*;

use super::view_model::ReelFormModel;
use crate::shared::api::QueryClient;
use crate::shared::components::{field_error, sync_field_error, FormField};
use crate::shared::toast::ToastService;
use crate::shared::upload::widget::FileUploader;

#[component]
pub fn ReelForm(existing: Option<Reel>, on_close: Callback<()>) -> impl IntoView {
    let client = QueryClient::expect();
    let toasts = ToastService::expect();
    let vm = ReelFormModel::new(existing.as_ref());

    let title = if vm.editing_id.is_some() {
        "Edit Reel"
    } else {
        "Add Reel"
    };

    let form = vm.form;
    let errors = vm.errors;
    let saving = vm.saving;
    let thumbnail_file = vm.thumbnail_file;

    let validate_field = move |field: &'static str| {
        let found = ReelFormModel::validate(&form.get_untracked());
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

                <FormField label="Video URL" required=true error=field_error(errors, "videoUrl")>
                    <input
                        type="text"
                        placeholder="https://..."
                        prop:value=move || form.with(|f| f.video_url.clone())
                        on:input=move |ev| {
                            form.update(|f| f.video_url = event_target_value(&ev))
                        }
                        on:blur=move |_| validate_field("videoUrl")
                        disabled=move || saving.get()
                    />
                </FormField>

                <FormField label="Thumbnail" error=field_error(errors, "thumbnail")>
                    {move || {
                        let url = form.with(|f| f.thumbnail.clone());
                        url.filter(|_| thumbnail_file.with(|f| f.is_empty())).map(|url| view! {
                            <img class="form-panel__current-image" src=url alt="current thumbnail"/>
                        })
                    }}
                    <FileUploader files=thumbnail_file max=1 label="Select Thumbnail"/>
                </FormField>

                <FormField label="Visible" error=field_error(errors, "visible")>
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.visible)
                        on:change=move |ev| {
                            form.update(|f| f.visible = event_target_checked(&ev))
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
