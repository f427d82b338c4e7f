use contracts::domain::blog::Blog;
use leptos::prelude::*;

use super::view_model::BlogFormModel;
use crate::shared::api::QueryClient;
use crate::shared::components::{field_error, sync_field_error, FormField};
use crate::shared::toast::ToastService;
use crate::shared::upload::widget::FileUploader;

#[component]
pub fn BlogForm(existing: Option<Blog>, on_close: Callback<()>) -> impl IntoView {
    let client = QueryClient::expect();
    let toasts = ToastService::expect();
    let vm = BlogFormModel::new(existing.as_ref());

    let title = if vm.editing_id.is_some() {
        "Edit Blog Post"
    } else {
        "Add Blog Post"
    };

    let form = vm.form;
    let errors = vm.errors;
    let saving = vm.saving;
    let cover_file = vm.cover_file;

    let validate_field = move |field: &'static str| {
        let found = BlogFormModel::validate(&form.get_untracked());
        sync_field_error(errors, field, &found);
    };

    let title_vm = vm.clone();
    let slug_vm = vm.clone();
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
                        on:input=move |ev| title_vm.set_title(event_target_value(&ev))
                        on:blur=move |_| validate_field("title")
                        disabled=move || saving.get()
                    />
                </FormField>

                <FormField label="Slug" required=true error=field_error(errors, "slug")>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.slug.clone())
                        on:input=move |ev| slug_vm.set_slug(event_target_value(&ev))
                        on:blur=move |_| validate_field("slug")
                        disabled=move || saving.get()
                    />
                </FormField>

                <FormField label="Category" error=field_error(errors, "category")>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.category.clone().unwrap_or_default())
                        on:input=move |ev| {
                            form.update(|f| {
                                let value = event_target_value(&ev);
                                f.category = (!value.trim().is_empty()).then_some(value);
                            })
                        }
                        disabled=move || saving.get()
                    />
                </FormField>

                <FormField label="Content" required=true error=field_error(errors, "content")>
                    <textarea
                        rows="12"
                        prop:value=move || form.with(|f| f.content.clone())
                        on:input=move |ev| {
                            form.update(|f| f.content = event_target_value(&ev))
                        }
                        on:blur=move |_| validate_field("content")
                        disabled=move || saving.get()
                    ></textarea>
                </FormField>

                <FormField label="Cover image" error=field_error(errors, "coverImage")>
                    {move || {
                        let url = form.with(|f| f.cover_image.clone());
                        url.filter(|_| cover_file.with(|f| f.is_empty())).map(|url| view! {
                            <img class="form-panel__current-image" src=url alt="current cover"/>
                        })
                    }}
                    <FileUploader files=cover_file max=1 label="Select Cover"/>
                </FormField>

                <FormField label="Published" error=field_error(errors, "published")>
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.published)
                        on:change=move |ev| {
                            form.update(|f| f.published = event_target_checked(&ev))
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
