use contracts::domain::category::Category;
use contracts::domain::product::Product;
use contracts::domain::subcategory::Subcategory;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::view_model::{remove_option_errors, ProductFormModel, SHORT_DESCRIPTION_MAX};
use crate::domain::{category, subcategory};
use crate::shared::api::QueryClient;
use crate::shared::components::{field_error, sync_field_error, FormField};
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use crate::shared::upload::widget::FileUploader;

#[component]
pub fn ProductForm(existing: Option<Product>, on_close: Callback<()>) -> impl IntoView {
    let client = QueryClient::expect();
    let toasts = ToastService::expect();
    let vm = ProductFormModel::new(existing.as_ref());

    let title = if vm.editing_id.is_some() {
        "Edit Product"
    } else {
        "Add Product"
    };

    let form = vm.form;
    let sizes_input = vm.sizes_input;
    let options = vm.options;
    let errors = vm.errors;
    let saving = vm.saving;
    let image_files = vm.image_files;

    let categories = RwSignal::new(Vec::<Category>::new());
    let subcategories = RwSignal::new(Vec::<Subcategory>::new());
    Effect::new(move |prev: Option<()>| {
        if prev.is_some() {
            return;
        }
        spawn_local(async move {
            match category::api::fetch_all_for_dropdown().await {
                Ok(list) => categories.set(list),
                Err(e) => log::warn!("loading category options failed: {}", e),
            }
            match subcategory::api::fetch_all_for_dropdown().await {
                Ok(list) => subcategories.set(list),
                Err(e) => log::warn!("loading subcategory options failed: {}", e),
            }
        });
    });

    // Subcategory choices narrow to the selected category.
    let subcategory_choices = Signal::derive(move || {
        let category_id = form.with(|f| f.category.clone());
        subcategories.with(|all| {
            all.iter()
                .filter(|s| s.category.id() == category_id)
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let option_error = move |index: usize, field: &'static str| {
        Signal::derive(move || {
            errors.with(|e| e.get(&format!("options[{}].{}", index, field)).cloned())
        })
    };

    let validate_field = move |field: &str| {
        let mut payload = form.get_untracked();
        payload.options =
            options.with_untracked(|opts| opts.iter().map(|o| o.to_option()).collect());
        let has_pending = image_files.with_untracked(|f| !f.is_empty());
        let found = ProductFormModel::validate(&payload, has_pending);
        sync_field_error(errors, field, &found);
    };

    let add_vm = vm.clone();
    let submit_vm = vm.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_vm.save(client, toasts, on_close);
    };

    view! {
        <div class="form-panel form-panel--wide">
            <h3>{title}</h3>
            <form on:submit=on_submit>
                <div class="form-grid">
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

                    <FormField label="Design" error=field_error(errors, "design")>
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.design.clone())
                            on:input=move |ev| {
                                form.update(|f| f.design = event_target_value(&ev))
                            }
                            disabled=move || saving.get()
                        />
                    </FormField>

                    <FormField
                        label="Category"
                        required=true
                        error=field_error(errors, "category")
                    >
                        <select
                            on:change=move |ev| {
                                form.update(|f| {
                                    f.category = event_target_value(&ev);
                                    f.subcategory = None;
                                })
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

                    <FormField label="Subcategory" error=field_error(errors, "subcategory")>
                        <select
                            on:change=move |ev| {
                                form.update(|f| {
                                    let value = event_target_value(&ev);
                                    f.subcategory = (!value.is_empty()).then_some(value);
                                })
                            }
                            disabled=move || saving.get()
                        >
                            <option
                                value=""
                                selected=move || form.with(|f| f.subcategory.is_none())
                            >
                                "None"
                            </option>
                            <For
                                each=move || subcategory_choices.get()
                                key=|s| s.id.clone()
                                children=move |s| {
                                    let id = s.id.clone();
                                    let selected_id = s.id.clone();
                                    view! {
                                        <option
                                            value=id
                                            selected=move || {
                                                form.with(|f| {
                                                    f.subcategory.as_deref()
                                                        == Some(selected_id.as_str())
                                                })
                                            }
                                        >
                                            {s.name.clone()}
                                        </option>
                                    }
                                }
                            />
                        </select>
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

                    <FormField
                        label="Quantity"
                        required=true
                        error=field_error(errors, "quantity")
                    >
                        <input
                            type="number"
                            min="0"
                            step="1"
                            prop:value=move || form.with(|f| f.quantity.to_string())
                            on:input=move |ev| {
                                form.update(|f| {
                                    f.quantity = event_target_value(&ev).parse().unwrap_or(0)
                                })
                            }
                            on:blur=move |_| validate_field("quantity")
                            disabled=move || saving.get()
                        />
                    </FormField>
                </div>

                <FormField
                    label="Short description"
                    error=field_error(errors, "shortDescription")
                >
                    <textarea
                        rows="2"
                        prop:value=move || form.with(|f| f.short_description.clone())
                        on:input=move |ev| {
                            form.update(|f| f.short_description = event_target_value(&ev))
                        }
                        on:blur=move |_| validate_field("shortDescription")
                        disabled=move || saving.get()
                    ></textarea>
                    <span class="char-counter">
                        {move || {
                            format!(
                                "{}/{}",
                                form.with(|f| f.short_description.chars().count()),
                                SHORT_DESCRIPTION_MAX,
                            )
                        }}
                    </span>
                </FormField>

                <FormField label="Description" error=field_error(errors, "description")>
                    <textarea
                        rows="5"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| {
                            form.update(|f| f.description = event_target_value(&ev))
                        }
                        disabled=move || saving.get()
                    ></textarea>
                </FormField>

                <FormField label="Sizes" error=field_error(errors, "sizes")>
                    <input
                        type="text"
                        placeholder="S, M, L"
                        prop:value=move || sizes_input.get()
                        on:input=move |ev| sizes_input.set(event_target_value(&ev))
                        disabled=move || saving.get()
                    />
                </FormField>

                <FormField label="Images" required=true error=field_error(errors, "images")>
                    <div class="image-grid">
                        <For
                            each=move || form.with(|f| f.images.clone())
                            key=|url| url.clone()
                            children=move |url| {
                                let remove_url = url.clone();
                                view! {
                                    <div class="image-grid__item">
                                        <img src=url alt="product image"/>
                                        <button
                                            type="button"
                                            class="btn-icon btn-icon--danger"
                                            title="Remove"
                                            on:click=move |_| {
                                                let target = remove_url.clone();
                                                form.update(|f| {
                                                    f.images.retain(|u| u != &target)
                                                });
                                            }
                                        >
                                            {icon("delete")}
                                        </button>
                                    </div>
                                }
                            }
                        />
                    </div>
                    <FileUploader
                        files=image_files
                        multiple=true
                        label="Add Images"
                        disabled=saving.get()
                    />
                </FormField>

                <div class="variant-editor">
                    <div class="variant-editor__header">
                        <h4>"Variants"</h4>
                        <button
                            type="button"
                            class="btn-secondary"
                            on:click=move |_| add_vm.add_option()
                            disabled=move || saving.get()
                        >
                            {icon("plus")}
                            " Add Variant"
                        </button>
                    </div>
                    <For
                        each={move || options.get().into_iter().enumerate().collect::<Vec<_>>()}
                        key=|(_, draft)| draft.key
                        children=move |(index, draft)| {
                            let key = draft.key;
                            let files = draft.files;
                            view! {
                                <div class="variant-row">
                                    <FormField
                                        label="Color"
                                        required=true
                                        error=option_error(index, "color")
                                    >
                                        <input
                                            type="text"
                                            prop:value=move || {
                                                options.with(|opts| {
                                                    opts.iter()
                                                        .find(|o| o.key == key)
                                                        .map(|o| o.color.clone())
                                                        .unwrap_or_default()
                                                })
                                            }
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                options.update(|opts| {
                                                    if let Some(o) =
                                                        opts.iter_mut().find(|o| o.key == key)
                                                    {
                                                        o.color = value;
                                                    }
                                                });
                                            }
                                            on:blur=move |_| {
                                                validate_field(&format!(
                                                    "options[{}].color",
                                                    index
                                                ))
                                            }
                                            disabled=move || saving.get()
                                        />
                                    </FormField>

                                    <FormField
                                        label="Color code"
                                        error=option_error(index, "colorCode")
                                    >
                                        <input
                                            type="color"
                                            prop:value=move || {
                                                options.with(|opts| {
                                                    opts.iter()
                                                        .find(|o| o.key == key)
                                                        .map(|o| o.color_code.clone())
                                                        .unwrap_or_default()
                                                })
                                            }
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                options.update(|opts| {
                                                    if let Some(o) =
                                                        opts.iter_mut().find(|o| o.key == key)
                                                    {
                                                        o.color_code = value;
                                                    }
                                                });
                                            }
                                            disabled=move || saving.get()
                                        />
                                    </FormField>

                                    <FormField
                                        label="Quantity"
                                        required=true
                                        error=option_error(index, "quantity")
                                    >
                                        <input
                                            type="number"
                                            min="0"
                                            step="1"
                                            prop:value=move || {
                                                options.with(|opts| {
                                                    opts.iter()
                                                        .find(|o| o.key == key)
                                                        .map(|o| o.quantity.to_string())
                                                        .unwrap_or_default()
                                                })
                                            }
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev)
                                                    .parse()
                                                    .unwrap_or(0);
                                                options.update(|opts| {
                                                    if let Some(o) =
                                                        opts.iter_mut().find(|o| o.key == key)
                                                    {
                                                        o.quantity = value;
                                                    }
                                                });
                                            }
                                            on:blur=move |_| {
                                                validate_field(&format!(
                                                    "options[{}].quantity",
                                                    index
                                                ))
                                            }
                                            disabled=move || saving.get()
                                        />
                                    </FormField>

                                    <FormField
                                        label="Price override"
                                        error=option_error(index, "price")
                                    >
                                        <input
                                            type="number"
                                            min="0"
                                            step="0.01"
                                            placeholder="Base price"
                                            prop:value=move || {
                                                options.with(|opts| {
                                                    opts.iter()
                                                        .find(|o| o.key == key)
                                                        .and_then(|o| o.price)
                                                        .map(|p| p.to_string())
                                                        .unwrap_or_default()
                                                })
                                            }
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                let parsed = if value.trim().is_empty() {
                                                    None
                                                } else {
                                                    Some(value.parse().unwrap_or(0.0))
                                                };
                                                options.update(|opts| {
                                                    if let Some(o) =
                                                        opts.iter_mut().find(|o| o.key == key)
                                                    {
                                                        o.price = parsed;
                                                    }
                                                });
                                            }
                                            on:blur=move |_| {
                                                validate_field(&format!(
                                                    "options[{}].price",
                                                    index
                                                ))
                                            }
                                            disabled=move || saving.get()
                                        />
                                    </FormField>

                                    <FormField label="Images" error=option_error(index, "images")>
                                        <div class="image-grid">
                                            <For
                                                each=move || {
                                                    options.with(|opts| {
                                                        opts.iter()
                                                            .find(|o| o.key == key)
                                                            .map(|o| o.image_urls.clone())
                                                            .unwrap_or_default()
                                                    })
                                                }
                                                key=|url| url.clone()
                                                children=move |url| {
                                                    let remove_url = url.clone();
                                                    view! {
                                                        <div class="image-grid__item">
                                                            <img src=url alt="variant image"/>
                                                            <button
                                                                type="button"
                                                                class="btn-icon btn-icon--danger"
                                                                title="Remove"
                                                                on:click=move |_| {
                                                                    let target = remove_url.clone();
                                                                    options.update(|opts| {
                                                                        if let Some(o) = opts
                                                                            .iter_mut()
                                                                            .find(|o| o.key == key)
                                                                        {
                                                                            o.image_urls
                                                                                .retain(|u| {
                                                                                    u != &target
                                                                                });
                                                                        }
                                                                    });
                                                                }
                                                            >
                                                                {icon("delete")}
                                                            </button>
                                                        </div>
                                                    }
                                                }
                                            />
                                        </div>
                                        <FileUploader
                                            files=files
                                            multiple=true
                                            label="Add Images"
                                            disabled=saving.get()
                                        />
                                    </FormField>

                                    <button
                                        type="button"
                                        class="btn-icon btn-icon--danger variant-row__remove"
                                        title="Remove variant"
                                        on:click=move |_| {
                                            crate::shared::upload::widget::clear_files(files);
                                            options.update(|opts| {
                                                opts.retain(|o| o.key != key)
                                            });
                                            errors.update(|e| remove_option_errors(e, index));
                                        }
                                        disabled=move || saving.get()
                                    >
                                        {icon("delete")}
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>

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
