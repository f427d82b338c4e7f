//! File picker with previews. Selection lives in a local (non-Send)
//! signal owned by the parent form, which uploads at submit time.

use leptos::prelude::*;
use web_sys::{File, HtmlInputElement, Url};

/// One picked file plus its object-URL preview.
#[derive(Clone)]
pub struct SelectedFile {
    pub file: File,
    pub preview_url: String,
}

pub type SelectedFiles = RwSignal<Vec<SelectedFile>, LocalStorage>;

pub fn selected_files() -> SelectedFiles {
    RwSignal::new_local(Vec::new())
}

fn revoke_preview(selected: &SelectedFile) {
    let _ = Url::revoke_object_url(&selected.preview_url);
}

/// Drop every pending selection and release its preview URL.
pub fn clear_files(files: SelectedFiles) {
    files.update(|current| {
        for old in current.drain(..) {
            revoke_preview(&old);
        }
    });
}

#[component]
pub fn FileUploader(
    files: SelectedFiles,
    #[prop(optional)] multiple: bool,
    /// Maximum number of files; `0` means unlimited.
    #[prop(optional)] max: usize,
    #[prop(optional, into)] label: String,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    let label = if label.is_empty() {
        "Select Images".to_string()
    } else {
        label
    };

    let slots_left = move || {
        if max == 0 {
            usize::MAX
        } else {
            max.saturating_sub(files.with(|f| f.len()))
        }
    };

    let on_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(list) = input.files() else {
            return;
        };
        let mut picked = Vec::new();
        for i in 0..list.length() {
            if let Some(file) = list.item(i) {
                picked.push(file);
            }
        }
        // Reset so re-selecting the same file fires change again.
        input.set_value("");
        if picked.is_empty() {
            return;
        }
        files.update(|current| {
            if !multiple {
                for old in current.drain(..) {
                    revoke_preview(&old);
                }
            }
            let room = if max == 0 {
                picked.len()
            } else {
                max.saturating_sub(current.len())
            };
            for file in picked.into_iter().take(room) {
                let preview_url = Url::create_object_url_with_blob(&file).unwrap_or_default();
                current.push(SelectedFile { file, preview_url });
            }
        });
    };

    let remove_at = move |idx: usize| {
        files.update(|current| {
            if idx < current.len() {
                let removed = current.remove(idx);
                revoke_preview(&removed);
            }
        });
    };

    view! {
        <div class="uploader">
            <label class="uploader__button" class:uploader__button--disabled=disabled>
                <input
                    type="file"
                    accept="image/*"
                    multiple=multiple
                    disabled=move || disabled || slots_left() == 0
                    class="uploader__input"
                    on:change=on_change
                />
                {label}
            </label>
            {move || (max > 0).then(|| view! {
                <span class="uploader__slots">{format!("Remaining: {}", slots_left())}</span>
            })}
            <div class="uploader__previews">
                {move || {
                    files
                        .with(|f| f.iter().map(|s| s.preview_url.clone()).collect::<Vec<_>>())
                        .into_iter()
                        .enumerate()
                        .map(|(idx, url)| {
                            view! {
                                <div class="uploader__preview">
                                    <img src=url alt="preview" />
                                    <button
                                        type="button"
                                        class="uploader__remove"
                                        on:click=move |_| remove_at(idx)
                                    >
                                        "\u{00d7}"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
