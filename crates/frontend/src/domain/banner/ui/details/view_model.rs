use contracts::domain::banner::{Banner, BannerPayload};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;

use crate::domain::banner::api::{self, RESOURCE};
use crate::shared::api::QueryClient;
use crate::shared::toast::ToastService;
use crate::shared::upload::widget::{clear_files, selected_files, SelectedFiles};
use crate::shared::upload::{upload_all, CloudinaryConfig};

#[derive(Clone)]
pub struct BannerFormModel {
    pub form: RwSignal<BannerPayload>,
    pub errors: RwSignal<BTreeMap<String, String>>,
    pub saving: RwSignal<bool>,
    pub image_file: SelectedFiles,
    pub editing_id: Option<String>,
}

impl BannerFormModel {
    pub fn new(existing: Option<&Banner>) -> Self {
        let form = match existing {
            Some(banner) => BannerPayload {
                title: banner.title.clone(),
                image: banner.image.clone(),
                link: banner.link.clone(),
                is_active: banner.is_active,
            },
            None => BannerPayload::default(),
        };
        Self {
            form: RwSignal::new(form),
            errors: RwSignal::new(BTreeMap::new()),
            saving: RwSignal::new(false),
            image_file: selected_files(),
            editing_id: existing.map(|b| b.id.clone()),
        }
    }

    pub fn validate(payload: &BannerPayload, has_pending_file: bool) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();
        if payload.title.trim().is_empty() {
            errors.insert("title".to_string(), "Title is required".to_string());
        }
        if payload.image.trim().is_empty() && !has_pending_file {
            errors.insert("image".to_string(), "An image is required".to_string());
        }
        errors
    }

    /// Upload first, mutate after; an upload failure aborts the save and
    /// the form stays open with its state intact.
    pub fn save(&self, client: QueryClient, toasts: ToastService, on_saved: Callback<()>) {
        let mut current = self.form.get();
        let has_file = self.image_file.with_untracked(|f| !f.is_empty());
        let found = Self::validate(&current, has_file);
        if !found.is_empty() {
            self.errors.set(found);
            return;
        }
        self.errors.set(BTreeMap::new());
        self.saving.set(true);

        let saving = self.saving;
        let form = self.form;
        let image_file = self.image_file;
        let editing_id = self.editing_id.clone();
        spawn_local(async move {
            let picked: Vec<web_sys::File> = image_file
                .with_untracked(|f| f.iter().map(|s| s.file.clone()).collect());
            if !picked.is_empty() {
                let config = match CloudinaryConfig::resolve() {
                    Ok(c) => c,
                    Err(e) => {
                        saving.set(false);
                        toasts.error(e.user_message());
                        return;
                    }
                };
                match upload_all(&config, &picked).await {
                    Ok(mut urls) => current.image = urls.remove(0),
                    Err(e) => {
                        saving.set(false);
                        toasts.error(e.user_message());
                        return;
                    }
                }
            }

            let result = match &editing_id {
                Some(id) => client
                    .mutate(RESOURCE, api::update(id, &current))
                    .await
                    .map(|_| ()),
                None => client
                    .mutate(RESOURCE, api::create(&current))
                    .await
                    .map(|_| ()),
            };
            saving.set(false);
            match result {
                Ok(()) => match editing_id {
                    Some(_) => {
                        toasts.success("Banner updated");
                        on_saved.run(());
                    }
                    None => {
                        toasts.success("Banner created");
                        form.set(BannerPayload::default());
                        clear_files(image_file);
                    }
                },
                Err(e) => toasts.error(e.user_message()),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_image_are_required() {
        let errors = BannerFormModel::validate(&BannerPayload::default(), false);
        assert!(errors.contains_key("title"));
        assert!(errors.contains_key("image"));
    }

    #[test]
    fn test_pending_file_satisfies_image_requirement() {
        let payload = BannerPayload {
            title: "Summer sale".to_string(),
            ..BannerPayload::default()
        };
        assert!(BannerFormModel::validate(&payload, true).is_empty());
    }

    #[test]
    fn test_existing_image_url_satisfies_requirement() {
        let payload = BannerPayload {
            title: "Summer sale".to_string(),
            image: "https://cdn.example.com/banner.jpg".to_string(),
            ..BannerPayload::default()
        };
        assert!(BannerFormModel::validate(&payload, false).is_empty());
    }
}
