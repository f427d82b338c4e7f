use contracts::domain::reel::{Reel, ReelPayload};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;

use crate::domain::reel::api::{self, RESOURCE};
use crate::shared::api::QueryClient;
use crate::shared::toast::ToastService;
use crate::shared::upload::widget::{clear_files, selected_files, SelectedFiles};
use crate::shared::upload::{upload_all, CloudinaryConfig};

#[derive(Clone)]
pub struct ReelFormModel {
    pub form: RwSignal<ReelPayload>,
    pub errors: RwSignal<BTreeMap<String, String>>,
    pub saving: RwSignal<bool>,
    pub thumbnail_file: SelectedFiles,
    pub editing_id: Option<String>,
}

impl ReelFormModel {
    pub fn new(existing: Option<&Reel>) -> Self {
        let form = match existing {
            Some(reel) => ReelPayload {
                title: reel.title.clone(),
                video_url: reel.video_url.clone(),
                thumbnail: reel.thumbnail.clone(),
                visible: reel.visible,
            },
            None => ReelPayload {
                visible: true,
                ..ReelPayload::default()
            },
        };
        Self {
            form: RwSignal::new(form),
            errors: RwSignal::new(BTreeMap::new()),
            saving: RwSignal::new(false),
            thumbnail_file: selected_files(),
            editing_id: existing.map(|r| r.id.clone()),
        }
    }

    pub fn validate(payload: &ReelPayload) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();
        if payload.title.trim().is_empty() {
            errors.insert("title".to_string(), "Title is required".to_string());
        }
        if payload.video_url.trim().is_empty() {
            errors.insert("videoUrl".to_string(), "Video URL is required".to_string());
        } else if !payload.video_url.starts_with("http://")
            && !payload.video_url.starts_with("https://")
        {
            errors.insert(
                "videoUrl".to_string(),
                "Video URL must start with http:// or https://".to_string(),
            );
        }
        errors
    }

    pub fn save(&self, client: QueryClient, toasts: ToastService, on_saved: Callback<()>) {
        let mut current = self.form.get();
        let found = Self::validate(&current);
        if !found.is_empty() {
            self.errors.set(found);
            return;
        }
        self.errors.set(BTreeMap::new());
        self.saving.set(true);

        let saving = self.saving;
        let form = self.form;
        let thumbnail_file = self.thumbnail_file;
        let editing_id = self.editing_id.clone();
        spawn_local(async move {
            let picked: Vec<web_sys::File> = thumbnail_file
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
                    Ok(mut urls) => current.thumbnail = Some(urls.remove(0)),
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
                        toasts.success("Reel updated");
                        on_saved.run(());
                    }
                    None => {
                        toasts.success("Reel created");
                        form.set(ReelPayload {
                            visible: true,
                            ..ReelPayload::default()
                        });
                        clear_files(thumbnail_file);
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
    fn test_title_and_video_url_are_required() {
        let errors = ReelFormModel::validate(&ReelPayload::default());
        assert!(errors.contains_key("title"));
        assert!(errors.contains_key("videoUrl"));
    }

    #[test]
    fn test_video_url_must_be_absolute() {
        let payload = ReelPayload {
            title: "Loom close-up".to_string(),
            video_url: "clips/loom.mp4".to_string(),
            ..ReelPayload::default()
        };
        assert!(ReelFormModel::validate(&payload).contains_key("videoUrl"));
    }

    #[test]
    fn test_valid_payload_passes() {
        let payload = ReelPayload {
            title: "Loom close-up".to_string(),
            video_url: "https://cdn.example.com/loom.mp4".to_string(),
            ..ReelPayload::default()
        };
        assert!(ReelFormModel::validate(&payload).is_empty());
    }
}
