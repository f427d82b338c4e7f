use contracts::domain::workshop::{Workshop, WorkshopPayload};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;

use crate::domain::workshop::api::{self, RESOURCE};
use crate::shared::api::QueryClient;
use crate::shared::toast::ToastService;
use crate::shared::upload::widget::{clear_files, selected_files, SelectedFiles};
use crate::shared::upload::{upload_all, CloudinaryConfig};

#[derive(Clone)]
pub struct WorkshopFormModel {
    pub form: RwSignal<WorkshopPayload>,
    pub errors: RwSignal<BTreeMap<String, String>>,
    pub saving: RwSignal<bool>,
    pub image_file: SelectedFiles,
    pub editing_id: Option<String>,
}

impl WorkshopFormModel {
    pub fn new(existing: Option<&Workshop>) -> Self {
        let form = match existing {
            Some(workshop) => WorkshopPayload {
                title: workshop.title.clone(),
                description: workshop.description.clone(),
                date: workshop.date.clone(),
                location: workshop.location.clone(),
                price: workshop.price,
                capacity: workshop.capacity,
                image: workshop.image.clone(),
            },
            None => WorkshopPayload::default(),
        };
        Self {
            form: RwSignal::new(form),
            errors: RwSignal::new(BTreeMap::new()),
            saving: RwSignal::new(false),
            image_file: selected_files(),
            editing_id: existing.map(|w| w.id.clone()),
        }
    }

    pub fn validate(payload: &WorkshopPayload) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();
        if payload.title.trim().is_empty() {
            errors.insert("title".to_string(), "Title is required".to_string());
        }
        if payload.date.trim().is_empty() {
            errors.insert("date".to_string(), "Date is required".to_string());
        }
        if payload.price <= 0.0 {
            errors.insert(
                "price".to_string(),
                "Price must be greater than zero".to_string(),
            );
        }
        if payload.capacity == 0 {
            errors.insert(
                "capacity".to_string(),
                "Capacity must be greater than zero".to_string(),
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
                    Ok(mut urls) => current.image = Some(urls.remove(0)),
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
                        toasts.success("Workshop updated");
                        on_saved.run(());
                    }
                    None => {
                        toasts.success("Workshop created");
                        form.set(WorkshopPayload::default());
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

    fn valid_payload() -> WorkshopPayload {
        WorkshopPayload {
            title: "Block printing basics".to_string(),
            description: String::new(),
            date: "2026-09-12".to_string(),
            location: "Studio 4".to_string(),
            price: 1500.0,
            capacity: 12,
            image: None,
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        assert!(WorkshopFormModel::validate(&valid_payload()).is_empty());
    }

    #[test]
    fn test_price_must_be_positive() {
        let mut payload = valid_payload();
        payload.price = 0.0;
        assert!(WorkshopFormModel::validate(&payload).contains_key("price"));
        payload.price = -10.0;
        assert!(WorkshopFormModel::validate(&payload).contains_key("price"));
    }

    #[test]
    fn test_capacity_must_be_positive() {
        let mut payload = valid_payload();
        payload.capacity = 0;
        assert!(WorkshopFormModel::validate(&payload).contains_key("capacity"));
    }

    #[test]
    fn test_title_and_date_are_required() {
        let mut payload = valid_payload();
        payload.title = " ".to_string();
        payload.date = String::new();
        let errors = WorkshopFormModel::validate(&payload);
        assert!(errors.contains_key("title"));
        assert!(errors.contains_key("date"));
    }
}
