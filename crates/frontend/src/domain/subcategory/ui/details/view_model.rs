use contracts::domain::subcategory::{Subcategory, SubcategoryPayload};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;

use crate::domain::subcategory::api::{self, RESOURCE};
use crate::shared::api::QueryClient;
use crate::shared::toast::ToastService;

#[derive(Clone)]
pub struct SubcategoryFormModel {
    pub form: RwSignal<SubcategoryPayload>,
    pub errors: RwSignal<BTreeMap<String, String>>,
    pub saving: RwSignal<bool>,
    pub editing_id: Option<String>,
}

impl SubcategoryFormModel {
    pub fn new(existing: Option<&Subcategory>) -> Self {
        let form = match existing {
            Some(subcategory) => SubcategoryPayload {
                name: subcategory.name.clone(),
                category: subcategory.category.id().to_string(),
                description: subcategory.description.clone(),
            },
            None => SubcategoryPayload::default(),
        };
        Self {
            form: RwSignal::new(form),
            errors: RwSignal::new(BTreeMap::new()),
            saving: RwSignal::new(false),
            editing_id: existing.map(|s| s.id.clone()),
        }
    }

    pub fn validate(payload: &SubcategoryPayload) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();
        if payload.name.trim().is_empty() {
            errors.insert("name".to_string(), "Name is required".to_string());
        }
        if payload.category.trim().is_empty() {
            errors.insert("category".to_string(), "Category is required".to_string());
        }
        errors
    }

    pub fn save(&self, client: QueryClient, toasts: ToastService, on_saved: Callback<()>) {
        let current = self.form.get();
        let found = Self::validate(&current);
        if !found.is_empty() {
            self.errors.set(found);
            return;
        }
        self.errors.set(BTreeMap::new());
        self.saving.set(true);

        let saving = self.saving;
        let form = self.form;
        let editing_id = self.editing_id.clone();
        spawn_local(async move {
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
                        toasts.success("Subcategory updated");
                        on_saved.run(());
                    }
                    None => {
                        toasts.success("Subcategory created");
                        form.set(SubcategoryPayload::default());
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
    fn test_name_and_category_are_required() {
        let errors = SubcategoryFormModel::validate(&SubcategoryPayload::default());
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("category"));
    }

    #[test]
    fn test_valid_payload_passes() {
        let errors = SubcategoryFormModel::validate(&SubcategoryPayload {
            name: "Silk".to_string(),
            category: "cat1".to_string(),
            description: String::new(),
        });
        assert!(errors.is_empty());
    }
}
