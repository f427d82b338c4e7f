use contracts::domain::category::{Category, CategoryPayload};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;

use crate::domain::category::api::{self, RESOURCE};
use crate::shared::api::QueryClient;
use crate::shared::toast::ToastService;

/// ViewModel for the category form.
#[derive(Clone)]
pub struct CategoryFormModel {
    pub form: RwSignal<CategoryPayload>,
    pub errors: RwSignal<BTreeMap<String, String>>,
    pub saving: RwSignal<bool>,
    pub editing_id: Option<String>,
}

impl CategoryFormModel {
    pub fn new(existing: Option<&Category>) -> Self {
        let form = match existing {
            Some(category) => CategoryPayload {
                name: category.name.clone(),
                description: category.description.clone(),
            },
            None => CategoryPayload::default(),
        };
        Self {
            form: RwSignal::new(form),
            errors: RwSignal::new(BTreeMap::new()),
            saving: RwSignal::new(false),
            editing_id: existing.map(|c| c.id.clone()),
        }
    }

    pub fn validate(payload: &CategoryPayload) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();
        if payload.name.trim().is_empty() {
            errors.insert("name".to_string(), "Name is required".to_string());
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
                // Editing closes the panel; creating clears the form for
                // the next entry.
                Ok(()) => match editing_id {
                    Some(_) => {
                        toasts.success("Category updated");
                        on_saved.run(());
                    }
                    None => {
                        toasts.success("Category created");
                        form.set(CategoryPayload::default());
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
    fn test_name_is_required() {
        let errors = CategoryFormModel::validate(&CategoryPayload {
            name: "  ".to_string(),
            description: String::new(),
        });
        assert!(errors.contains_key("name"));
    }

    #[test]
    fn test_valid_payload_passes() {
        let errors = CategoryFormModel::validate(&CategoryPayload {
            name: "Sarees".to_string(),
            description: String::new(),
        });
        assert!(errors.is_empty());
    }
}
