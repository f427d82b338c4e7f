use contracts::domain::product::{Product, ProductOption, ProductPayload};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::domain::product::api::{self, RESOURCE};
use crate::shared::api::QueryClient;
use crate::shared::toast::ToastService;
use crate::shared::upload::widget::{clear_files, selected_files, SelectedFiles};
use crate::shared::upload::{upload_all, CloudinaryConfig};

pub const SHORT_DESCRIPTION_MAX: usize = 200;

/// One editable variant row. The key is stable across edits so the row
/// list can be keyed without flicker, and per-row pending uploads stay
/// attached to their row.
#[derive(Clone)]
pub struct OptionDraft {
    pub key: Uuid,
    pub color: String,
    pub color_code: String,
    pub quantity: u32,
    pub price: Option<f64>,
    pub image_urls: Vec<String>,
    pub files: SelectedFiles,
}

impl OptionDraft {
    fn blank() -> Self {
        Self {
            key: Uuid::new_v4(),
            color: String::new(),
            color_code: String::new(),
            quantity: 0,
            price: None,
            image_urls: Vec::new(),
            files: selected_files(),
        }
    }

    fn from_option(option: &ProductOption) -> Self {
        Self {
            key: Uuid::new_v4(),
            color: option.color.clone(),
            color_code: option.color_code.clone(),
            quantity: option.quantity,
            price: option.price,
            image_urls: option.image_urls.clone(),
            files: selected_files(),
        }
    }

    pub fn to_option(&self) -> ProductOption {
        ProductOption {
            color: self.color.clone(),
            color_code: self.color_code.clone(),
            quantity: self.quantity,
            price: self.price,
            image_urls: self.image_urls.clone(),
        }
    }
}

#[derive(Clone)]
pub struct ProductFormModel {
    pub form: RwSignal<ProductPayload>,
    /// Comma-separated sizes as typed; split into the payload at save.
    pub sizes_input: RwSignal<String>,
    pub options: RwSignal<Vec<OptionDraft>, LocalStorage>,
    pub errors: RwSignal<BTreeMap<String, String>>,
    pub saving: RwSignal<bool>,
    pub image_files: SelectedFiles,
    pub editing_id: Option<String>,
}

impl ProductFormModel {
    pub fn new(existing: Option<&Product>) -> Self {
        let (form, sizes_input, options) = match existing {
            Some(product) => (
                ProductPayload {
                    name: product.name.clone(),
                    category: product.category.id().to_string(),
                    subcategory: product.subcategory.as_ref().map(|s| s.id().to_string()),
                    design: product.design.clone(),
                    description: product.description.clone(),
                    short_description: product.short_description.clone(),
                    price: product.price,
                    quantity: product.quantity,
                    sizes: product.sizes.clone(),
                    images: product.images.clone(),
                    options: Vec::new(),
                },
                product.sizes.join(", "),
                product.options.iter().map(OptionDraft::from_option).collect(),
            ),
            None => (ProductPayload::default(), String::new(), Vec::new()),
        };
        Self {
            form: RwSignal::new(form),
            sizes_input: RwSignal::new(sizes_input),
            options: RwSignal::new_local(options),
            errors: RwSignal::new(BTreeMap::new()),
            saving: RwSignal::new(false),
            image_files: selected_files(),
            editing_id: existing.map(|p| p.id.clone()),
        }
    }

    pub fn add_option(&self) {
        self.options.update(|opts| opts.push(OptionDraft::blank()));
    }

    pub fn validate(
        payload: &ProductPayload,
        has_pending_images: bool,
    ) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();
        if payload.name.trim().is_empty() {
            errors.insert("name".to_string(), "Name is required".to_string());
        }
        if payload.category.trim().is_empty() {
            errors.insert("category".to_string(), "Category is required".to_string());
        }
        if payload.price <= 0.0 {
            errors.insert(
                "price".to_string(),
                "Price must be greater than zero".to_string(),
            );
        }
        if payload.quantity == 0 {
            errors.insert(
                "quantity".to_string(),
                "Quantity must be greater than zero".to_string(),
            );
        }
        if payload.short_description.chars().count() > SHORT_DESCRIPTION_MAX {
            errors.insert(
                "shortDescription".to_string(),
                format!(
                    "Short description must be at most {} characters",
                    SHORT_DESCRIPTION_MAX
                ),
            );
        }
        if payload.images.is_empty() && !has_pending_images {
            errors.insert(
                "images".to_string(),
                "At least one image is required".to_string(),
            );
        }
        for (i, option) in payload.options.iter().enumerate() {
            if option.color.trim().is_empty() {
                errors.insert(
                    format!("options[{}].color", i),
                    "Color is required".to_string(),
                );
            }
            if option.quantity == 0 {
                errors.insert(
                    format!("options[{}].quantity", i),
                    "Quantity must be greater than zero".to_string(),
                );
            }
            if let Some(price) = option.price {
                if price <= 0.0 {
                    errors.insert(
                        format!("options[{}].price", i),
                        "Price must be greater than zero".to_string(),
                    );
                }
            }
        }
        errors
    }

    /// Build the wire payload from the current draft state, without
    /// pending uploads.
    pub fn build_payload(&self) -> ProductPayload {
        let mut payload = self.form.get_untracked();
        payload.sizes = parse_sizes(&self.sizes_input.get_untracked());
        payload.options = self
            .options
            .with_untracked(|opts| opts.iter().map(OptionDraft::to_option).collect());
        payload
    }

    /// Uploads run first (main images, then each variant's, in order);
    /// any failure aborts before the mutation so the backend never sees
    /// a half-uploaded product.
    pub fn save(&self, client: QueryClient, toasts: ToastService, on_saved: Callback<()>) {
        let mut payload = self.build_payload();
        let has_pending_images = self.image_files.with_untracked(|f| !f.is_empty());
        let found = Self::validate(&payload, has_pending_images);
        if !found.is_empty() {
            self.errors.set(found);
            return;
        }
        self.errors.set(BTreeMap::new());
        self.saving.set(true);

        let saving = self.saving;
        let form = self.form;
        let sizes_input = self.sizes_input;
        let image_files = self.image_files;
        let options = self.options;
        let editing_id = self.editing_id.clone();
        spawn_local(async move {
            let main_files: Vec<web_sys::File> =
                image_files.with_untracked(|f| f.iter().map(|s| s.file.clone()).collect());
            let option_files: Vec<Vec<web_sys::File>> = options.with_untracked(|opts| {
                opts.iter()
                    .map(|o| o.files.with_untracked(|f| f.iter().map(|s| s.file.clone()).collect()))
                    .collect()
            });
            let any_files =
                !main_files.is_empty() || option_files.iter().any(|f| !f.is_empty());

            if any_files {
                let config = match CloudinaryConfig::resolve() {
                    Ok(c) => c,
                    Err(e) => {
                        saving.set(false);
                        toasts.error(e.user_message());
                        return;
                    }
                };
                match upload_all(&config, &main_files).await {
                    Ok(urls) => payload.images.extend(urls),
                    Err(e) => {
                        saving.set(false);
                        toasts.error(e.user_message());
                        return;
                    }
                }
                for (option, files) in payload.options.iter_mut().zip(&option_files) {
                    match upload_all(&config, files).await {
                        Ok(urls) => option.image_urls.extend(urls),
                        Err(e) => {
                            saving.set(false);
                            toasts.error(e.user_message());
                            return;
                        }
                    }
                }
            }

            let result = match &editing_id {
                Some(id) => client
                    .mutate(RESOURCE, api::update(id, &payload))
                    .await
                    .map(|_| ()),
                None => client
                    .mutate(RESOURCE, api::create(&payload))
                    .await
                    .map(|_| ()),
            };
            saving.set(false);
            match result {
                Ok(()) => match editing_id {
                    Some(_) => {
                        toasts.success("Product updated");
                        on_saved.run(());
                    }
                    None => {
                        toasts.success("Product created");
                        form.set(ProductPayload::default());
                        sizes_input.set(String::new());
                        clear_files(image_files);
                        options.with_untracked(|opts| {
                            for draft in opts {
                                clear_files(draft.files);
                            }
                        });
                        options.set(Vec::new());
                    }
                },
                Err(e) => toasts.error(e.user_message()),
            }
        });
    }
}

/// Drop the removed row's `options[i].*` errors and shift higher rows'
/// keys down one, so inline messages stay on the rows that caused them.
pub fn remove_option_errors(errors: &mut BTreeMap<String, String>, removed: usize) {
    let mut rebuilt = BTreeMap::new();
    for (key, message) in std::mem::take(errors) {
        let shifted = key
            .strip_prefix("options[")
            .and_then(|rest| rest.split_once("]."))
            .and_then(|(idx, field)| idx.parse::<usize>().ok().map(|idx| (idx, field)));
        match shifted {
            Some((idx, _)) if idx == removed => {}
            Some((idx, field)) if idx > removed => {
                rebuilt.insert(format!("options[{}].{}", idx - 1, field), message);
            }
            _ => {
                rebuilt.insert(key, message);
            }
        }
    }
    *errors = rebuilt;
}

fn parse_sizes(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> ProductPayload {
        ProductPayload {
            name: "Handloom saree".to_string(),
            category: "cat1".to_string(),
            subcategory: None,
            design: "Ikat".to_string(),
            description: "Full description".to_string(),
            short_description: "Short".to_string(),
            price: 2499.0,
            quantity: 5,
            sizes: vec!["Free".to_string()],
            images: vec!["https://cdn.example.com/1.jpg".to_string()],
            options: Vec::new(),
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        assert!(ProductFormModel::validate(&valid_payload(), false).is_empty());
    }

    #[test]
    fn test_price_and_quantity_must_be_positive() {
        let mut payload = valid_payload();
        payload.price = 0.0;
        payload.quantity = 0;
        let errors = ProductFormModel::validate(&payload, false);
        assert!(errors.contains_key("price"));
        assert!(errors.contains_key("quantity"));
    }

    #[test]
    fn test_short_description_boundary() {
        let mut payload = valid_payload();
        payload.short_description = "x".repeat(SHORT_DESCRIPTION_MAX);
        assert!(ProductFormModel::validate(&payload, false).is_empty());
        payload.short_description = "x".repeat(SHORT_DESCRIPTION_MAX + 1);
        assert!(
            ProductFormModel::validate(&payload, false).contains_key("shortDescription")
        );
    }

    #[test]
    fn test_images_required_unless_pending() {
        let mut payload = valid_payload();
        payload.images.clear();
        assert!(ProductFormModel::validate(&payload, false).contains_key("images"));
        assert!(ProductFormModel::validate(&payload, true).is_empty());
    }

    #[test]
    fn test_option_rows_are_validated_individually() {
        let mut payload = valid_payload();
        payload.options = vec![
            ProductOption {
                color: "Indigo".to_string(),
                color_code: "#264b96".to_string(),
                quantity: 3,
                price: None,
                image_urls: Vec::new(),
            },
            ProductOption {
                color: String::new(),
                color_code: String::new(),
                quantity: 0,
                price: Some(-5.0),
                image_urls: Vec::new(),
            },
        ];
        let errors = ProductFormModel::validate(&payload, false);
        assert!(!errors.contains_key("options[0].color"));
        assert!(errors.contains_key("options[1].color"));
        assert!(errors.contains_key("options[1].quantity"));
        assert!(errors.contains_key("options[1].price"));
    }

    #[test]
    fn test_removing_a_row_shifts_higher_error_keys() {
        let mut errors = BTreeMap::new();
        errors.insert("name".to_string(), "Name is required".to_string());
        errors.insert("options[0].color".to_string(), "a".to_string());
        errors.insert("options[1].quantity".to_string(), "b".to_string());
        errors.insert("options[2].price".to_string(), "c".to_string());
        remove_option_errors(&mut errors, 1);
        assert_eq!(errors.get("name").map(String::as_str), Some("Name is required"));
        assert_eq!(errors.get("options[0].color").map(String::as_str), Some("a"));
        assert_eq!(errors.get("options[1].price").map(String::as_str), Some("c"));
        assert!(!errors.contains_key("options[1].quantity"));
        assert!(!errors.contains_key("options[2].price"));
    }

    #[test]
    fn test_parse_sizes() {
        assert_eq!(
            parse_sizes("S, M ,L,,  "),
            vec!["S".to_string(), "M".to_string(), "L".to_string()]
        );
        assert!(parse_sizes("").is_empty());
    }
}
