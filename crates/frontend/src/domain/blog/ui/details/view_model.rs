use contracts::domain::blog::{Blog, BlogPayload};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;

use crate::domain::blog::api::{self, RESOURCE};
use crate::shared::api::QueryClient;
use crate::shared::toast::ToastService;
use crate::shared::upload::widget::{clear_files, selected_files, SelectedFiles};
use crate::shared::upload::{upload_all, CloudinaryConfig};

#[derive(Clone)]
pub struct BlogFormModel {
    pub form: RwSignal<BlogPayload>,
    pub errors: RwSignal<BTreeMap<String, String>>,
    pub saving: RwSignal<bool>,
    pub cover_file: SelectedFiles,
    pub editing_id: Option<String>,
    /// Cleared as soon as the user edits the slug by hand.
    pub slug_follows_title: RwSignal<bool>,
}

impl BlogFormModel {
    pub fn new(existing: Option<&Blog>) -> Self {
        let form = match existing {
            Some(blog) => BlogPayload {
                title: blog.title.clone(),
                slug: blog.slug.clone(),
                category: blog.category.clone(),
                content: blog.content.clone(),
                cover_image: blog.cover_image.clone(),
                published: blog.published,
            },
            None => BlogPayload::default(),
        };
        Self {
            form: RwSignal::new(form),
            errors: RwSignal::new(BTreeMap::new()),
            saving: RwSignal::new(false),
            cover_file: selected_files(),
            editing_id: existing.map(|b| b.id.clone()),
            slug_follows_title: RwSignal::new(existing.is_none()),
        }
    }

    pub fn set_title(&self, title: String) {
        let follow = self.slug_follows_title.get_untracked();
        self.form.update(|f| {
            if follow {
                f.slug = slugify(&title);
            }
            f.title = title;
        });
    }

    pub fn set_slug(&self, slug: String) {
        self.slug_follows_title.set(false);
        self.form.update(|f| f.slug = slug);
    }

    pub fn validate(payload: &BlogPayload) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();
        if payload.title.trim().is_empty() {
            errors.insert("title".to_string(), "Title is required".to_string());
        }
        if payload.slug.trim().is_empty() {
            errors.insert("slug".to_string(), "Slug is required".to_string());
        }
        if payload.content.trim().is_empty() {
            errors.insert("content".to_string(), "Content is required".to_string());
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
        let cover_file = self.cover_file;
        let slug_follows_title = self.slug_follows_title;
        let editing_id = self.editing_id.clone();
        spawn_local(async move {
            let picked: Vec<web_sys::File> =
                cover_file.with_untracked(|f| f.iter().map(|s| s.file.clone()).collect());
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
                    Ok(mut urls) => current.cover_image = Some(urls.remove(0)),
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
                        toasts.success("Blog post updated");
                        on_saved.run(());
                    }
                    None => {
                        toasts.success("Blog post created");
                        form.set(BlogPayload::default());
                        slug_follows_title.set(true);
                        clear_files(cover_file);
                    }
                },
                Err(e) => toasts.error(e.user_message()),
            }
        });
    }
}

/// URL-safe slug from a title: lowercase ASCII alphanumerics joined by
/// single hyphens.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("The Art of Ikat"), "the-art-of-ikat");
        assert_eq!(slugify("  Weaving, 101!  "), "weaving-101");
        assert_eq!(slugify("--"), "");
    }

    #[test]
    fn test_title_slug_content_required() {
        let errors = BlogFormModel::validate(&BlogPayload::default());
        assert!(errors.contains_key("title"));
        assert!(errors.contains_key("slug"));
        assert!(errors.contains_key("content"));
    }

    #[test]
    fn test_valid_payload_passes() {
        let payload = BlogPayload {
            title: "The Art of Ikat".to_string(),
            slug: "the-art-of-ikat".to_string(),
            content: "Long-form text".to_string(),
            ..BlogPayload::default()
        };
        assert!(BlogFormModel::validate(&payload).is_empty());
    }
}
