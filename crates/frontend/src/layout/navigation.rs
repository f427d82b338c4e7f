use leptos::prelude::*;
use web_sys::window;

/// Dashboard sections, one per managed resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Products,
    Categories,
    Subcategories,
    Inquiries,
    Banners,
    Workshops,
    Registrations,
    Reels,
    Blogs,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::Products,
        Section::Categories,
        Section::Subcategories,
        Section::Inquiries,
        Section::Banners,
        Section::Workshops,
        Section::Registrations,
        Section::Reels,
        Section::Blogs,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Section::Products => "products",
            Section::Categories => "categories",
            Section::Subcategories => "subcategories",
            Section::Inquiries => "inquiries",
            Section::Banners => "banners",
            Section::Workshops => "workshops",
            Section::Registrations => "registrations",
            Section::Reels => "reels",
            Section::Blogs => "blogs",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Products => "Products",
            Section::Categories => "Categories",
            Section::Subcategories => "Subcategories",
            Section::Inquiries => "Inquiries",
            Section::Banners => "Banners",
            Section::Workshops => "Workshops",
            Section::Registrations => "Registrations",
            Section::Reels => "Reels",
            Section::Blogs => "Blogs",
        }
    }

    pub fn icon_name(self) -> &'static str {
        match self {
            Section::Products => "package",
            Section::Categories => "folder",
            Section::Subcategories => "folder-tree",
            Section::Inquiries => "mail",
            Section::Banners => "image",
            Section::Workshops => "calendar",
            Section::Registrations => "users",
            Section::Reels => "film",
            Section::Blogs => "file-text",
        }
    }

    pub fn from_key(key: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// Active-section state shared through context. Mirrors the selection into
/// the URL query string so a reload lands on the same section.
#[derive(Clone, Copy)]
pub struct Navigation {
    pub active: RwSignal<Section>,
}

impl Navigation {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Section::Products),
        }
    }

    pub fn expect() -> Self {
        use_context::<Navigation>().expect("Navigation not found in component tree")
    }

    pub fn go_to(&self, section: Section) {
        self.active.set(section);
    }

    /// Restore the section from `?section=` and keep the URL in sync after.
    pub fn init_url_sync(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(section) = parse_section_param(&search).and_then(|k| Section::from_key(&k)) {
            self.active.set(section);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_search = format!("?section={}", this.active.get().key());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_search {
                return;
            }

            if let Some(w) = window() {
                if let Ok(history) = w.history() {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_search),
                    );
                }
            }
        });
    }
}

fn parse_section_param(search: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == "section")
        .and_then(|(_, value)| urlencoding::decode(value).ok().map(|v| v.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_keys_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_key(section.key()), Some(section));
        }
        assert_eq!(Section::from_key("unknown"), None);
    }

    #[test]
    fn test_parse_section_param() {
        assert_eq!(
            parse_section_param("?section=banners"),
            Some("banners".to_string())
        );
        assert_eq!(
            parse_section_param("?page=2&section=reels"),
            Some("reels".to_string())
        );
        assert_eq!(parse_section_param("?page=2"), None);
        assert_eq!(parse_section_param(""), None);
    }
}
