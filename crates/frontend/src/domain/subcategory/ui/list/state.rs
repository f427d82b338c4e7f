use contracts::shared::{ListQuery, SortSpec};
use leptos::prelude::*;

use crate::domain::subcategory::api::RESOURCE;
use crate::shared::api::QueryKey;

const PAGE_SIZE: u64 = 10;

#[derive(Clone, Copy)]
pub struct SubcategoryListState {
    pub page: RwSignal<u64>,
    pub sort: RwSignal<SortSpec>,
    pub search: RwSignal<String>,
    /// Category id filter; empty selects all.
    pub category: RwSignal<String>,
}

impl SubcategoryListState {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(1),
            sort: RwSignal::new(SortSpec::newest_first()),
            search: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
        }
    }

    pub fn query_key(&self) -> QueryKey {
        let query = ListQuery::new(self.page.get(), PAGE_SIZE)
            .with_sort(self.sort.get())
            .with_filter("search", self.search.get())
            .with_filter("category", self.category.get());
        QueryKey::new(RESOURCE, query)
    }

    pub fn set_search(&self, value: String) {
        self.search.set(value);
        self.page.set(1);
    }

    pub fn set_category(&self, value: String) {
        self.category.set(value);
        self.page.set(1);
    }

    pub fn toggle_sort(&self, field: &str) {
        self.sort.update(|s| *s = s.toggled(field));
        self.page.set(1);
    }
}
