use contracts::shared::{ListQuery, SortSpec};
use leptos::prelude::*;

use crate::domain::reel::api::RESOURCE;
use crate::shared::api::QueryKey;

const PAGE_SIZE: u64 = 12;

#[derive(Clone, Copy)]
pub struct ReelListState {
    pub page: RwSignal<u64>,
    pub sort: RwSignal<SortSpec>,
    pub search: RwSignal<String>,
}

impl ReelListState {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(1),
            sort: RwSignal::new(SortSpec::newest_first()),
            search: RwSignal::new(String::new()),
        }
    }

    pub fn query_key(&self) -> QueryKey {
        let query = ListQuery::new(self.page.get(), PAGE_SIZE)
            .with_sort(self.sort.get())
            .with_filter("search", self.search.get());
        QueryKey::new(RESOURCE, query)
    }

    pub fn set_search(&self, value: String) {
        self.search.set(value);
        self.page.set(1);
    }
}
