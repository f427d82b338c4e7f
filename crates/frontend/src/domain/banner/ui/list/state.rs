use contracts::shared::{ListQuery, SortSpec};
use leptos::prelude::*;

use crate::domain::banner::api::RESOURCE;
use crate::shared::api::QueryKey;

const PAGE_SIZE: u64 = 10;

#[derive(Clone, Copy)]
pub struct BannerListState {
    pub page: RwSignal<u64>,
    pub sort: RwSignal<SortSpec>,
}

impl BannerListState {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(1),
            sort: RwSignal::new(SortSpec::newest_first()),
        }
    }

    pub fn query_key(&self) -> QueryKey {
        let query = ListQuery::new(self.page.get(), PAGE_SIZE).with_sort(self.sort.get());
        QueryKey::new(RESOURCE, query)
    }

    pub fn toggle_sort(&self, field: &str) {
        self.sort.update(|s| *s = s.toggled(field));
        self.page.set(1);
    }
}
