use contracts::shared::{ListQuery, SortSpec};
use leptos::prelude::*;

use crate::domain::registration::api::RESOURCE;
use crate::shared::api::QueryKey;

const PAGE_SIZE: u64 = 20;

#[derive(Clone, Copy)]
pub struct RegistrationListState {
    pub page: RwSignal<u64>,
    pub sort: RwSignal<SortSpec>,
    /// Workshop id filter; empty selects all.
    pub workshop: RwSignal<String>,
}

impl RegistrationListState {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(1),
            sort: RwSignal::new(SortSpec::newest_first()),
            workshop: RwSignal::new(String::new()),
        }
    }

    pub fn query_key(&self) -> QueryKey {
        let query = ListQuery::new(self.page.get(), PAGE_SIZE)
            .with_sort(self.sort.get())
            .with_filter("workshop", self.workshop.get());
        QueryKey::new(RESOURCE, query)
    }

    pub fn set_workshop(&self, value: String) {
        self.workshop.set(value);
        self.page.set(1);
    }
}
