use contracts::shared::{ListQuery, SortSpec};
use leptos::prelude::*;

use crate::domain::inquiry::api::RESOURCE;
use crate::shared::api::QueryKey;

const PAGE_SIZE: u64 = 10;

#[derive(Clone, Copy)]
pub struct InquiryListState {
    pub page: RwSignal<u64>,
    pub sort: RwSignal<SortSpec>,
    pub search: RwSignal<String>,
    /// Status filter value as sent on the wire; empty selects all.
    pub status: RwSignal<String>,
    /// Buy-option filter value; empty selects all.
    pub buy_option: RwSignal<String>,
}

impl InquiryListState {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(1),
            sort: RwSignal::new(SortSpec::newest_first()),
            search: RwSignal::new(String::new()),
            status: RwSignal::new(String::new()),
            buy_option: RwSignal::new(String::new()),
        }
    }

    pub fn query_key(&self) -> QueryKey {
        let query = ListQuery::new(self.page.get(), PAGE_SIZE)
            .with_sort(self.sort.get())
            .with_filter("search", self.search.get())
            .with_filter("status", self.status.get())
            .with_filter("buyOption", self.buy_option.get());
        QueryKey::new(RESOURCE, query)
    }

    pub fn set_search(&self, value: String) {
        self.search.set(value);
        self.page.set(1);
    }

    pub fn set_status(&self, value: String) {
        self.status.set(value);
        self.page.set(1);
    }

    pub fn set_buy_option(&self, value: String) {
        self.buy_option.set(value);
        self.page.set(1);
    }
}
