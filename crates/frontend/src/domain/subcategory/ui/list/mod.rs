pub mod state;

use contracts::domain::category::Category;
use contracts::domain::subcategory::Subcategory;
use contracts::shared::clamp_page;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::category;
use crate::domain::subcategory::api::{self, RESOURCE};
use crate::domain::subcategory::ui::details::SubcategoryForm;
use crate::shared::api::{typed_rows, use_page_query, QueryClient};
use crate::shared::components::{scroll_to_top, PageHeader, PaginationControls, SearchInput};
use crate::shared::format::format_date;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use state::SubcategoryListState;

#[derive(Clone, PartialEq)]
enum Editor {
    Closed,
    Create,
    Edit(Subcategory),
}

#[component]
pub fn SubcategorySection() -> impl IntoView {
    let client = QueryClient::expect();
    let toasts = ToastService::expect();
    let state = SubcategoryListState::new();
    let editor = RwSignal::new(Editor::Closed);

    let query = use_page_query(client, Signal::derive(move || state.query_key()));

    // Category filter options, loaded once.
    let categories = RwSignal::new(Vec::<Category>::new());
    Effect::new(move |prev: Option<()>| {
        if prev.is_some() {
            return;
        }
        spawn_local(async move {
            match category::api::fetch_all_for_dropdown().await {
                Ok(list) => categories.set(list),
                Err(e) => log::warn!("loading category options failed: {}", e),
            }
        });
    });

    Effect::new(move |_| {
        if let Some(page) = query.data.get() {
            let current = state.page.get_untracked();
            let clamped = clamp_page(current, page.total_pages);
            if clamped != current {
                state.page.set(clamped);
            }
        }
    });

    let rows = Signal::derive(move || {
        query
            .data
            .get()
            .map(|page| typed_rows::<Subcategory>(&page))
            .unwrap_or_default()
    });

    let delete = move |subcategory: Subcategory| {
        let name = subcategory.name.clone();
        toasts.confirm(
            format!("Delete subcategory \"{}\"?", name),
            move || {
                let id = subcategory.id.clone();
                spawn_local(async move {
                    match client.mutate(RESOURCE, api::delete(&id)).await {
                        Ok(()) => toasts.success("Subcategory deleted"),
                        Err(e) => toasts.error(e.user_message()),
                    }
                });
            },
            move || toasts.info("Delete cancelled"),
        );
    };

    let sort_marker = move |field: &'static str| {
        let sort = state.sort.get();
        if sort.field != field {
            ""
        } else if sort.descending {
            " \u{25bc}"
        } else {
            " \u{25b2}"
        }
    };

    view! {
        <div class="section">
            <PageHeader title="Subcategories" subtitle="Second-level catalog groups">
                <button class="btn-primary" on:click=move |_| editor.set(Editor::Create)>
                    {icon("plus")}
                    " Add Subcategory"
                </button>
            </PageHeader>

            <div class="section-toolbar">
                <SearchInput
                    value=state.search
                    on_change=Callback::new(move |v| state.set_search(v))
                    placeholder="Search subcategories..."
                />
                <select
                    class="filter-select"
                    on:change=move |ev| state.set_category(event_target_value(&ev))
                >
                    <option value="" selected=move || state.category.get().is_empty()>
                        "All categories"
                    </option>
                    <For
                        each=move || categories.get()
                        key=|c| c.id.clone()
                        children=move |c| {
                            let id = c.id.clone();
                            let selected_id = c.id.clone();
                            view! {
                                <option
                                    value=id
                                    selected=move || state.category.get() == selected_id
                                >
                                    {c.name.clone()}
                                </option>
                            }
                        }
                    />
                </select>
            </div>

            {move || match editor.get() {
                Editor::Closed => ().into_any(),
                Editor::Create => view! {
                    <SubcategoryForm
                        existing=None
                        on_close=Callback::new(move |_| editor.set(Editor::Closed))
                    />
                }
                .into_any(),
                Editor::Edit(subcategory) => view! {
                    <SubcategoryForm
                        existing=Some(subcategory)
                        on_close=Callback::new(move |_| editor.set(Editor::Closed))
                    />
                }
                .into_any(),
            }}

            <Show when=move || query.loading.get() && query.data.get().is_none()>
                <div class="list-loading">"Loading subcategories..."</div>
            </Show>

            {move || query.error.get().map(|e| view! {
                <div class="list-error">{e.user_message()}</div>
            })}

            <Show when=move || query.data.get().is_some()>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th class="sortable" on:click=move |_| state.toggle_sort("name")>
                                "Name" {move || sort_marker("name")}
                            </th>
                            <th>"Category"</th>
                            <th class="sortable" on:click=move |_| state.toggle_sort("createdAt")>
                                "Created" {move || sort_marker("createdAt")}
                            </th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || rows.get().is_empty()>
                            <tr>
                                <td colspan="4" class="empty-row">"No subcategories found"</td>
                            </tr>
                        </Show>
                        <For
                            each=move || rows.get()
                            key=|s| s.id.clone()
                            children=move |subcategory| {
                                let edit_target = subcategory.clone();
                                let delete_target = subcategory.clone();
                                let category_name = subcategory
                                    .category
                                    .name()
                                    .unwrap_or("\u{2014}")
                                    .to_string();
                                view! {
                                    <tr>
                                        <td>{subcategory.name.clone()}</td>
                                        <td>{category_name}</td>
                                        <td>{format_date(subcategory.created_at)}</td>
                                        <td class="row-actions">
                                            <button
                                                class="btn-icon"
                                                title="Edit"
                                                on:click=move |_| {
                                                    editor.set(Editor::Edit(edit_target.clone()))
                                                }
                                            >
                                                {icon("edit")}
                                            </button>
                                            <button
                                                class="btn-icon btn-icon--danger"
                                                title="Delete"
                                                on:click=move |_| delete(delete_target.clone())
                                            >
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>

                <PaginationControls
                    current_page=state.page
                    total_pages=Signal::derive(move || {
                        query.data.get().map(|p| p.total_pages).unwrap_or(1)
                    })
                    total_count=Signal::derive(move || {
                        query.data.get().map(|p| p.total).unwrap_or(0)
                    })
                    on_page_change=Callback::new(move |page| {
                        state.page.set(page);
                        scroll_to_top();
                    })
                />
            </Show>
        </div>
    }
}
