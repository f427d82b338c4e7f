pub mod state;

use contracts::domain::category::Category;
use contracts::shared::clamp_page;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::category::api::{self, RESOURCE};
use crate::domain::category::ui::details::CategoryForm;
use crate::shared::api::{typed_rows, use_page_query, QueryClient};
use crate::shared::components::{scroll_to_top, PageHeader, PaginationControls, SearchInput};
use crate::shared::format::{format_date, truncate};
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use state::CategoryListState;

#[derive(Clone, PartialEq)]
enum Editor {
    Closed,
    Create,
    Edit(Category),
}

#[component]
pub fn CategorySection() -> impl IntoView {
    let client = QueryClient::expect();
    let toasts = ToastService::expect();
    let state = CategoryListState::new();
    let editor = RwSignal::new(Editor::Closed);

    let query = use_page_query(client, Signal::derive(move || state.query_key()));

    // A shrunken result set can leave the page past the end; clamp back.
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
            .map(|page| typed_rows::<Category>(&page))
            .unwrap_or_default()
    });

    let delete = move |category: Category| {
        let name = category.name.clone();
        toasts.confirm(
            format!("Delete category \"{}\"?", name),
            move || {
                let id = category.id.clone();
                spawn_local(async move {
                    match client.mutate(RESOURCE, api::delete(&id)).await {
                        Ok(()) => toasts.success("Category deleted"),
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
            <PageHeader title="Categories" subtitle="Top-level catalog groups">
                <button class="btn-primary" on:click=move |_| editor.set(Editor::Create)>
                    {icon("plus")}
                    " Add Category"
                </button>
            </PageHeader>

            <div class="section-toolbar">
                <SearchInput
                    value=state.search
                    on_change=Callback::new(move |v| state.set_search(v))
                    placeholder="Search categories..."
                />
            </div>

            {move || match editor.get() {
                Editor::Closed => ().into_any(),
                Editor::Create => view! {
                    <CategoryForm
                        existing=None
                        on_close=Callback::new(move |_| editor.set(Editor::Closed))
                    />
                }
                .into_any(),
                Editor::Edit(category) => view! {
                    <CategoryForm
                        existing=Some(category)
                        on_close=Callback::new(move |_| editor.set(Editor::Closed))
                    />
                }
                .into_any(),
            }}

            <Show when=move || query.loading.get() && query.data.get().is_none()>
                <div class="list-loading">"Loading categories..."</div>
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
                            <th>"Description"</th>
                            <th class="sortable" on:click=move |_| state.toggle_sort("createdAt")>
                                "Created" {move || sort_marker("createdAt")}
                            </th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || rows.get().is_empty()>
                            <tr>
                                <td colspan="4" class="empty-row">"No categories found"</td>
                            </tr>
                        </Show>
                        <For
                            each=move || rows.get()
                            key=|category| category.id.clone()
                            children=move |category| {
                                let edit_target = category.clone();
                                let delete_target = category.clone();
                                view! {
                                    <tr>
                                        <td>{category.name.clone()}</td>
                                        <td>{truncate(&category.description, 60)}</td>
                                        <td>{format_date(category.created_at)}</td>
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
