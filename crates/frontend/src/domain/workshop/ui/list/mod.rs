pub mod state;

use contracts::domain::workshop::Workshop;
use contracts::shared::clamp_page;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::workshop::api::{self, RESOURCE};
use crate::domain::workshop::ui::details::WorkshopForm;
use crate::shared::api::{typed_rows, use_page_query, QueryClient};
use crate::shared::components::{scroll_to_top, PageHeader, PaginationControls, SearchInput};
use crate::shared::format::format_price;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use state::WorkshopListState;

#[derive(Clone, PartialEq)]
enum Editor {
    Closed,
    Create,
    Edit(Workshop),
}

#[component]
pub fn WorkshopSection() -> impl IntoView {
    let client = QueryClient::expect();
    let toasts = ToastService::expect();
    let state = WorkshopListState::new();
    let editor = RwSignal::new(Editor::Closed);

    let query = use_page_query(client, Signal::derive(move || state.query_key()));

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
            .map(|page| typed_rows::<Workshop>(&page))
            .unwrap_or_default()
    });

    let delete = move |workshop: Workshop| {
        let title = workshop.title.clone();
        toasts.confirm(
            format!("Delete workshop \"{}\"?", title),
            move || {
                let id = workshop.id.clone();
                spawn_local(async move {
                    match client.mutate(RESOURCE, api::delete(&id)).await {
                        Ok(()) => toasts.success("Workshop deleted"),
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
            <PageHeader title="Workshops" subtitle="Scheduled craft sessions">
                <button class="btn-primary" on:click=move |_| editor.set(Editor::Create)>
                    {icon("plus")}
                    " Add Workshop"
                </button>
            </PageHeader>

            <div class="section-toolbar">
                <SearchInput
                    value=state.search
                    on_change=Callback::new(move |v| state.set_search(v))
                    placeholder="Search workshops..."
                />
            </div>

            {move || match editor.get() {
                Editor::Closed => ().into_any(),
                Editor::Create => view! {
                    <WorkshopForm
                        existing=None
                        on_close=Callback::new(move |_| editor.set(Editor::Closed))
                    />
                }
                .into_any(),
                Editor::Edit(workshop) => view! {
                    <WorkshopForm
                        existing=Some(workshop)
                        on_close=Callback::new(move |_| editor.set(Editor::Closed))
                    />
                }
                .into_any(),
            }}

            <Show when=move || query.loading.get() && query.data.get().is_none()>
                <div class="list-loading">"Loading workshops..."</div>
            </Show>

            {move || query.error.get().map(|e| view! {
                <div class="list-error">{e.user_message()}</div>
            })}

            <Show when=move || query.data.get().is_some()>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th class="sortable" on:click=move |_| state.toggle_sort("title")>
                                "Title" {move || sort_marker("title")}
                            </th>
                            <th class="sortable" on:click=move |_| state.toggle_sort("date")>
                                "Date" {move || sort_marker("date")}
                            </th>
                            <th>"Location"</th>
                            <th class="sortable" on:click=move |_| state.toggle_sort("price")>
                                "Price" {move || sort_marker("price")}
                            </th>
                            <th>"Capacity"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || rows.get().is_empty()>
                            <tr>
                                <td colspan="6" class="empty-row">"No workshops found"</td>
                            </tr>
                        </Show>
                        <For
                            each=move || rows.get()
                            key=|w| w.id.clone()
                            children=move |workshop| {
                                let edit_target = workshop.clone();
                                let delete_target = workshop.clone();
                                view! {
                                    <tr>
                                        <td>{workshop.title.clone()}</td>
                                        <td>{workshop.date.clone()}</td>
                                        <td>{workshop.location.clone()}</td>
                                        <td>{format_price(workshop.price)}</td>
                                        <td>{workshop.capacity}</td>
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
