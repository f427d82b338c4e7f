pub mod state;

use contracts::domain::banner::Banner;
use contracts::shared::clamp_page;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::banner::api::{self, RESOURCE};
use crate::domain::banner::ui::details::BannerForm;
use crate::shared::api::{typed_rows, use_page_query, QueryClient};
use crate::shared::components::{scroll_to_top, PageHeader, PaginationControls};
use crate::shared::format::format_date;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use state::BannerListState;

#[derive(Clone, PartialEq)]
enum Editor {
    Closed,
    Create,
    Edit(Banner),
}

#[component]
pub fn BannerSection() -> impl IntoView {
    let client = QueryClient::expect();
    let toasts = ToastService::expect();
    let state = BannerListState::new();
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
            .map(|page| typed_rows::<Banner>(&page))
            .unwrap_or_default()
    });

    let delete = move |banner: Banner| {
        let title = banner.title.clone();
        toasts.confirm(
            format!("Delete banner \"{}\"?", title),
            move || {
                let id = banner.id.clone();
                spawn_local(async move {
                    match client.mutate(RESOURCE, api::delete(&id)).await {
                        Ok(()) => toasts.success("Banner deleted"),
                        Err(e) => toasts.error(e.user_message()),
                    }
                });
            },
            move || toasts.info("Delete cancelled"),
        );
    };

    let toggle_active = move |banner: Banner| {
        spawn_local(async move {
            match client.mutate(RESOURCE, api::toggle_active(&banner.id)).await {
                Ok(updated) => toasts.success(if updated.is_active {
                    "Banner activated"
                } else {
                    "Banner deactivated"
                }),
                Err(e) => toasts.error(e.user_message()),
            }
        });
    };

    view! {
        <div class="section">
            <PageHeader title="Banners" subtitle="Homepage carousel slides">
                <button class="btn-primary" on:click=move |_| editor.set(Editor::Create)>
                    {icon("plus")}
                    " Add Banner"
                </button>
            </PageHeader>

            {move || match editor.get() {
                Editor::Closed => ().into_any(),
                Editor::Create => view! {
                    <BannerForm
                        existing=None
                        on_close=Callback::new(move |_| editor.set(Editor::Closed))
                    />
                }
                .into_any(),
                Editor::Edit(banner) => view! {
                    <BannerForm
                        existing=Some(banner)
                        on_close=Callback::new(move |_| editor.set(Editor::Closed))
                    />
                }
                .into_any(),
            }}

            <Show when=move || query.loading.get() && query.data.get().is_none()>
                <div class="list-loading">"Loading banners..."</div>
            </Show>

            {move || query.error.get().map(|e| view! {
                <div class="list-error">{e.user_message()}</div>
            })}

            <Show when=move || query.data.get().is_some()>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Image"</th>
                            <th>"Title"</th>
                            <th>"Link"</th>
                            <th>"Active"</th>
                            <th class="sortable" on:click=move |_| state.toggle_sort("createdAt")>
                                "Created"
                            </th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || rows.get().is_empty()>
                            <tr>
                                <td colspan="6" class="empty-row">"No banners found"</td>
                            </tr>
                        </Show>
                        <For
                            each=move || rows.get()
                            key=|b| b.id.clone()
                            children=move |banner| {
                                let edit_target = banner.clone();
                                let delete_target = banner.clone();
                                let toggle_target = banner.clone();
                                view! {
                                    <tr>
                                        <td>
                                            <img
                                                class="thumb"
                                                src=banner.image.clone()
                                                alt=banner.title.clone()
                                            />
                                        </td>
                                        <td>{banner.title.clone()}</td>
                                        <td>{banner.link.clone().unwrap_or_else(|| "\u{2014}".to_string())}</td>
                                        <td>
                                            <button
                                                class="toggle"
                                                class:toggle--on=banner.is_active
                                                title="Toggle active"
                                                on:click=move |_| toggle_active(toggle_target.clone())
                                            >
                                                {if banner.is_active { "Active" } else { "Hidden" }}
                                            </button>
                                        </td>
                                        <td>{format_date(banner.created_at)}</td>
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
