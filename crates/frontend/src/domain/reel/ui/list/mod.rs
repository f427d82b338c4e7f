pub mod state;

use contracts::domain::reel::Reel;
use contracts::shared::clamp_page;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::reel::api::{self, RESOURCE};
use crate::domain::reel::ui::details::ReelForm;
use crate::shared::api::{typed_rows, use_page_query, QueryClient};
use crate::shared::components::{scroll_to_top, PageHeader, PaginationControls, SearchInput};
use crate::shared::format::format_date;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use state::ReelListState;

#[derive(Clone, PartialEq)]
enum Editor {
    Closed,
    Create,
    Edit(Reel),
}

#[component]
pub fn ReelSection() -> impl IntoView {
    let client = QueryClient::expect();
    let toasts = ToastService::expect();
    let state = ReelListState::new();
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
            .map(|page| typed_rows::<Reel>(&page))
            .unwrap_or_default()
    });

    let delete = move |reel: Reel| {
        let title = reel.title.clone();
        toasts.confirm(
            format!("Delete reel \"{}\"?", title),
            move || {
                let id = reel.id.clone();
                spawn_local(async move {
                    match client.mutate(RESOURCE, api::delete(&id)).await {
                        Ok(()) => toasts.success("Reel deleted"),
                        Err(e) => toasts.error(e.user_message()),
                    }
                });
            },
            move || toasts.info("Delete cancelled"),
        );
    };

    let toggle_visibility = move |reel: Reel| {
        spawn_local(async move {
            match client
                .mutate(RESOURCE, api::toggle_visibility(&reel.id))
                .await
            {
                Ok(updated) => toasts.success(if updated.visible {
                    "Reel is now visible"
                } else {
                    "Reel is now hidden"
                }),
                Err(e) => toasts.error(e.user_message()),
            }
        });
    };

    view! {
        <div class="section">
            <PageHeader title="Reels" subtitle="Short videos shown on the storefront">
                <button class="btn-primary" on:click=move |_| editor.set(Editor::Create)>
                    {icon("plus")}
                    " Add Reel"
                </button>
            </PageHeader>

            <div class="section-toolbar">
                <SearchInput
                    value=state.search
                    on_change=Callback::new(move |v| state.set_search(v))
                    placeholder="Search reels..."
                />
            </div>

            {move || match editor.get() {
                Editor::Closed => ().into_any(),
                Editor::Create => view! {
                    <ReelForm
                        existing=None
                        on_close=Callback::new(move |_| editor.set(Editor::Closed))
                    />
                }
                .into_any(),
                Editor::Edit(reel) => view! {
                    <ReelForm
                        existing=Some(reel)
                        on_close=Callback::new(move |_| editor.set(Editor::Closed))
                    />
                }
                .into_any(),
            }}

            <Show when=move || query.loading.get() && query.data.get().is_none()>
                <div class="list-loading">"Loading reels..."</div>
            </Show>

            {move || query.error.get().map(|e| view! {
                <div class="list-error">{e.user_message()}</div>
            })}

            <Show when=move || query.data.get().is_some()>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Thumbnail"</th>
                            <th>"Title"</th>
                            <th>"Video"</th>
                            <th>"Visible"</th>
                            <th>"Created"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || rows.get().is_empty()>
                            <tr>
                                <td colspan="6" class="empty-row">"No reels found"</td>
                            </tr>
                        </Show>
                        <For
                            each=move || rows.get()
                            key=|r| r.id.clone()
                            children=move |reel| {
                                let edit_target = reel.clone();
                                let delete_target = reel.clone();
                                let toggle_target = reel.clone();
                                view! {
                                    <tr>
                                        <td>
                                            {reel.thumbnail.clone().map(|url| view! {
                                                <img class="thumb" src=url alt=reel.title.clone()/>
                                            })}
                                        </td>
                                        <td>{reel.title.clone()}</td>
                                        <td>
                                            <a
                                                href=reel.video_url.clone()
                                                target="_blank"
                                                rel="noreferrer"
                                            >
                                                "Open"
                                            </a>
                                        </td>
                                        <td>
                                            <button
                                                class="toggle"
                                                class:toggle--on=reel.visible
                                                title="Toggle visibility"
                                                on:click=move |_| {
                                                    toggle_visibility(toggle_target.clone())
                                                }
                                            >
                                                {if reel.visible { "Visible" } else { "Hidden" }}
                                            </button>
                                        </td>
                                        <td>{format_date(reel.created_at)}</td>
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
