pub mod state;

use contracts::domain::blog::Blog;
use contracts::shared::clamp_page;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::blog::api::{self, RESOURCE};
use crate::domain::blog::ui::details::BlogForm;
use crate::shared::api::{typed_rows, use_page_query, QueryClient};
use crate::shared::components::{scroll_to_top, PageHeader, PaginationControls, SearchInput};
use crate::shared::format::format_date;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use state::BlogListState;

#[derive(Clone, PartialEq)]
enum Editor {
    Closed,
    Create,
    Edit(Blog),
}

#[component]
pub fn BlogSection() -> impl IntoView {
    let client = QueryClient::expect();
    let toasts = ToastService::expect();
    let state = BlogListState::new();
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
            .map(|page| typed_rows::<Blog>(&page))
            .unwrap_or_default()
    });

    let delete = move |blog: Blog| {
        let title = blog.title.clone();
        toasts.confirm(
            format!("Delete blog post \"{}\"?", title),
            move || {
                let id = blog.id.clone();
                spawn_local(async move {
                    match client.mutate(RESOURCE, api::delete(&id)).await {
                        Ok(()) => toasts.success("Blog post deleted"),
                        Err(e) => toasts.error(e.user_message()),
                    }
                });
            },
            move || toasts.info("Delete cancelled"),
        );
    };

    let toggle_publish = move |blog: Blog| {
        spawn_local(async move {
            match client.mutate(RESOURCE, api::toggle_publish(&blog.id)).await {
                Ok(updated) => toasts.success(if updated.published {
                    "Blog post published"
                } else {
                    "Blog post unpublished"
                }),
                Err(e) => toasts.error(e.user_message()),
            }
        });
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
            <PageHeader title="Blogs" subtitle="Stories and editorials">
                <button class="btn-primary" on:click=move |_| editor.set(Editor::Create)>
                    {icon("plus")}
                    " Add Blog Post"
                </button>
            </PageHeader>

            <div class="section-toolbar">
                <SearchInput
                    value=state.search
                    on_change=Callback::new(move |v| state.set_search(v))
                    placeholder="Search blog posts..."
                />
            </div>

            {move || match editor.get() {
                Editor::Closed => ().into_any(),
                Editor::Create => view! {
                    <BlogForm
                        existing=None
                        on_close=Callback::new(move |_| editor.set(Editor::Closed))
                    />
                }
                .into_any(),
                Editor::Edit(blog) => view! {
                    <BlogForm
                        existing=Some(blog)
                        on_close=Callback::new(move |_| editor.set(Editor::Closed))
                    />
                }
                .into_any(),
            }}

            <Show when=move || query.loading.get() && query.data.get().is_none()>
                <div class="list-loading">"Loading blog posts..."</div>
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
                            <th>"Slug"</th>
                            <th>"Category"</th>
                            <th>"Published"</th>
                            <th class="sortable" on:click=move |_| state.toggle_sort("createdAt")>
                                "Created" {move || sort_marker("createdAt")}
                            </th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || rows.get().is_empty()>
                            <tr>
                                <td colspan="6" class="empty-row">"No blog posts found"</td>
                            </tr>
                        </Show>
                        <For
                            each=move || rows.get()
                            key=|b| b.id.clone()
                            children=move |blog| {
                                let edit_target = blog.clone();
                                let delete_target = blog.clone();
                                let toggle_target = blog.clone();
                                view! {
                                    <tr>
                                        <td>{blog.title.clone()}</td>
                                        <td>{blog.slug.clone()}</td>
                                        <td>
                                            {blog
                                                .category
                                                .clone()
                                                .unwrap_or_else(|| "\u{2014}".to_string())}
                                        </td>
                                        <td>
                                            <button
                                                class="toggle"
                                                class:toggle--on=blog.published
                                                title="Toggle publish"
                                                on:click=move |_| toggle_publish(toggle_target.clone())
                                            >
                                                {if blog.published { "Published" } else { "Draft" }}
                                            </button>
                                        </td>
                                        <td>{format_date(blog.created_at)}</td>
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
