pub mod state;

use contracts::domain::category::Category;
use contracts::domain::product::Product;
use contracts::shared::clamp_page;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::category;
use crate::domain::product::api::{self, RESOURCE};
use crate::domain::product::ui::details::ProductForm;
use crate::shared::api::{typed_rows, use_page_query, QueryClient};
use crate::shared::components::{scroll_to_top, PageHeader, PaginationControls, SearchInput};
use crate::shared::format::format_price;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use state::ProductListState;

#[derive(Clone, PartialEq)]
enum Editor {
    Closed,
    Create,
    Edit(Product),
}

#[component]
pub fn ProductSection() -> impl IntoView {
    let client = QueryClient::expect();
    let toasts = ToastService::expect();
    let state = ProductListState::new();
    let editor = RwSignal::new(Editor::Closed);

    let query = use_page_query(client, Signal::derive(move || state.query_key()));

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
            .map(|page| typed_rows::<Product>(&page))
            .unwrap_or_default()
    });

    let delete = move |product: Product| {
        let name = product.name.clone();
        toasts.confirm(
            format!("Delete product \"{}\"?", name),
            move || {
                let id = product.id.clone();
                spawn_local(async move {
                    match client.mutate(RESOURCE, api::delete(&id)).await {
                        Ok(()) => toasts.success("Product deleted"),
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
            <PageHeader title="Products" subtitle="Catalog items">
                <button class="btn-primary" on:click=move |_| editor.set(Editor::Create)>
                    {icon("plus")}
                    " Add Product"
                </button>
            </PageHeader>

            <div class="section-toolbar">
                <SearchInput
                    value=state.search
                    on_change=Callback::new(move |v| state.set_search(v))
                    placeholder="Search products..."
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
                    <ProductForm
                        existing=None
                        on_close=Callback::new(move |_| editor.set(Editor::Closed))
                    />
                }
                .into_any(),
                Editor::Edit(product) => view! {
                    <ProductForm
                        existing=Some(product)
                        on_close=Callback::new(move |_| editor.set(Editor::Closed))
                    />
                }
                .into_any(),
            }}

            <Show when=move || query.loading.get() && query.data.get().is_none()>
                <div class="list-loading">"Loading products..."</div>
            </Show>

            {move || query.error.get().map(|e| view! {
                <div class="list-error">{e.user_message()}</div>
            })}

            <Show when=move || query.data.get().is_some()>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Image"</th>
                            <th class="sortable" on:click=move |_| state.toggle_sort("name")>
                                "Name" {move || sort_marker("name")}
                            </th>
                            <th>"Category"</th>
                            <th class="sortable" on:click=move |_| state.toggle_sort("price")>
                                "Price" {move || sort_marker("price")}
                            </th>
                            <th class="sortable" on:click=move |_| state.toggle_sort("quantity")>
                                "Stock" {move || sort_marker("quantity")}
                            </th>
                            <th>"Variants"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || rows.get().is_empty()>
                            <tr>
                                <td colspan="7" class="empty-row">"No products found"</td>
                            </tr>
                        </Show>
                        <For
                            each=move || rows.get()
                            key=|p| p.id.clone()
                            children=move |product| {
                                let edit_target = product.clone();
                                let delete_target = product.clone();
                                let category_name = product
                                    .category
                                    .name()
                                    .unwrap_or("\u{2014}")
                                    .to_string();
                                let first_image = product.images.first().cloned();
                                view! {
                                    <tr>
                                        <td>
                                            {first_image.map(|url| view! {
                                                <img
                                                    class="thumb"
                                                    src=url
                                                    alt=product.name.clone()
                                                />
                                            })}
                                        </td>
                                        <td>{product.name.clone()}</td>
                                        <td>{category_name}</td>
                                        <td>{format_price(product.price)}</td>
                                        <td>{product.quantity}</td>
                                        <td>{product.options.len()}</td>
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
