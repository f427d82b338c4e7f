pub mod state;

use contracts::domain::inquiry::{BuyOption, Inquiry, InquiryStatus};
use contracts::shared::clamp_page;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::inquiry::api::{self, RESOURCE};
use crate::shared::api::{typed_rows, use_page_query, QueryClient};
use crate::shared::components::{scroll_to_top, PageHeader, PaginationControls, SearchInput};
use crate::shared::format::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use state::InquiryListState;

#[component]
pub fn InquirySection() -> impl IntoView {
    let client = QueryClient::expect();
    let toasts = ToastService::expect();
    let state = InquiryListState::new();
    let expanded = RwSignal::new(Option::<String>::None);

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
            .map(|page| typed_rows::<Inquiry>(&page))
            .unwrap_or_default()
    });

    let change_status = move |id: String, value: String| {
        let Some(status) = InquiryStatus::parse(&value) else {
            return;
        };
        spawn_local(async move {
            match client.mutate(RESOURCE, api::set_status(&id, status)).await {
                Ok(_) => toasts.success(format!("Inquiry marked {}", status.as_str())),
                Err(e) => toasts.error(e.user_message()),
            }
        });
    };

    let delete = move |inquiry: Inquiry| {
        let from = inquiry.user_name.clone();
        toasts.confirm(
            format!("Delete inquiry from \"{}\"?", from),
            move || {
                let id = inquiry.id.clone();
                spawn_local(async move {
                    match client.mutate(RESOURCE, api::delete(&id)).await {
                        Ok(()) => toasts.success("Inquiry deleted"),
                        Err(e) => toasts.error(e.user_message()),
                    }
                });
            },
            move || toasts.info("Delete cancelled"),
        );
    };

    view! {
        <div class="section">
            <PageHeader title="Inquiries" subtitle="Product questions from the storefront"/>

            <div class="section-toolbar">
                <SearchInput
                    value=state.search
                    on_change=Callback::new(move |v| state.set_search(v))
                    placeholder="Search inquiries..."
                />
                <select
                    class="filter-select"
                    on:change=move |ev| state.set_status(event_target_value(&ev))
                >
                    <option value="" selected=move || state.status.get().is_empty()>
                        "All statuses"
                    </option>
                    {InquiryStatus::ALL
                        .into_iter()
                        .map(|status| {
                            view! {
                                <option
                                    value=status.as_str()
                                    selected=move || state.status.get() == status.as_str()
                                >
                                    {status.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <select
                    class="filter-select"
                    on:change=move |ev| state.set_buy_option(event_target_value(&ev))
                >
                    <option value="" selected=move || state.buy_option.get().is_empty()>
                        "All buy options"
                    </option>
                    {BuyOption::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <option
                                    value=option.as_str()
                                    selected=move || state.buy_option.get() == option.as_str()
                                >
                                    {option.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <Show when=move || query.loading.get() && query.data.get().is_none()>
                <div class="list-loading">"Loading inquiries..."</div>
            </Show>

            {move || query.error.get().map(|e| view! {
                <div class="list-error">{e.user_message()}</div>
            })}

            <Show when=move || query.data.get().is_some()>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"From"</th>
                            <th>"Product"</th>
                            <th>"Buy option"</th>
                            <th>"Qty"</th>
                            <th>"Status"</th>
                            <th>"Received"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || rows.get().is_empty()>
                            <tr>
                                <td colspan="7" class="empty-row">"No inquiries found"</td>
                            </tr>
                        </Show>
                        <For
                            each=move || rows.get()
                            key=|i| i.id.clone()
                            children=move |inquiry| {
                                let delete_target = inquiry.clone();
                                let detail = inquiry.clone();
                                let status_id = inquiry.id.clone();
                                let row_id = inquiry.id.clone();
                                let toggle_id = inquiry.id.clone();
                                let is_expanded =
                                    move || expanded.get().as_deref() == Some(row_id.as_str());
                                view! {
                                    <tr>
                                        <td>
                                            <div>{inquiry.user_name.clone()}</div>
                                            <div class="cell-sub">{inquiry.user_email.clone()}</div>
                                        </td>
                                        <td>{inquiry.product_name.clone()}</td>
                                        <td>{inquiry.buy_option.as_str()}</td>
                                        <td>{inquiry.quantity}</td>
                                        <td>
                                            <select
                                                class="status-select"
                                                on:change=move |ev| {
                                                    change_status(
                                                        status_id.clone(),
                                                        event_target_value(&ev),
                                                    )
                                                }
                                            >
                                                {InquiryStatus::ALL
                                                    .into_iter()
                                                    .map(|status| {
                                                        view! {
                                                            <option
                                                                value=status.as_str()
                                                                selected=inquiry.status == status
                                                            >
                                                                {status.as_str()}
                                                            </option>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </select>
                                        </td>
                                        <td>{format_timestamp(inquiry.created_at)}</td>
                                        <td class="row-actions">
                                            <button
                                                class="btn-icon"
                                                title="Details"
                                                on:click=move |_| {
                                                    let id = toggle_id.clone();
                                                    expanded.update(|current| {
                                                        if current.as_deref() == Some(id.as_str()) {
                                                            *current = None;
                                                        } else {
                                                            *current = Some(id);
                                                        }
                                                    })
                                                }
                                            >
                                                {icon("mail")}
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
                                    <Show when=is_expanded>
                                        <tr class="detail-row">
                                            <td colspan="7">
                                                <InquiryDetails inquiry=detail.clone()/>
                                            </td>
                                        </tr>
                                    </Show>
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

#[component]
fn InquiryDetails(inquiry: Inquiry) -> impl IntoView {
    let dash = || "\u{2014}".to_string();
    view! {
        <dl class="inquiry-details">
            <dt>"WhatsApp"</dt>
            <dd>{inquiry.whatsapp_number.clone().unwrap_or_else(dash)}</dd>
            <dt>"Location"</dt>
            <dd>{if inquiry.location.is_empty() { dash() } else { inquiry.location.clone() }}</dd>
            <dt>"Company"</dt>
            <dd>{inquiry.company_name.clone().unwrap_or_else(dash)}</dd>
            <dt>"Variant"</dt>
            <dd>{inquiry.variant.clone().unwrap_or_else(dash)}</dd>
            <dt>"Message"</dt>
            <dd>{inquiry.message.clone().unwrap_or_else(dash)}</dd>
            {(!inquiry.product_image.is_empty()).then(|| view! {
                <dt>"Product"</dt>
                <dd>
                    <img class="thumb" src=inquiry.product_image.clone() alt="product"/>
                </dd>
            })}
        </dl>
    }
}
