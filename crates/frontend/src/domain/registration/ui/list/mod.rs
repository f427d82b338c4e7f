pub mod state;

use contracts::domain::registration::Registration;
use contracts::domain::workshop::Workshop;
use contracts::shared::clamp_page;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::registration::api::{self, RESOURCE};
use crate::domain::workshop;
use crate::shared::api::{typed_rows, use_page_query, QueryClient};
use crate::shared::components::{scroll_to_top, PageHeader, PaginationControls};
use crate::shared::format::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use state::RegistrationListState;

#[component]
pub fn RegistrationSection() -> impl IntoView {
    let client = QueryClient::expect();
    let toasts = ToastService::expect();
    let state = RegistrationListState::new();

    let query = use_page_query(client, Signal::derive(move || state.query_key()));

    let workshops = RwSignal::new(Vec::<Workshop>::new());
    Effect::new(move |prev: Option<()>| {
        if prev.is_some() {
            return;
        }
        spawn_local(async move {
            match workshop::api::fetch_all_for_dropdown().await {
                Ok(list) => workshops.set(list),
                Err(e) => log::warn!("loading workshop options failed: {}", e),
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
            .map(|page| typed_rows::<Registration>(&page))
            .unwrap_or_default()
    });

    let delete = move |registration: Registration| {
        let name = registration.name.clone();
        toasts.confirm(
            format!("Delete registration for \"{}\"?", name),
            move || {
                let id = registration.id.clone();
                spawn_local(async move {
                    match client.mutate(RESOURCE, api::delete(&id)).await {
                        Ok(()) => toasts.success("Registration deleted"),
                        Err(e) => toasts.error(e.user_message()),
                    }
                });
            },
            move || toasts.info("Delete cancelled"),
        );
    };

    view! {
        <div class="section">
            <PageHeader title="Registrations" subtitle="Workshop sign-ups"/>

            <div class="section-toolbar">
                <select
                    class="filter-select"
                    on:change=move |ev| state.set_workshop(event_target_value(&ev))
                >
                    <option value="" selected=move || state.workshop.get().is_empty()>
                        "All workshops"
                    </option>
                    <For
                        each=move || workshops.get()
                        key=|w| w.id.clone()
                        children=move |w| {
                            let id = w.id.clone();
                            let selected_id = w.id.clone();
                            view! {
                                <option
                                    value=id
                                    selected=move || state.workshop.get() == selected_id
                                >
                                    {w.title.clone()}
                                </option>
                            }
                        }
                    />
                </select>
            </div>

            <Show when=move || query.loading.get() && query.data.get().is_none()>
                <div class="list-loading">"Loading registrations..."</div>
            </Show>

            {move || query.error.get().map(|e| view! {
                <div class="list-error">{e.user_message()}</div>
            })}

            <Show when=move || query.data.get().is_some()>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Phone"</th>
                            <th>"Workshop"</th>
                            <th>"Registered"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || rows.get().is_empty()>
                            <tr>
                                <td colspan="6" class="empty-row">"No registrations found"</td>
                            </tr>
                        </Show>
                        <For
                            each=move || rows.get()
                            key=|r| r.id.clone()
                            children=move |registration| {
                                let delete_target = registration.clone();
                                let workshop_title = registration
                                    .workshop
                                    .name()
                                    .unwrap_or("\u{2014}")
                                    .to_string();
                                view! {
                                    <tr>
                                        <td>{registration.name.clone()}</td>
                                        <td>{registration.email.clone()}</td>
                                        <td>
                                            {registration
                                                .phone
                                                .clone()
                                                .unwrap_or_else(|| "\u{2014}".to_string())}
                                        </td>
                                        <td>{workshop_title}</td>
                                        <td>{format_timestamp(registration.created_at)}</td>
                                        <td class="row-actions">
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
