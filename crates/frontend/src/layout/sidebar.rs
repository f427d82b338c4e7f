use leptos::prelude::*;

use crate::layout::navigation::{Navigation, Section};
use crate::shared::icons::icon;

#[component]
pub fn Sidebar() -> impl IntoView {
    let nav = Navigation::expect();

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <h2>"Admin"</h2>
            </div>
            <nav class="sidebar-menu">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <button
                                class="sidebar-item"
                                class:sidebar-item--active=move || nav.active.get() == section
                                on:click=move |_| nav.go_to(section)
                            >
                                <span class="sidebar-item__icon">{icon(section.icon_name())}</span>
                                <span class="sidebar-item__label">{section.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
