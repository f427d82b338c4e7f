use contracts::shared::clamp_page;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Reusable pagination strip for list screens. Pages are 1-indexed;
/// every requested page is clamped into `[1, total_pages]` before the
/// callback fires, so an out-of-range request never leaves the client.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<u64>,
    #[prop(into)] total_pages: Signal<u64>,
    #[prop(into)] total_count: Signal<u64>,
    on_page_change: Callback<u64>,
) -> impl IntoView {
    let go = move |requested: u64| {
        let clamped = clamp_page(requested, total_pages.get());
        if clamped != current_page.get() {
            on_page_change.run(clamped);
        }
    };

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| go(1)
                disabled=move || current_page.get() <= 1
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go(current_page.get().saturating_sub(1))
                disabled=move || current_page.get() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    format!(
                        "{} / {} ({})",
                        current_page.get(),
                        total_pages.get().max(1),
                        total_count.get()
                    )
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| go(current_page.get() + 1)
                disabled=move || current_page.get() >= total_pages.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go(total_pages.get())
                disabled=move || current_page.get() >= total_pages.get()
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}

/// Scroll the viewport back to the top; page changes call this so the
/// new page starts at its first row.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
