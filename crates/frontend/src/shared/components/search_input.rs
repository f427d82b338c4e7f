use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const DEBOUNCE_MS: u32 = 300;

/// Debounced search box with a clear button. `on_change` fires after the
/// user stops typing; each keystroke bumps a generation counter so only
/// the latest pending value is delivered.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new(0u64);

    let handle_input = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let ticket = pending.get_value() + 1;
        pending.set_value(ticket);
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if pending.get_value() == ticket {
                on_change.run(new_value);
            }
        });
    };

    let clear = move |_| {
        set_input_value.set(String::new());
        pending.set_value(pending.get_value() + 1);
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button class="search-input__clear" on:click=clear title="Clear">
                    "\u{00d7}"
                </button>
            })}
        </div>
    }
}
