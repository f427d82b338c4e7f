use leptos::prelude::*;

use crate::layout::navigation::Navigation;
use crate::shared::icons::icon;
use crate::system::auth::context::{logout, use_auth};

#[component]
pub fn Header() -> impl IntoView {
    let nav = Navigation::expect();
    let (auth_state, set_auth_state) = use_auth();

    let user_name = move || {
        auth_state
            .get()
            .user
            .map(|u| u.name)
            .unwrap_or_else(|| "Admin".to_string())
    };
    let avatar = move || auth_state.get().user.and_then(|u| u.avatar);

    view! {
        <header class="top-header">
            <h1 class="top-header__title">{move || nav.active.get().label()}</h1>
            <div class="top-header__user">
                {move || avatar().map(|url| view! {
                    <img class="top-header__avatar" src=url alt="avatar"/>
                })}
                <span class="top-header__name">{user_name}</span>
                <button
                    class="btn-secondary"
                    on:click=move |_| logout(set_auth_state)
                >
                    {icon("log-out")}
                    " Logout"
                </button>
            </div>
        </header>
    }
}
