use leptos::prelude::*;

use crate::layout::navigation::Navigation;
use crate::layout::Shell;
use crate::shared::api::QueryClient;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::{use_auth, AuthProvider};
use crate::system::pages::LoginPage;

#[component]
pub fn App() -> impl IntoView {
    // App-wide services, available everywhere via context.
    provide_context(QueryClient::new());
    provide_context(ToastService::new());
    provide_context(Navigation::new());

    view! {
        <AuthProvider>
            <Gate/>
            <ToastHost/>
        </AuthProvider>
    }
}

/// Everything behind the login wall.
#[component]
fn Gate() -> impl IntoView {
    let (auth, _) = use_auth();

    view! {
        <Show
            when=move || auth.with(|a| a.is_authenticated())
            fallback=|| view! { <LoginPage/> }
        >
            <Shell/>
        </Show>
    }
}
