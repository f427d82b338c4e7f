use contracts::system::auth::AdminUser;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<AdminUser>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Auth context provider component. Restores the session from localStorage
/// on mount so a page reload keeps the admin signed in.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    if let Some(token) = storage::get_token() {
        set_auth_state.set(AuthState {
            token: Some(token),
            user: storage::get_profile(),
        });
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Establish a session after a successful login.
pub fn complete_login(set_auth_state: WriteSignal<AuthState>, token: String, user: AdminUser) {
    storage::save_token(&token);
    storage::save_profile(&user);
    set_auth_state.set(AuthState {
        token: Some(token),
        user: Some(user),
    });
}

/// Drop the session and clear persisted credentials.
pub fn logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}
