use contracts::system::auth::AdminUser;
use web_sys::window;

const TOKEN_KEY: &str = "token";
const PROFILE_KEY: &str = "auth-storage";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save session token to localStorage
pub fn save_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Get session token from localStorage
pub fn get_token() -> Option<String> {
    get_local_storage()?.get_item(TOKEN_KEY).ok()?
}

/// Save admin profile alongside the token so a reload restores the header
/// without another round trip.
pub fn save_profile(user: &AdminUser) {
    if let (Some(storage), Ok(json)) = (get_local_storage(), serde_json::to_string(user)) {
        let _ = storage.set_item(PROFILE_KEY, &json);
    }
}

/// Get admin profile from localStorage
pub fn get_profile() -> Option<AdminUser> {
    let json = get_local_storage()?.get_item(PROFILE_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

/// Clear the persisted session
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(PROFILE_KEY);
    }
}
