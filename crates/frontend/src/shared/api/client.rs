//! Typed REST adapter: one resource operation per call, responses
//! normalized into the shared page envelope. No retries happen here;
//! the query cache decides whether a read is retried.

use contracts::shared::{ListQuery, PageEnvelope, RawListResponse};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::error::ApiError;
use crate::system::auth::storage;

/// The backend has no unpaginated reference endpoint, so dropdown
/// population (categories in the product form, workshops in the
/// registration filter) asks for one oversized page. Backend-contract
/// wart; keep every such call on this constant.
pub const DROPDOWN_FETCH_LIMIT: u64 = 1000;

/// API base derived from the current window location; the backend
/// listens on port 5000 next to wherever the admin bundle is served.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:5000/api", protocol, hostname)
}

/// Path + query string for a list request, without the host part.
pub fn list_path(resource: &str, query: &ListQuery) -> String {
    let mut path = format!(
        "/{}?page={}&limit={}",
        resource, query.page, query.limit
    );
    if let Some(sort) = &query.sort {
        path.push_str("&sort=");
        path.push_str(&urlencoding::encode(&sort.to_string()));
    }
    for (key, value) in &query.filters {
        path.push('&');
        path.push_str(key);
        path.push('=');
        path.push_str(&urlencoding::encode(value));
    }
    path
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn error_from_response(resp: Response) -> ApiError {
    let status = resp.status();
    let message = resp
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| {
            body.get("message")
                .or_else(|| body.get("error"))
                .and_then(Value::as_str)
                .map(str::to_owned)
        });
    match status {
        400 | 422 => ApiError::Validation(
            message.unwrap_or_else(|| "The server rejected the submitted data.".to_string()),
        ),
        _ => ApiError::Server { status, message },
    }
}

/// Some endpoints wrap the record in `{success, data}`, others return it
/// bare. Unwrap once, at the adapter boundary.
pub fn unwrap_data(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(unwrap_data(value))
        .map_err(|e| ApiError::Network(format!("unexpected response shape: {}", e)))
}

/// `GET /{resource}?page&limit&sort&<filters>`, normalized.
pub async fn list(resource: &str, query: &ListQuery) -> Result<PageEnvelope<Value>, ApiError> {
    let url = format!("{}{}", api_base(), list_path(resource, query));
    let resp = with_auth(Request::get(&url))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(error_from_response(resp).await);
    }
    let raw: RawListResponse<Value> = resp
        .json()
        .await
        .map_err(|e| ApiError::Network(format!("unexpected response shape: {}", e)))?;
    Ok(raw.normalize(query.limit))
}

/// Typed list; the per-resource API modules use this for dropdown loads.
pub async fn list_typed<T: DeserializeOwned>(
    resource: &str,
    query: &ListQuery,
) -> Result<PageEnvelope<T>, ApiError> {
    list(resource, query)
        .await?
        .try_map(serde_json::from_value)
        .map_err(|e| ApiError::Network(format!("unexpected response shape: {}", e)))
}

pub async fn get_by_id<T: DeserializeOwned>(resource: &str, id: &str) -> Result<T, ApiError> {
    let url = format!("{}/{}/{}", api_base(), resource, id);
    let resp = with_auth(Request::get(&url))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if resp.status() == 404 {
        return Err(ApiError::NotFound);
    }
    if !resp.ok() {
        return Err(error_from_response(resp).await);
    }
    let body: Value = resp
        .json()
        .await
        .map_err(|e| ApiError::Network(format!("unexpected response shape: {}", e)))?;
    decode(body)
}

pub async fn create<T: DeserializeOwned, B: Serialize>(
    resource: &str,
    payload: &B,
) -> Result<T, ApiError> {
    let url = format!("{}/{}", api_base(), resource);
    let resp = with_auth(Request::post(&url))
        .json(payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(error_from_response(resp).await);
    }
    let body: Value = resp
        .json()
        .await
        .map_err(|e| ApiError::Network(format!("unexpected response shape: {}", e)))?;
    decode(body)
}

pub async fn update<T: DeserializeOwned, B: Serialize>(
    resource: &str,
    id: &str,
    payload: &B,
) -> Result<T, ApiError> {
    let url = format!("{}/{}/{}", api_base(), resource, id);
    let resp = with_auth(Request::patch(&url))
        .json(payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if resp.status() == 404 {
        return Err(ApiError::NotFound);
    }
    if !resp.ok() {
        return Err(error_from_response(resp).await);
    }
    let body: Value = resp
        .json()
        .await
        .map_err(|e| ApiError::Network(format!("unexpected response shape: {}", e)))?;
    decode(body)
}

pub async fn delete(resource: &str, id: &str) -> Result<(), ApiError> {
    let url = format!("{}/{}/{}", api_base(), resource, id);
    let resp = with_auth(Request::delete(&url))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(error_from_response(resp).await);
    }
    Ok(())
}

/// Resource-specific toggle endpoints, e.g.
/// `PATCH /reels/{id}/toggle-visibility`. Empty body; the server flips
/// the flag and returns the canonical record.
pub async fn toggle<T: DeserializeOwned>(
    resource: &str,
    id: &str,
    action: &str,
) -> Result<T, ApiError> {
    let url = format!("{}/{}/{}/{}", api_base(), resource, id, action);
    let resp = with_auth(Request::patch(&url))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(error_from_response(resp).await);
    }
    let body: Value = resp
        .json()
        .await
        .map_err(|e| ApiError::Network(format!("unexpected response shape: {}", e)))?;
    decode(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::SortSpec;

    #[test]
    fn test_list_path_includes_sort_and_filters() {
        let q = ListQuery::new(2, 10)
            .with_sort(SortSpec::newest_first())
            .with_filter("status", "Pending")
            .with_filter("search", "raw silk");
        assert_eq!(
            list_path("inquiries", &q),
            "/inquiries?page=2&limit=10&sort=-createdAt&search=raw%20silk&status=Pending"
        );
    }

    #[test]
    fn test_list_path_omits_blank_filters() {
        let q = ListQuery::new(1, 10).with_filter("category", "");
        assert_eq!(list_path("products", &q), "/products?page=1&limit=10");
    }

    #[test]
    fn test_unwrap_data_both_shapes() {
        let wrapped = serde_json::json!({ "success": true, "data": { "name": "x" } });
        assert_eq!(unwrap_data(wrapped), serde_json::json!({ "name": "x" }));

        let bare = serde_json::json!({ "name": "x" });
        assert_eq!(unwrap_data(bare.clone()), bare);
    }
}
