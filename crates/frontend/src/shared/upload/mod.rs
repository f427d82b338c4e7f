//! Cloudinary upload adapter. One multipart POST per file; multi-file
//! fields upload sequentially and the first failure aborts the batch,
//! so a form never mutates a resource after a partial upload.

pub mod widget;

use gloo_net::http::Request;
use serde::Deserialize;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::shared::api::ApiError;

const CLOUD_NAME_KEY: &str = "cloudinary_cloud_name";
const UPLOAD_PRESET_KEY: &str = "cloudinary_upload_preset";

#[derive(Debug, Clone, PartialEq)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub upload_preset: String,
}

impl CloudinaryConfig {
    /// Build-time values, overridable per browser through localStorage
    /// (lets staging point at a different media account without a
    /// rebuild).
    pub fn resolve() -> Result<Self, ApiError> {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        let read = |key: &str| {
            storage
                .as_ref()
                .and_then(|s| s.get_item(key).ok().flatten())
        };
        let cloud_name = read(CLOUD_NAME_KEY)
            .or_else(|| option_env!("CLOUDINARY_CLOUD_NAME").map(str::to_owned));
        let upload_preset = read(UPLOAD_PRESET_KEY)
            .or_else(|| option_env!("CLOUDINARY_UPLOAD_PRESET").map(str::to_owned));
        match (cloud_name, upload_preset) {
            (Some(cloud_name), Some(upload_preset)) => Ok(Self {
                cloud_name,
                upload_preset,
            }),
            _ => Err(ApiError::Upload(
                "Cloudinary cloud name / upload preset not configured".to_string(),
            )),
        }
    }

    pub fn upload_url(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name
        )
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

/// Upload a single file, returning its secure URL.
pub async fn upload_file(config: &CloudinaryConfig, file: &File) -> Result<String, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Upload(format!("{:?}", e)))?;
    form.append_with_blob("file", file)
        .map_err(|e| ApiError::Upload(format!("{:?}", e)))?;
    form.append_with_str("upload_preset", &config.upload_preset)
        .map_err(|e| ApiError::Upload(format!("{:?}", e)))?;

    let resp = Request::post(&config.upload_url())
        .body(JsValue::from(form))
        .map_err(|e| ApiError::Upload(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Upload(e.to_string()))?;
    if !resp.ok() {
        let detail = resp.text().await.unwrap_or_default();
        return Err(ApiError::Upload(format!(
            "HTTP {}: {}",
            resp.status(),
            detail
        )));
    }
    let body: UploadResponse = resp
        .json()
        .await
        .map_err(|e| ApiError::Upload(e.to_string()))?;
    Ok(body.secure_url)
}

/// Sequential batch upload; `?` aborts on the first failure.
pub async fn upload_all(
    config: &CloudinaryConfig,
    files: &[File],
) -> Result<Vec<String>, ApiError> {
    let mut urls = Vec::with_capacity(files.len());
    for file in files {
        urls.push(upload_file(config, file).await?);
    }
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_url_embeds_cloud_name() {
        let config = CloudinaryConfig {
            cloud_name: "demo-cloud".to_string(),
            upload_preset: "unsigned".to_string(),
        };
        assert_eq!(
            config.upload_url(),
            "https://api.cloudinary.com/v1_1/demo-cloud/image/upload"
        );
    }
}
