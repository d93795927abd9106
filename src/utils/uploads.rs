//! Local storage for multipart uploads.
//!
//! Lesson and blog media land in a shared directory and are served back
//! under `/uploads`. Only images and MP3 audio are accepted, capped at
//! 20 MB per file. Stored names are prefixed with the upload timestamp in
//! milliseconds, which keeps collisions to same-millisecond uploads of the
//! same original name.

use std::path::Path;

use chrono::Utc;
use tokio::fs;

use crate::utils::errors::AppError;

/// Per-file upload cap (20 MB).
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// URL prefix under which stored files are served.
pub const PUBLIC_PREFIX: &str = "/uploads";

/// Rejects anything that is not an image or MP3 audio.
pub fn validate_content_type(content_type: &str) -> Result<(), AppError> {
    if content_type.starts_with("image/") || content_type == "audio/mpeg" {
        Ok(())
    } else {
        Err(AppError::bad_request(anyhow::anyhow!(
            "Invalid file type: {}",
            content_type
        )))
    }
}

/// Derives the on-disk name for an upload: `<millis>-<sanitized original>`.
pub fn storage_filename(original: &str) -> String {
    let sanitized: String = original
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let sanitized = if sanitized.is_empty() {
        "file".to_string()
    } else {
        sanitized
    };

    format!("{}-{}", Utc::now().timestamp_millis(), sanitized)
}

/// Validates and persists one uploaded file, returning its public path.
pub async fn save_upload(
    dir: &Path,
    original_name: &str,
    content_type: &str,
    data: &[u8],
) -> Result<String, AppError> {
    validate_content_type(content_type)?;

    if data.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::new(
            axum::http::StatusCode::PAYLOAD_TOO_LARGE,
            anyhow::anyhow!("File exceeds maximum size of {} bytes", MAX_UPLOAD_BYTES),
        ));
    }

    fs::create_dir_all(dir)
        .await
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create uploads dir: {}", e)))?;

    let filename = storage_filename(original_name);
    let path = dir.join(&filename);

    fs::write(&path, data)
        .await
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to store upload: {}", e)))?;

    Ok(format!("{}/{}", PUBLIC_PREFIX, filename))
}
