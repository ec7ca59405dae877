//! Uploaded asset storage.
//!
//! Files land in the configured uploads directory under a uuid-prefixed
//! name, and are served read-only at `/uploads/*`. The export assembler
//! mirrors the whole directory into the archive.

use std::path::Path;

use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, Result};

/// Extensions accepted for uploaded assets.
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "svg"];

/// Maximum accepted upload size.
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// A stored upload, as returned to API clients.
#[derive(Debug, Clone, Serialize)]
pub struct StoredUpload {
    /// Name of the file inside the uploads directory.
    pub filename: String,
    /// Public URL the file is served under.
    pub url: String,
}

/// Reject path traversal and other unsafe filename shapes.
fn is_safe_filename(filename: &str) -> bool {
    !filename.is_empty()
        && !filename.contains("..")
        && !filename.contains('/')
        && !filename.contains('\\')
        && !filename.contains('\0')
}

/// Whether the filename carries an allowed extension.
fn has_allowed_extension(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let lower = ext.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.contains(&lower.as_str())
        })
}

/// Persist an uploaded file into the uploads directory.
///
/// The stored name is `{uuid}-{original}` so concurrent uploads of the same
/// filename never collide.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for unsafe names, disallowed extensions,
/// or oversized payloads, and `AppError::Internal` if the file cannot be
/// written.
pub async fn save_upload(
    uploads_dir: &Path,
    original_name: &str,
    bytes: &[u8],
) -> Result<StoredUpload> {
    if !is_safe_filename(original_name) {
        return Err(AppError::BadRequest("invalid filename".to_string()));
    }

    if !has_allowed_extension(original_name) {
        return Err(AppError::BadRequest(format!(
            "file type not allowed (expected one of: {})",
            ALLOWED_EXTENSIONS.join(", ")
        )));
    }

    if bytes.len() > MAX_FILE_SIZE {
        return Err(AppError::BadRequest(format!(
            "file too large (max {MAX_FILE_SIZE} bytes)"
        )));
    }

    tokio::fs::create_dir_all(uploads_dir)
        .await
        .map_err(|e| AppError::Internal(format!("failed to create uploads directory: {e}")))?;

    let filename = format!("{}-{original_name}", Uuid::new_v4());
    let path = uploads_dir.join(&filename);

    tokio::fs::write(&path, bytes)
        .await
        .map_err(|e| AppError::Internal(format!("failed to store upload: {e}")))?;

    Ok(StoredUpload {
        url: format!("/uploads/{filename}"),
        filename,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_filenames() {
        assert!(is_safe_filename("logo.png"));
        assert!(is_safe_filename("hero-image.2024.webp"));

        assert!(!is_safe_filename(""));
        assert!(!is_safe_filename("../../etc/passwd"));
        assert!(!is_safe_filename("dir/logo.png"));
        assert!(!is_safe_filename("dir\\logo.png"));
    }

    #[test]
    fn test_extension_allowlist() {
        assert!(has_allowed_extension("a.png"));
        assert!(has_allowed_extension("a.JPG"));
        assert!(!has_allowed_extension("a.exe"));
        assert!(!has_allowed_extension("no-extension"));
    }

    #[tokio::test]
    async fn test_save_upload_roundtrip() {
        let dir = tempfile::tempdir().unwrap();

        let stored = save_upload(dir.path(), "logo.png", b"png-bytes")
            .await
            .unwrap();

        assert!(stored.filename.ends_with("-logo.png"));
        assert_eq!(stored.url, format!("/uploads/{}", stored.filename));

        let bytes = std::fs::read(dir.path().join(&stored.filename)).unwrap();
        assert_eq!(bytes, b"png-bytes");
    }

    #[tokio::test]
    async fn test_save_upload_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let result = save_upload(dir.path(), "../escape.png", b"x").await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_save_upload_rejects_bad_extension() {
        let dir = tempfile::tempdir().unwrap();
        let result = save_upload(dir.path(), "payload.exe", b"x").await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
