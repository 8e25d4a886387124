//! Image upload storage.
//!
//! Uploaded files are written under `<upload_root>/<kind>/` with a
//! timestamp-plus-random filename and served back as public URLs. The
//! random suffix is the only mitigation against concurrent writes of the
//! same name; there is no locking.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Maximum accepted file size: 5 MiB.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// MIME types accepted for upload, with their canonical extension.
const ALLOWED_TYPES: &[(&str, &str)] = &[
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/gif", "gif"),
    ("image/webp", "webp"),
    ("image/svg+xml", "svg"),
];

/// Upload destination category, determining the target subdirectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadKind {
    Logo,
    Favicon,
    Blog,
    Content,
}

impl UploadKind {
    /// Subdirectory name for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Logo => "logo",
            Self::Favicon => "favicon",
            Self::Blog => "blog",
            Self::Content => "content",
        }
    }
}

impl std::fmt::Display for UploadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UploadKind {
    type Err = UploadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "logo" => Ok(Self::Logo),
            "favicon" => Ok(Self::Favicon),
            "blog" => Ok(Self::Blog),
            "content" => Ok(Self::Content),
            _ => Err(UploadError::InvalidKind(s.to_string())),
        }
    }
}

/// Errors from upload storage.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("invalid upload type: {0}")]
    InvalidKind(String),

    #[error("unsupported file type: {0}")]
    UnsupportedMime(String),

    #[error("file too large: {0} bytes (max {MAX_UPLOAD_BYTES})")]
    TooLarge(usize),

    #[error("invalid filename")]
    InvalidFilename,

    #[error("file not found")]
    NotFound,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A stored upload, as reported back to the admin UI.
#[derive(Debug, Clone, Serialize)]
pub struct StoredUpload {
    pub url: String,
    pub filename: String,
    #[serde(rename = "type")]
    pub kind: UploadKind,
    pub size: usize,
}

/// Writes and deletes uploaded files under a type-keyed directory tree.
#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    /// Create a store rooted at the configured upload directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Validate and persist one uploaded file.
    ///
    /// # Errors
    ///
    /// Returns `UploadError::UnsupportedMime` for content types outside the
    /// allow-list, `UploadError::TooLarge` past the 5 MiB cap, and
    /// `UploadError::Io` if the write fails.
    pub async fn store(
        &self,
        kind: UploadKind,
        content_type: &str,
        data: &[u8],
    ) -> Result<StoredUpload, UploadError> {
        let ext = extension_for(content_type)
            .ok_or_else(|| UploadError::UnsupportedMime(content_type.to_string()))?;

        if data.len() > MAX_UPLOAD_BYTES {
            return Err(UploadError::TooLarge(data.len()));
        }

        let filename = generate_filename(ext);
        let dir = self.root.join(kind.as_str());
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(&filename), data).await?;

        tracing::info!(kind = %kind, filename = %filename, size = data.len(), "File uploaded");

        Ok(StoredUpload {
            url: format!("/uploads/{kind}/{filename}"),
            filename,
            kind,
            size: data.len(),
        })
    }

    /// Delete a stored file by kind and filename.
    ///
    /// # Errors
    ///
    /// Returns `UploadError::InvalidFilename` if the name would escape the
    /// upload directory, `UploadError::NotFound` if no such file exists,
    /// and `UploadError::Io` for other filesystem failures.
    pub async fn delete(&self, kind: UploadKind, filename: &str) -> Result<(), UploadError> {
        if !is_safe_filename(filename) {
            return Err(UploadError::InvalidFilename);
        }

        let path = self.root.join(kind.as_str()).join(filename);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(UploadError::NotFound),
            Err(e) => Err(UploadError::Io(e)),
        }
    }

    /// Root directory served at `/uploads`.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Canonical extension for an allowed MIME type.
fn extension_for(content_type: &str) -> Option<&'static str> {
    ALLOWED_TYPES
        .iter()
        .find(|(mime, _)| *mime == content_type)
        .map(|(_, ext)| *ext)
}

/// Timestamp plus random suffix. Collisions are improbable, not impossible.
fn generate_filename(ext: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = Uuid::new_v4().simple().to_string();
    let short = suffix.get(..8).unwrap_or(&suffix);
    format!("{millis}-{short}.{ext}")
}

/// Reject names that could traverse out of the upload directory.
fn is_safe_filename(filename: &str) -> bool {
    !filename.is_empty()
        && !filename.contains('/')
        && !filename.contains('\\')
        && !filename.contains("..")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_for_allowed_types() {
        assert_eq!(extension_for("image/png"), Some("png"));
        assert_eq!(extension_for("image/svg+xml"), Some("svg"));
        assert_eq!(extension_for("application/pdf"), None);
        assert_eq!(extension_for("text/html"), None);
    }

    #[test]
    fn test_upload_kind_parsing() {
        assert_eq!("logo".parse::<UploadKind>().ok(), Some(UploadKind::Logo));
        assert_eq!("blog".parse::<UploadKind>().ok(), Some(UploadKind::Blog));
        assert!("video".parse::<UploadKind>().is_err());
    }

    #[test]
    fn test_safe_filename() {
        assert!(is_safe_filename("1700000000000-abcd1234.png"));
        assert!(!is_safe_filename("../secrets.txt"));
        assert!(!is_safe_filename("a/b.png"));
        assert!(!is_safe_filename(""));
    }

    #[test]
    fn test_generated_filenames_are_unique() {
        let a = generate_filename("png");
        let b = generate_filename("png");
        assert_ne!(a, b);
        assert!(a.ends_with(".png"));
    }

    #[tokio::test]
    async fn test_store_rejects_oversized_file() {
        let store = UploadStore::new(std::env::temp_dir().join("ironvale-test-uploads"));
        let data = vec![0_u8; MAX_UPLOAD_BYTES + 1];
        let result = store.store(UploadKind::Blog, "image/png", &data).await;
        assert!(matches!(result, Err(UploadError::TooLarge(_))));
    }

    #[tokio::test]
    async fn test_store_and_delete_roundtrip() {
        let store = UploadStore::new(std::env::temp_dir().join("ironvale-test-uploads"));
        let stored = store
            .store(UploadKind::Content, "image/png", b"not-really-a-png")
            .await
            .expect("store");

        assert!(stored.url.starts_with("/uploads/content/"));
        assert_eq!(stored.size, 16);

        store
            .delete(UploadKind::Content, &stored.filename)
            .await
            .expect("delete");

        assert!(matches!(
            store.delete(UploadKind::Content, &stored.filename).await,
            Err(UploadError::NotFound)
        ));
    }
}
