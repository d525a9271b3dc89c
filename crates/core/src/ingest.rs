use std::path::Path;

use base64::{Engine as _, engine::general_purpose};
use tokio::fs;

use crate::error::{AuditError, Result};

/// Maximum upload size accepted for inline analysis (100 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 100 * 1024 * 1024;

/// A video ready for transmission: base64 text plus its MIME type.
#[derive(Debug, Clone)]
pub struct EncodedPayload {
    pub data: String,
    pub mime_type: String,
}

/// Map a video file extension to its MIME type.
pub fn detect_mime_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "mp4" | "m4v" => Some("video/mp4"),
        "webm" => Some("video/webm"),
        "mkv" => Some("video/x-matroska"),
        "mov" => Some("video/quicktime"),
        "avi" => Some("video/x-msvideo"),
        _ => None,
    }
}

/// Validate a video file against the size and type constraints and encode it
/// for transmission. The size check uses metadata only, so an oversized file
/// is rejected without reading its body.
pub async fn ingest(path: &Path) -> Result<EncodedPayload> {
    let metadata = fs::metadata(path).await?;
    if metadata.len() > MAX_UPLOAD_BYTES {
        return Err(AuditError::SizeExceeded {
            size: metadata.len(),
            limit: MAX_UPLOAD_BYTES,
        });
    }

    let mime_type = detect_mime_type(path).ok_or_else(|| AuditError::UnsupportedType {
        found: path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unknown".to_string()),
    })?;

    let bytes = fs::read(path).await?;
    Ok(EncodedPayload {
        data: general_purpose::STANDARD.encode(&bytes),
        mime_type: mime_type.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use base64::{Engine as _, engine::general_purpose};

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("adaudit-ingest-{}-{}", std::process::id(), name))
    }

    #[test]
    fn detects_common_video_extensions() {
        assert_eq!(detect_mime_type(Path::new("ad.mp4")), Some("video/mp4"));
        assert_eq!(detect_mime_type(Path::new("ad.MOV")), Some("video/quicktime"));
        assert_eq!(detect_mime_type(Path::new("ad.webm")), Some("video/webm"));
        assert_eq!(detect_mime_type(Path::new("ad.gif")), None);
        assert_eq!(detect_mime_type(Path::new("ad")), None);
    }

    #[tokio::test]
    async fn encodes_file_bytes_with_mime_type() {
        let path = temp_path("small.mp4");
        std::fs::write(&path, b"fake video bytes").unwrap();

        let payload = ingest(&path).await.unwrap();
        assert_eq!(payload.mime_type, "video/mp4");
        assert_eq!(payload.data, general_purpose::STANDARD.encode(b"fake video bytes"));

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn rejects_oversized_file_without_reading_it() {
        let path = temp_path("oversized.mp4");
        // Sparse file: instant to create, never read because the metadata
        // check fires first.
        let file = std::fs::File::create(&path).unwrap();
        file.set_len(MAX_UPLOAD_BYTES + 1).unwrap();

        let err = ingest(&path).await.unwrap_err();
        assert!(matches!(
            err,
            AuditError::SizeExceeded { size, limit }
                if size == MAX_UPLOAD_BYTES + 1 && limit == MAX_UPLOAD_BYTES
        ));

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn rejects_non_video_extension() {
        let path = temp_path("notes.txt");
        std::fs::write(&path, b"plain text").unwrap();

        let err = ingest(&path).await.unwrap_err();
        assert!(matches!(err, AuditError::UnsupportedType { found } if found == "txt"));

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let err = ingest(Path::new("/nonexistent/ad.mp4")).await.unwrap_err();
        assert!(matches!(err, AuditError::Io(_)));
    }
}
