//! Document encoding: uploaded file bytes → base64 text plus media type.
//!
//! The analysis service receives documents inline inside a JSON request body,
//! so content is carried as standard (padded) base64.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::debug;

pub const PDF: &str = "application/pdf";
pub const DOC: &str = "application/msword";
pub const DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const PLAIN_TEXT: &str = "text/plain";

/// Media type assumed when the declared one is empty or unknown.
pub const DEFAULT_MEDIA_TYPE: &str = DOCX;

/// Media types the analysis service is asked to read.
pub const ACCEPTED_MEDIA_TYPES: &[&str] = &[PDF, DOC, DOCX, PLAIN_TEXT];

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("failed to read {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid base64 content in {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: base64::DecodeError,
    },
}

/// A user-supplied document in transport-safe form. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedDocument {
    pub name: String,
    /// Base64 of the original bytes.
    pub content: String,
    pub media_type: String,
}

impl EncodedDocument {
    pub fn from_bytes(name: impl Into<String>, media_type: &str, bytes: &[u8]) -> Self {
        Self {
            name: name.into(),
            content: STANDARD.encode(bytes),
            media_type: normalize_media_type(media_type).to_string(),
        }
    }

    /// Recover the original bytes.
    pub fn decode(&self) -> Result<Vec<u8>, EncodeError> {
        STANDARD
            .decode(&self.content)
            .map_err(|source| EncodeError::Decode {
                name: self.name.clone(),
                source,
            })
    }

    pub fn is_accepted_type(&self) -> bool {
        ACCEPTED_MEDIA_TYPES.contains(&self.media_type.as_str())
    }
}

/// Map a declared media type onto the one sent to the service.
///
/// Empty and unrecognised types fall back to [`DEFAULT_MEDIA_TYPE`]; types
/// the service cannot read (e.g. `image/png`) pass through unchanged so the
/// caller can reject them.
pub fn normalize_media_type(declared: &str) -> &str {
    let declared = declared.trim();
    if declared.is_empty() || declared == "application/octet-stream" {
        DEFAULT_MEDIA_TYPE
    } else {
        declared
    }
}

/// Infer a media type from a file extension. Unknown extensions yield `""`.
pub fn media_type_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("pdf") => PDF,
        Some("doc") => DOC,
        Some("docx") => DOCX,
        Some("txt") | Some("text") => PLAIN_TEXT,
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "",
    }
}

/// Read `reader` to the end and encode the bytes.
pub async fn encode_reader<R>(
    name: &str,
    media_type: &str,
    mut reader: R,
) -> Result<EncodedDocument, EncodeError>
where
    R: AsyncRead + Unpin,
{
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .await
        .map_err(|source| EncodeError::Io {
            name: name.to_string(),
            source,
        })?;
    debug!(name, bytes = bytes.len(), "encoded document");
    Ok(EncodedDocument::from_bytes(name, media_type, &bytes))
}

/// Read a file from disk, naming it after its final path component.
pub async fn encode_file(path: &Path) -> Result<EncodedDocument, EncodeError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| EncodeError::Io {
            name: name.clone(),
            source,
        })?;
    debug!(name = %name, bytes = bytes.len(), "encoded document");
    Ok(EncodedDocument::from_bytes(
        name,
        media_type_for_path(path),
        &bytes,
    ))
}
