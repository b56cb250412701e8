//! File Reference
//!
//! Opaque pointer to a user-picked document. Only the name and URI are
//! required; the content is never read.

use std::path::Path;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

/// Characters escaped in the path part of a `file://` URI
const PATH_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRef {
    pub name: String,
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl FileRef {
    pub fn new(name: &str, uri: &str) -> Self {
        Self {
            name: name.to_string(),
            uri: uri.to_string(),
            mime_type: None,
            size: None,
        }
    }

    /// Build a reference for a local file. Size is filled in when the file
    /// exists; the MIME type is guessed from the extension.
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let mut raw = path.to_string_lossy().replace('\\', "/");
        // C:/Users/... -> /C:/Users/...
        if !raw.starts_with('/') {
            raw.insert(0, '/');
        }
        let uri = format!("file://{}", utf8_percent_encode(&raw, PATH_SET));

        Self {
            name,
            uri,
            mime_type: mime_guess::from_path(path)
                .first()
                .map(|m| m.essence_str().to_string()),
            size: std::fs::metadata(path).ok().map(|m| m.len()),
        }
    }

    /// A reference can only be opened when it carries a URI
    pub fn is_openable(&self) -> bool {
        !self.uri.trim().is_empty()
    }
}
