//! Card image lookup with a placeholder for missing files.

use std::path::PathBuf;

use crate::error::{ApiError, Result};

/// A picture read from disk, or the placeholder that stands in for it.
#[derive(Debug)]
pub enum Picture {
    Found {
        bytes: Vec<u8>,
        content_type: &'static str,
    },
    Missing {
        placeholder: String,
    },
}

/// Reads card images from one directory.
#[derive(Debug, Clone)]
pub struct PictureStore {
    root: PathBuf,
    url_prefix: String,
}

impl PictureStore {
    pub fn new(root: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            url_prefix: url_prefix.into(),
        }
    }

    /// Load `file` from the pictures directory.
    pub async fn load(&self, file: &str) -> Result<Picture> {
        validate_file_name(file)?;

        match tokio::fs::read(self.root.join(file)).await {
            Ok(bytes) => Ok(Picture::Found {
                bytes,
                content_type: content_type_for(file),
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                let attempted = format!("{}/{}", self.url_prefix, file);
                tracing::warn!(path = %attempted, "image not found");
                Ok(Picture::Missing {
                    placeholder: placeholder_svg(&attempted),
                })
            }
            Err(err) => Err(ApiError::Internal(format!("reading {}: {}", file, err))),
        }
    }
}

/// Single path segment only; nothing that climbs out of the directory.
fn validate_file_name(file: &str) -> Result<()> {
    if file.is_empty() || file.contains(['/', '\\']) || file == "." || file.contains("..") {
        return Err(ApiError::BadRequest(format!("invalid file name: {}", file)));
    }
    Ok(())
}

fn content_type_for(file: &str) -> &'static str {
    let ext = file.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// "Image not found" card face showing the path that was tried.
pub fn placeholder_svg(attempted: &str) -> String {
    format!(
        concat!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="300" height="300" viewBox="0 0 300 300">"##,
            r##"<rect width="300" height="300" fill="#1a2635"/>"##,
            r##"<text x="150" y="140" fill="#e8eef6" font-family="sans-serif" font-size="14" font-weight="700" text-anchor="middle">Image not found</text>"##,
            r##"<text x="150" y="165" fill="#e8eef6" fill-opacity="0.85" font-family="sans-serif" font-size="12" text-anchor="middle">{}</text>"##,
            "</svg>"
        ),
        escape_xml(attempted)
    )
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
