//! Static images consumed by the document: company logo and default signature.
//!
//! Both are loaded once, best-effort. A failed load is logged and leaves a
//! fallback in place; it is never an error for the caller.

use std::fs;
use std::path::{Path, PathBuf};

/// Well-known path of the company logo.
pub const DEFAULT_LOGO_PATH: &str = "assets/LOGO.png";
/// Well-known path of the default signature image.
pub const DEFAULT_SIGNATURE_PATH: &str = "assets/sign.png";

/// An image read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetImage {
    pub bytes: Vec<u8>,
    pub media_type: &'static str,
}

impl AssetImage {
    /// Wrap raw bytes, sniffing the media type from magic bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let media_type = sniff_media_type(&bytes);
        Self { bytes, media_type }
    }
}

/// Where the document's signature comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureSource {
    /// The image was loaded and is embedded in the output.
    Embedded(AssetImage),
    /// Loading failed (or has not happened); the output refers to the path.
    Reference(PathBuf),
}

/// Images available to renderers. Either may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assets {
    pub logo: Option<AssetImage>,
    pub signature: Option<SignatureSource>,
}

impl Assets {
    /// Load the logo and the default signature from the given paths.
    pub fn load(logo_path: impl AsRef<Path>, signature_path: impl AsRef<Path>) -> Self {
        Self {
            logo: load_logo(logo_path),
            signature: Some(load_default_signature(signature_path)),
        }
    }

    /// Load both images from their well-known paths.
    pub fn load_defaults() -> Self {
        Self::load(DEFAULT_LOGO_PATH, DEFAULT_SIGNATURE_PATH)
    }
}

/// Read the default signature.
///
/// The fallback is set before the attempt: on any failure the signature
/// stays a [`SignatureSource::Reference`] to `path`.
pub fn load_default_signature(path: impl AsRef<Path>) -> SignatureSource {
    let path = path.as_ref();
    let fallback = SignatureSource::Reference(path.to_path_buf());
    match fs::read(path) {
        Ok(bytes) if !bytes.is_empty() => {
            tracing::debug!(path = %path.display(), size = bytes.len(), "loaded default signature");
            SignatureSource::Embedded(AssetImage::from_bytes(bytes))
        }
        Ok(_) => {
            tracing::warn!(path = %path.display(), "default signature is empty");
            fallback
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "error loading default signature");
            fallback
        }
    }
}

/// Read the company logo; `None` when it cannot be read.
pub fn load_logo(path: impl AsRef<Path>) -> Option<AssetImage> {
    let path = path.as_ref();
    match fs::read(path) {
        Ok(bytes) if !bytes.is_empty() => Some(AssetImage::from_bytes(bytes)),
        Ok(_) => {
            tracing::warn!(path = %path.display(), "logo is empty");
            None
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "error loading logo");
            None
        }
    }
}

fn sniff_media_type(bytes: &[u8]) -> &'static str {
    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n";
    if bytes.starts_with(PNG) {
        "image/png"
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if bytes.starts_with(b"GIF8") {
        "image/gif"
    } else {
        "application/octet-stream"
    }
}
