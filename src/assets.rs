//! Image assets embedded as data URIs.
//!
//! The page renders the same icon on the card and in the backdrop. By
//! default that is the built-in SVG; `--icon` swaps in a raster image.

use std::path::Path;

use anyhow::{Context, Result};
use base64::Engine;
use image::ImageFormat;
use rillic_core::RillicError;

/// Built-in Rillic mark
const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 256 256">
  <defs>
    <linearGradient id="bg" x1="0" y1="0" x2="1" y2="1">
      <stop offset="0" stop-color="#2b2b35"/>
      <stop offset="1" stop-color="#0c0c10"/>
    </linearGradient>
    <linearGradient id="mark" x1="0" y1="0" x2="1" y2="1">
      <stop offset="0" stop-color="#f5f5f5"/>
      <stop offset="1" stop-color="#9a9aa6"/>
    </linearGradient>
  </defs>
  <rect width="256" height="256" rx="56" fill="url(#bg)"/>
  <path fill="url(#mark)" d="M80 60h62c30 0 50 18 50 44 0 19-11 34-28 40l32 52h-36l-28-47h-20v47H80z M112 86v36h28c12 0 19-7 19-18s-7-18-19-18z"/>
</svg>"##;

/// Formats the page can embed.
const SUPPORTED: [ImageFormat; 3] = [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::WebP];

/// Data URI for the built-in icon.
pub fn builtin_icon() -> String {
    data_uri("image/svg+xml", ICON_SVG.as_bytes())
}

/// Read an image file and encode it as a data URI.
///
/// The format is sniffed from the file contents, not the extension.
pub fn load_icon(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .map_err(RillicError::from)
        .with_context(|| format!("reading icon {}", path.display()))?;

    let format = image::guess_format(&bytes)
        .map_err(|e| RillicError::UnsupportedImage(e.to_string()))
        .with_context(|| format!("sniffing {}", path.display()))?;
    if !SUPPORTED.contains(&format) {
        return Err(RillicError::UnsupportedImage(format!("{:?}", format)).into());
    }

    tracing::debug!("Loaded {:?} icon ({} bytes)", format, bytes.len());
    Ok(data_uri(format.to_mime_type(), &bytes))
}

fn data_uri(mime: &str, bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", mime, encoded)
}
