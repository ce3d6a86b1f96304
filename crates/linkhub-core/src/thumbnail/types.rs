//! Thumbnail data types

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::render::escape::escape_attr;

/// Neutral marker shown where a thumbnail could not be loaded
pub const PLACEHOLDER_HTML: &str = "<div class='badge'>img</div>";

/// Markup for the placeholder marker
pub fn placeholder_html() -> &'static str {
    PLACEHOLDER_HTML
}

/// A decoded, displayable image
#[derive(Debug, Clone)]
pub struct Thumbnail {
    /// Raw file contents
    pub data: Vec<u8>,
    /// MIME type sniffed from the contents
    pub mime_type: &'static str,
    /// Natural width in pixels
    pub natural_width: u32,
    /// Natural height in pixels
    pub natural_height: u32,
    /// Width the image is displayed at
    pub display_width: u32,
}

impl Thumbnail {
    /// Inline `data:` URI for the image
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, BASE64.encode(&self.data))
    }

    /// Height at display width, keeping the aspect ratio
    pub fn display_height(&self) -> u32 {
        if self.natural_width == 0 {
            return 0;
        }
        let scaled =
            u64::from(self.natural_height) * u64::from(self.display_width) / u64::from(self.natural_width);
        u32::try_from(scaled.max(1)).unwrap_or(u32::MAX)
    }

    /// `<img>` element with the image inlined
    pub fn to_html(&self, alt: &str) -> String {
        format!(
            "<img class='thumb' src=\"{}\" width=\"{}\" height=\"{}\" alt=\"{}\">",
            self.data_uri(),
            self.display_width,
            self.display_height(),
            escape_attr(alt)
        )
    }
}
