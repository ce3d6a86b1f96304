//! Thumbnail loading for project cards
//!
//! Loading a thumbnail is best effort: a missing or undecodable file yields
//! [`Error::ImageNotFound`](crate::Error::ImageNotFound), and
//! [`render_thumbnail`] turns that into the placeholder badge so a card never
//! fails to render because of its image.

mod loader;
mod types;

pub use loader::{ThumbnailLoader, render_thumbnail};
pub use types::{PLACEHOLDER_HTML, Thumbnail, placeholder_html};
