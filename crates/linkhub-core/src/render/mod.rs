//! HTML rendering for the hub page
//!
//! - `style`: the global style block
//! - `card`: one project card
//! - `layout`: round-robin column placement
//! - `page`: the complete document

pub mod card;
pub mod escape;
pub mod layout;
pub mod page;
pub mod style;

pub use card::{APP_LABEL, CardInput, NO_DEMO_NOTE, REPO_LABEL, render_card};
pub use layout::{COLUMN_COUNT, Slot, distribute};
pub use page::{DEFAULT_IMAGE_WIDTH, PageRenderer};
pub use style::PageStyle;
