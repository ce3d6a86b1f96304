//! Linkhub Core Library
//!
//! This crate provides the core functionality for Linkhub, including:
//! - Project catalog (built-in list or TOML file)
//! - Fallback-safe thumbnail loading
//! - Page rendering (style block, cards, 3-column layout)
//! - HTTP router serving the rendered page
//! - Configuration and health checks

pub mod catalog;
pub mod config;
pub mod error;
pub mod health;
pub mod render;
pub mod server;
pub mod thumbnail;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalog::{Catalog, ProjectEntry};
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::render::PageRenderer;
    pub use crate::thumbnail::ThumbnailLoader;
}
