//! Error types for Linkhub

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using Linkhub's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Linkhub error types with helpful messages and suggestions
#[derive(Error, Debug)]
pub enum Error {
    // Entity errors (E001-E099)
    #[error("Project '{0}' not found. Run `linkhub projects list` to see all projects.")]
    ProjectNotFound(String),

    // Resource errors (E100-E199)
    #[error("Image '{}' could not be loaded: {reason}", .path.display())]
    ImageNotFound { path: PathBuf, reason: String },

    // Catalog errors (E200-E299)
    #[error("Invalid URL '{url}' for project '{project}': {reason}")]
    InvalidUrl {
        project: String,
        url: String,
        reason: String,
    },

    #[error("Catalog error: {0}")]
    CatalogError(String),

    // Input errors (E800-E899)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            Self::ProjectNotFound(_) => "E001",
            Self::ImageNotFound { .. } => "E100",
            Self::InvalidUrl { .. } => "E200",
            Self::CatalogError(_) => "E201",
            Self::InvalidInput(_) => "E800",
        }
    }

    /// Get suggestion for how to fix this error
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::ProjectNotFound(_) => Some("linkhub projects list".to_string()),
            Self::ImageNotFound { .. } => Some("linkhub config get assets.dir".to_string()),
            Self::InvalidUrl { project, .. } => {
                Some(format!("Fix the URL of '{}' in the catalog file", project))
            }
            Self::CatalogError(_) => Some("linkhub config get catalog.path".to_string()),
            Self::InvalidInput(_) => None,
        }
    }
}
