//! Project entry record

use serde::{Deserialize, Serialize};

/// One project listed on the hub
///
/// Field names double as the keys of a `[[projects]]` table in a catalog
/// file. The camelCase spellings `repoSlug`, `appUrl` and `imageName` are
/// accepted too; any other key is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectEntry {
    /// Short display name
    pub title: String,
    /// One-line description shown under the title
    pub description: String,
    /// Repository name appended to the catalog base URL
    #[serde(alias = "repoSlug")]
    pub repo_slug: String,
    /// Deployed demo, if there is one yet
    #[serde(default, alias = "appUrl", skip_serializing_if = "Option::is_none")]
    pub app_url: Option<String>,
    /// Thumbnail file, relative to the assets directory
    #[serde(default, alias = "imageName", skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,
}

impl ProjectEntry {
    /// Create an entry without demo link or thumbnail
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        repo_slug: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            repo_slug: repo_slug.into(),
            app_url: None,
            image_name: None,
        }
    }

    /// Attach a deployed demo URL
    pub fn with_app_url(mut self, url: impl Into<String>) -> Self {
        self.app_url = Some(url.into());
        self
    }

    /// Attach a thumbnail file name
    pub fn with_image(mut self, name: impl Into<String>) -> Self {
        self.image_name = Some(name.into());
        self
    }

    /// Whether a demo has been deployed
    pub fn has_app(&self) -> bool {
        self.app_url.is_some()
    }
}
