//! Project catalog
//!
//! The catalog is the hub's only data: a base URL for repository links and an
//! ordered list of [`ProjectEntry`] records. It is built once at startup,
//! either from the built-in list or from a TOML file, and never mutated
//! afterwards.
//!
//! A catalog file looks like:
//!
//! ```toml
//! base_url = "https://github.com/Amonsalvem"
//!
//! [[projects]]
//! title = "OCR"
//! description = "Extrae texto desde imágenes."
//! repo_slug = "OCR"
//! image_name = "ocr.png"
//! ```

mod builtin;
mod entry;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};

pub use builtin::DEFAULT_BASE_URL;
pub use entry::ProjectEntry;

/// Immutable, ordered list of projects
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    base_url: String,
    #[serde(rename = "projects")]
    entries: Vec<ProjectEntry>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default = "default_base_url", alias = "baseUrl")]
    base_url: String,
    #[serde(default)]
    projects: Vec<ProjectEntry>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Catalog {
    /// Create a catalog from explicit data
    pub fn new(base_url: impl Into<String>, entries: Vec<ProjectEntry>) -> Self {
        Self {
            base_url: base_url.into(),
            entries,
        }
    }

    /// The project list shipped with the binary
    pub fn builtin() -> Self {
        Self::new(DEFAULT_BASE_URL, builtin::entries())
    }

    /// Parse and validate a catalog document
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(contents)
            .map_err(|e| Error::CatalogError(format!("invalid catalog TOML: {}", e)))?;
        let catalog = Self::new(file.base_url, file.projects);
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read, parse and validate a catalog file
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::CatalogError(format!("failed to read {}: {}", path.display(), e))
        })?;
        let catalog = Self::from_toml_str(&contents)?;
        debug!(path = %path.display(), projects = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Load from `path` when given, otherwise fall back to the built-in list
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_toml_file(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Base URL for repository links
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Entries in display order
    pub fn entries(&self) -> &[ProjectEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Repository link for an entry: `{base_url}/{repo_slug}`
    pub fn repo_url(&self, entry: &ProjectEntry) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), entry.repo_slug)
    }

    /// Find an entry by repository slug
    pub fn find(&self, slug: &str) -> Result<&ProjectEntry> {
        self.entries
            .iter()
            .find(|entry| entry.repo_slug == slug)
            .ok_or_else(|| Error::ProjectNotFound(slug.to_string()))
    }

    /// Check that every entry has a title, a description and well-formed links
    ///
    /// Image files and slug uniqueness are not checked; see `duplicate_slugs`.
    pub fn validate(&self) -> Result<()> {
        for entry in &self.entries {
            if entry.title.trim().is_empty() {
                return Err(Error::InvalidInput(format!(
                    "project '{}' has an empty title",
                    entry.repo_slug
                )));
            }
            if entry.description.trim().is_empty() {
                return Err(Error::InvalidInput(format!(
                    "project '{}' has an empty description",
                    entry.title
                )));
            }
            if entry.repo_slug.trim().is_empty() {
                return Err(Error::InvalidInput(format!(
                    "project '{}' has an empty repo_slug",
                    entry.title
                )));
            }

            check_url(&entry.title, &self.repo_url(entry))?;
            if let Some(app_url) = &entry.app_url {
                check_url(&entry.title, app_url)?;
            }
        }
        Ok(())
    }

    /// Slugs that appear more than once, in first-seen order
    pub fn duplicate_slugs(&self) -> Vec<String> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for entry in &self.entries {
            *counts.entry(entry.repo_slug.as_str()).or_default() += 1;
        }

        let mut duplicates = Vec::new();
        for entry in &self.entries {
            let slug = entry.repo_slug.as_str();
            if counts[slug] > 1 && !duplicates.iter().any(|d: &String| d == slug) {
                duplicates.push(slug.to_string());
            }
        }
        duplicates
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn check_url(project: &str, url: &str) -> Result<()> {
    Url::parse(url).map(|_| ()).map_err(|e| Error::InvalidUrl {
        project: project.to_string(),
        url: url.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 14);
        assert_eq!(catalog.base_url(), "https://github.com/Amonsalvem");
        assert_eq!(catalog.entries()[0].title, "OCR");
        assert_eq!(catalog.entries()[13].title, "Intro");
        assert!(catalog.entries().iter().all(|e| e.app_url.is_none()));
        assert!(catalog.entries().iter().all(|e| e.image_name.is_some()));
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_repo_url_is_base_plus_slug() {
        let catalog = Catalog::builtin();
        for entry in catalog.entries() {
            assert_eq!(
                catalog.repo_url(entry),
                format!("https://github.com/Amonsalvem/{}", entry.repo_slug)
            );
        }

        let ocr = catalog.find("OCR").unwrap();
        assert_eq!(catalog.repo_url(ocr), "https://github.com/Amonsalvem/OCR");
    }

    #[test]
    fn test_repo_url_trailing_slash() {
        let catalog = Catalog::new(
            "https://github.com/someone/",
            vec![ProjectEntry::new("a", "b", "repo")],
        );
        assert_eq!(
            catalog.repo_url(&catalog.entries()[0]),
            "https://github.com/someone/repo"
        );
    }

    #[test]
    fn test_find_missing_project() {
        let catalog = Catalog::builtin();
        let err = catalog.find("does-not-exist").unwrap_err();
        assert_eq!(err.code(), "E001");
    }

    #[test]
    fn test_validate_rejects_bad_app_url() {
        let catalog = Catalog::new(
            DEFAULT_BASE_URL,
            vec![ProjectEntry::new("vision_app", "desc", "vision_app").with_app_url("not a url")],
        );
        match catalog.validate() {
            Err(Error::InvalidUrl { project, url, .. }) => {
                assert_eq!(project, "vision_app");
                assert_eq!(url, "not a url");
            }
            other => panic!("expected InvalidUrl, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let catalog = Catalog::new("github", vec![ProjectEntry::new("OCR", "desc", "OCR")]);
        assert!(matches!(catalog.validate(), Err(Error::InvalidUrl { .. })));
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let catalog = Catalog::new(DEFAULT_BASE_URL, vec![ProjectEntry::new("  ", "desc", "x")]);
        assert!(matches!(catalog.validate(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_validate_allows_duplicates_and_missing_images() {
        let catalog = Catalog::new(
            DEFAULT_BASE_URL,
            vec![
                ProjectEntry::new("a", "first", "same").with_image("missing.png"),
                ProjectEntry::new("b", "second", "same"),
                ProjectEntry::new("c", "third", "other"),
            ],
        );
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.duplicate_slugs(), vec!["same".to_string()]);
    }

    #[test]
    fn test_from_toml_str() {
        let catalog = Catalog::from_toml_str(
            r#"
            base_url = "https://github.com/example"

            [[projects]]
            title = "vision_app"
            description = "Análisis de imagen"
            repo_slug = "vision_app"
            app_url = "https://foo.example/app"

            [[projects]]
            title = "OCR"
            description = "Texto desde imágenes"
            repo_slug = "OCR"
            image_name = "ocr.png"
            "#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.base_url(), "https://github.com/example");
        let vision = catalog.find("vision_app").unwrap();
        assert_eq!(vision.app_url.as_deref(), Some("https://foo.example/app"));
        assert!(vision.image_name.is_none());
        assert_eq!(catalog.entries()[1].image_name.as_deref(), Some("ocr.png"));
    }

    #[test]
    fn test_from_toml_str_default_base_url() {
        let catalog = Catalog::from_toml_str(
            r#"
            [[projects]]
            title = "Intro"
            description = "boilerplate"
            repo_slug = "Intro"
            "#,
        )
        .unwrap();
        assert_eq!(catalog.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_from_toml_str_missing_field() {
        let err = Catalog::from_toml_str(
            r#"
            [[projects]]
            title = "Intro"
            repo_slug = "Intro"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::CatalogError(_)));
    }

    #[test]
    fn test_from_toml_str_camel_case_keys() {
        let catalog = Catalog::from_toml_str(
            r#"
            baseUrl = "https://github.com/example"

            [[projects]]
            title = "vision_app"
            description = "Análisis de imagen"
            repoSlug = "vision_app"
            appUrl = "https://foo.example/app"
            imageName = "v.png"
            "#,
        )
        .unwrap();

        let vision = &catalog.entries()[0];
        assert_eq!(catalog.repo_url(vision), "https://github.com/example/vision_app");
        assert_eq!(vision.app_url.as_deref(), Some("https://foo.example/app"));
        assert_eq!(vision.image_name.as_deref(), Some("v.png"));
        assert!(vision.has_app());
    }

    #[test]
    fn test_from_toml_str_unknown_key() {
        let err = Catalog::from_toml_str(
            r#"
            [[projects]]
            title = "vision_app"
            description = "Análisis de imagen"
            repo_slug = "vision_app"
            app = "https://foo.example/app"
            "#,
        )
        .unwrap_err();
        match err {
            Error::CatalogError(message) => assert!(message.contains("app"), "{}", message),
            other => panic!("expected CatalogError, got {:?}", other),
        }

        let err = Catalog::from_toml_str("title = \"stray\"\n").unwrap_err();
        assert!(matches!(err, Error::CatalogError(_)));
    }

    #[test]
    fn test_from_toml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[[projects]]\ntitle = \"ITV\"\ndescription = \"Prototipos\"\nrepo_slug = \"ITV\""
        )
        .unwrap();

        let catalog = Catalog::load(Some(file.path())).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.entries()[0].repo_slug, "ITV");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load(Some(Path::new("/nonexistent/projects.toml"))).unwrap_err();
        assert!(matches!(err, Error::CatalogError(_)));
    }

    #[test]
    fn test_load_without_path_is_builtin() {
        assert_eq!(Catalog::load(None).unwrap(), Catalog::builtin());
    }
}
