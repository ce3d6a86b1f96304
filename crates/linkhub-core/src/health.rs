//! Health checks
//!
//! Diagnostics behind `linkhub doctor`. Missing thumbnails and duplicate slugs
//! are reported as warnings only; they never stop the page from rendering.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::thumbnail::ThumbnailLoader;

/// Health check result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    pub message: Option<String>,
}

/// Health status, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Warning,
    Error,
}

impl HealthStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warning => "!!",
            Self::Error => "XX",
        }
    }
}

/// Overall health report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub overall_status: HealthStatus,
    pub checks: Vec<HealthCheck>,
    pub timestamp: String,
}

impl HealthReport {
    fn from_checks(checks: Vec<HealthCheck>) -> Self {
        let overall_status = checks
            .iter()
            .map(|c| c.status)
            .max()
            .unwrap_or(HealthStatus::Ok);
        Self {
            overall_status,
            checks,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl HealthCheck {
    fn new(name: &str, status: HealthStatus, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status,
            message: Some(message.into()),
        }
    }
}

/// Run all health checks against a loaded configuration
pub fn doctor(config: &Config) -> HealthReport {
    let loader = ThumbnailLoader::new(config.assets.dir.clone());
    let mut checks = vec![check_assets_dir(&loader)];

    match Catalog::load(config.catalog.path.as_deref()) {
        Ok(catalog) => {
            let source = match &config.catalog.path {
                Some(path) => path.display().to_string(),
                None => "built-in list".to_string(),
            };
            checks.push(HealthCheck::new(
                "Catalog",
                HealthStatus::Ok,
                format!("{} projects from {}", catalog.len(), source),
            ));
            checks.push(check_thumbnails(&catalog, &loader, config.assets.image_width));
            checks.push(check_duplicate_slugs(&catalog));
        }
        Err(e) => {
            checks.push(HealthCheck::new("Catalog", HealthStatus::Error, e.to_string()));
        }
    }

    HealthReport::from_checks(checks)
}

/// Check that the assets directory exists
pub fn check_assets_dir(loader: &ThumbnailLoader) -> HealthCheck {
    let dir = loader.assets_dir();
    if dir.is_dir() {
        HealthCheck::new(
            "Assets Directory",
            HealthStatus::Ok,
            format!("Found at {}", dir.display()),
        )
    } else {
        HealthCheck::new(
            "Assets Directory",
            HealthStatus::Warning,
            format!("Not found at {} (all thumbnails will be placeholders)", dir.display()),
        )
    }
}

/// Try every referenced thumbnail once
pub fn check_thumbnails(catalog: &Catalog, loader: &ThumbnailLoader, width: u32) -> HealthCheck {
    let referenced: Vec<&str> = catalog
        .entries()
        .iter()
        .filter_map(|e| e.image_name.as_deref())
        .collect();
    let missing: Vec<&str> = referenced
        .iter()
        .copied()
        .filter(|name| loader.load(name, width).is_err())
        .collect();

    if missing.is_empty() {
        HealthCheck::new(
            "Thumbnails",
            HealthStatus::Ok,
            format!("{} of {} loaded", referenced.len(), referenced.len()),
        )
    } else {
        HealthCheck::new(
            "Thumbnails",
            HealthStatus::Warning,
            format!(
                "{} of {} unavailable, placeholders shown: {}",
                missing.len(),
                referenced.len(),
                missing.join(", ")
            ),
        )
    }
}

/// Report repeated repository slugs
pub fn check_duplicate_slugs(catalog: &Catalog) -> HealthCheck {
    let duplicates = catalog.duplicate_slugs();
    if duplicates.is_empty() {
        HealthCheck::new("Slugs", HealthStatus::Ok, "All repository slugs are unique")
    } else {
        HealthCheck::new(
            "Slugs",
            HealthStatus::Warning,
            format!("Repeated: {}", duplicates.join(", ")),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DEFAULT_BASE_URL, ProjectEntry};
    use tempfile::TempDir;

    #[test]
    fn test_status_ordering() {
        assert!(HealthStatus::Ok < HealthStatus::Warning);
        assert!(HealthStatus::Warning < HealthStatus::Error);
        assert_eq!(HealthStatus::Warning.label(), "!!");
    }

    #[test]
    fn test_doctor_with_missing_assets_warns() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.assets.dir = temp_dir.path().join("nope");

        let report = doctor(&config);
        assert_eq!(report.overall_status, HealthStatus::Warning);
        let thumbs = report.checks.iter().find(|c| c.name == "Thumbnails").unwrap();
        assert_eq!(thumbs.status, HealthStatus::Warning);
        assert!(thumbs.message.as_ref().unwrap().starts_with("14 of 14 unavailable"));
    }

    #[test]
    fn test_doctor_with_bad_catalog_errors() {
        let temp_dir = TempDir::new().unwrap();
        let catalog_path = temp_dir.path().join("projects.toml");
        std::fs::write(
            &catalog_path,
            "[[projects]]\ntitle = \"x\"\ndescription = \"y\"\nrepo_slug = \"z\"\napp_url = \"nope\"\n",
        )
        .unwrap();

        let mut config = Config::default();
        config.catalog.path = Some(catalog_path);

        let report = doctor(&config);
        assert_eq!(report.overall_status, HealthStatus::Error);
        assert!(report.checks.iter().all(|c| c.name != "Thumbnails"));
    }

    #[test]
    fn test_thumbnails_all_present() {
        let temp_dir = TempDir::new().unwrap();
        image::RgbImage::new(2, 2)
            .save(temp_dir.path().join("ocr.png"))
            .unwrap();
        let catalog = Catalog::new(
            DEFAULT_BASE_URL,
            vec![
                ProjectEntry::new("OCR", "d", "OCR").with_image("ocr.png"),
                ProjectEntry::new("Intro", "d", "Intro"),
            ],
        );
        let loader = ThumbnailLoader::new(temp_dir.path());

        let check = check_thumbnails(&catalog, &loader, 220);
        assert_eq!(check.status, HealthStatus::Ok);
        assert_eq!(check.message.as_deref(), Some("1 of 1 loaded"));
    }

    #[test]
    fn test_duplicate_slugs_warn() {
        let catalog = Catalog::new(
            DEFAULT_BASE_URL,
            vec![
                ProjectEntry::new("a", "d", "textblob"),
                ProjectEntry::new("b", "d", "textblob"),
            ],
        );
        let check = check_duplicate_slugs(&catalog);
        assert_eq!(check.status, HealthStatus::Warning);
        assert_eq!(check.message.as_deref(), Some("Repeated: textblob"));

        let clean = check_duplicate_slugs(&Catalog::builtin());
        assert_eq!(clean.status, HealthStatus::Ok);
    }
}
