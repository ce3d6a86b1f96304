//! Configuration management with file persistence

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Linkhub configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub assets: AssetsConfig,
    pub catalog: CatalogConfig,
    pub server: ServerConfig,
}

/// Static page text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub page_title: String,
    pub page_icon: String,
    pub title: String,
    pub caption: String,
    pub sidebar_heading: String,
    pub sidebar_text: String,
    pub links_heading: String,
    pub links_label: String,
    pub links_url: String,
    pub collection_heading: String,
    pub footer_tip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub dir: PathBuf,
    pub image_width: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            page_title: "Aplicaciones de IA — Amonsalvem".to_string(),
            page_icon: "🤖".to_string(),
            title: "Aplicaciones de Inteligencia Artificial".to_string(),
            caption: "Hub negro/-blanco • minimal • enlaces a tus repos y demos".to_string(),
            sidebar_heading: "Acerca de este hub".to_string(),
            sidebar_text: "Colección de utilidades y experimentos de IA: visión, voz, análisis de texto, \
                           RAG y control IoT. Todo en una estética minimalista (fondo negro, contraste blanco)."
                .to_string(),
            links_heading: "Páginas y ejercicios".to_string(),
            links_label: "Sitio de ejercicios".to_string(),
            links_url: "https://sites.google.com/view/aplicacionesdeia/inicio".to_string(),
            collection_heading: "Colección".to_string(),
            footer_tip: "Tip: para que el botón “Abrir app” aparezca, agrega la URL de tu despliegue \
                         a la clave `app_url` de cada proyecto en el catálogo."
                .to_string(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("assets"),
            image_width: 220,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8501".to_string(),
        }
    }
}

/// Widest thumbnail the renderer accepts
pub const MAX_IMAGE_WIDTH: u32 = 2000;

impl ServerConfig {
    /// Parse the bind address
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        self.bind
            .parse()
            .with_context(|| format!("Invalid bind address: {}", self.bind))
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        let dir = if let Ok(custom_dir) = env::var("LINKHUB_CONFIG_DIR") {
            PathBuf::from(custom_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| anyhow!("Could not determine config directory"))?
                .join("linkhub")
        };
        Ok(dir)
    }

    /// Get the config file path
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from file, or create default if it doesn't exist
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(config)
        } else {
            // Return default config without creating file
            Ok(Config::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        self.validate()?;

        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

        let path = Self::config_path()?;
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(1..=MAX_IMAGE_WIDTH).contains(&self.assets.image_width) {
            return Err(anyhow!(
                "Image width must be between 1 and {}",
                MAX_IMAGE_WIDTH
            ));
        }
        if self.site.title.trim().is_empty() {
            return Err(anyhow!("Site title cannot be empty"));
        }
        self.server.socket_addr()?;
        Ok(())
    }

    /// Get a configuration value by key
    pub fn get(&self, key: &str) -> anyhow::Result<String> {
        match key {
            // Site text
            "site.page_title" => Ok(self.site.page_title.clone()),
            "site.page_icon" => Ok(self.site.page_icon.clone()),
            "site.title" => Ok(self.site.title.clone()),
            "site.caption" => Ok(self.site.caption.clone()),
            "site.sidebar_heading" => Ok(self.site.sidebar_heading.clone()),
            "site.sidebar_text" => Ok(self.site.sidebar_text.clone()),
            "site.links_heading" => Ok(self.site.links_heading.clone()),
            "site.links_label" => Ok(self.site.links_label.clone()),
            "site.links_url" => Ok(self.site.links_url.clone()),
            "site.collection_heading" => Ok(self.site.collection_heading.clone()),
            "site.footer_tip" => Ok(self.site.footer_tip.clone()),

            // Assets
            "assets.dir" => Ok(self.assets.dir.display().to_string()),
            "assets.image_width" => Ok(self.assets.image_width.to_string()),

            // Catalog
            "catalog.path" => Ok(match &self.catalog.path {
                Some(path) => path.display().to_string(),
                None => "(built-in)".to_string(),
            }),

            // Server
            "server.bind" => Ok(self.server.bind.clone()),

            _ => Err(anyhow!(
                "Unknown configuration key: {}. Use `linkhub config list` to see available keys.",
                key
            )),
        }
    }

    /// Set a configuration value by key
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "site.page_title" => self.site.page_title = value.to_string(),
            "site.page_icon" => self.site.page_icon = value.to_string(),
            "site.title" => {
                if value.trim().is_empty() {
                    return Err(anyhow!("Site title cannot be empty"));
                }
                self.site.title = value.to_string();
            }
            "site.caption" => self.site.caption = value.to_string(),
            "site.sidebar_heading" => self.site.sidebar_heading = value.to_string(),
            "site.sidebar_text" => self.site.sidebar_text = value.to_string(),
            "site.links_heading" => self.site.links_heading = value.to_string(),
            "site.links_label" => self.site.links_label = value.to_string(),
            "site.links_url" => self.site.links_url = value.to_string(),
            "site.collection_heading" => self.site.collection_heading = value.to_string(),
            "site.footer_tip" => self.site.footer_tip = value.to_string(),

            "assets.dir" => self.assets.dir = PathBuf::from(value),
            "assets.image_width" => {
                let width: u32 = value
                    .parse()
                    .with_context(|| format!("Invalid image_width value: {}", value))?;
                if !(1..=MAX_IMAGE_WIDTH).contains(&width) {
                    return Err(anyhow!(
                        "Image width must be between 1 and {}",
                        MAX_IMAGE_WIDTH
                    ));
                }
                self.assets.image_width = width;
            }

            "catalog.path" => {
                self.catalog.path = match value.trim() {
                    "" | "builtin" | "(built-in)" => None,
                    path => Some(PathBuf::from(path)),
                };
            }

            "server.bind" => {
                let _: SocketAddr = value
                    .parse()
                    .with_context(|| format!("Invalid bind address: {}", value))?;
                self.server.bind = value.to_string();
            }

            _ => {
                return Err(anyhow!(
                    "Unknown configuration key: {}. Use `linkhub config list` to see available keys.",
                    key
                ));
            }
        }
        Ok(())
    }

    /// List all configuration keys and their values
    pub fn list(&self) -> anyhow::Result<Vec<(String, String)>> {
        let keys = vec![
            "site.page_title",
            "site.page_icon",
            "site.title",
            "site.caption",
            "site.sidebar_heading",
            "site.sidebar_text",
            "site.links_heading",
            "site.links_label",
            "site.links_url",
            "site.collection_heading",
            "site.footer_tip",
            "assets.dir",
            "assets.image_width",
            "catalog.path",
            "server.bind",
        ];

        keys.into_iter()
            .map(|key| {
                let value = self.get(key)?;
                Ok((key.to_string(), value))
            })
            .collect()
    }

    /// Reset configuration to defaults
    pub fn reset() -> anyhow::Result<()> {
        let path = Self::config_path()?;
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove config file: {}", path.display()))?;
        }
        Ok(())
    }
}
