//! Linkhub CLI - render or serve the project link hub

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use linkhub_core::catalog::Catalog;
use linkhub_core::config::Config;
use linkhub_core::health::{self, HealthStatus};
use linkhub_core::server::{self, AppState};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "linkhub")]
#[command(author, version, about = "Single-page link hub for project repositories and demos", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Project catalog file (overrides catalog.path)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the hub page to stdout or a file
    Render {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Serve the hub page over HTTP
    Serve {
        /// Bind address (defaults to server.bind)
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Inspect the project catalog
    Projects {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Run health check
    Doctor,
}

#[derive(Subcommand)]
enum ProjectAction {
    /// List all projects in display order
    List,
    /// Show one project by repository slug
    Show { slug: String },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Get a configuration value
    Get { key: String },
    /// Set a configuration value
    Set { key: String, value: String },
    /// List all configuration values
    List,
    /// Reset configuration to defaults
    Reset,
    /// Show configuration file path
    Path,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stderr keeps rendered HTML on stdout clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("linkhub=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let catalog_override = cli.catalog.as_deref();

    match cli.command {
        Commands::Render { output } => {
            cmd_render(catalog_override, output.as_deref(), cli.quiet)
        }

        Commands::Serve { bind } => cmd_serve(catalog_override, bind).await,

        Commands::Projects { action } => {
            cmd_projects(catalog_override, action, cli.format, cli.quiet)
        }

        Commands::Config { action } => cmd_config(action, cli.quiet),

        Commands::Doctor => cmd_doctor(catalog_override, cli.format, cli.quiet),
    }
}

// ============================================================================
// Command Implementations
// ============================================================================

/// Load config, applying the `--catalog` override
fn load_config(catalog_override: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::load()?;
    if let Some(path) = catalog_override {
        config.catalog.path = Some(path.to_path_buf());
    }
    Ok(config)
}

fn load_state(catalog_override: Option<&Path>) -> anyhow::Result<AppState> {
    let config = load_config(catalog_override)?;
    let catalog = Catalog::load(config.catalog.path.as_deref())?;
    Ok(AppState::new(config, catalog))
}

fn cmd_render(
    catalog_override: Option<&Path>,
    output: Option<&Path>,
    quiet: bool,
) -> anyhow::Result<()> {
    let state = load_state(catalog_override)?;
    let html = state.render_page();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            fs::write(path, &html)
                .with_context(|| format!("Failed to write page: {}", path.display()))?;
            info!(path = %path.display(), bytes = html.len(), "Page written");
            if !quiet {
                println!(
                    "Rendered {} projects to {}",
                    state.catalog.len(),
                    path.display()
                );
            }
        }
        None => print!("{}", html),
    }

    Ok(())
}

async fn cmd_serve(catalog_override: Option<&Path>, bind: Option<String>) -> anyhow::Result<()> {
    let mut state = load_state(catalog_override)?;
    if let Some(bind) = bind {
        state.config.server.bind = bind;
    }
    let addr = state.config.server.socket_addr()?;

    server::serve(state, addr).await
}

fn cmd_projects(
    catalog_override: Option<&Path>,
    action: ProjectAction,
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    let config = load_config(catalog_override)?;
    let catalog = Catalog::load(config.catalog.path.as_deref())?;

    match action {
        ProjectAction::List => match format {
            OutputFormat::Json => {
                let items: Vec<serde_json::Value> = catalog
                    .entries()
                    .iter()
                    .map(|e| project_json(&catalog, e))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&items)?);
            }
            OutputFormat::Text => {
                if catalog.is_empty() {
                    if !quiet {
                        println!("No projects found.");
                    }
                    return Ok(());
                }
                if !quiet {
                    println!("Projects:");
                }
                for entry in catalog.entries() {
                    let demo = if entry.has_app() { " [demo]" } else { "" };
                    println!("  {} - {}{}", entry.title, catalog.repo_url(entry), demo);
                }
            }
        },
        ProjectAction::Show { slug } => {
            let entry = catalog.find(&slug)?;
            match format {
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&project_json(&catalog, entry))?
                    );
                }
                OutputFormat::Text => {
                    println!("Project: {}", entry.title);
                    println!("  Description: {}", entry.description);
                    println!("  Repository: {}", catalog.repo_url(entry));
                    match &entry.app_url {
                        Some(url) => println!("  App: {}", url),
                        None => println!("  App: (not deployed yet)"),
                    }
                    if let Some(image) = &entry.image_name {
                        println!("  Image: {}", image);
                    }
                }
            }
        }
    }

    Ok(())
}

fn project_json(catalog: &Catalog, entry: &linkhub_core::catalog::ProjectEntry) -> serde_json::Value {
    serde_json::json!({
        "title": entry.title,
        "description": entry.description,
        "repo_slug": entry.repo_slug,
        "repo_url": catalog.repo_url(entry),
        "app_url": entry.app_url,
        "image_name": entry.image_name,
    })
}

fn cmd_config(action: ConfigAction, quiet: bool) -> anyhow::Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            let value = config.get(&key)?;
            println!("{}", value);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            if !quiet {
                println!("Set {} = {}", key, value);
            }
        }
        ConfigAction::List => {
            let config = Config::load()?;
            let items = config.list()?;
            for (key, value) in items {
                println!("{} = {}", key, value);
            }
        }
        ConfigAction::Reset => {
            Config::reset()?;
            if !quiet {
                println!("Configuration reset to defaults.");
            }
        }
        ConfigAction::Path => {
            let path = Config::config_path()?;
            println!("{}", path.display());
        }
    }
    Ok(())
}

fn cmd_doctor(
    catalog_override: Option<&Path>,
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    let config = match load_config(catalog_override) {
        Ok(config) => config,
        Err(e) => {
            if !quiet {
                println!("[XX] Configuration: Error - {:#}", e);
            }
            return Err(anyhow::anyhow!("Health check failed"));
        }
    };

    let report = health::doctor(&config);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            if !quiet {
                println!("Linkhub Health Check");
                println!("====================");
                println!();
                match Config::config_path() {
                    Ok(path) if path.exists() => {
                        println!("[OK] Config file: {}", path.display())
                    }
                    Ok(path) => println!("[--] Config file: {} (using defaults)", path.display()),
                    Err(e) => println!("[!!] Config file: {}", e),
                }
                for check in &report.checks {
                    println!(
                        "[{}] {}: {}",
                        check.status.label(),
                        check.name,
                        check.message.as_deref().unwrap_or("")
                    );
                }
                println!();
            }
        }
    }

    for check in report
        .checks
        .iter()
        .filter(|c| c.status == HealthStatus::Warning)
    {
        warn!(check = %check.name, message = ?check.message, "Health check warning");
    }

    match report.overall_status {
        HealthStatus::Error => Err(anyhow::anyhow!("Health check failed")),
        HealthStatus::Warning => {
            if !quiet && matches!(format, OutputFormat::Text) {
                println!("Page renders, with warnings.");
            }
            Ok(())
        }
        HealthStatus::Ok => {
            if !quiet && matches!(format, OutputFormat::Text) {
                println!("All checks passed.");
            }
            Ok(())
        }
    }
}
