use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
        }
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// Directories the server reads files from
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Built bundle, holds `index.html`
    pub dist_dir: PathBuf,
    /// Mounted under `/public`
    pub public_dir: PathBuf,
    /// Searched after `dist_dir` for unmatched paths
    pub node_modules_dir: PathBuf,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            dist_dir: PathBuf::from("dist"),
            public_dir: PathBuf::from("public"),
            node_modules_dir: PathBuf::from("node_modules"),
        }
    }
}

impl StaticFilesConfig {
    /// Directories rooted at `base`. Absolute entries are left alone.
    pub fn rooted_at(&self, base: &Path) -> Self {
        let resolve = |dir: &PathBuf| {
            if dir.is_absolute() {
                dir.clone()
            } else {
                base.join(dir)
            }
        };
        Self {
            dist_dir: resolve(&self.dist_dir),
            public_dir: resolve(&self.public_dir),
            node_modules_dir: resolve(&self.node_modules_dir),
        }
    }

    pub fn index_html(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 5000

[static_files]
dist_dir = "dist"
public_dir = "public"
node_modules_dir = "node_modules"
"#;

impl Config {
    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        toml::from_str(contents).context("invalid config.toml")
    }

    /// Apply the `PORT` environment value. Empty or blank counts as unset.
    pub fn with_port_override(mut self, port: Option<&str>) -> anyhow::Result<Self> {
        if let Some(raw) = port.map(str::trim).filter(|s| !s.is_empty()) {
            self.server.port = raw
                .parse()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?;
        }
        Ok(self)
    }
}

/// Load configuration.
///
/// Search order:
/// 1. `config.toml` next to the executable
/// 2. the embedded default
///
/// `PORT` from the environment wins over either.
pub fn load_config() -> anyhow::Result<Config> {
    let config = match config_path_next_to_exe() {
        Some(path) if path.exists() => {
            tracing::info!("Loading config from: {}", path.display());
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            Config::parse(&contents)?
        }
        Some(path) => {
            tracing::warn!("config.toml not found at: {}", path.display());
            tracing::info!("Using default embedded configuration");
            Config::parse(DEFAULT_CONFIG)?
        }
        None => {
            tracing::info!("Using default embedded configuration");
            Config::parse(DEFAULT_CONFIG)?
        }
    };

    config.with_port_override(std::env::var("PORT").ok().as_deref())
}

fn config_path_next_to_exe() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    exe_path.parent().map(|dir| dir.join("config.toml"))
}
