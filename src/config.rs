//! Configuration for `imgurl.toml`.
//!
//! The config file is optional; every section falls back to its defaults.
//! CLI flags override config values, config overrides defaults.
//!
//! # Example
//!
//! ```toml
//! [urls]
//! base_url = "http://localhost:8000"   # Base for web URLs
//!
//! [serve]
//! interface = "127.0.0.1"              # Network interface (127.0.0.1 = localhost only)
//! port = 8000                          # HTTP port number (0 picks a free port)
//!
//! [viewer]
//! output = "image_viewer.html"         # Default viewer output path
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    net::{IpAddr, Ipv4Addr},
    path::{Path, PathBuf},
};

/// Root configuration structure representing imgurl.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL formatter settings
    pub urls: UrlsConfig,

    /// Local server settings
    pub serve: ServeConfig,

    /// Viewer output settings
    pub viewer: ViewerConfig,
}

impl Config {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
    }
}

/// `[urls]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlsConfig {
    /// Base URL joined with the served path in web URLs.
    pub base_url: String,
}

impl Default for UrlsConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }
}

/// `[serve]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Network interface to bind.
    /// - `127.0.0.1` (default): localhost only
    /// - `0.0.0.0`: all interfaces (LAN accessible)
    pub interface: IpAddr,

    /// HTTP port number. 0 picks a free port.
    pub port: u16,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            interface: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8000,
        }
    }
}

/// `[viewer]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Default output path for the generated viewer page.
    pub output: PathBuf,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("image_viewer.html"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Config {
        toml::from_str(raw).unwrap()
    }

    #[test]
    fn test_config_defaults() {
        let config = parse("");

        assert_eq!(config.urls.base_url, "http://localhost:8000");
        assert_eq!(config.serve.interface, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.serve.port, 8000);
        assert_eq!(config.viewer.output, PathBuf::from("image_viewer.html"));
    }

    #[test]
    fn test_config_sections() {
        let config = parse(
            "[urls]\nbase_url = \"http://box:9000\"\n\
             [serve]\ninterface = \"0.0.0.0\"\nport = 9000\n\
             [viewer]\noutput = \"out.html\"",
        );

        assert_eq!(config.urls.base_url, "http://box:9000");
        assert_eq!(config.serve.interface, IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)));
        assert_eq!(config.serve.port, 9000);
        assert_eq!(config.viewer.output, PathBuf::from("out.html"));
    }

    #[test]
    fn test_config_partial_override() {
        let config = parse("[serve]\nport = 3000");

        assert_eq!(config.serve.port, 3000);
        // interface and the other sections keep their defaults
        assert_eq!(config.serve.interface, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.urls.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_config_load_missing_file() {
        let config = Config::load(Path::new("/no/such/imgurl.toml")).unwrap();
        assert_eq!(config.serve.port, 8000);
    }

    #[test]
    fn test_config_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("imgurl.toml");
        fs::write(&path, "[serve\nport = ").unwrap();

        assert!(Config::load(&path).is_err());
    }
}
