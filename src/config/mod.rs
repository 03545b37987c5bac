//! Configuration management

use serde::{Deserialize, Serialize};

/// Widget settings shared by the browser build and the preview host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarConfig {
    /// Session storage key holding the scroll offset between navigations
    #[serde(default = "default_scroll_key")]
    pub scroll_key: String,

    /// Document a directory URL stands for
    #[serde(default = "default_index_document")]
    pub index_document: String,

    /// Element id of the scrollable container
    #[serde(default = "default_container_id")]
    pub container_id: String,

    #[serde(default = "default_toggle_glyph")]
    pub toggle_glyph: String,
}

fn default_scroll_key() -> String {
    "sidebar-scroll".to_string()
}

fn default_index_document() -> String {
    "index.html".to_string()
}

fn default_container_id() -> String {
    "sidebar".to_string()
}

fn default_toggle_glyph() -> String {
    "❱".to_string()
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            scroll_key: default_scroll_key(),
            index_document: default_index_document(),
            container_id: default_container_id(),
            toggle_glyph: default_toggle_glyph(),
        }
    }
}

#[cfg(feature = "server")]
pub use server::{get_config_dir, load_config, Config};

#[cfg(feature = "server")]
mod server {
    use anyhow::Result;
    use serde::Deserialize;
    use std::path::PathBuf;

    use super::SidebarConfig;

    /// Preview host configuration
    #[derive(Debug, Deserialize)]
    pub struct Config {
        #[serde(default = "default_port")]
        pub port: u16,

        /// TOC JSON produced by the book build
        #[serde(default = "default_toc_path")]
        pub toc_path: PathBuf,

        #[serde(default)]
        pub sidebar: SidebarConfig,
    }

    fn default_port() -> u16 {
        3000
    }

    fn default_toc_path() -> PathBuf {
        PathBuf::from("toc.json")
    }

    /// Directory searched for `config.{toml,json,yaml}`
    pub fn get_config_dir() -> PathBuf {
        if let Ok(dir) = std::env::var("TOC_SIDEBAR_CONFIG_DIR") {
            return PathBuf::from(dir);
        }
        PathBuf::from(".")
    }

    pub fn load_config() -> Result<Config> {
        let config_dir = get_config_dir();

        let mut builder = ::config::Config::builder()
            // Start with defaults
            .set_default("port", default_port() as i64)?
            // Load from config file if it exists
            .add_source(
                ::config::File::with_name(&config_dir.join("config").to_string_lossy())
                    .required(false),
            )
            // Override with environment variables (TOC_SIDEBAR_PORT, TOC_SIDEBAR_SIDEBAR__SCROLL_KEY, etc.)
            .add_source(
                ::config::Environment::with_prefix("TOC_SIDEBAR")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        // Explicit precedence: TOC_SIDEBAR_PORT > PORT > config > default
        if let Ok(port) = std::env::var("TOC_SIDEBAR_PORT") {
            if let Ok(port_num) = port.parse::<u16>() {
                builder = builder.set_override("port", port_num as i64)?;
            }
        } else if let Ok(port) = std::env::var("PORT") {
            if let Ok(port_num) = port.parse::<u16>() {
                builder = builder.set_override("port", port_num as i64)?;
            }
        }

        let config = builder.build()?;

        Ok(config.try_deserialize()?)
    }
}
