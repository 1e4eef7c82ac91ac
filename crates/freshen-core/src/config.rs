use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub services: ServicesConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            services: ServicesConfig::default(),
            http: HttpConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the trigger endpoint binds to
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Port the trigger endpoint listens on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    /// Base URL of the article store API
    #[serde(default = "default_store_url")]
    pub store_url: String,
    /// Base URL of the content parser
    #[serde(default = "default_parser_url")]
    pub parser_url: String,
    /// Base URL of the summarizer
    #[serde(default = "default_summarizer_url")]
    pub summarizer_url: String,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            store_url: default_store_url(),
            parser_url: default_parser_url(),
            summarizer_url: default_summarizer_url(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds; unset means requests may wait indefinitely
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5004
}

fn default_store_url() -> String {
    "http://article-store:5003".to_string()
}

fn default_parser_url() -> String {
    "http://content-parser:5001".to_string()
}

fn default_summarizer_url() -> String {
    "http://summarizer:5002".to_string()
}

impl AppConfig {
    /// Load configuration from the default path, or return defaults if absent
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/freshen/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("freshen")
            .join("config.toml")
    }

    /// Socket address string the trigger endpoint should bind
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.bind, self.server.port)
    }
}
