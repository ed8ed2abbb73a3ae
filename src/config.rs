use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Deployment environment, selects the CORS origin list and client base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => bail!("unknown environment '{}', expected development or production", other),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub development_origins: Vec<String>,
    pub production_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            development_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:5173".to_string(),
            ],
            production_origins: vec!["https://growthproai-dashboard.vercel.app".to_string()],
        }
    }
}

/// Artificial latency per endpoint, in milliseconds.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DelayConfig {
    pub business_data_ms: u64,
    pub regenerate_headline_ms: u64,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            business_data_ms: 1000,
            regenerate_headline_ms: 800,
        }
    }
}

impl DelayConfig {
    pub fn business_data(&self) -> Duration {
        Duration::from_millis(self.business_data_ms)
    }

    pub fn regenerate_headline(&self) -> Duration {
        Duration::from_millis(self.regenerate_headline_ms)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Fixed seed for reproducible output. Entropy-seeded when absent.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub development_api_url: String,
    pub production_api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            development_api_url: "http://localhost:3001".to_string(),
            production_api_url: "https://growthproai-backend.onrender.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(skip)]
    pub environment: Environment,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub delays: DelayConfig,
    pub generator: GeneratorConfig,
    pub client: ClientConfig,
}

impl AppConfig {
    /// Load `config.toml` (or `$DASHBOARD_CONFIG`) and apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = std::env::var("DASHBOARD_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut config = Self::from_file(&path)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// A missing file yields the built-in defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(env) = lookup("APP_ENV") {
            self.environment = env.parse()?;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got '{}'", port))?;
        }
        if let Some(url) = lookup("DASHBOARD_API_URL") {
            match self.environment {
                Environment::Development => self.client.development_api_url = url,
                Environment::Production => self.client.production_api_url = url,
            }
        }
        Ok(())
    }

    pub fn allowed_origins(&self) -> &[String] {
        match self.environment {
            Environment::Development => &self.cors.development_origins,
            Environment::Production => &self.cors.production_origins,
        }
    }

    pub fn api_url(&self) -> &str {
        match self.environment {
            Environment::Development => &self.client.development_api_url,
            Environment::Production => &self.client.production_api_url,
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
