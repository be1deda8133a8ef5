use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

/// Где слушать и откуда раздавать собранный фронтенд
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            static_dir: "dist".into(),
        }
    }
}

/// Внешний сервис генерации, на который уходят запросы `/api/*`
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// `/api/generate` -> `{base_url}/generate`
    pub strip_api_prefix: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".into(),
            timeout_secs: 90,
            strip_api_prefix: true,
        }
    }
}

impl Config {
    pub fn listen_addr(&self) -> anyhow::Result<SocketAddr> {
        let raw = format!("{}:{}", self.server.host, self.server.port);
        raw.parse()
            .map_err(|e| anyhow::anyhow!("invalid [server] host/port '{}': {}", raw, e))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let base = self.upstream.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            anyhow::bail!(
                "[upstream] base_url must start with http:// or https://, got '{}'",
                base
            );
        }
        if self.upstream.timeout_secs == 0 {
            anyhow::bail!("[upstream] timeout_secs must be greater than zero");
        }
        self.listen_addr()?;
        Ok(())
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[upstream]
base_url = "http://127.0.0.1:8000"
timeout_secs = 90
strip_api_prefix = true
"#;

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (build.rs copies it there)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents)
                    .map_err(|e| anyhow::anyhow!("{}: {}", config_path.display(), e));
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.upstream.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.upstream.timeout_secs, 90);
        assert!(config.upstream.strip_api_prefix);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = parse_config(
            r#"
            [upstream]
            base_url = "https://paths.example.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.upstream.base_url, "https://paths.example.com");
        assert_eq!(config.upstream.timeout_secs, 90);
        assert!(config.upstream.strip_api_prefix);
        assert_eq!(config.server.host, "0.0.0.0");

        let empty = parse_config("").unwrap();
        assert_eq!(empty.listen_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(parse_config("[upstream]\nbase_url = \"localhost:8000\"").is_err());
        assert!(parse_config("[upstream]\ntimeout_secs = 0").is_err());
        assert!(parse_config("[server]\nhost = \"not a host\"").is_err());
    }
}
