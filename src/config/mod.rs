//! Configuration management
//!
//! Precedence for every setting: environment variable, then the JSON config
//! file, then the built-in default. The config file is optional; a missing or
//! unreadable file is not an error.

use serde::Deserialize;
use url::Url;

/// Config file name inside the config directory
const CONFIG_FILE_NAME: &str = "vetclinic.json";

fn default_port() -> u16 {
    8080
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL of the VetClinic backend API, if one is reachable from this
    /// deployment. The UI renders without it; pages that need data show their
    /// placeholder state.
    #[serde(default)]
    pub backend_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            backend_url: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config file {path}: {source}")]
    InvalidFile {
        path: String,
        source: serde_json::Error,
    },
    #[error("invalid backend URL {url}: {source}")]
    InvalidBackendUrl {
        url: String,
        source: url::ParseError,
    },
}

/// Get config directory (VETCLINIC_CONFIG_DIR or platform default)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("VETCLINIC_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join("Library/Application Support/vetclinic");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return std::path::PathBuf::from(xdg).join("vetclinic");
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join(".config/vetclinic");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return std::path::PathBuf::from(appdata).join("vetclinic");
        }
    }

    // Fallback to current directory
    std::path::PathBuf::from(".")
}

/// Read the optional config file, if present and parseable.
fn read_config_file() -> Result<Option<Config>, ConfigError> {
    let path = get_config_dir().join(CONFIG_FILE_NAME);
    let Ok(content) = std::fs::read_to_string(&path) else {
        return Ok(None);
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| ConfigError::InvalidFile {
            path: path.display().to_string(),
            source,
        })
}

/// Load configuration: env vars first, config file second, defaults last.
pub fn load_config() -> Result<Config, ConfigError> {
    let mut config = match read_config_file() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            // A malformed file should not take the UI down; fall back and warn.
            tracing::warn!("Ignoring config file: {}", e);
            Config::default()
        }
    };

    // VETCLINIC_PORT takes precedence over legacy PORT
    if let Some(port) = env_port("VETCLINIC_PORT").or_else(|| env_port("PORT")) {
        config.port = port;
    }

    if let Ok(backend) = std::env::var("VETCLINIC_BACKEND_URL") {
        if !backend.trim().is_empty() {
            config.backend_url = Some(backend);
        }
    }

    // Reject an unparseable backend URL early instead of failing per request.
    if let Some(ref backend) = config.backend_url {
        Url::parse(backend).map_err(|source| ConfigError::InvalidBackendUrl {
            url: backend.clone(),
            source,
        })?;
    }

    Ok(config)
}

fn env_port(var: &str) -> Option<u16> {
    let value = std::env::var(var).ok()?;
    match value.parse() {
        Ok(port) => Some(port),
        Err(_) => {
            tracing::warn!("Ignoring {} = {:?}: not a valid port", var, value);
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        env::remove_var("VETCLINIC_PORT");
        env::remove_var("PORT");
        env::remove_var("VETCLINIC_BACKEND_URL");
        // Point at a directory with no config file
        env::set_var("VETCLINIC_CONFIG_DIR", "/tmp/vetclinic-test-nonexistent");
    }

    #[test]
    #[serial]
    fn test_defaults_without_env_or_file() {
        clear_env();

        let config = load_config().expect("config should load");

        assert_eq!(config.port, 8080);
        assert!(config.backend_url.is_none());
    }

    #[test]
    #[serial]
    fn test_port_env_fallback() {
        clear_env();
        env::set_var("PORT", "3000");

        let config = load_config().expect("config should load");

        env::remove_var("PORT");
        assert_eq!(config.port, 3000, "PORT env var should set config.port");
    }

    #[test]
    #[serial]
    fn test_vetclinic_port_takes_precedence_over_port() {
        clear_env();
        env::set_var("PORT", "3000");
        env::set_var("VETCLINIC_PORT", "8090");

        let config = load_config().expect("config should load");

        env::remove_var("PORT");
        env::remove_var("VETCLINIC_PORT");
        assert_eq!(config.port, 8090);
    }

    #[test]
    #[serial]
    fn test_invalid_port_env_is_ignored() {
        clear_env();
        env::set_var("VETCLINIC_PORT", "not-a-port");

        let config = load_config().expect("config should load");

        env::remove_var("VETCLINIC_PORT");
        assert_eq!(config.port, 8080);
    }

    #[test]
    #[serial]
    fn test_backend_url_env() {
        clear_env();
        env::set_var("VETCLINIC_BACKEND_URL", "http://10.0.0.5:4000/api");

        let config = load_config().expect("config should load");

        env::remove_var("VETCLINIC_BACKEND_URL");
        assert_eq!(
            config.backend_url.as_deref(),
            Some("http://10.0.0.5:4000/api")
        );
    }

    #[test]
    #[serial]
    fn test_invalid_backend_url_is_rejected() {
        clear_env();
        env::set_var("VETCLINIC_BACKEND_URL", "not a url");

        let result = load_config();

        env::remove_var("VETCLINIC_BACKEND_URL");
        assert!(matches!(result, Err(ConfigError::InvalidBackendUrl { .. })));
    }

    #[test]
    #[serial]
    fn test_config_file_is_read() {
        clear_env();
        let dir = std::path::PathBuf::from("/tmp/vetclinic-test-config");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join(CONFIG_FILE_NAME),
            r#"{"port": 9000, "backendUrl": "http://localhost:4000"}"#,
        )
        .unwrap();
        env::set_var("VETCLINIC_CONFIG_DIR", &dir);

        let config = load_config().expect("config should load");

        std::fs::remove_dir_all(&dir).ok();
        assert_eq!(config.port, 9000);
        assert_eq!(config.backend_url.as_deref(), Some("http://localhost:4000"));
    }
}
