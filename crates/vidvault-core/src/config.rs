//! Configuration module
//!
//! Everything the gateway needs is read from the environment once at startup.
//! A `.env` file in the working directory is honoured.

use std::env;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_MAX_UPLOAD_SIZE_BYTES, DEFAULT_SERVER_PORT, DEFAULT_UPLOADS_DIR};

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    /// Storage root holding every uploaded file.
    pub uploads_dir: PathBuf,
    pub max_upload_size_bytes: u64,
    pub cors_origins: Vec<String>,
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_SERVER_PORT,
            uploads_dir: PathBuf::from(DEFAULT_UPLOADS_DIR),
            max_upload_size_bytes: DEFAULT_MAX_UPLOAD_SIZE_BYTES,
            cors_origins: vec!["*".to_string()],
            environment: "development".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            None => DEFAULT_SERVER_PORT,
        };

        let uploads_dir = lookup("UPLOADS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOADS_DIR));

        let max_upload_size_bytes = match lookup("MAX_UPLOAD_SIZE_BYTES") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("MAX_UPLOAD_SIZE_BYTES must be a valid number"))?,
            None => DEFAULT_MAX_UPLOAD_SIZE_BYTES,
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        Ok(Self {
            server_port,
            uploads_dir,
            max_upload_size_bytes,
            cors_origins,
            environment,
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn uploads_dir(&self) -> &Path {
        &self.uploads_dir
    }

    pub fn max_upload_size_bytes(&self) -> u64 {
        self.max_upload_size_bytes
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.cors_origins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.server_port(), 8000);
        assert_eq!(config.uploads_dir(), Path::new("/railway/data/uploads"));
        assert_eq!(config.max_upload_size_bytes(), DEFAULT_MAX_UPLOAD_SIZE_BYTES);
        assert_eq!(config.cors_origins(), ["*".to_string()]);
        assert!(!config.is_production());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "9100"),
            ("UPLOADS_DIR", "/tmp/vids"),
            ("MAX_UPLOAD_SIZE_BYTES", "2048"),
            ("CORS_ORIGINS", "https://a.example, https://b.example"),
            ("APP_ENV", "prod"),
        ]))
        .unwrap();
        assert_eq!(config.server_port(), 9100);
        assert_eq!(config.uploads_dir(), Path::new("/tmp/vids"));
        assert_eq!(config.max_upload_size_bytes(), 2048);
        assert_eq!(
            config.cors_origins(),
            ["https://a.example".to_string(), "https://b.example".to_string()]
        );
        assert!(config.is_production());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
