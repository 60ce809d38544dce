//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! It is immutable afterwards: the shared secret is handed to the
//! [`AuthGate`](crate::application::services::AuthGate) and the bucket name to the
//! [`S3RedirectStore`](crate::infrastructure::storage::S3RedirectStore).
//!
//! ## Required Variables
//!
//! - `KEY` - Shared secret expected on every mutating request
//! - `BUCKET` - Target bucket (required unless `STORE_BACKEND=memory`)
//!
//! ## Optional Variables
//!
//! - `STORE_BACKEND` - `s3` or `memory` (default: `s3`)
//! - `AWS_REGION` - Bucket region (default: `us-east-1`)
//! - `S3_ENDPOINT` - Custom S3 endpoint, e.g. MinIO or LocalStack
//! - `S3_FORCE_PATH_STYLE` - Use path-style addressing (default: `false`)
//! - `SURFACE_BACKEND_ERRORS` - Report store failures as `500` (default: `false`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Which [`RedirectStore`](crate::domain::repositories::RedirectStore) backs the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    S3,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "s3" => Ok(Self::S3),
            "memory" => Ok(Self::Memory),
            other => anyhow::bail!("STORE_BACKEND must be 's3' or 'memory', got '{}'", other),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::S3 => f.write_str("s3"),
            Self::Memory => f.write_str("memory"),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Shared secret compared against the `key` field of every request.
    pub shared_secret: String,
    pub store_backend: StoreBackend,
    /// Bucket holding the redirect objects. Empty for the memory backend.
    pub bucket: String,
    pub region: String,
    pub s3_endpoint: Option<String>,
    pub s3_force_path_style: bool,
    /// When true, a failed `put`/`delete` is reported as `500` instead of `201`.
    pub surface_backend_errors: bool,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("shared_secret", &"***")
            .field("store_backend", &self.store_backend)
            .field("bucket", &self.bucket)
            .field("region", &self.region)
            .field("s3_endpoint", &self.s3_endpoint)
            .field("s3_force_path_style", &self.s3_force_path_style)
            .field("surface_backend_errors", &self.surface_backend_errors)
            .field("listen_addr", &self.listen_addr)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `KEY` is missing, if `BUCKET` is missing for the S3
    /// backend, or if `STORE_BACKEND` is not recognised.
    pub fn from_env() -> Result<Self> {
        let shared_secret = env::var("KEY").context("KEY must be set")?;

        let store_backend = env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "s3".to_string())
            .parse::<StoreBackend>()?;

        let bucket = match store_backend {
            StoreBackend::S3 => {
                env::var("BUCKET").context("BUCKET must be set when STORE_BACKEND is 's3'")?
            }
            StoreBackend::Memory => env::var("BUCKET").unwrap_or_default(),
        };

        let region = env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string());
        let s3_endpoint = env::var("S3_ENDPOINT").ok().filter(|v| !v.is_empty());
        let s3_force_path_style = parse_flag("S3_FORCE_PATH_STYLE");
        let surface_backend_errors = parse_flag("SURFACE_BACKEND_ERRORS");

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            shared_secret,
            store_backend,
            bucket,
            region,
            s3_endpoint,
            s3_force_path_style,
            surface_backend_errors,
            listen_addr,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the shared secret is empty
    /// - the bucket name is empty or malformed for the S3 backend
    /// - `S3_ENDPOINT` is not an `http(s)` URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    pub fn validate(&self) -> Result<()> {
        if self.shared_secret.is_empty() {
            anyhow::bail!("KEY must not be empty");
        }

        if self.store_backend == StoreBackend::S3 {
            if self.bucket.is_empty() {
                anyhow::bail!("BUCKET must not be empty");
            }

            if self.bucket.contains('/') || self.bucket.chars().any(char::is_whitespace) {
                anyhow::bail!("BUCKET must be a bare bucket name, got '{}'", self.bucket);
            }
        }

        if let Some(ref endpoint) = self.s3_endpoint {
            let parsed = url::Url::parse(endpoint)
                .with_context(|| format!("S3_ENDPOINT is not a valid URL: '{}'", endpoint))?;

            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                anyhow::bail!(
                    "S3_ENDPOINT must use http or https, got '{}'",
                    parsed.scheme()
                );
            }
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Shared secret: {}", mask_secret(&self.shared_secret));
        tracing::info!("  Store backend: {}", self.store_backend);

        if self.store_backend == StoreBackend::S3 {
            tracing::info!("  Bucket: {} ({})", self.bucket, self.region);
            if let Some(ref endpoint) = self.s3_endpoint {
                tracing::info!("  S3 endpoint: {}", endpoint);
            }
        }

        tracing::info!("  Surface backend errors: {}", self.surface_backend_errors);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_flag(name: &str) -> bool {
    env::var(name)
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(false)
}

/// Masks a secret for logging, keeping only its length visible.
fn mask_secret(secret: &str) -> String {
    format!("*** ({} chars)", secret.chars().count())
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn test_config() -> Config {
        Config {
            shared_secret: "s3cr3t".to_string(),
            store_backend: StoreBackend::S3,
            bucket: "short-urls".to_string(),
            region: "us-east-1".to_string(),
            s3_endpoint: None,
            s3_force_path_style: false,
            surface_backend_errors: false,
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    fn clear_env() {
        // SAFETY: callers are #[serial], so no concurrent env access
        unsafe {
            for name in [
                "KEY",
                "BUCKET",
                "STORE_BACKEND",
                "AWS_REGION",
                "S3_ENDPOINT",
                "S3_FORCE_PATH_STYLE",
                "SURFACE_BACKEND_ERRORS",
            ] {
                env::remove_var(name);
            }
        }
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("s3cr3t"), "*** (6 chars)");
        assert!(!mask_secret("hunter2").contains("hunter2"));
    }

    #[test]
    fn test_debug_hides_secret() {
        let rendered = format!("{:?}", test_config());
        assert!(!rendered.contains("s3cr3t"));
        assert!(rendered.contains("short-urls"));
    }

    #[test]
    fn test_store_backend_parse() {
        assert_eq!("s3".parse::<StoreBackend>().unwrap(), StoreBackend::S3);
        assert_eq!(
            "MEMORY".parse::<StoreBackend>().unwrap(),
            StoreBackend::Memory
        );
        assert!("redis".parse::<StoreBackend>().is_err());
    }

    #[test]
    fn test_config_validation() {
        let mut config = test_config();
        assert!(config.validate().is_ok());

        config.shared_secret = String::new();
        assert!(config.validate().is_err());
        config.shared_secret = "s3cr3t".to_string();

        config.bucket = String::new();
        assert!(config.validate().is_err());

        config.bucket = "bucket/with/slash".to_string();
        assert!(config.validate().is_err());

        config.store_backend = StoreBackend::Memory;
        assert!(config.validate().is_ok());
        config.store_backend = StoreBackend::S3;
        config.bucket = "short-urls".to_string();

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "0.0.0.0:3000".to_string();

        config.s3_endpoint = Some("ftp://minio.local".to_string());
        assert!(config.validate().is_err());

        config.s3_endpoint = Some("http://localhost:9000".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_requires_key() {
        clear_env();
        unsafe {
            env::set_var("BUCKET", "short-urls");
        }

        assert!(Config::from_env().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_requires_bucket_for_s3() {
        clear_env();
        unsafe {
            env::set_var("KEY", "s3cr3t");
        }

        assert!(Config::from_env().is_err());

        unsafe {
            env::set_var("STORE_BACKEND", "memory");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert!(config.bucket.is_empty());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_reads_flags() {
        clear_env();
        unsafe {
            env::set_var("KEY", "s3cr3t");
            env::set_var("BUCKET", "short-urls");
            env::set_var("S3_FORCE_PATH_STYLE", "1");
            env::set_var("SURFACE_BACKEND_ERRORS", "TRUE");
            env::set_var("S3_ENDPOINT", "");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.shared_secret, "s3cr3t");
        assert_eq!(config.bucket, "short-urls");
        assert_eq!(config.region, "us-east-1");
        assert!(config.s3_force_path_style);
        assert!(config.surface_backend_errors);
        assert!(config.s3_endpoint.is_none());

        clear_env();
    }
}
