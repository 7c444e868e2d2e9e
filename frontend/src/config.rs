//! Environment-derived configuration
//!
//! All required settings are validated once at startup and carried in an
//! explicit [`Config`] value; nothing re-reads the environment afterwards.
//! Changing any of these inputs requires a process restart.

use std::env;

use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use thiserror::Error;

/// Errors raised while resolving the configuration from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more required environment variables are absent or empty
    #[error("the following environment variables are required but not set: {}", .0.join(", "))]
    MissingVariables(Vec<String>),
    /// `S3_ENDPOINT_PORT` is set but is not a port number
    #[error("S3_ENDPOINT_PORT must be a port number, received '{0}'")]
    InvalidPort(String),
}

/// Validated settings for the memes frontend
///
/// Built once in `main` and shared read-only across requests; there is no
/// lazy module-level cache.
#[derive(Debug, Clone)]
pub struct Config {
    /// Storage hostname, without protocol or port
    s3_endpoint: String,
    s3_endpoint_port: u16,
    s3_access_key: String,
    s3_secret_key: String,
    s3_bucket_name: String,
    /// Backend base URL, including protocol and port
    db_client_endpoint: String,
    // The docker-compose Minio is plaintext while the in-cluster tenant is
    // TLS, so this flag is read verbatim and never inferred.
    use_ssl: bool,
}

fn read_required(name: &str, missing: &mut Vec<String>) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => {
            missing.push(name.to_string());
            None
        }
    }
}

impl Config {
    /// Reads and validates every required environment variable
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVariables`] naming *every* absent or
    /// empty input, or [`ConfigError::InvalidPort`] when `S3_ENDPOINT_PORT`
    /// is not a port number. Callers treat either as fatal: a partially
    /// configured process cannot safely serve any request.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut missing = Vec::new();

        let s3_endpoint = read_required("S3_ENDPOINT", &mut missing);
        let s3_endpoint_port = read_required("S3_ENDPOINT_PORT", &mut missing);
        let s3_access_key = read_required("S3_ACCESS_KEY", &mut missing);
        let s3_secret_key = read_required("S3_SECRET_KEY", &mut missing);
        let s3_bucket_name = read_required("S3_BUCKET_NAME", &mut missing);
        let db_client_endpoint = read_required("DB_CLIENT_ENDPOINT", &mut missing);
        let use_ssl = read_required("USE_SSL", &mut missing);

        let (
            Some(s3_endpoint),
            Some(port_raw),
            Some(s3_access_key),
            Some(s3_secret_key),
            Some(s3_bucket_name),
            Some(db_client_endpoint),
            Some(use_ssl_raw),
        ) = (
            s3_endpoint,
            s3_endpoint_port,
            s3_access_key,
            s3_secret_key,
            s3_bucket_name,
            db_client_endpoint,
            use_ssl,
        )
        else {
            return Err(ConfigError::MissingVariables(missing));
        };

        let s3_endpoint_port: u16 = port_raw
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port_raw.clone()))?;

        Ok(Self {
            s3_endpoint,
            s3_endpoint_port,
            s3_access_key,
            s3_secret_key,
            s3_bucket_name,
            db_client_endpoint,
            use_ssl: use_ssl_raw == "true",
        })
    }

    /// Base URL of the meme backend
    #[must_use]
    pub fn backend_base_url(&self) -> &str {
        &self.db_client_endpoint
    }

    /// Validated bucket name
    #[must_use]
    pub fn bucket_name(&self) -> &str {
        &self.s3_bucket_name
    }

    /// Whether the storage endpoint speaks TLS
    #[must_use]
    pub const fn use_ssl(&self) -> bool {
        self.use_ssl
    }

    /// S3 service configuration for the Minio-compatible endpoint
    ///
    /// Path-style addressing is forced because Minio does not serve
    /// virtual-hosted buckets.
    #[must_use]
    pub fn s3_client_config(&self) -> aws_sdk_s3::Config {
        let scheme = if self.use_ssl { "https" } else { "http" };
        let credentials = Credentials::new(
            self.s3_access_key.clone(),
            self.s3_secret_key.clone(),
            None,
            None,
            "memes-frontend",
        );

        aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .endpoint_url(format!(
                "{scheme}://{}:{}",
                self.s3_endpoint, self.s3_endpoint_port
            ))
            .region(Region::new("us-east-1"))
            .credentials_provider(credentials)
            .force_path_style(true)
            .build()
    }
}
