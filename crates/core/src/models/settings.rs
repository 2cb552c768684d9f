use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::errors::CoreError;
use crate::services::account_resolver::DEFAULT_FISCAL_TRANSFER_ACCOUNT;

pub const ENV_BIND_ADDR: &str = "MOVEMENTS_BIND_ADDR";
pub const ENV_UPSTREAM_URL: &str = "MOVEMENTS_UPSTREAM_URL";
pub const ENV_UPSTREAM_TIMEOUT_SECS: &str = "MOVEMENTS_UPSTREAM_TIMEOUT_SECS";
pub const ENV_PRODUCTS_FILE: &str = "MOVEMENTS_PRODUCTS_FILE";
pub const ENV_FISCAL_TRANSFER_ACCOUNT: &str = "MOVEMENTS_FISCAL_TRANSFER_ACCOUNT";
pub const ENV_LOG: &str = "MOVEMENTS_LOG";

/// Runtime configuration for the movements service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,

    /// Base URL of the upstream movements provider (no trailing slash needed).
    pub upstream_base_url: String,

    /// Per-request timeout for upstream calls, in seconds. Always > 0.
    pub upstream_timeout_secs: u64,

    /// Optional JSON file holding the product → account table.
    pub products_file: Option<PathBuf>,

    /// Well-known account used as one side of fiscal transfers.
    pub fiscal_transfer_account: String,

    /// Default tracing filter when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            upstream_base_url: "http://127.0.0.1:9090".to_string(),
            upstream_timeout_secs: 30,
            products_file: None,
            fiscal_transfer_account: DEFAULT_FISCAL_TRANSFER_ACCOUNT.to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Read settings from process environment variables.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup. Unset or blank keys keep
    /// their default value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut settings = Self::default();

        if let Some(addr) = get(ENV_BIND_ADDR) {
            settings.bind_addr = addr
                .parse()
                .map_err(|e| CoreError::Config(format!("{ENV_BIND_ADDR}='{addr}': {e}")))?;
        }

        if let Some(url) = get(ENV_UPSTREAM_URL) {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(CoreError::Config(format!(
                    "{ENV_UPSTREAM_URL}='{url}': expected an http(s) URL"
                )));
            }
            settings.upstream_base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(secs) = get(ENV_UPSTREAM_TIMEOUT_SECS) {
            let parsed: u64 = secs
                .parse()
                .map_err(|e| CoreError::Config(format!("{ENV_UPSTREAM_TIMEOUT_SECS}='{secs}': {e}")))?;
            if parsed == 0 {
                return Err(CoreError::Config(format!(
                    "{ENV_UPSTREAM_TIMEOUT_SECS} must be greater than zero"
                )));
            }
            settings.upstream_timeout_secs = parsed;
        }

        settings.products_file = get(ENV_PRODUCTS_FILE).map(PathBuf::from);

        if let Some(account) = get(ENV_FISCAL_TRANSFER_ACCOUNT) {
            settings.fiscal_transfer_account = account;
        }

        if let Some(filter) = get(ENV_LOG) {
            settings.log_filter = filter;
        }

        Ok(settings)
    }
}
