//! Indexer configuration and its builder.

use solana_sdk::commitment_config::CommitmentConfig;
use std::env;
use std::str::FromStr;

use crate::common::error::{Result, SwapIndexerError};
use crate::types::Protocol;

pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
pub const DEFAULT_COMMITMENT: &str = "confirmed";

/// Validated indexer configuration.
#[derive(Debug, Clone)]
pub struct SwapIndexerConfig {
    /// JSON-RPC endpoint used to fetch transactions.
    pub rpc_url: String,
    pub commitment: CommitmentConfig,
    /// Protocols whose instructions are decoded.
    pub protocols: Vec<Protocol>,
}

impl SwapIndexerConfig {
    /// Loads configuration from the environment, reading `.env` first if present.
    ///
    /// Recognized variables: `RPC_URL`, `COMMITMENT`, `SWAP_PROTOCOLS`
    /// (comma-separated protocol names).
    ///
    /// # Errors
    ///
    /// Returns [`SwapIndexerError::ConfigError`] for invalid values.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut builder = SwapIndexerConfigBuilder::new();
        if let Ok(rpc_url) = env::var("RPC_URL") {
            builder = builder.with_rpc(rpc_url);
        }
        if let Ok(commitment) = env::var("COMMITMENT") {
            builder = builder.with_commitment(commitment);
        }
        if let Ok(protocols) = env::var("SWAP_PROTOCOLS") {
            let protocols = protocols
                .split(',')
                .filter(|name| !name.trim().is_empty())
                .map(Protocol::from_str)
                .collect::<Result<Vec<_>>>()?;
            builder = builder.with_protocols(protocols);
        }

        builder.build()
    }
}

/// Builder for [`SwapIndexerConfig`].
#[derive(Debug, Clone, Default)]
pub struct SwapIndexerConfigBuilder {
    rpc_url: Option<String>,
    commitment: Option<String>,
    protocols: Option<Vec<Protocol>>,
}

impl SwapIndexerConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rpc(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = Some(rpc_url.into());
        self
    }

    /// Sets the commitment level (`processed`, `confirmed` or `finalized`).
    #[must_use]
    pub fn with_commitment(mut self, commitment: impl Into<String>) -> Self {
        self.commitment = Some(commitment.into());
        self
    }

    #[must_use]
    pub fn with_protocols(mut self, protocols: impl IntoIterator<Item = Protocol>) -> Self {
        self.protocols = Some(protocols.into_iter().collect());
        self
    }

    /// Validates the settings and builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SwapIndexerError::ConfigError`] if the RPC URL is empty or not
    /// http(s), the commitment is unknown, or the protocol list is empty.
    pub fn build(self) -> Result<SwapIndexerConfig> {
        let rpc_url = self
            .rpc_url
            .unwrap_or_else(|| DEFAULT_RPC_URL.to_string())
            .trim()
            .to_string();
        if rpc_url.is_empty() {
            return Err(SwapIndexerError::ConfigError(
                "RPC URL cannot be empty".to_string(),
            ));
        }
        if !rpc_url.starts_with("http://") && !rpc_url.starts_with("https://") {
            return Err(SwapIndexerError::ConfigError(format!(
                "RPC URL must use http or https: {rpc_url}"
            )));
        }

        let commitment = self.commitment.as_deref().unwrap_or(DEFAULT_COMMITMENT);
        let commitment = CommitmentConfig::from_str(commitment.trim()).map_err(|e| {
            SwapIndexerError::ConfigError(format!("Invalid commitment {commitment}: {e}"))
        })?;

        let protocols = self.protocols.unwrap_or_else(|| Protocol::ALL.to_vec());
        if protocols.is_empty() {
            return Err(SwapIndexerError::ConfigError(
                "At least one protocol must be enabled".to_string(),
            ));
        }

        Ok(SwapIndexerConfig {
            rpc_url,
            commitment,
            protocols,
        })
    }
}
