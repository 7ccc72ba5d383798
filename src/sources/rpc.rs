//! JSON-RPC transaction source.

use solana_client::{nonblocking::rpc_client::RpcClient, rpc_config::RpcTransactionConfig};
use solana_sdk::{commitment_config::CommitmentConfig, signature::Signature};
use solana_transaction_status::{EncodedConfirmedTransactionWithStatusMeta, UiTransactionEncoding};

use crate::common::error::{Result, SwapIndexerError};
use crate::config::SwapIndexerConfig;
use crate::types::TransactionContext;
use crate::utils::logging::{self, LogLevel};

/// Fetches confirmed transactions by signature.
pub struct RpcTransactionSource {
    client: RpcClient,
    commitment: CommitmentConfig,
}

impl RpcTransactionSource {
    /// Creates a source for the RPC endpoint and commitment in `config`.
    #[must_use]
    pub fn new(config: &SwapIndexerConfig) -> Self {
        Self {
            client: RpcClient::new_with_commitment(config.rpc_url.clone(), config.commitment),
            commitment: config.commitment,
        }
    }

    /// Fetches the binary-encoded transaction with its status meta.
    ///
    /// # Errors
    ///
    /// Returns [`SwapIndexerError::Rpc`] if the request fails or the
    /// transaction is unknown to the node.
    pub async fn fetch_encoded(
        &self,
        signature: &Signature,
    ) -> Result<EncodedConfirmedTransactionWithStatusMeta> {
        let config = RpcTransactionConfig {
            encoding: Some(UiTransactionEncoding::Base64),
            commitment: Some(self.commitment),
            max_supported_transaction_version: Some(0),
        };

        logging::log(
            LogLevel::Debug,
            &format!("Fetching transaction {signature}"),
        );

        self.client
            .get_transaction_with_config(signature, config)
            .await
            .map_err(|e| SwapIndexerError::Rpc(format!("getTransaction {signature}: {e}")))
    }

    /// Fetches a transaction and converts it into a decoding context.
    ///
    /// # Errors
    ///
    /// Propagates RPC failures and [`SwapIndexerError::TransactionDecode`]
    /// from the conversion.
    pub async fn fetch(&self, signature: &Signature) -> Result<TransactionContext> {
        let encoded = self.fetch_encoded(signature).await?;
        TransactionContext::try_from(&encoded)
    }
}
