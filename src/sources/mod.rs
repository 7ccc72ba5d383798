//! Input sources for acquiring transaction data.
//!
//! Transactions can be fetched from a JSON-RPC node by signature or loaded
//! from a JSON file holding a `getTransaction` result.

pub mod file;
pub mod rpc;

use solana_sdk::signature::Signature;
use std::path::Path;
use std::str::FromStr;

use crate::common::error::{Result, SwapIndexerError};
use crate::types::TransactionContext;

pub use rpc::RpcTransactionSource;

/// Loads the transaction named by `target`.
///
/// An existing file is read as a saved `getTransaction` result. Anything else
/// must be a base58 signature, fetched through `source`.
///
/// # Errors
///
/// Returns [`SwapIndexerError::ConfigError`] if `target` is neither a file nor
/// a valid signature, otherwise whatever loading or fetching reports.
pub async fn load_target(
    source: &RpcTransactionSource,
    target: &str,
) -> Result<TransactionContext> {
    if Path::new(target).is_file() {
        TransactionContext::try_from(&file::load_transaction(target)?)
    } else {
        let signature = Signature::from_str(target).map_err(|e| {
            SwapIndexerError::ConfigError(format!("invalid signature {target}: {e}"))
        })?;
        source.fetch(&signature).await
    }
}
