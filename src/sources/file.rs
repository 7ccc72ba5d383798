use solana_transaction_status::EncodedConfirmedTransactionWithStatusMeta;
use std::fs;
use std::path::Path;

use crate::common::error::Result;

/// Loads a `getTransaction` result saved as JSON.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or a serialization error
/// if it is not a valid encoded transaction.
pub fn load_transaction(
    path: impl AsRef<Path>,
) -> Result<EncodedConfirmedTransactionWithStatusMeta> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
