//! Error types for swap decoding and the surrounding indexer plumbing.

use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

use crate::types::swap::Protocol;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SwapIndexerError>;

#[derive(Debug, Error)]
pub enum SwapIndexerError {
    /// Instruction data or account references are too short or out of range.
    #[error("Malformed instruction: {0}")]
    MalformedInstruction(String),

    /// No balance snapshot references either side of a plain transfer.
    #[error("Could not resolve mint for transfer {source_account} -> {destination_account}")]
    MintUnresolved {
        source_account: Pubkey,
        destination_account: Pubkey,
    },

    /// Both legs of a transfer pair move the same mint.
    #[error("Both transfers move the same mint {mint}")]
    DegenerateSwap { mint: Pubkey },

    /// The instruction matched a protocol but yielded no swap.
    #[error("No valid {protocol} swaps found in instruction #{instruction_index}")]
    NoSwapsFound {
        protocol: Protocol,
        instruction_index: usize,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Failed to decode transaction: {0}")]
    TransactionDecode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
