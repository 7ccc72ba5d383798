//! Swap event extraction for Solana DEX transactions.
//!
//! Given an outer instruction of a supported DEX program and the transaction's
//! execution trace, the decoders pair the SPL Token transfers it spawned and
//! reconstruct which token the signer gave up and which one it received.
//!
//! ```no_run
//! use solana_swap_indexer::{SwapDecoderRegistry, TransactionContext};
//!
//! # fn run(ctx: TransactionContext) {
//! let registry = SwapDecoderRegistry::default();
//! for swap in registry.decode_transaction(&ctx) {
//!     println!("{} -> {}", swap.token_in().mint, swap.token_out().mint);
//! }
//! # }
//! ```

pub mod common;
pub mod config;
pub mod core;
pub mod sources;
pub mod types;
pub mod utils;

pub use crate::common::error::{Result, SwapIndexerError};
pub use crate::config::{SwapIndexerConfig, SwapIndexerConfigBuilder};
pub use crate::core::{SwapDecoder, SwapDecoderRegistry};
pub use crate::sources::RpcTransactionSource;
pub use crate::types::{
    InnerInstructionGroup, Protocol, SwapInfo, TokenBalanceInfo, TokenInfo, TransactionContext,
};
