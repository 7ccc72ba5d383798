//! Data types shared between the decoders and their callers.

pub mod context;
pub mod metadata;
pub mod swap;

pub use context::TransactionContext;
pub use metadata::{InnerInstructionGroup, TokenBalanceInfo};
pub use swap::{Protocol, SwapInfo, TokenInfo};
