//! Turns a pair of decoded transfers into an oriented [`SwapInfo`].

use solana_sdk::pubkey::Pubkey;

use crate::common::error::Result;
use crate::types::{Protocol, SwapInfo, TokenInfo, TransactionContext};

/// Builds a swap from two transfers in encounter order.
///
/// The first transfer is treated as the initiator's input when the first
/// pre-balance holding its mint is owned by a signer. In every other case the
/// second transfer is assumed to be the input. That fallback is an
/// approximation: failing to confirm the first leg does not prove the second
/// one came from the initiator.
///
/// # Errors
///
/// Returns [`crate::SwapIndexerError::DegenerateSwap`] when both transfers move
/// the same mint.
pub fn assemble_swap(
    protocol: Protocol,
    first: TokenInfo,
    second: TokenInfo,
    ctx: &TransactionContext,
) -> Result<SwapInfo> {
    if is_signer_funded(&first.mint, ctx) {
        SwapInfo::try_new(protocol, first, second)
    } else {
        SwapInfo::try_new(protocol, second, first)
    }
}

/// Only the first pre-balance with a matching mint is consulted.
fn is_signer_funded(mint: &Pubkey, ctx: &TransactionContext) -> bool {
    ctx.pre_token_balances
        .iter()
        .find(|balance| balance.mint == *mint)
        .and_then(|balance| balance.owner.as_ref())
        .is_some_and(|owner| ctx.is_signer(owner))
}
