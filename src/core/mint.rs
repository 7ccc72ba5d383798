//! Mint lookup for transfers that do not carry their mint.

use solana_sdk::pubkey::Pubkey;

use crate::types::TransactionContext;

/// Finds the mint moved between two token accounts.
///
/// Scans pre-balances then post-balances and returns the mint of the first
/// snapshot recorded for either account. Either side may be the one with a
/// snapshot: user wallets and program-owned vaults are recorded independently.
#[must_use]
pub fn resolve_mint(ctx: &TransactionContext, source: u8, destination: u8) -> Option<Pubkey> {
    let source = ctx.account_key(source);
    let destination = ctx.account_key(destination);

    ctx.pre_token_balances
        .iter()
        .chain(&ctx.post_token_balances)
        .find(|balance| {
            let account = ctx.account_key(balance.account_index);
            account.is_some() && (account == source || account == destination)
        })
        .map(|balance| balance.mint)
}
