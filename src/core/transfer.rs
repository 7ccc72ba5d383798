//! Decodes matched transfer instructions into [`TokenInfo`] records.

use solana_sdk::{instruction::CompiledInstruction, pubkey::Pubkey};

use super::matcher::{TransferKind, MIN_TRANSFER_DATA_LEN};
use super::mint::resolve_mint;
use crate::common::error::{Result, SwapIndexerError};
use crate::types::{TokenInfo, TransactionContext};

/// Decodes a transfer previously classified as `kind`.
///
/// # Errors
///
/// Returns [`SwapIndexerError::MalformedInstruction`] for truncated data or
/// dangling account references, and [`SwapIndexerError::MintUnresolved`]
/// when a plain transfer's mint cannot be found in the balance snapshots.
pub fn decode_transfer(
    kind: TransferKind,
    instruction: &CompiledInstruction,
    ctx: &TransactionContext,
) -> Result<TokenInfo> {
    let amount = read_amount(&instruction.data)?;

    let mint = match kind {
        TransferKind::Transfer => {
            let source = account_index(instruction, 0)?;
            let destination = account_index(instruction, 1)?;
            let source_account = *account_key(ctx, source)?;
            let destination_account = *account_key(ctx, destination)?;

            resolve_mint(ctx, source, destination).ok_or(SwapIndexerError::MintUnresolved {
                source_account,
                destination_account,
            })?
        }
        // The mint account sits at position 1 in TransferChecked.
        TransferKind::TransferChecked => *account_key(ctx, account_index(instruction, 1)?)?,
    };

    Ok(TokenInfo {
        mint,
        amount,
        decimals: ctx.mint_decimals(&mint),
    })
}

/// Reads the little-endian `u64` amount following the opcode byte.
fn read_amount(data: &[u8]) -> Result<u64> {
    let bytes = data
        .get(1..MIN_TRANSFER_DATA_LEN)
        .and_then(|bytes| <[u8; 8]>::try_from(bytes).ok())
        .ok_or_else(|| {
            SwapIndexerError::MalformedInstruction(format!(
                "transfer data is {} bytes, need at least {MIN_TRANSFER_DATA_LEN}",
                data.len()
            ))
        })?;

    Ok(u64::from_le_bytes(bytes))
}

fn account_index(instruction: &CompiledInstruction, position: usize) -> Result<u8> {
    instruction.accounts.get(position).copied().ok_or_else(|| {
        SwapIndexerError::MalformedInstruction(format!(
            "missing account reference at position {position}"
        ))
    })
}

fn account_key(ctx: &TransactionContext, index: u8) -> Result<&Pubkey> {
    ctx.account_key(index).ok_or_else(|| {
        SwapIndexerError::MalformedInstruction(format!(
            "account index {index} outside table of {} keys",
            ctx.account_keys.len()
        ))
    })
}
