//! Binary-signature classifiers for SPL Token transfer instructions.

use solana_sdk::{instruction::CompiledInstruction, pubkey::Pubkey};

use super::programs::{is_token_program, TOKEN_PROGRAM_ID};

/// `TokenInstruction::Transfer` opcode.
pub const TRANSFER_OPCODE: u8 = 3;
/// `TokenInstruction::TransferChecked` opcode.
pub const TRANSFER_CHECKED_OPCODE: u8 = 12;
/// Opcode byte plus a little-endian `u64` amount.
pub const MIN_TRANSFER_DATA_LEN: usize = 9;

const TRANSFER_MIN_ACCOUNTS: usize = 3;
const TRANSFER_CHECKED_MIN_ACCOUNTS: usize = 4;

/// Shape of a recognized transfer instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    /// `Transfer`: source, destination, authority. Mint is not carried.
    Transfer,
    /// `TransferChecked`: source, mint, destination, authority.
    TransferChecked,
}

fn program_id<'a>(
    instruction: &CompiledInstruction,
    account_keys: &'a [Pubkey],
) -> Option<&'a Pubkey> {
    account_keys.get(usize::from(instruction.program_id_index))
}

/// Whether `instruction` is a plain SPL Token `Transfer`.
#[must_use]
pub fn is_transfer(instruction: &CompiledInstruction, account_keys: &[Pubkey]) -> bool {
    if instruction.accounts.len() < TRANSFER_MIN_ACCOUNTS
        || instruction.data.len() < MIN_TRANSFER_DATA_LEN
    {
        return false;
    }

    program_id(instruction, account_keys) == Some(&TOKEN_PROGRAM_ID)
        && instruction.data[0] == TRANSFER_OPCODE
}

/// Whether `instruction` is a `TransferChecked` on SPL Token or Token-2022.
#[must_use]
pub fn is_transfer_checked(instruction: &CompiledInstruction, account_keys: &[Pubkey]) -> bool {
    if instruction.accounts.len() < TRANSFER_CHECKED_MIN_ACCOUNTS
        || instruction.data.len() < MIN_TRANSFER_DATA_LEN
    {
        return false;
    }

    program_id(instruction, account_keys).is_some_and(is_token_program)
        && instruction.data[0] == TRANSFER_CHECKED_OPCODE
}

/// Classifies an inner instruction, trying the plain transfer shape first.
#[must_use]
pub fn classify(
    instruction: &CompiledInstruction,
    account_keys: &[Pubkey],
) -> Option<TransferKind> {
    if is_transfer(instruction, account_keys) {
        Some(TransferKind::Transfer)
    } else if is_transfer_checked(instruction, account_keys) {
        Some(TransferKind::TransferChecked)
    } else {
        None
    }
}
