use solana_sdk::{instruction::CompiledInstruction, pubkey::Pubkey};

/// A token balance snapshot recorded before or after execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBalanceInfo {
    /// Index of the token account in the transaction's account list.
    pub account_index: u8,
    /// The mint address of the token.
    pub mint: Pubkey,
    /// The owner of the token account, when the RPC node reported one.
    pub owner: Option<Pubkey>,
    /// Raw token amount in base units.
    pub amount: u64,
    pub decimals: u8,
}

/// Inner instructions executed on behalf of one outer instruction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InnerInstructionGroup {
    /// Index of the outer instruction that spawned this group.
    pub index: u16,
    pub instructions: Vec<CompiledInstruction>,
}
