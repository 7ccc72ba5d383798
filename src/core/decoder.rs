//! Protocol-level entry points: capability check and decode.

use log::trace;
use solana_sdk::{instruction::CompiledInstruction, pubkey::Pubkey};

use super::pairer::pair_transfers;
use crate::common::error::{Result, SwapIndexerError};
use crate::types::{Protocol, SwapInfo, TransactionContext};

/// Shared contract of every protocol swap decoder.
pub trait SwapDecoder {
    /// Whether the instruction's program belongs to this protocol.
    fn can_handle(&self, instruction: &CompiledInstruction, account_keys: &[Pubkey]) -> bool;

    /// Reconstructs the swaps performed by the outer instruction at `outer_index`.
    ///
    /// # Errors
    ///
    /// Returns [`SwapIndexerError::NoSwapsFound`] if no transfer pair in the
    /// instruction's inner groups formed a valid swap.
    fn decode(
        &self,
        instruction: &CompiledInstruction,
        outer_index: usize,
        ctx: &TransactionContext,
    ) -> Result<Vec<SwapInfo>>;
}

impl SwapDecoder for Protocol {
    fn can_handle(&self, instruction: &CompiledInstruction, account_keys: &[Pubkey]) -> bool {
        account_keys
            .get(usize::from(instruction.program_id_index))
            .is_some_and(|program_id| self.program_ids().contains(program_id))
    }

    fn decode(
        &self,
        instruction: &CompiledInstruction,
        outer_index: usize,
        ctx: &TransactionContext,
    ) -> Result<Vec<SwapInfo>> {
        trace!(
            "Decoding {self} instruction #{outer_index} with {} accounts",
            instruction.accounts.len()
        );

        let swaps = pair_transfers(*self, outer_index, ctx);
        if swaps.is_empty() {
            return Err(SwapIndexerError::NoSwapsFound {
                protocol: *self,
                instruction_index: outer_index,
            });
        }

        Ok(swaps)
    }
}
