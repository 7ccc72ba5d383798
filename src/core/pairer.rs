//! Groups the transfers spawned by one outer instruction into swap pairs.

use log::{debug, trace};

use super::assembler::assemble_swap;
use super::matcher::classify;
use super::transfer::decode_transfer;
use crate::types::{Protocol, SwapInfo, TokenInfo, TransactionContext};

/// Collects swaps from every inner group spawned by `outer_index`.
///
/// Decoded transfers are paired strictly in order: the first with the second,
/// the third with the fourth. Both transfers of a pair are consumed even when
/// assembly rejects it, and an unpaired trailing transfer is dropped when its
/// group ends.
#[must_use]
pub fn pair_transfers(
    protocol: Protocol,
    outer_index: usize,
    ctx: &TransactionContext,
) -> Vec<SwapInfo> {
    let mut swaps = Vec::new();

    for group in ctx.inner_instruction_groups(outer_index) {
        let mut pending: Vec<TokenInfo> = Vec::with_capacity(2);

        for (position, instruction) in group.instructions.iter().enumerate() {
            let Some(kind) = classify(instruction, &ctx.account_keys) else {
                continue;
            };

            match decode_transfer(kind, instruction, ctx) {
                Ok(transfer) => pending.push(transfer),
                Err(e) => {
                    debug!(
                        "Skipping {kind:?} at inner #{position} of instruction #{outer_index}: {e}"
                    );
                    continue;
                }
            }

            if let [first, second] = pending[..] {
                match assemble_swap(protocol, first, second, ctx) {
                    Ok(swap) => swaps.push(swap),
                    Err(e) => debug!("Dropping transfer pair in instruction #{outer_index}: {e}"),
                }
                pending.clear();
            }
        }

        if let Some(unpaired) = pending.first() {
            trace!(
                "Discarding unpaired transfer of {} ({}) in instruction #{outer_index}",
                unpaired.mint,
                unpaired.amount
            );
        }
    }

    swaps
}
