//! Read-only view over one transaction's execution trace.

use log::debug;
use solana_sdk::{instruction::CompiledInstruction, pubkey::Pubkey, signature::Signature};
use solana_transaction_status::{
    option_serializer::OptionSerializer, EncodedConfirmedTransactionWithStatusMeta,
    UiInnerInstructions, UiInstruction, UiTransactionTokenBalance,
};
use std::str::FromStr;

use super::metadata::{InnerInstructionGroup, TokenBalanceInfo};
use crate::common::error::{Result, SwapIndexerError};

/// Decimals reported for a mint with no balance snapshot.
pub const UNKNOWN_DECIMALS: u8 = 0;

/// Everything the decoders need to know about a transaction.
///
/// Instructions reference accounts by index into `account_keys`; use
/// [`TransactionContext::account_key`] to resolve them.
#[derive(Debug, Clone, Default)]
pub struct TransactionContext {
    /// First signature of the transaction, when known.
    pub signature: Option<Signature>,
    /// Static account keys followed by loaded writable and read-only addresses.
    pub account_keys: Vec<Pubkey>,
    /// Outer (top-level) instructions.
    pub instructions: Vec<CompiledInstruction>,
    pub inner_instructions: Vec<InnerInstructionGroup>,
    pub pre_token_balances: Vec<TokenBalanceInfo>,
    pub post_token_balances: Vec<TokenBalanceInfo>,
    pub signers: Vec<Pubkey>,
}

impl TransactionContext {
    /// Resolves an account-table index.
    #[must_use]
    pub fn account_key(&self, index: u8) -> Option<&Pubkey> {
        self.account_keys.get(usize::from(index))
    }

    /// Inner instruction groups spawned by the outer instruction at `outer_index`.
    pub fn inner_instruction_groups(
        &self,
        outer_index: usize,
    ) -> impl Iterator<Item = &InnerInstructionGroup> {
        self.inner_instructions
            .iter()
            .filter(move |group| usize::from(group.index) == outer_index)
    }

    #[must_use]
    pub fn is_signer(&self, account: &Pubkey) -> bool {
        self.signers.contains(account)
    }

    /// Decimals for `mint` from the first balance snapshot that mentions it.
    ///
    /// Falls back to [`UNKNOWN_DECIMALS`].
    #[must_use]
    pub fn mint_decimals(&self, mint: &Pubkey) -> u8 {
        self.pre_token_balances
            .iter()
            .chain(&self.post_token_balances)
            .find(|balance| balance.mint == *mint)
            .map_or(UNKNOWN_DECIMALS, |balance| balance.decimals)
    }
}

impl TryFrom<&EncodedConfirmedTransactionWithStatusMeta> for TransactionContext {
    type Error = SwapIndexerError;

    fn try_from(tx: &EncodedConfirmedTransactionWithStatusMeta) -> Result<Self> {
        let transaction = tx.transaction.transaction.decode().ok_or_else(|| {
            SwapIndexerError::TransactionDecode(
                "unsupported transaction encoding, expected base58 or base64".to_string(),
            )
        })?;
        let meta = tx.transaction.meta.as_ref().ok_or_else(|| {
            SwapIndexerError::TransactionDecode("transaction has no status meta".to_string())
        })?;

        let message = &transaction.message;
        let static_keys = message.static_account_keys();
        let num_signers = usize::from(message.header().num_required_signatures);

        let mut account_keys = static_keys.to_vec();
        if let OptionSerializer::Some(loaded) = &meta.loaded_addresses {
            account_keys.extend(parse_pubkeys(&loaded.writable)?);
            account_keys.extend(parse_pubkeys(&loaded.readonly)?);
        }

        let inner_instructions = match &meta.inner_instructions {
            OptionSerializer::Some(groups) => groups.iter().map(convert_inner_group).collect(),
            _ => Vec::new(),
        };

        Ok(Self {
            signature: transaction.signatures.first().cloned(),
            signers: static_keys.iter().take(num_signers).copied().collect(),
            instructions: message.instructions().to_vec(),
            inner_instructions,
            pre_token_balances: convert_token_balances(&meta.pre_token_balances),
            post_token_balances: convert_token_balances(&meta.post_token_balances),
            account_keys,
        })
    }
}

fn parse_pubkeys(keys: &[String]) -> Result<Vec<Pubkey>> {
    keys.iter()
        .map(|key| {
            Pubkey::from_str(key).map_err(|e| {
                SwapIndexerError::TransactionDecode(format!("invalid loaded address {key}: {e}"))
            })
        })
        .collect()
}

fn convert_inner_group(group: &UiInnerInstructions) -> InnerInstructionGroup {
    let instructions = group
        .instructions
        .iter()
        .filter_map(|instruction| match instruction {
            UiInstruction::Compiled(compiled) => match bs58::decode(&compiled.data).into_vec() {
                Ok(data) => Some(CompiledInstruction {
                    program_id_index: compiled.program_id_index,
                    accounts: compiled.accounts.clone(),
                    data,
                }),
                Err(e) => {
                    debug!("Dropping inner instruction with undecodable data: {e}");
                    None
                }
            },
            UiInstruction::Parsed(_) => {
                debug!("Dropping parsed inner instruction in group {}", group.index);
                None
            }
        })
        .collect();

    InnerInstructionGroup {
        index: u16::from(group.index),
        instructions,
    }
}

fn convert_token_balances(
    balances: &OptionSerializer<Vec<UiTransactionTokenBalance>>,
) -> Vec<TokenBalanceInfo> {
    let OptionSerializer::Some(balances) = balances else {
        return Vec::new();
    };

    balances
        .iter()
        .filter_map(|balance| {
            let mint = match Pubkey::from_str(&balance.mint) {
                Ok(mint) => mint,
                Err(e) => {
                    debug!(
                        "Dropping token balance with invalid mint {}: {e}",
                        balance.mint
                    );
                    return None;
                }
            };
            let owner = match &balance.owner {
                OptionSerializer::Some(owner) => Pubkey::from_str(owner).ok(),
                _ => None,
            };

            Some(TokenBalanceInfo {
                account_index: balance.account_index,
                mint,
                owner,
                amount: balance.ui_token_amount.amount.parse().unwrap_or(0),
                decimals: balance.ui_token_amount.decimals,
            })
        })
        .collect()
}
