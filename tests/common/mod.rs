#![allow(dead_code)]

use base64::{engine::general_purpose::STANDARD, Engine};
use serde_json::{json, Value};
use solana_sdk::{
    hash::Hash,
    instruction::CompiledInstruction,
    message::{Message, VersionedMessage},
    pubkey::Pubkey,
    signature::Signature,
    transaction::VersionedTransaction,
};
use solana_swap_indexer::core::matcher::{TRANSFER_CHECKED_OPCODE, TRANSFER_OPCODE};
use solana_swap_indexer::core::programs::{RAYDIUM_AMM_V4_PROGRAM_ID, TOKEN_PROGRAM_ID};

pub fn transfer_data(opcode: u8, amount: u64) -> Vec<u8> {
    let mut data = vec![opcode];
    data.extend_from_slice(&amount.to_le_bytes());
    data
}

pub fn plain_transfer(
    token_program: u8,
    source: u8,
    destination: u8,
    authority: u8,
    amount: u64,
) -> CompiledInstruction {
    CompiledInstruction {
        program_id_index: token_program,
        accounts: vec![source, destination, authority],
        data: transfer_data(TRANSFER_OPCODE, amount),
    }
}

pub fn checked_transfer(
    token_program: u8,
    source: u8,
    mint: u8,
    destination: u8,
    authority: u8,
    amount: u64,
    decimals: u8,
) -> CompiledInstruction {
    let mut data = transfer_data(TRANSFER_CHECKED_OPCODE, amount);
    data.push(decimals);
    CompiledInstruction {
        program_id_index: token_program,
        accounts: vec![source, mint, destination, authority],
        data,
    }
}

/// A Raydium swap of 100 units of mint A for 250 units of mint B.
///
/// Account table:
/// 0 signer, 1 user token A, 2 user token B, 3 vault A, 4 vault B,
/// 5 Raydium AMM v4, 6 SPL Token, 7 mint B.
pub struct SwapFixture {
    pub signature: Signature,
    pub signer: Pubkey,
    pub mint_a: Pubkey,
    pub mint_b: Pubkey,
    pub account_keys: Vec<Pubkey>,
    /// Owner recorded for the user's mint-A token account.
    pub input_owner: Pubkey,
}

impl SwapFixture {
    pub fn new(signer_owns_input: bool) -> Self {
        let signer = Pubkey::new_unique();
        let mint_b = Pubkey::new_unique();
        let mut account_keys = vec![signer];
        account_keys.extend((0..4).map(|_| Pubkey::new_unique()));
        account_keys.extend([RAYDIUM_AMM_V4_PROGRAM_ID, TOKEN_PROGRAM_ID, mint_b]);

        Self {
            signature: Signature::new_unique(),
            signer,
            mint_a: Pubkey::new_unique(),
            mint_b,
            account_keys,
            input_owner: if signer_owns_input {
                signer
            } else {
                Pubkey::new_unique()
            },
        }
    }

    pub fn outer_instruction(&self) -> CompiledInstruction {
        CompiledInstruction {
            program_id_index: 5,
            accounts: vec![1, 2, 3, 4, 0],
            data: transfer_data(9, 100),
        }
    }

    pub fn inner_instructions(&self) -> Vec<CompiledInstruction> {
        vec![
            plain_transfer(6, 1, 3, 0, 100),
            checked_transfer(6, 4, 7, 2, 0, 250, 9),
        ]
    }

    /// Base64 wire encoding of the transaction.
    pub fn encoded_transaction(&self) -> String {
        let message = Message::new_with_compiled_instructions(
            1,
            0,
            3,
            self.account_keys.clone(),
            Hash::default(),
            vec![self.outer_instruction()],
        );
        let transaction = VersionedTransaction {
            signatures: vec![self.signature],
            message: VersionedMessage::Legacy(message),
        };
        STANDARD.encode(bincode::serialize(&transaction).unwrap())
    }

    fn token_balance(
        &self,
        account_index: u8,
        mint: &Pubkey,
        owner: &Pubkey,
        amount: u64,
        decimals: u8,
    ) -> Value {
        json!({
            "accountIndex": account_index,
            "mint": mint.to_string(),
            "owner": owner.to_string(),
            "programId": TOKEN_PROGRAM_ID.to_string(),
            "uiTokenAmount": {
                "uiAmount": null,
                "decimals": decimals,
                "amount": amount.to_string(),
                "uiAmountString": "0"
            }
        })
    }

    /// The `getTransaction` result as returned by a JSON-RPC node.
    pub fn rpc_result(&self) -> Value {
        let pool_authority = self.account_keys[3];
        let inner: Vec<Value> = self
            .inner_instructions()
            .into_iter()
            .map(|ix| {
                json!({
                    "programIdIndex": ix.program_id_index,
                    "accounts": ix.accounts,
                    "data": bs58::encode(&ix.data).into_string(),
                    "stackHeight": 2
                })
            })
            .collect();

        json!({
            "slot": 250_000_000u64,
            "blockTime": 1_700_000_000i64,
            "transaction": [self.encoded_transaction(), "base64"],
            "meta": {
                "err": null,
                "status": { "Ok": null },
                "fee": 5000,
                "preBalances": [],
                "postBalances": [],
                "innerInstructions": [{ "index": 0, "instructions": inner }],
                "logMessages": [],
                "preTokenBalances": [
                    self.token_balance(1, &self.mint_a, &self.input_owner, 1_000, 6),
                    self.token_balance(4, &self.mint_b, &pool_authority, 10_000, 9)
                ],
                "postTokenBalances": [
                    self.token_balance(1, &self.mint_a, &self.input_owner, 900, 6),
                    self.token_balance(4, &self.mint_b, &pool_authority, 9_750, 9)
                ],
                "rewards": [],
                "loadedAddresses": { "writable": [], "readonly": [] }
            }
        })
    }
}
