//! Routes outer instructions to the protocol decoders that can handle them.

use rayon::prelude::*;
use solana_sdk::{instruction::CompiledInstruction, pubkey::Pubkey};

use super::decoder::SwapDecoder;
use crate::types::{Protocol, SwapInfo, TransactionContext};
use crate::utils::logging::{self, LogLevel};

/// Registry of enabled protocol decoders, consulted in registration order.
#[derive(Debug, Clone)]
pub struct SwapDecoderRegistry {
    decoders: Vec<Protocol>,
}

impl SwapDecoderRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            decoders: Vec::new(),
        }
    }

    /// Creates a registry with the given protocols enabled.
    pub fn with_protocols(protocols: impl IntoIterator<Item = Protocol>) -> Self {
        let mut registry = Self::new();
        for protocol in protocols {
            registry.register(protocol);
        }
        registry
    }

    /// Enables a protocol. Registering the same protocol twice is a no-op.
    pub fn register(&mut self, protocol: Protocol) {
        if !self.decoders.contains(&protocol) {
            self.decoders.push(protocol);
        }
    }

    #[must_use]
    pub fn protocols(&self) -> &[Protocol] {
        &self.decoders
    }

    /// Returns the first registered protocol able to handle `instruction`.
    #[must_use]
    pub fn decoder_for(
        &self,
        instruction: &CompiledInstruction,
        account_keys: &[Pubkey],
    ) -> Option<Protocol> {
        self.decoders
            .iter()
            .copied()
            .find(|decoder| decoder.can_handle(instruction, account_keys))
    }

    /// Decodes every outer instruction of a transaction.
    ///
    /// A failing instruction never prevents its siblings from being decoded.
    #[must_use]
    pub fn decode_transaction(&self, ctx: &TransactionContext) -> Vec<SwapInfo> {
        let mut swaps = Vec::new();

        for (index, instruction) in ctx.instructions.iter().enumerate() {
            let Some(decoder) = self.decoder_for(instruction, &ctx.account_keys) else {
                continue;
            };

            match decoder.decode(instruction, index, ctx) {
                Ok(decoded) => swaps.extend(decoded),
                Err(e) => logging::log(LogLevel::Debug, &format!("{}: {e}", describe(ctx))),
            }
        }

        swaps
    }

    /// Decodes independent transactions in parallel, preserving input order.
    #[must_use]
    pub fn decode_batch(&self, contexts: &[TransactionContext]) -> Vec<Vec<SwapInfo>> {
        contexts
            .par_iter()
            .map(|ctx| self.decode_transaction(ctx))
            .collect()
    }
}

impl Default for SwapDecoderRegistry {
    fn default() -> Self {
        Self::with_protocols(Protocol::ALL)
    }
}

fn describe(ctx: &TransactionContext) -> String {
    match &ctx.signature {
        Some(signature) => signature.to_string(),
        None => "<unsigned transaction>".to_string(),
    }
}
