//! Swap records produced by the decoders.

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use std::fmt;
use std::str::FromStr;

use crate::common::error::{Result, SwapIndexerError};
use crate::core::programs;

/// DEX protocols the indexer knows how to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Raydium,
    Orca,
    Meteora,
}

impl Protocol {
    /// Every supported protocol, in routing priority order.
    pub const ALL: [Protocol; 3] = [Protocol::Raydium, Protocol::Orca, Protocol::Meteora];

    /// Program identifiers owned by this protocol.
    #[must_use]
    pub fn program_ids(self) -> &'static [Pubkey] {
        match self {
            Protocol::Raydium => programs::RAYDIUM_PROGRAM_IDS,
            Protocol::Orca => programs::ORCA_PROGRAM_IDS,
            Protocol::Meteora => programs::METEORA_PROGRAM_IDS,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Protocol::Raydium => "raydium",
            Protocol::Orca => "orca",
            Protocol::Meteora => "meteora",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Protocol {
    type Err = SwapIndexerError;

    fn from_str(s: &str) -> Result<Self> {
        Protocol::ALL
            .into_iter()
            .find(|protocol| protocol.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SwapIndexerError::ConfigError(format!("Unknown protocol: {s}")))
    }
}

/// One leg of a swap: a token and the raw amount moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    #[serde(with = "pubkey_string")]
    pub mint: Pubkey,
    /// Raw base-unit amount.
    pub amount: u64,
    /// Mint decimals, `0` when unknown. Informational only.
    pub decimals: u8,
}

/// A reconstructed two-sided swap.
///
/// The two legs always move different mints; [`SwapInfo::try_new`] is the
/// only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwapInfo {
    protocol: Protocol,
    token_in: TokenInfo,
    token_out: TokenInfo,
}

impl SwapInfo {
    /// Builds a swap record, rejecting legs that share a mint.
    ///
    /// # Errors
    ///
    /// Returns [`SwapIndexerError::DegenerateSwap`] when both legs have the same mint.
    pub fn try_new(protocol: Protocol, token_in: TokenInfo, token_out: TokenInfo) -> Result<Self> {
        if token_in.mint == token_out.mint {
            return Err(SwapIndexerError::DegenerateSwap {
                mint: token_in.mint,
            });
        }

        Ok(Self {
            protocol,
            token_in,
            token_out,
        })
    }

    #[must_use]
    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// The token given up by the transaction's initiator.
    #[must_use]
    pub fn token_in(&self) -> &TokenInfo {
        &self.token_in
    }

    /// The token received by the transaction's initiator.
    #[must_use]
    pub fn token_out(&self) -> &TokenInfo {
        &self.token_out
    }
}

mod pubkey_string {
    use serde::{Deserialize, Deserializer, Serializer};
    use solana_sdk::pubkey::Pubkey;
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(pubkey: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(pubkey)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Pubkey, D::Error> {
        let value = String::deserialize(deserializer)?;
        Pubkey::from_str(&value).map_err(serde::de::Error::custom)
    }
}
