//! Command-line swap decoder.
//!
//! Decodes the swaps in each given transaction and prints one JSON object per
//! swap. Arguments are transaction signatures, fetched from `RPC_URL`, or paths
//! to JSON files holding a `getTransaction` result.

#![warn(clippy::all, clippy::pedantic)]

use serde_json::json;
use solana_swap_indexer::sources;
use solana_swap_indexer::utils::logging::{self, LogLevel};
use solana_swap_indexer::{
    RpcTransactionSource, SwapDecoderRegistry, SwapIndexerConfig, TransactionContext,
};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let targets: Vec<String> = env::args().skip(1).collect();
    if targets.is_empty() {
        eprintln!("Usage: solana-swap-indexer <SIGNATURE|FILE.json>...");
        std::process::exit(2);
    }

    let config = SwapIndexerConfig::from_env()?;
    logging::log_section("Solana Swap Indexer");
    logging::log(LogLevel::Info, &format!("RPC URL: {}", config.rpc_url));

    let source = RpcTransactionSource::new(&config);
    let registry = SwapDecoderRegistry::with_protocols(config.protocols.iter().copied());

    let mut contexts: Vec<TransactionContext> = Vec::with_capacity(targets.len());
    for target in &targets {
        match sources::load_target(&source, target).await {
            Ok(ctx) => contexts.push(ctx),
            Err(e) => logging::log(LogLevel::Error, &format!("Skipping {target}: {e}")),
        }
    }

    let results = registry.decode_batch(&contexts);
    let mut total = 0;
    for (ctx, swaps) in contexts.iter().zip(&results) {
        let signature = ctx.signature.as_ref().map(ToString::to_string);
        for swap in swaps {
            println!(
                "{}",
                json!({
                    "signature": signature,
                    "protocol": swap.protocol(),
                    "token_in": swap.token_in(),
                    "token_out": swap.token_out(),
                })
            );
        }
        total += swaps.len();
    }

    logging::log(
        LogLevel::Success,
        &format!("Decoded {total} swaps from {} transactions", contexts.len()),
    );

    Ok(())
}
