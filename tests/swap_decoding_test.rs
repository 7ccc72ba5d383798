mod common;

use common::{checked_transfer, plain_transfer, SwapFixture};
use solana_sdk::{instruction::CompiledInstruction, pubkey::Pubkey};
use solana_swap_indexer::core::programs::{RAYDIUM_AMM_V4_PROGRAM_ID, TOKEN_PROGRAM_ID};
use solana_swap_indexer::{
    InnerInstructionGroup, Protocol, SwapDecoder, SwapDecoderRegistry, SwapIndexerError,
    TokenBalanceInfo, TokenInfo, TransactionContext,
};

fn fixture_context(fixture: &SwapFixture) -> TransactionContext {
    TransactionContext {
        signature: Some(fixture.signature),
        account_keys: fixture.account_keys.clone(),
        instructions: vec![fixture.outer_instruction()],
        inner_instructions: vec![InnerInstructionGroup {
            index: 0,
            instructions: fixture.inner_instructions(),
        }],
        pre_token_balances: vec![TokenBalanceInfo {
            account_index: 1,
            mint: fixture.mint_a,
            owner: Some(fixture.input_owner),
            amount: 1_000,
            decimals: 6,
        }],
        post_token_balances: vec![],
        signers: vec![fixture.signer],
    }
}

/// Keys: 0 signer, 1 Raydium, 2 SPL Token, 3.. mints.
fn checked_only_context(
    mint_count: usize,
    transfers: Vec<CompiledInstruction>,
) -> TransactionContext {
    let mut account_keys = vec![
        Pubkey::new_unique(),
        RAYDIUM_AMM_V4_PROGRAM_ID,
        TOKEN_PROGRAM_ID,
    ];
    account_keys.extend((0..mint_count).map(|_| Pubkey::new_unique()));

    TransactionContext {
        signers: vec![account_keys[0]],
        instructions: vec![CompiledInstruction {
            program_id_index: 1,
            accounts: vec![0],
            data: vec![9],
        }],
        inner_instructions: vec![InnerInstructionGroup {
            index: 0,
            instructions: transfers,
        }],
        account_keys,
        ..Default::default()
    }
}

#[test]
fn test_signer_owned_input_swap() {
    let fixture = SwapFixture::new(true);
    let ctx = fixture_context(&fixture);

    let swaps = Protocol::Raydium
        .decode(&ctx.instructions[0], 0, &ctx)
        .unwrap();

    assert_eq!(swaps.len(), 1);
    assert_eq!(swaps[0].protocol(), Protocol::Raydium);
    assert_eq!(
        *swaps[0].token_in(),
        TokenInfo {
            mint: fixture.mint_a,
            amount: 100,
            decimals: 6,
        }
    );
    assert_eq!(swaps[0].token_out().mint, fixture.mint_b);
    assert_eq!(swaps[0].token_out().amount, 250);
}

#[test]
fn test_non_signer_input_falls_back_to_second_transfer() {
    let fixture = SwapFixture::new(false);
    let ctx = fixture_context(&fixture);

    let swaps = Protocol::Raydium
        .decode(&ctx.instructions[0], 0, &ctx)
        .unwrap();

    assert_eq!(swaps.len(), 1);
    assert_eq!(swaps[0].token_in().mint, fixture.mint_b);
    assert_eq!(swaps[0].token_in().amount, 250);
    assert_eq!(swaps[0].token_out().mint, fixture.mint_a);
    assert_eq!(swaps[0].token_out().amount, 100);
}

#[test]
fn test_three_transfers_yield_one_swap() {
    let ctx = checked_only_context(
        3,
        vec![
            checked_transfer(2, 0, 3, 0, 0, 10, 6),
            checked_transfer(2, 0, 4, 0, 0, 20, 6),
            checked_transfer(2, 0, 5, 0, 0, 30, 6),
        ],
    );

    let swaps = Protocol::Raydium
        .decode(&ctx.instructions[0], 0, &ctx)
        .unwrap();
    assert_eq!(swaps.len(), 1);

    let mints = [swaps[0].token_in().mint, swaps[0].token_out().mint];
    assert!(mints.contains(&ctx.account_keys[3]));
    assert!(mints.contains(&ctx.account_keys[4]));
    assert!(!mints.contains(&ctx.account_keys[5]));
}

#[test]
fn test_five_transfers_pair_first_four() {
    let ctx = checked_only_context(
        5,
        (0..5u8)
            .map(|i| checked_transfer(2, 0, 3 + i, 0, 0, u64::from(i) + 1, 6))
            .collect(),
    );

    let swaps = Protocol::Raydium
        .decode(&ctx.instructions[0], 0, &ctx)
        .unwrap();
    let mut amounts: Vec<Vec<u64>> = swaps
        .iter()
        .map(|swap| {
            let mut pair = vec![swap.token_in().amount, swap.token_out().amount];
            pair.sort_unstable();
            pair
        })
        .collect();
    amounts.sort();

    assert_eq!(amounts, vec![vec![1, 2], vec![3, 4]]);
}

#[test]
fn test_decoded_amount_is_little_endian_u64() {
    for amount in [0, 1, 255, 256, 1_000_000_007, 1 << 32, u64::MAX] {
        let ctx = checked_only_context(
            2,
            vec![
                checked_transfer(2, 0, 3, 0, 0, amount, 6),
                checked_transfer(2, 0, 4, 0, 0, 42, 6),
            ],
        );

        let swaps = Protocol::Raydium
            .decode(&ctx.instructions[0], 0, &ctx)
            .unwrap();
        // No pre-balances: the second transfer is the input.
        assert_eq!(swaps[0].token_out().amount, amount);
    }
}

#[test]
fn test_no_output_swap_shares_a_mint() {
    let ctx = checked_only_context(
        2,
        vec![
            checked_transfer(2, 0, 3, 0, 0, 1, 6),
            checked_transfer(2, 0, 3, 0, 0, 2, 6),
            checked_transfer(2, 0, 3, 0, 0, 3, 6),
            checked_transfer(2, 0, 4, 0, 0, 4, 6),
        ],
    );

    let swaps = Protocol::Raydium
        .decode(&ctx.instructions[0], 0, &ctx)
        .unwrap();
    assert_eq!(swaps.len(), 1);
    assert_ne!(swaps[0].token_in().mint, swaps[0].token_out().mint);
}

#[test]
fn test_empty_inner_group_is_no_swaps_found() {
    let ctx = checked_only_context(0, vec![]);

    let result = Protocol::Raydium.decode(&ctx.instructions[0], 0, &ctx);
    assert!(matches!(
        result,
        Err(SwapIndexerError::NoSwapsFound {
            protocol: Protocol::Raydium,
            ..
        })
    ));
}

#[test]
fn test_plain_transfer_mint_from_post_balances() {
    let mut ctx = checked_only_context(1, vec![]);
    let mint = Pubkey::new_unique();
    // Token accounts at 4 and 5.
    ctx.account_keys.extend([Pubkey::new_unique(), Pubkey::new_unique()]);
    ctx.post_token_balances.push(TokenBalanceInfo {
        account_index: 5,
        mint,
        owner: None,
        amount: 0,
        decimals: 5,
    });
    ctx.inner_instructions[0].instructions = vec![
        plain_transfer(2, 4, 5, 0, 77),
        checked_transfer(2, 0, 3, 0, 0, 88, 6),
    ];

    let swaps = Protocol::Raydium
        .decode(&ctx.instructions[0], 0, &ctx)
        .unwrap();
    assert_eq!(
        *swaps[0].token_out(),
        TokenInfo {
            mint,
            amount: 77,
            decimals: 5,
        }
    );
}

#[test]
fn test_registry_isolates_failing_instructions() {
    let fixture = SwapFixture::new(true);
    let mut ctx = fixture_context(&fixture);
    // Instruction #0 has no inner group, instruction #1 performs the swap.
    ctx.instructions.insert(0, fixture.outer_instruction());
    ctx.inner_instructions[0].index = 1;

    let registry = SwapDecoderRegistry::default();
    let swaps = registry.decode_transaction(&ctx);

    assert_eq!(swaps.len(), 1);
    assert_eq!(swaps[0].token_in().mint, fixture.mint_a);
}

#[test]
fn test_registry_skips_disabled_protocols() {
    let fixture = SwapFixture::new(true);
    let ctx = fixture_context(&fixture);

    let registry = SwapDecoderRegistry::with_protocols([Protocol::Orca, Protocol::Meteora]);
    assert!(registry.decode_transaction(&ctx).is_empty());
}
