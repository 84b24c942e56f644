use client::{
    context::position::RaydiumPoolKeys,
    mollusk_helpers::{
        helper_trait::FirebirdTestHelper,
        new_firebird_mollusk_context_with_mints,
        new_firebird_mollusk_context_with_position,
        DEFAULT_PAYER,
        DEFAULT_TOKEN_MINT,
    },
};
use firebird_interface::{
    error::FirebirdError,
    state::position::PIECE_DIVISOR,
};
use solana_instruction::AccountMeta;
use solana_instruction_error::InstructionError;
use solana_sdk::pubkey::Pubkey;

fn test_pool() -> RaydiumPoolKeys {
    RaydiumPoolKeys {
        amm: Pubkey::new_unique(),
        amm_authority: Pubkey::new_unique(),
        amm_open_orders: Pubkey::new_unique(),
        amm_target_orders: Pubkey::new_unique(),
        pool_coin_vault: Pubkey::new_unique(),
        pool_pc_vault: Pubkey::new_unique(),
        serum_program: Pubkey::new_unique(),
        serum_market: Pubkey::new_unique(),
        serum_bids: Pubkey::new_unique(),
        serum_asks: Pubkey::new_unique(),
        serum_event_queue: Pubkey::new_unique(),
        serum_coin_vault: Pubkey::new_unique(),
        serum_pc_vault: Pubkey::new_unique(),
        serum_vault_signer: Pubkey::new_unique(),
    }
}

fn custom(error: FirebirdError) -> Result<(), InstructionError> {
    Err(InstructionError::Custom(error as u32))
}

#[test]
fn swaps_reject_a_non_trigger_signer() {
    let (ctx, position, _token) = new_firebird_mollusk_context_with_position();
    let pool = test_pool();

    // A signature from any key other than the trigger authority is refused,
    // for both swap directions.
    let mut sell = position.sell(&pool);
    sell.accounts[0] = AccountMeta::new_readonly(Pubkey::new_unique(), true);
    assert_eq!(
        ctx.process_instruction_chain(&[sell]).raw_result,
        custom(FirebirdError::InvalidTriggerAuthority)
    );

    let mut buy_back = position.buy_back(&pool, 1_000);
    buy_back.accounts[0] = AccountMeta::new_readonly(Pubkey::new_unique(), true);
    assert_eq!(
        ctx.process_instruction_chain(&[buy_back]).raw_result,
        custom(FirebirdError::InvalidTriggerAuthority)
    );
}

#[test]
fn swaps_reject_a_wrong_program_at_the_raydium_slot() {
    let (ctx, position, _token) = new_firebird_mollusk_context_with_position();

    let mut sell = position.sell(&test_pool());
    sell.accounts[6] = AccountMeta::new_readonly(Pubkey::new_unique(), false);

    assert_eq!(
        ctx.process_instruction_chain(&[sell]).raw_result,
        custom(FirebirdError::InvalidRaydiumProgram)
    );
}

#[test]
fn deposit_rejects_a_mismatched_vault_authority() {
    let (ctx, position, _token) = new_firebird_mollusk_context_with_position();

    let mut deposit = position.deposit(&DEFAULT_PAYER, 1_000);
    deposit.accounts[3] = AccountMeta::new_readonly(Pubkey::new_unique(), false);

    assert_eq!(
        ctx.process_instruction_chain(&[deposit]).raw_result,
        custom(FirebirdError::InvalidVaultAuthority)
    );
}

#[test]
fn initialize_rejects_a_position_at_the_wrong_pda() {
    let (ctx, position, _token) = new_firebird_mollusk_context_with_mints();

    let mut initialize = position.initialize(&DEFAULT_PAYER);
    initialize.accounts[1] = AccountMeta::new(Pubkey::new_unique(), false);

    assert_eq!(
        ctx.process_instruction_chain(&[initialize]).raw_result,
        custom(FirebirdError::InvalidPositionAddress)
    );
}

#[test]
fn initialize_rejects_reregistration() {
    let (ctx, position, _token) = new_firebird_mollusk_context_with_position();

    assert_eq!(
        ctx.process_instruction_chain(&[position.initialize(&DEFAULT_PAYER)])
            .raw_result,
        custom(FirebirdError::AlreadyInitializedAccount)
    );
}

#[test]
fn deposit_too_small_fails_before_any_transfer() {
    let (ctx, position, token) = new_firebird_mollusk_context_with_position();

    // An empty depositor token account passes every account check, so a
    // sub-divisor deposit must fail on its own, not with the token program's
    // insufficient-funds error from the transfer.
    let create_ata = token.create_ata(&DEFAULT_PAYER, &DEFAULT_PAYER);
    assert!(ctx
        .process_instruction_chain(&[create_ata])
        .program_result
        .is_ok());

    assert_eq!(
        ctx.process_instruction_chain(&[position.deposit(&DEFAULT_PAYER, PIECE_DIVISOR - 1)])
            .raw_result,
        custom(FirebirdError::DepositTooSmall)
    );
}

#[test]
fn deposit_accrues_piece_and_moves_tokens() {
    let (ctx, position, token) = new_firebird_mollusk_context_with_position();

    let funding = [
        token.create_ata(&DEFAULT_PAYER, &DEFAULT_PAYER),
        token
            .mint_to_owner(&DEFAULT_PAYER, 10_000)
            .expect("Should build mint_to"),
    ];
    assert!(ctx
        .process_instruction_chain(&funding)
        .program_result
        .is_ok());

    assert!(ctx
        .process_instruction_chain(&[position.deposit(&DEFAULT_PAYER, 1_000)])
        .program_result
        .is_ok());

    assert_eq!(
        ctx.get_token_balance(&DEFAULT_PAYER, &DEFAULT_TOKEN_MINT),
        9_000
    );
    assert_eq!(
        ctx.get_token_balance(&position.vault_authority, &DEFAULT_TOKEN_MINT),
        1_000
    );

    let view = ctx.view_position(&position.position);
    assert_eq!(view.token_mint, DEFAULT_TOKEN_MINT);
    assert_eq!(view.piece, 1_000 / PIECE_DIVISOR);
    assert_eq!(view.total_deposited, 1_000);
    assert_eq!(view.vault_bump, position.vault_bump);
}
