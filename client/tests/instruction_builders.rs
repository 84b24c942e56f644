use client::{
    context::position::{
        PositionContext,
        RaydiumPoolKeys,
    },
    pda::{
        find_position_address,
        find_vault_authority_address,
    },
    raydium_program,
    trigger_authority,
    wsol_mint,
};
use firebird_interface::{
    instructions::InstructionTag,
    raydium::{
        POOL_ACCOUNTS_LEN,
        READONLY_POOL_ACCOUNT_INDEXES,
    },
};
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

#[test]
fn context_matches_pda_derivations() {
    let mint = Pubkey::new_unique();
    let ctx = PositionContext::new(mint);

    let (position, position_bump) = find_position_address(&mint);
    let (vault_authority, vault_bump) = find_vault_authority_address(&mint);

    assert_eq!(ctx.position, position);
    assert_eq!(ctx.position_bump, position_bump);
    assert_eq!(ctx.vault_authority, vault_authority);
    assert_eq!(ctx.vault_bump, vault_bump);

    // Different mints derive different positions.
    let other = PositionContext::new(Pubkey::new_unique());
    assert_ne!(other.position, ctx.position);
    assert_ne!(other.vault_authority, ctx.vault_authority);
}

#[test]
fn initialize_instruction_shape() {
    let payer = Pubkey::new_unique();
    let ctx = PositionContext::new(Pubkey::new_unique());

    let instruction = ctx.initialize(&payer);

    assert_eq!(instruction.program_id, client::program_id());
    assert_eq!(instruction.data, vec![InstructionTag::Initialize as u8]);
    assert_eq!(instruction.accounts.len(), 10);

    let accounts = &instruction.accounts;
    assert_eq!(accounts[0].pubkey, payer);
    assert!(accounts[0].is_signer && accounts[0].is_writable);
    assert_eq!(accounts[1].pubkey, ctx.position);
    assert!(accounts[1].is_writable && !accounts[1].is_signer);
    assert_eq!(accounts[2].pubkey, ctx.token_mint);
    assert_eq!(accounts[3].pubkey, wsol_mint());
    assert_eq!(accounts[4].pubkey, ctx.vault_authority);
    assert_eq!(accounts[5].pubkey, ctx.vault_ata);
    assert!(accounts[5].is_writable);
    assert_eq!(accounts[6].pubkey, ctx.wsol_vault_ata);
    assert!(accounts[6].is_writable);
    assert_eq!(accounts[7].pubkey, spl_token_interface::id());
    assert_eq!(accounts[8].pubkey, spl_associated_token_account_interface::program::id());
    assert_eq!(accounts[9].pubkey, solana_system_interface::program::id());
    for account in &accounts[2..] {
        assert!(!account.is_signer);
    }
}

#[test]
fn deposit_instruction_shape() {
    let depositor = Pubkey::new_unique();
    let ctx = PositionContext::new(Pubkey::new_unique());

    let amount: u64 = 12_345;
    let instruction = ctx.deposit(&depositor, amount);

    assert_eq!(instruction.data[0], InstructionTag::Deposit as u8);
    assert_eq!(&instruction.data[1..9], &amount.to_le_bytes());
    assert_eq!(instruction.accounts.len(), 7);

    let accounts = &instruction.accounts;
    assert_eq!(accounts[0].pubkey, depositor);
    assert!(accounts[0].is_signer && accounts[0].is_writable);
    assert_eq!(accounts[1].pubkey, ctx.position);
    assert!(accounts[1].is_writable);
    assert_eq!(accounts[2].pubkey, ctx.token_mint);
    assert_eq!(accounts[3].pubkey, ctx.vault_authority);
    assert_eq!(accounts[4].pubkey, ctx.ata_for(&depositor));
    assert!(accounts[4].is_writable);
    assert_eq!(accounts[5].pubkey, ctx.vault_ata);
    assert!(accounts[5].is_writable);
    assert_eq!(accounts[6].pubkey, spl_token_interface::id());
}

#[test]
fn swap_instruction_shapes() {
    let ctx = PositionContext::new(Pubkey::new_unique());
    let pool = test_pool();

    let sell = ctx.sell(&pool);
    assert_eq!(sell.data, vec![InstructionTag::Sell as u8]);

    let amount: u64 = 777;
    let buy_back = ctx.buy_back(&pool, amount);
    assert_eq!(buy_back.data[0], InstructionTag::BuyBack as u8);
    assert_eq!(&buy_back.data[1..9], &amount.to_le_bytes());

    // Both swaps share the same account list.
    assert_eq!(sell.accounts, buy_back.accounts);
    assert_eq!(sell.accounts.len(), 8 + POOL_ACCOUNTS_LEN);

    let accounts = &sell.accounts;
    assert_eq!(accounts[0].pubkey, trigger_authority());
    assert!(accounts[0].is_signer && !accounts[0].is_writable);
    assert_eq!(accounts[1].pubkey, ctx.position);
    assert_eq!(accounts[2].pubkey, ctx.token_mint);
    assert_eq!(accounts[3].pubkey, ctx.vault_authority);
    assert_eq!(accounts[4].pubkey, ctx.vault_ata);
    assert!(accounts[4].is_writable);
    assert_eq!(accounts[5].pubkey, ctx.wsol_vault_ata);
    assert!(accounts[5].is_writable);
    assert_eq!(accounts[6].pubkey, raydium_program());
    assert_eq!(accounts[7].pubkey, spl_token_interface::id());
}

#[test]
fn pool_account_writability() {
    let pool = test_pool();
    let metas = pool.to_account_metas();

    assert_eq!(metas.len(), POOL_ACCOUNTS_LEN);
    for (index, meta) in metas.iter().enumerate() {
        assert!(!meta.is_signer);
        let expect_readonly = READONLY_POOL_ACCOUNT_INDEXES.contains(&index);
        assert_eq!(
            meta.is_writable, !expect_readonly,
            "unexpected writability for pool account {index}"
        );
    }

    // The pool accounts sit directly after the eight fixed swap accounts.
    let ctx = PositionContext::new(Pubkey::new_unique());
    let sell = ctx.sell(&pool);
    assert_eq!(&sell.accounts[8..], metas.as_slice());
}
