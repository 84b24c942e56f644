use std::{
    collections::HashMap,
    path::PathBuf,
};

use mollusk_svm::{
    Mollusk,
    MolluskContext,
};
use solana_account::Account;
use solana_address::Address;
use solana_sdk::{
    program_pack::Pack,
    pubkey,
    rent::Rent,
};
use spl_token_interface::state::Mint;

use crate::{
    context::{
        position::PositionContext,
        token::TokenContext,
    },
    program_id,
    token_instructions::create_mint_instructions,
    wsol_mint,
};

pub mod helper_trait;

/// Resolves the deployed program artifact to the name [`Mollusk::new`]
/// expects: the absolute `target/deploy/firebird` path, without the `.so`
/// suffix.
fn deploy_file_to_program_name() -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../target/deploy/firebird.so")
        .canonicalize()
        .map(|p| {
            p.to_str()
                .expect("Path should convert to a &str")
                .strip_suffix(".so")
                .expect("Deploy file should have an `.so` suffix")
                .to_string()
        })
        .expect("`firebird.so` should exist under target/deploy; build it with `cargo build-sbf`")
}

/// Creates and returns a [`MolluskContext`] with the following created and
/// initialized:
/// - The `firebird` program
/// - The SPL token program
/// - The associated token program
/// - The accounts passed
pub fn new_firebird_mollusk_context(
    accounts: Vec<(Address, Account)>,
) -> MolluskContext<HashMap<Address, Account>> {
    let mut mollusk = Mollusk::new(&program_id(), &deploy_file_to_program_name());
    mollusk_svm_programs_token::token::add_program(&mut mollusk);
    mollusk_svm_programs_token::associated_token::add_program(&mut mollusk);

    // Create mollusk context with the simple hashmap implementation for the AccountStore.
    let context = mollusk.with_context(HashMap::new());

    for (address, account) in accounts {
        context.account_store.borrow_mut().insert(address, account);
    }

    context
}

/// The payer for every mollusk test; also the mint authority of both test mints.
pub const DEFAULT_PAYER: Address = pubkey!("mint1authority11111111111111111111111111111");
/// The mint the test position is registered for (an arbitrary vanity address).
pub const DEFAULT_TOKEN_MINT: Address = pubkey!("base111111111111111111111111111111111111111");
pub const DEFAULT_MINT_DECIMALS: u8 = 6;
pub const DEFAULT_PAYER_LAMPORTS: u64 = 100_000_000_000;

pub fn system_account(lamports: u64) -> Account {
    Account {
        data: Default::default(),
        lamports,
        owner: solana_system_interface::program::id(),
        executable: false,
        rent_epoch: 0,
    }
}

/// Creates a [`MolluskContext`] with a funded payer and both mints (the
/// position's token and wrapped SOL) created and initialized, but no position
/// registered yet.
pub fn new_firebird_mollusk_context_with_mints(
) -> (MolluskContext<HashMap<Address, Account>>, PositionContext, TokenContext) {
    let ctx = new_firebird_mollusk_context(vec![(
        DEFAULT_PAYER,
        system_account(DEFAULT_PAYER_LAMPORTS),
    )]);

    let mint_rent = Rent::default().minimum_balance(Mint::LEN);
    let [create_mint, initialize_mint] = create_mint_instructions(
        &DEFAULT_PAYER,
        &DEFAULT_TOKEN_MINT,
        &DEFAULT_PAYER,
        DEFAULT_MINT_DECIMALS,
        mint_rent,
    )
    .expect("Should create token mint instructions");

    // The wrapped SOL vault is always for the fixed mint, so the mint account
    // has to exist at that address before the position can be registered.
    let [create_wsol, initialize_wsol] =
        create_mint_instructions(&DEFAULT_PAYER, &wsol_mint(), &DEFAULT_PAYER, 9, mint_rent)
            .expect("Should create wrapped SOL mint instructions");

    let result = ctx.process_instruction_chain(&[
        create_mint,
        initialize_mint,
        create_wsol,
        initialize_wsol,
    ]);
    assert!(result.program_result.is_ok());

    let position = PositionContext::new(DEFAULT_TOKEN_MINT);
    let token = TokenContext::new(
        Some(DEFAULT_PAYER),
        DEFAULT_TOKEN_MINT,
        spl_token_interface::id(),
        DEFAULT_MINT_DECIMALS,
    );

    (ctx, position, token)
}

/// Like [`new_firebird_mollusk_context_with_mints`], with the default mint's
/// position registered: the position PDA and both vault ATAs exist.
pub fn new_firebird_mollusk_context_with_position(
) -> (MolluskContext<HashMap<Address, Account>>, PositionContext, TokenContext) {
    let (ctx, position, token) = new_firebird_mollusk_context_with_mints();

    let result = ctx.process_instruction_chain(&[position.initialize(&DEFAULT_PAYER)]);
    assert!(result.program_result.is_ok());

    (ctx, position, token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pda::find_position_address;

    #[test]
    fn default_position_context_derives_from_the_default_mint() {
        let position = PositionContext::new(DEFAULT_TOKEN_MINT);
        let (derived, bump) = find_position_address(&DEFAULT_TOKEN_MINT);

        assert_eq!(position.position, derived);
        assert_eq!(position.position_bump, bump);
        assert_eq!(position.token_mint, DEFAULT_TOKEN_MINT);
    }
}
