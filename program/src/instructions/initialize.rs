use firebird_interface::{
    error::FirebirdError,
    state::{
        position::{DcaPosition, POSITION_SEED_STR, VAULT_SEED_STR},
        transmutable::Transmutable,
    },
};
use pinocchio::{
    account_info::AccountInfo,
    pubkey::{find_program_address, pubkey_eq},
    sysvars::{rent::Rent, Sysvar},
    ProgramResult,
};

use crate::{context::initialize_context::InitializeContext, position_signer};

/// Registers a token mint for DCA: creates the position account at its PDA
/// and the vault authority's token and wrapped SOL associated token accounts.
pub fn process_initialize(accounts: &[AccountInfo], _instruction_data: &[u8]) -> ProgramResult {
    let ctx = InitializeContext::load(accounts)?;

    let mint_key = ctx.token_mint.key();

    // Pin both passed PDAs to this mint before creating anything.
    let (position_address, position_bump) =
        find_program_address(&[POSITION_SEED_STR, mint_key.as_ref()], &crate::ID);
    if !pubkey_eq(ctx.position.info.key(), &position_address) {
        return Err(FirebirdError::InvalidPositionAddress.into());
    }

    let (vault_authority_address, vault_bump) =
        find_program_address(&[VAULT_SEED_STR, mint_key.as_ref()], &crate::ID);
    if !pubkey_eq(ctx.vault_authority.key(), &vault_authority_address) {
        return Err(FirebirdError::InvalidVaultAuthority.into());
    }

    // Create the program derived position account.
    let lamports_required = Rent::get()?.minimum_balance(DcaPosition::LEN);

    pinocchio_system::instructions::CreateAccount {
        from: ctx.payer,
        to: ctx.position.info,
        lamports: lamports_required,
        space: DcaPosition::LEN as u64,
        owner: &crate::ID,
    }
    .invoke_signed(&[position_signer!(mint_key, position_bump)])?;

    // Create the vault authority's token and wrapped SOL associated token
    // accounts with the non-idempotent instruction, so re-registration fails.
    for (mint, ata) in [
        (ctx.token_mint, ctx.vault_ata.info),
        (ctx.wsol_mint, ctx.wsol_vault_ata.info),
    ] {
        pinocchio_associated_token_account::instructions::Create {
            funding_account: ctx.payer,
            account: ata,
            wallet: ctx.vault_authority,
            mint,
            system_program: ctx.system_program.info,
            token_program: ctx.token_program.info,
        }
        .invoke()?;
    }

    let mut data = ctx.position.info.try_borrow_mut_data()?;
    DcaPosition::initialize(&mut data, mint_key, position_bump, vault_bump)?;

    Ok(())
}
