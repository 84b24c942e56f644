//! See [`InitializeContext`].

use firebird_interface::{error::FirebirdError, WSOL_MINT_ID};
use pinocchio::{account_info::AccountInfo, pubkey::pubkey_eq};

use crate::validation::{
    system_program_info::SystemProgramInfo, token_program_info::TokenProgramInfo,
    uninitialized_account_info::UninitializedAccountInfo,
};

/// The account context for the `Initialize` instruction, which registers a
/// token mint by creating its position PDA and both vault token accounts.
#[derive(Clone)]
pub struct InitializeContext<'a> {
    pub payer: &'a AccountInfo,
    pub position: UninitializedAccountInfo<'a>,
    pub token_mint: &'a AccountInfo,
    pub wsol_mint: &'a AccountInfo,
    pub vault_authority: &'a AccountInfo,
    pub vault_ata: UninitializedAccountInfo<'a>,
    pub wsol_vault_ata: UninitializedAccountInfo<'a>,
    pub token_program: TokenProgramInfo<'a>,
    pub system_program: SystemProgramInfo<'a>,
}

impl<'a> InitializeContext<'a> {
    pub fn load(accounts: &'a [AccountInfo]) -> Result<InitializeContext<'a>, FirebirdError> {
        // The associated token program is only referenced by the runtime when
        // the create-ATA CPIs execute, so it has no context field.
        let [payer, position, token_mint, wsol_mint, vault_authority, vault_ata, wsol_vault_ata, token_program, _associated_token_program, system_program] =
            accounts
        else {
            return Err(FirebirdError::NotEnoughAccountKeys);
        };

        // The position account must not already exist for the mint.
        let position = UninitializedAccountInfo::new(position)?;

        // Both vault accounts are created with the non-idempotent associated
        // token instruction, which fails if either already exists, so no
        // derivation or ownership checks are needed here. The same applies to
        // the system program, which is validated by the create-account CPIs.
        let vault_ata = UninitializedAccountInfo::new_unchecked(vault_ata);
        let wsol_vault_ata = UninitializedAccountInfo::new_unchecked(wsol_vault_ata);
        let system_program = SystemProgramInfo::new_unchecked(system_program);

        let token_program = TokenProgramInfo::new(token_program)?;

        // The wrapped SOL vault must be for the real wrapped SOL mint, or the
        // sell proceeds would accumulate in an arbitrary token.
        if !pubkey_eq(wsol_mint.key(), &WSOL_MINT_ID) {
            return Err(FirebirdError::InvalidWsolMint);
        }

        Ok(Self {
            payer,
            position,
            token_mint,
            wsol_mint,
            vault_authority,
            vault_ata,
            wsol_vault_ata,
            token_program,
            system_program,
        })
    }
}
