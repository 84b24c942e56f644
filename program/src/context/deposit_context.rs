//! See [`DepositContext`].

use pinocchio::{account_info::AccountInfo, program_error::ProgramError};

use firebird_interface::error::FirebirdError;

use crate::validation::{
    mint_info::MintInfo,
    position_account_info::PositionAccountInfo,
    token_account_info::TokenAccountInfo,
    token_program_info::TokenProgramInfo,
    vault_authority_info::VaultAuthorityInfo,
};

/// The account context for the `Deposit` instruction, verifying the position's
/// mint binding, the vault authority derivation, and both token accounts.
#[derive(Clone)]
pub struct DepositContext<'a> {
    pub depositor: &'a AccountInfo,
    pub position: PositionAccountInfo<'a>,
    pub token_mint: MintInfo<'a>,
    pub vault_authority: VaultAuthorityInfo<'a>,
    pub depositor_ata: TokenAccountInfo<'a>,
    pub vault_ata: TokenAccountInfo<'a>,
    pub token_program: TokenProgramInfo<'a>,
}

impl<'a> DepositContext<'a> {
    pub fn load(accounts: &'a [AccountInfo]) -> Result<DepositContext<'a>, ProgramError> {
        let [depositor, position, token_mint, vault_authority, depositor_ata, vault_ata, token_program] =
            accounts
        else {
            return Err(FirebirdError::NotEnoughAccountKeys.into());
        };

        let position = PositionAccountInfo::new(position)?;
        let summary = position.load_summary()?;

        let token_mint = MintInfo::new(token_mint, &summary)?;
        let vault_authority =
            VaultAuthorityInfo::new(vault_authority, &summary.token_mint, summary.vault_bump)?;

        let depositor_ata =
            TokenAccountInfo::new(depositor_ata, token_mint.info.key(), depositor.key())?;
        let vault_ata =
            TokenAccountInfo::new(vault_ata, token_mint.info.key(), vault_authority.info.key())?;

        let token_program = TokenProgramInfo::new(token_program)?;

        Ok(Self {
            depositor,
            position,
            token_mint,
            vault_authority,
            depositor_ata,
            vault_ata,
            token_program,
        })
    }
}
