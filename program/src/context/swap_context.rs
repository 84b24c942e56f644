//! See [`SwapContext`].

use firebird_interface::{
    error::FirebirdError, raydium::POOL_ACCOUNTS_LEN, WSOL_MINT_ID,
};
use pinocchio::{account_info::AccountInfo, program_error::ProgramError};

use crate::validation::{
    mint_info::MintInfo,
    position_account_info::{PositionAccountInfo, PositionSummary},
    raydium_program_info::RaydiumProgramInfo,
    token_account_info::TokenAccountInfo,
    token_program_info::TokenProgramInfo,
    trigger_authority_info::TriggerAuthorityInfo,
    vault_authority_info::VaultAuthorityInfo,
};

/// The account context shared by the `Sell` and `BuyBack` instructions: both
/// are trigger-gated Raydium swaps between the two vault token accounts, only
/// the direction differs.
#[derive(Clone)]
pub struct SwapContext<'a> {
    pub trigger_authority: TriggerAuthorityInfo<'a>,
    pub position: PositionAccountInfo<'a>,
    pub summary: PositionSummary,
    pub token_mint: MintInfo<'a>,
    pub vault_authority: VaultAuthorityInfo<'a>,
    pub vault_ata: TokenAccountInfo<'a>,
    pub wsol_vault_ata: TokenAccountInfo<'a>,
    pub raydium_program: RaydiumProgramInfo<'a>,
    pub token_program: TokenProgramInfo<'a>,
    /// The AMM/Serum pool accounts, forwarded to Raydium in the order given.
    pub pool: &'a [AccountInfo; POOL_ACCOUNTS_LEN],
}

impl<'a> SwapContext<'a> {
    pub fn load(accounts: &'a [AccountInfo]) -> Result<SwapContext<'a>, ProgramError> {
        let [trigger_authority, position, token_mint, vault_authority, vault_ata, wsol_vault_ata, raydium_program, token_program, pool @ ..] =
            accounts
        else {
            return Err(FirebirdError::NotEnoughAccountKeys.into());
        };

        let pool: &[AccountInfo; POOL_ACCOUNTS_LEN] = pool
            .get(..POOL_ACCOUNTS_LEN)
            .and_then(|pool| pool.try_into().ok())
            .ok_or(FirebirdError::NotEnoughAccountKeys)?;

        let trigger_authority = TriggerAuthorityInfo::new(trigger_authority)?;

        let position = PositionAccountInfo::new(position)?;
        let summary = position.load_summary()?;

        let token_mint = MintInfo::new(token_mint, &summary)?;
        let vault_authority =
            VaultAuthorityInfo::new(vault_authority, &summary.token_mint, summary.vault_bump)?;

        // Both vault accounts must belong to the derived vault authority.
        let vault_ata =
            TokenAccountInfo::new(vault_ata, token_mint.info.key(), vault_authority.info.key())?;
        let wsol_vault_ata =
            TokenAccountInfo::new(wsol_vault_ata, &WSOL_MINT_ID, vault_authority.info.key())?;

        let raydium_program = RaydiumProgramInfo::new(raydium_program)?;
        let token_program = TokenProgramInfo::new(token_program)?;

        Ok(Self {
            trigger_authority,
            position,
            summary,
            token_mint,
            vault_authority,
            vault_ata,
            wsol_vault_ata,
            raydium_program,
            token_program,
            pool,
        })
    }
}
