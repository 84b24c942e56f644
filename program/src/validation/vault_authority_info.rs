use firebird_interface::{error::FirebirdError, state::position::VAULT_SEED_STR};
use pinocchio::{
    account_info::AccountInfo,
    pubkey::{create_program_address, pubkey_eq, Pubkey},
};

/// The per-mint vault authority PDA that owns both vault token accounts.
#[derive(Clone)]
pub struct VaultAuthorityInfo<'a> {
    pub info: &'a AccountInfo,
    pub bump: u8,
}

impl<'a> VaultAuthorityInfo<'a> {
    /// Re-derives the vault authority from the mint and the bump stored in the
    /// position account, so a swap can never be signed for a foreign vault.
    #[inline(always)]
    pub fn new(
        info: &'a AccountInfo,
        token_mint: &Pubkey,
        bump: u8,
    ) -> Result<VaultAuthorityInfo<'a>, FirebirdError> {
        let expected =
            create_program_address(&[VAULT_SEED_STR, token_mint.as_ref(), &[bump]], &crate::ID)
                .map_err(|_| FirebirdError::InvalidVaultAuthority)?;

        if !pubkey_eq(info.key(), &expected) {
            return Err(FirebirdError::InvalidVaultAuthority);
        }

        Ok(Self { info, bump })
    }
}
