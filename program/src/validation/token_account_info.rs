use firebird_interface::{error::FirebirdError, utils::owned_by};
use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
    pubkey::{pubkey_eq, Pubkey},
};
use pinocchio_token::state::TokenAccount;

#[derive(Clone)]
pub struct TokenAccountInfo<'a> {
    pub info: &'a AccountInfo,
}

impl<'a> TokenAccountInfo<'a> {
    #[inline(always)]
    pub fn new(
        info: &'a AccountInfo,
        expected_mint: &Pubkey,
        expected_owner: &Pubkey,
    ) -> Result<TokenAccountInfo<'a>, ProgramError> {
        if !owned_by(info, &pinocchio_token::ID) {
            return Err(FirebirdError::OwnerNotTokenProgram.into());
        }

        // Note the load below also checks that the account has been initialized.
        let token_account = TokenAccount::from_account_info(info)?;

        if !pubkey_eq(token_account.mint(), expected_mint) {
            return Err(FirebirdError::TokenAccountMintMismatch.into());
        }
        if !pubkey_eq(token_account.owner(), expected_owner) {
            return Err(FirebirdError::IncorrectTokenAccountOwner.into());
        }

        Ok(Self { info })
    }

    #[inline(always)]
    pub fn get_balance(&self) -> Result<u64, ProgramError> {
        // The account was verified as an initialized token account upon construction of Self.
        Ok(TokenAccount::from_account_info(self.info)?.amount())
    }
}
