use firebird_interface::error::FirebirdError;
use pinocchio::{account_info::AccountInfo, program_error::ProgramError, pubkey::pubkey_eq};

use crate::validation::position_account_info::PositionSummary;

#[derive(Clone)]
pub struct MintInfo<'a> {
    pub info: &'a AccountInfo,
}

impl<'a> MintInfo<'a> {
    /// Checks that the account is the mint the position was registered for.
    #[inline(always)]
    pub fn new(
        info: &'a AccountInfo,
        position: &PositionSummary,
    ) -> Result<MintInfo<'a>, ProgramError> {
        if !pubkey_eq(info.key(), &position.token_mint) {
            return Err(FirebirdError::PositionMintMismatch.into());
        }

        Ok(Self { info })
    }
}
