use firebird_interface::{
    error::FirebirdError,
    state::position::DcaPosition,
    utils::owned_by,
};
use pinocchio::{account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey};

/// An initialized, program-owned [`DcaPosition`] account.
#[derive(Clone)]
pub struct PositionAccountInfo<'a> {
    pub info: &'a AccountInfo,
}

impl<'a> PositionAccountInfo<'a> {
    #[inline(always)]
    pub fn new(info: &'a AccountInfo) -> Result<PositionAccountInfo<'a>, ProgramError> {
        if !owned_by(info, &crate::ID) {
            return Err(FirebirdError::UninitializedPosition.into());
        }

        // Checks the data length and the account discriminant.
        let data = info.try_borrow_data()?;
        DcaPosition::from_bytes(&data)?;

        Ok(Self { info })
    }

    /// Copies out the fields needed to validate and sign against the position's
    /// PDAs, so no borrow of the account data is held across CPIs.
    #[inline(always)]
    pub fn load_summary(&self) -> Result<PositionSummary, ProgramError> {
        let data = self.info.try_borrow_data()?;
        let position = DcaPosition::from_bytes(&data)?;

        Ok(PositionSummary {
            token_mint: *position.token_mint(),
            piece: position.piece(),
            vault_bump: position.vault_bump(),
        })
    }
}

#[derive(Clone, Copy)]
pub struct PositionSummary {
    pub token_mint: Pubkey,
    pub piece: u64,
    pub vault_bump: u8,
}
