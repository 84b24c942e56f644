use firebird_interface::{error::FirebirdError, RAYDIUM_AMM_V4_ID};
use pinocchio::{account_info::AccountInfo, pubkey::pubkey_eq};

#[derive(Clone)]
pub struct RaydiumProgramInfo<'a> {
    pub info: &'a AccountInfo,
}

impl<'a> RaydiumProgramInfo<'a> {
    #[inline(always)]
    pub fn new(info: &'a AccountInfo) -> Result<RaydiumProgramInfo<'a>, FirebirdError> {
        if !pubkey_eq(info.key(), &RAYDIUM_AMM_V4_ID) {
            return Err(FirebirdError::InvalidRaydiumProgram);
        }

        Ok(Self { info })
    }
}
