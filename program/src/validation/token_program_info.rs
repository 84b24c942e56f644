use firebird_interface::error::FirebirdError;
use pinocchio::{account_info::AccountInfo, pubkey::pubkey_eq};

#[derive(Clone)]
pub struct TokenProgramInfo<'a> {
    pub info: &'a AccountInfo,
}

impl<'a> TokenProgramInfo<'a> {
    #[inline(always)]
    pub fn new(info: &'a AccountInfo) -> Result<TokenProgramInfo<'a>, FirebirdError> {
        if !pubkey_eq(info.key(), &pinocchio_token::ID) {
            return Err(FirebirdError::InvalidTokenProgram);
        }

        Ok(Self { info })
    }
}
