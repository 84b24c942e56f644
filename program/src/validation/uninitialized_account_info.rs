use firebird_interface::{error::FirebirdError, state::SYSTEM_PROGRAM_ID, utils::owned_by};
use pinocchio::account_info::AccountInfo;

/// Represents a completely uninitialized account.
#[derive(Clone)]
pub struct UninitializedAccountInfo<'a> {
    pub info: &'a AccountInfo,
}

impl<'a> UninitializedAccountInfo<'a> {
    #[inline(always)]
    pub fn new(info: &'a AccountInfo) -> Result<UninitializedAccountInfo<'a>, FirebirdError> {
        if !info.data_is_empty() {
            return Err(FirebirdError::AlreadyInitializedAccount);
        }

        if !owned_by(info, &SYSTEM_PROGRAM_ID) {
            return Err(FirebirdError::NotOwnedBySystemProgram);
        }

        Ok(Self { info })
    }

    /// For accounts whose initialization state is fully validated by a later
    /// CPI, such as the non-idempotent associated token account creation.
    #[inline(always)]
    pub fn new_unchecked(info: &'a AccountInfo) -> UninitializedAccountInfo<'a> {
        UninitializedAccountInfo { info }
    }
}
