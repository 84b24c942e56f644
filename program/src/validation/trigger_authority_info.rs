use firebird_interface::{error::FirebirdError, TRIGGER_AUTHORITY_ID};
use pinocchio::{account_info::AccountInfo, pubkey::pubkey_eq};

/// The configured trigger authority, which must sign every swap instruction.
#[derive(Clone)]
pub struct TriggerAuthorityInfo<'a> {
    pub info: &'a AccountInfo,
}

impl<'a> TriggerAuthorityInfo<'a> {
    #[inline(always)]
    pub fn new(info: &'a AccountInfo) -> Result<TriggerAuthorityInfo<'a>, FirebirdError> {
        if !info.is_signer() || !pubkey_eq(info.key(), &TRIGGER_AUTHORITY_ID) {
            return Err(FirebirdError::InvalidTriggerAuthority);
        }

        Ok(Self { info })
    }
}
