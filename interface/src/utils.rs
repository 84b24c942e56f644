use pinocchio::{
    account_info::AccountInfo,
    pubkey::{pubkey_eq, Pubkey},
};

#[inline(always)]
pub fn owned_by(info: &AccountInfo, potential_owner: &Pubkey) -> bool {
    pubkey_eq(info.owner(), potential_owner)
}
