//! PDA helpers for deriving `firebird` program addresses.

use firebird_interface::state::position::{POSITION_SEED_STR, VAULT_SEED_STR};
use solana_sdk::pubkey::Pubkey;

use crate::program_id;

pub fn find_position_address(token_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POSITION_SEED_STR, token_mint.as_ref()], &program_id())
}

pub fn find_vault_authority_address(token_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED_STR, token_mint.as_ref()], &program_id())
}
