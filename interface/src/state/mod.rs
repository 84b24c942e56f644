pub mod position;
pub mod transmutable;

use pinocchio::pubkey::Pubkey;

pub const SYSTEM_PROGRAM_ID: Pubkey =
    pinocchio_pubkey::pubkey!("11111111111111111111111111111111");

/// A u64 stored as little-endian bytes so state structs stay align-1.
pub type LeU64 = [u8; 8];
