//! Wire format for the Raydium AMM v4 `swap_base_in` instruction.
//!
//! The swap instruction takes 14 pool accounts (AMM and Serum market side) in
//! a fixed order, followed by the user source/destination token accounts and
//! the source owner. Firebird passes its vault ATAs as source/destination and
//! signs as the vault authority PDA.

use core::mem::MaybeUninit;

use static_assertions::const_assert_eq;

use crate::{
    pack::{write_bytes, Pack},
    state::LeU64,
};

/// The Raydium AMM v4 instruction discriminator for `swap_base_in`.
pub const SWAP_BASE_IN_TAG: u8 = 9;

/// The number of AMM/Serum pool accounts preceding the vault accounts in a
/// `swap_base_in` call.
pub const POOL_ACCOUNTS_LEN: usize = 14;

/// Pool account indexes that are read-only: the AMM authority, the Serum
/// program, and the Serum vault signer. Every other pool account is writable.
pub const READONLY_POOL_ACCOUNT_INDEXES: [usize; 3] = [1, 6, 13];

/// Instruction data for `swap_base_in`: `[tag, amount_in, minimum_amount_out]`.
#[repr(C)]
pub struct SwapBaseInInstructionData {
    tag: u8,
    amount_in: LeU64,
    minimum_amount_out: LeU64,
}

impl SwapBaseInInstructionData {
    pub fn new(amount_in: u64, minimum_amount_out: u64) -> Self {
        SwapBaseInInstructionData {
            tag: SWAP_BASE_IN_TAG,
            amount_in: amount_in.to_le_bytes(),
            minimum_amount_out: minimum_amount_out.to_le_bytes(),
        }
    }

    #[inline(always)]
    pub fn amount_in(&self) -> u64 {
        u64::from_le_bytes(self.amount_in)
    }

    #[inline(always)]
    pub fn minimum_amount_out(&self) -> u64 {
        u64::from_le_bytes(self.minimum_amount_out)
    }
}

unsafe impl Pack<17> for SwapBaseInInstructionData {
    fn pack_into_slice(&self, dst: &mut [MaybeUninit<u8>; 17]) {
        write_bytes(&mut dst[0..1], &[self.tag]);
        write_bytes(&mut dst[1..9], &self.amount_in);
        write_bytes(&mut dst[9..17], &self.minimum_amount_out);
    }
}

const_assert_eq!(17, size_of::<SwapBaseInInstructionData>());
const_assert_eq!(1, align_of::<SwapBaseInInstructionData>());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_base_in_byte_layout() {
        let data = SwapBaseInInstructionData::new(5_000, 1).pack();

        assert_eq!(data.len(), 17);
        assert_eq!(data[0], SWAP_BASE_IN_TAG);
        assert_eq!(&data[1..9], &5_000u64.to_le_bytes());
        assert_eq!(&data[9..17], &1u64.to_le_bytes());
    }

    #[test]
    fn readonly_pool_indexes_are_in_bounds() {
        for index in READONLY_POOL_ACCOUNT_INDEXES {
            assert!(index < POOL_ACCOUNTS_LEN);
        }
    }
}
