use core::mem::MaybeUninit;

use static_assertions::const_assert_eq;

use crate::{
    pack::{write_bytes, Pack},
    state::{transmutable::Transmutable, LeU64},
};

/// Instruction data for `Deposit` and `BuyBack`: a single token amount.
#[repr(C)]
pub struct AmountInstructionData {
    amount: LeU64,
}

impl AmountInstructionData {
    pub fn new(amount: u64) -> Self {
        AmountInstructionData {
            amount: amount.to_le_bytes(),
        }
    }

    #[inline(always)]
    pub fn amount(&self) -> u64 {
        u64::from_le_bytes(self.amount)
    }
}

unsafe impl Pack<8> for AmountInstructionData {
    fn pack_into_slice(&self, dst: &mut [MaybeUninit<u8>; 8]) {
        write_bytes(&mut dst[0..8], &self.amount);
    }
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - All bit patterns are valid.
unsafe impl Transmutable for AmountInstructionData {
    const LEN: usize = 8;
}

const_assert_eq!(
    AmountInstructionData::LEN,
    size_of::<AmountInstructionData>()
);
const_assert_eq!(1, align_of::<AmountInstructionData>());
