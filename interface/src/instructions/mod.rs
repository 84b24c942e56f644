use pinocchio::program_error::ProgramError;

use crate::error::FirebirdError;

pub mod amount;

/// The first instruction data byte of every firebird instruction.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    any(test, feature = "client"),
    derive(strum_macros::Display, strum_macros::FromRepr, strum_macros::EnumIter)
)]
pub enum InstructionTag {
    /// Register a token mint: create its position PDA and both vault ATAs.
    Initialize,
    /// Move tokens from the depositor into the vault and accrue the piece.
    Deposit,
    /// Swap `min(piece, vault balance)` of the token into wrapped SOL.
    Sell,
    /// Swap wrapped SOL from the vault back into the token.
    BuyBack,
}

impl TryFrom<u8> for InstructionTag {
    type Error = ProgramError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            // SAFETY: A valid enum variant is guaranteed with the match pattern.
            // All variants are checked in the exhaustive instruction tag test.
            0..4 => Ok(unsafe { core::mem::transmute::<u8, Self>(value) }),
            _ => Err(FirebirdError::InvalidInstructionTag.into()),
        }
    }
}
