use pinocchio::program_error::ProgramError;

#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
#[cfg_attr(
    any(test, feature = "client"),
    derive(strum_macros::FromRepr, strum_macros::EnumIter)
)]
pub enum FirebirdError {
    InvalidInstructionTag,
    InsufficientByteLength,
    NotEnoughAccountKeys,
    AlreadyInitializedAccount,
    NotOwnedBySystemProgram,
    UninitializedPosition,
    InvalidAccountDiscriminant,
    PositionMintMismatch,
    OwnerNotTokenProgram,
    TokenAccountMintMismatch,
    IncorrectTokenAccountOwner,
    InvalidTokenProgram,
    InvalidWsolMint,
    InvalidTriggerAuthority,
    InvalidRaydiumProgram,
    DepositTooSmall,
    InsufficientVaultFunds,
    NumericOverflow,
    InvalidVaultAuthority,
    InvalidPositionAddress,
}

impl From<FirebirdError> for ProgramError {
    #[inline(always)]
    fn from(e: FirebirdError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl From<FirebirdError> for &'static str {
    fn from(value: FirebirdError) -> Self {
        match value {
            FirebirdError::InvalidInstructionTag => "Invalid instruction tag",
            FirebirdError::InsufficientByteLength => "Not enough bytes passed",
            FirebirdError::NotEnoughAccountKeys => "Not enough account keys passed",
            FirebirdError::AlreadyInitializedAccount => "Account is already initialized",
            FirebirdError::NotOwnedBySystemProgram => {
                "Account isn't owned by the system program"
            }
            FirebirdError::UninitializedPosition => "Position account isn't initialized",
            FirebirdError::InvalidAccountDiscriminant => "Invalid account discriminant",
            FirebirdError::PositionMintMismatch => {
                "Position isn't registered for the passed mint"
            }
            FirebirdError::OwnerNotTokenProgram => "Account isn't owned by the token program",
            FirebirdError::TokenAccountMintMismatch => "Token account has the wrong mint",
            FirebirdError::IncorrectTokenAccountOwner => "Token account has the wrong owner",
            FirebirdError::InvalidTokenProgram => "Invalid token program account",
            FirebirdError::InvalidWsolMint => "Account isn't the wrapped SOL mint",
            FirebirdError::InvalidTriggerAuthority => {
                "Signer isn't the configured trigger authority"
            }
            FirebirdError::InvalidRaydiumProgram => "Account isn't the Raydium AMM v4 program",
            FirebirdError::DepositTooSmall => {
                "Deposit is below the piece divisor and would accrue nothing"
            }
            FirebirdError::InsufficientVaultFunds => "Vault balance is insufficient",
            FirebirdError::NumericOverflow => "Arithmetic overflow",
            FirebirdError::InvalidVaultAuthority => {
                "Vault authority doesn't match the position's derived PDA"
            }
            FirebirdError::InvalidPositionAddress => {
                "Position account doesn't match the mint's derived PDA"
            }
        }
    }
}

#[cfg(not(target_os = "solana"))]
impl core::fmt::Display for FirebirdError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn error_codes_round_trip_through_custom_program_errors() {
        for error in FirebirdError::iter() {
            let code = error.clone() as u32;
            assert_eq!(ProgramError::from(error.clone()), ProgramError::Custom(code));
            assert_eq!(FirebirdError::from_repr(code as u8), Some(error));
        }
    }

    #[test]
    fn every_error_has_a_message() {
        for error in FirebirdError::iter() {
            let msg: &'static str = error.into();
            assert!(!msg.is_empty());
        }
    }
}
