use pinocchio::pubkey::{pubkey_eq, Pubkey};
use static_assertions::const_assert_eq;

use crate::{
    error::FirebirdError,
    state::{
        transmutable::{load, load_mut, Transmutable},
        LeU64,
    },
};

/// Seed prefix for the per-mint [`DcaPosition`] account PDA.
pub const POSITION_SEED_STR: &[u8] = b"position";

/// Seed prefix for the per-mint vault authority PDA that owns both vault
/// associated token accounts and signs the Raydium swaps.
pub const VAULT_SEED_STR: &[u8] = b"vault";

pub const POSITION_ACCOUNT_DISCRIMINANT: u8 = 1;

/// Every deposit accrues `amount / PIECE_DIVISOR` to the position's piece, so
/// each trigger sells one percent of the cumulative deposits.
pub const PIECE_DIVISOR: u64 = 100;

/// The per-mint DCA position account.
///
/// Lives at the `["position", token_mint]` PDA and is created exactly once by
/// the `Initialize` instruction. All integers are stored as little-endian
/// bytes so the struct stays align-1 and can be viewed directly over the
/// account data.
#[repr(C)]
#[derive(Debug)]
pub struct DcaPosition {
    discriminant: u8,
    position_bump: u8,
    vault_bump: u8,
    token_mint: Pubkey,
    piece: LeU64,
    total_deposited: LeU64,
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - All bit patterns are valid.
unsafe impl Transmutable for DcaPosition {
    const LEN: usize = 1 + 1 + 1 + 32 + 8 + 8;
}

const_assert_eq!(DcaPosition::LEN, size_of::<DcaPosition>());
const_assert_eq!(1, align_of::<DcaPosition>());

impl DcaPosition {
    /// Views initialized position account data, checking the discriminant.
    pub fn from_bytes(bytes: &[u8]) -> Result<&Self, FirebirdError> {
        // Safety: All bit patterns are valid; the discriminant is checked below.
        let position = unsafe { load::<DcaPosition>(bytes) }?;
        if position.discriminant != POSITION_ACCOUNT_DISCRIMINANT {
            return Err(FirebirdError::InvalidAccountDiscriminant);
        }
        Ok(position)
    }

    /// Mutably views initialized position account data, checking the discriminant.
    pub fn from_bytes_mut(bytes: &mut [u8]) -> Result<&mut Self, FirebirdError> {
        // Safety: All bit patterns are valid; the discriminant is checked below.
        let position = unsafe { load_mut::<DcaPosition>(bytes) }?;
        if position.discriminant != POSITION_ACCOUNT_DISCRIMINANT {
            return Err(FirebirdError::InvalidAccountDiscriminant);
        }
        Ok(position)
    }

    /// Views freshly allocated (all-zero) account data and writes the initial state.
    pub fn initialize<'a>(
        bytes: &'a mut [u8],
        token_mint: &Pubkey,
        position_bump: u8,
        vault_bump: u8,
    ) -> Result<&'a mut Self, FirebirdError> {
        // Safety: All bit patterns are valid.
        let position = unsafe { load_mut::<DcaPosition>(bytes) }?;
        if position.discriminant != 0 {
            return Err(FirebirdError::AlreadyInitializedAccount);
        }

        position.discriminant = POSITION_ACCOUNT_DISCRIMINANT;
        position.position_bump = position_bump;
        position.vault_bump = vault_bump;
        position.token_mint = *token_mint;
        position.piece = 0u64.to_le_bytes();
        position.total_deposited = 0u64.to_le_bytes();

        Ok(position)
    }

    #[inline(always)]
    pub fn token_mint(&self) -> &Pubkey {
        &self.token_mint
    }

    #[inline(always)]
    pub fn is_for_mint(&self, mint: &Pubkey) -> bool {
        pubkey_eq(&self.token_mint, mint)
    }

    #[inline(always)]
    pub fn position_bump(&self) -> u8 {
        self.position_bump
    }

    #[inline(always)]
    pub fn vault_bump(&self) -> u8 {
        self.vault_bump
    }

    /// The amount of the token sold on each trigger.
    #[inline(always)]
    pub fn piece(&self) -> u64 {
        u64::from_le_bytes(self.piece)
    }

    #[inline(always)]
    pub fn total_deposited(&self) -> u64 {
        u64::from_le_bytes(self.total_deposited)
    }

    /// Accrues a deposit into the position and returns the piece increment.
    ///
    /// Deposits below [`PIECE_DIVISOR`] would accrue a zero piece increment
    /// and are rejected.
    pub fn record_deposit(&mut self, amount: u64) -> Result<u64, FirebirdError> {
        let increment = amount / PIECE_DIVISOR;
        if increment == 0 {
            return Err(FirebirdError::DepositTooSmall);
        }

        let piece = self
            .piece()
            .checked_add(increment)
            .ok_or(FirebirdError::NumericOverflow)?;
        let total = self
            .total_deposited()
            .checked_add(amount)
            .ok_or(FirebirdError::NumericOverflow)?;

        self.piece = piece.to_le_bytes();
        self.total_deposited = total.to_le_bytes();

        Ok(increment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINT: Pubkey = [7u8; 32];

    #[test]
    fn initialize_writes_discriminant_and_bumps() {
        let mut data = [0u8; DcaPosition::LEN];
        let position = DcaPosition::initialize(&mut data, &MINT, 254, 253).unwrap();

        assert!(position.is_for_mint(&MINT));
        assert_eq!(position.position_bump(), 254);
        assert_eq!(position.vault_bump(), 253);
        assert_eq!(position.piece(), 0);
        assert_eq!(position.total_deposited(), 0);

        // The same bytes now view as an initialized position.
        assert!(DcaPosition::from_bytes(&data).is_ok());
    }

    #[test]
    fn initialize_rejects_already_initialized_data() {
        let mut data = [0u8; DcaPosition::LEN];
        DcaPosition::initialize(&mut data, &MINT, 254, 253).unwrap();

        assert_eq!(
            DcaPosition::initialize(&mut data, &MINT, 254, 253).unwrap_err(),
            FirebirdError::AlreadyInitializedAccount
        );
    }

    #[test]
    fn from_bytes_rejects_uninitialized_data() {
        let data = [0u8; DcaPosition::LEN];
        assert_eq!(
            DcaPosition::from_bytes(&data).unwrap_err(),
            FirebirdError::InvalidAccountDiscriminant
        );
    }

    #[test]
    fn from_bytes_rejects_wrong_length() {
        let data = [0u8; DcaPosition::LEN - 1];
        assert_eq!(
            DcaPosition::from_bytes(&data).unwrap_err(),
            FirebirdError::InsufficientByteLength
        );
    }

    #[test]
    fn record_deposit_accrues_piece_and_total() {
        let mut data = [0u8; DcaPosition::LEN];
        let position = DcaPosition::initialize(&mut data, &MINT, 254, 253).unwrap();

        assert_eq!(position.record_deposit(1_000).unwrap(), 10);
        assert_eq!(position.piece(), 10);
        assert_eq!(position.total_deposited(), 1_000);

        // A second deposit accumulates rather than overwrites.
        assert_eq!(position.record_deposit(250).unwrap(), 2);
        assert_eq!(position.piece(), 12);
        assert_eq!(position.total_deposited(), 1_250);
    }

    #[test]
    fn record_deposit_rejects_amounts_below_the_divisor() {
        let mut data = [0u8; DcaPosition::LEN];
        let position = DcaPosition::initialize(&mut data, &MINT, 254, 253).unwrap();

        assert_eq!(
            position.record_deposit(PIECE_DIVISOR - 1).unwrap_err(),
            FirebirdError::DepositTooSmall
        );
        assert_eq!(position.piece(), 0);
        assert_eq!(position.total_deposited(), 0);
    }

    #[test]
    fn record_deposit_checks_overflow() {
        let mut data = [0u8; DcaPosition::LEN];
        let position = DcaPosition::initialize(&mut data, &MINT, 254, 253).unwrap();

        position.record_deposit(u64::MAX - (u64::MAX % PIECE_DIVISOR)).unwrap();
        assert_eq!(
            position.record_deposit(PIECE_DIVISOR).unwrap_err(),
            FirebirdError::NumericOverflow
        );
    }
}
