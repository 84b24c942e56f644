//! Client-side utilities for interacting with the firebird program.
//!
//! Includes context helpers for building instructions, PDA derivations, and
//! an RPC harness for the e2e examples.

pub mod context;
pub mod logs;
pub mod mollusk_helpers;
pub mod pda;
pub mod token_instructions;
pub mod transactions;

pub use logs::LogColor;

use solana_sdk::pubkey::Pubkey;

/// The firebird program id as an sdk pubkey.
pub fn program_id() -> Pubkey {
    Pubkey::from(firebird_interface::program::ID)
}

/// The configured trigger authority as an sdk pubkey.
pub fn trigger_authority() -> Pubkey {
    Pubkey::from(firebird_interface::TRIGGER_AUTHORITY_ID)
}

/// The Raydium AMM v4 program as an sdk pubkey.
pub fn raydium_program() -> Pubkey {
    Pubkey::from(firebird_interface::RAYDIUM_AMM_V4_ID)
}

/// The wrapped SOL mint as an sdk pubkey.
pub fn wsol_mint() -> Pubkey {
    Pubkey::from(firebird_interface::WSOL_MINT_ID)
}
