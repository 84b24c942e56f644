#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod instructions;
pub mod pack;
pub mod raydium;
pub mod state;
pub mod utils;

use pinocchio::pubkey::Pubkey;

pub mod program {
    pinocchio_pubkey::declare_id!("FSH9An6asnz4m4WdhUkmsCjTWh4Q3ytoa6mcEva6xYqZ");
}

/// The only key allowed to trigger `Sell` and `BuyBack` swaps.
pub const TRIGGER_AUTHORITY_ID: Pubkey =
    pinocchio_pubkey::pubkey!("9s3TcTSpTXMzQ3RFW8GC97o9ooTe7ZRu6zPUai5NdUgf");

/// The Raydium AMM v4 program, the only allowed swap target.
pub const RAYDIUM_AMM_V4_ID: Pubkey =
    pinocchio_pubkey::pubkey!("675kPX9MHTjS2zt1qfr1NYHuzeLXfQM9H24wFSUt1Mp8");

/// The wrapped SOL mint. Every position's sell proceeds accumulate in a
/// wrapped SOL vault owned by the position's vault authority.
pub const WSOL_MINT_ID: Pubkey =
    pinocchio_pubkey::pubkey!("So11111111111111111111111111111111111111112");
