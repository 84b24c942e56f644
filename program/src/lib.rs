#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod context;
mod instructions;
mod shared;
mod validation;

#[cfg(not(feature = "no-entrypoint"))]
mod entrypoint;

pinocchio_pubkey::declare_id!("FSH9An6asnz4m4WdhUkmsCjTWh4Q3ytoa6mcEva6xYqZ");
