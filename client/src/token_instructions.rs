//! Builders for the SPL token instructions the examples need.

use solana_instruction::Instruction;
use solana_sdk::{program_pack::Pack, pubkey::Pubkey};
use solana_system_interface::instruction::create_account;
use spl_token_interface::state::Mint;

/// The instruction pair that creates and initializes a new SPL token mint.
///
/// `rent_lamports` must be the rent-exempt minimum for [`Mint::LEN`] bytes,
/// fetched from the cluster.
pub fn create_mint_instructions(
    payer: &Pubkey,
    mint: &Pubkey,
    mint_authority: &Pubkey,
    decimals: u8,
    rent_lamports: u64,
) -> anyhow::Result<[Instruction; 2]> {
    let token_program = spl_token_interface::id();

    let create = create_account(
        payer,
        mint,
        rent_lamports,
        Mint::LEN as u64,
        &token_program,
    );
    let initialize = spl_token_2022_interface::instruction::initialize_mint2(
        &token_program,
        mint,
        mint_authority,
        None,
        decimals,
    )?;

    Ok([create, initialize])
}
