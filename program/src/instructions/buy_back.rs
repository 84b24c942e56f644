use firebird_interface::{
    error::FirebirdError,
    instructions::amount::AmountInstructionData,
    state::transmutable::load,
};
use pinocchio::{account_info::AccountInfo, ProgramResult};

use crate::{context::swap_context::SwapContext, shared::raydium_swap::VaultSwap};

const MIN_AMOUNT_OUT: u64 = 1;

/// Swaps `amount` of the vault's wrapped SOL back into the position's token
/// through Raydium. Trigger-gated, like `Sell`.
pub fn process_buy_back(accounts: &[AccountInfo], instruction_data: &[u8]) -> ProgramResult {
    let ctx = SwapContext::load(accounts)?;

    // Safety: All bit patterns are valid.
    let amount_in = unsafe { load::<AmountInstructionData>(instruction_data) }?.amount();

    let wsol_balance = ctx.wsol_vault_ata.get_balance()?;
    if amount_in == 0 || wsol_balance < amount_in {
        return Err(FirebirdError::InsufficientVaultFunds.into());
    }

    VaultSwap {
        raydium_program: ctx.raydium_program.info,
        token_program: ctx.token_program.info,
        pool: ctx.pool,
        source: ctx.wsol_vault_ata.info,
        destination: ctx.vault_ata.info,
        vault_authority: ctx.vault_authority.info,
        token_mint: &ctx.summary.token_mint,
        vault_bump: ctx.summary.vault_bump,
        amount_in,
        minimum_amount_out: MIN_AMOUNT_OUT,
    }
    .invoke()
}
