use firebird_interface::error::FirebirdError;
use pinocchio::{account_info::AccountInfo, ProgramResult};

use crate::{context::swap_context::SwapContext, shared::raydium_swap::VaultSwap};

/// The minimum amount of wrapped SOL a sell must yield. Slippage exposure is
/// controlled by piece sizing, not by this floor, matching the deployed
/// trigger bot's behavior.
const MIN_AMOUNT_OUT: u64 = 1;

/// Swaps one piece of the vault's tokens into wrapped SOL through Raydium.
///
/// Only the trigger authority may call this; the swap is signed by the vault
/// authority PDA as the source owner.
pub fn process_sell(accounts: &[AccountInfo], _instruction_data: &[u8]) -> ProgramResult {
    let ctx = SwapContext::load(accounts)?;

    // Sell whatever is smaller: the accrued piece or what's left in the vault.
    let vault_balance = ctx.vault_ata.get_balance()?;
    let amount_in = ctx.summary.piece.min(vault_balance);
    if amount_in == 0 {
        return Err(FirebirdError::InsufficientVaultFunds.into());
    }

    VaultSwap {
        raydium_program: ctx.raydium_program.info,
        token_program: ctx.token_program.info,
        pool: ctx.pool,
        source: ctx.vault_ata.info,
        destination: ctx.wsol_vault_ata.info,
        vault_authority: ctx.vault_authority.info,
        token_mint: &ctx.summary.token_mint,
        vault_bump: ctx.summary.vault_bump,
        amount_in,
        minimum_amount_out: MIN_AMOUNT_OUT,
    }
    .invoke()
}
