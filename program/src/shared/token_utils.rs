use pinocchio::program_error::ProgramError;

use crate::context::deposit_context::DepositContext;

/// Transfers `amount` of the position's token from the depositor's token
/// account into the vault.
pub fn deposit_to_vault(ctx: &DepositContext, amount: u64) -> Result<(), ProgramError> {
    pinocchio_token::instructions::Transfer {
        from: ctx.depositor_ata.info,
        to: ctx.vault_ata.info,
        authority: ctx.depositor,
        amount,
    }
    .invoke()?;

    Ok(())
}
