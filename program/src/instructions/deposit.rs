use firebird_interface::{
    error::FirebirdError,
    instructions::amount::AmountInstructionData,
    state::{
        position::{DcaPosition, PIECE_DIVISOR},
        transmutable::load,
    },
};
use pinocchio::{account_info::AccountInfo, ProgramResult};

use crate::{context::deposit_context::DepositContext, shared::token_utils::deposit_to_vault};

/// Moves tokens from the depositor into the vault and accrues the piece.
pub fn process_deposit(accounts: &[AccountInfo], instruction_data: &[u8]) -> ProgramResult {
    let ctx = DepositContext::load(accounts)?;

    // Safety: All bit patterns are valid.
    let amount = unsafe { load::<AmountInstructionData>(instruction_data) }?.amount();

    // An amount that accrues nothing is rejected before any tokens move.
    if amount / PIECE_DIVISOR == 0 {
        return Err(FirebirdError::DepositTooSmall.into());
    }

    deposit_to_vault(&ctx, amount)?;

    // The transfer CPI has completed, so the position data is not borrowed.
    let mut data = ctx.position.info.try_borrow_mut_data()?;
    DcaPosition::from_bytes_mut(&mut data)?.record_deposit(amount)?;

    Ok(())
}
