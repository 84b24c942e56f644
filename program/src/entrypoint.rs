use firebird_interface::{error::FirebirdError, instructions::InstructionTag};
use pinocchio::{account_info::AccountInfo, pubkey::Pubkey, ProgramResult};

use crate::instructions::*;

pinocchio::program_entrypoint!(process_instruction);
pinocchio::no_allocator!();
pinocchio::nostd_panic_handler!();

#[inline(always)]
pub fn process_instruction(
    _program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let [tag, remaining @ ..] = instruction_data else {
        return Err(FirebirdError::InvalidInstructionTag.into());
    };

    match InstructionTag::try_from(*tag)? {
        InstructionTag::Initialize => process_initialize(accounts, remaining),
        InstructionTag::Deposit => process_deposit(accounts, remaining),
        InstructionTag::Sell => process_sell(accounts, remaining),
        InstructionTag::BuyBack => process_buy_back(accounts, remaining),
    }
}
