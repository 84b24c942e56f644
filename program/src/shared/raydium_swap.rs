//! Builds and invokes the Raydium AMM v4 `swap_base_in` CPI with the vault
//! authority PDA signing as the source token account owner.

use firebird_interface::{
    pack::Pack,
    raydium::{SwapBaseInInstructionData, POOL_ACCOUNTS_LEN, READONLY_POOL_ACCOUNT_INDEXES},
};
use pinocchio::{
    account_info::AccountInfo,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    ProgramResult,
};

use crate::vault_signer;

/// Total accounts passed to `swap_base_in`: the token program, the pool
/// accounts, the source and destination token accounts, and the source owner.
pub const SWAP_ACCOUNTS_LEN: usize = 1 + POOL_ACCOUNTS_LEN + 3;

pub struct VaultSwap<'a> {
    pub raydium_program: &'a AccountInfo,
    pub token_program: &'a AccountInfo,
    /// The 14 AMM/Serum pool accounts in Raydium's `swap_base_in` order.
    pub pool: &'a [AccountInfo; POOL_ACCOUNTS_LEN],
    /// The vault token account swapped out of.
    pub source: &'a AccountInfo,
    /// The vault token account the proceeds land in.
    pub destination: &'a AccountInfo,
    pub vault_authority: &'a AccountInfo,
    pub token_mint: &'a Pubkey,
    pub vault_bump: u8,
    pub amount_in: u64,
    pub minimum_amount_out: u64,
}

impl VaultSwap<'_> {
    pub fn invoke(&self) -> ProgramResult {
        let data = SwapBaseInInstructionData::new(self.amount_in, self.minimum_amount_out).pack();

        let account_metas: [AccountMeta; SWAP_ACCOUNTS_LEN] = [
            AccountMeta::readonly(self.token_program.key()),
            pool_account_meta(&self.pool[0], 0),
            pool_account_meta(&self.pool[1], 1),
            pool_account_meta(&self.pool[2], 2),
            pool_account_meta(&self.pool[3], 3),
            pool_account_meta(&self.pool[4], 4),
            pool_account_meta(&self.pool[5], 5),
            pool_account_meta(&self.pool[6], 6),
            pool_account_meta(&self.pool[7], 7),
            pool_account_meta(&self.pool[8], 8),
            pool_account_meta(&self.pool[9], 9),
            pool_account_meta(&self.pool[10], 10),
            pool_account_meta(&self.pool[11], 11),
            pool_account_meta(&self.pool[12], 12),
            pool_account_meta(&self.pool[13], 13),
            AccountMeta::writable(self.source.key()),
            AccountMeta::writable(self.destination.key()),
            AccountMeta::readonly_signer(self.vault_authority.key()),
        ];

        let instruction = Instruction {
            program_id: self.raydium_program.key(),
            accounts: &account_metas,
            data: &data,
        };

        pinocchio::cpi::invoke_signed(
            &instruction,
            &[
                self.token_program,
                &self.pool[0],
                &self.pool[1],
                &self.pool[2],
                &self.pool[3],
                &self.pool[4],
                &self.pool[5],
                &self.pool[6],
                &self.pool[7],
                &self.pool[8],
                &self.pool[9],
                &self.pool[10],
                &self.pool[11],
                &self.pool[12],
                &self.pool[13],
                self.source,
                self.destination,
                self.vault_authority,
            ],
            &[vault_signer!(self.token_mint, self.vault_bump)],
        )
    }
}

#[inline(always)]
fn pool_account_meta(info: &AccountInfo, index: usize) -> AccountMeta<'_> {
    if READONLY_POOL_ACCOUNT_INDEXES.contains(&index) {
        AccountMeta::readonly(info.key())
    } else {
        AccountMeta::writable(info.key())
    }
}
