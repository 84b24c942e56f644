//! See [`PositionContext`].

use firebird_interface::{
    instructions::{
        amount::AmountInstructionData,
        InstructionTag,
    },
    pack::Pack,
    raydium::READONLY_POOL_ACCOUNT_INDEXES,
};
use solana_instruction::{
    AccountMeta,
    Instruction,
};
use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account_interface::address::get_associated_token_address;

use crate::{
    pda::{
        find_position_address,
        find_vault_authority_address,
    },
    program_id,
    raydium_program,
    trigger_authority,
    wsol_mint,
};

/// The fourteen AMM and Serum market accounts a Raydium `swap_base_in` call
/// forwards, in the order the AMM program expects.
#[derive(Clone, Debug)]
pub struct RaydiumPoolKeys {
    pub amm: Pubkey,
    pub amm_authority: Pubkey,
    pub amm_open_orders: Pubkey,
    pub amm_target_orders: Pubkey,
    pub pool_coin_vault: Pubkey,
    pub pool_pc_vault: Pubkey,
    pub serum_program: Pubkey,
    pub serum_market: Pubkey,
    pub serum_bids: Pubkey,
    pub serum_asks: Pubkey,
    pub serum_event_queue: Pubkey,
    pub serum_coin_vault: Pubkey,
    pub serum_pc_vault: Pubkey,
    pub serum_vault_signer: Pubkey,
}

impl RaydiumPoolKeys {
    /// The pool accounts as metas, writable except for the AMM authority, the
    /// Serum program, and the Serum vault signer.
    pub fn to_account_metas(&self) -> Vec<AccountMeta> {
        [
            self.amm,
            self.amm_authority,
            self.amm_open_orders,
            self.amm_target_orders,
            self.pool_coin_vault,
            self.pool_pc_vault,
            self.serum_program,
            self.serum_market,
            self.serum_bids,
            self.serum_asks,
            self.serum_event_queue,
            self.serum_coin_vault,
            self.serum_pc_vault,
            self.serum_vault_signer,
        ]
        .iter()
        .enumerate()
        .map(|(index, key)| {
            if READONLY_POOL_ACCOUNT_INDEXES.contains(&index) {
                AccountMeta::new_readonly(*key, false)
            } else {
                AccountMeta::new(*key, false)
            }
        })
        .collect()
    }
}

/// Everything derived from a token mint: the position PDA, the vault
/// authority PDA, and both vault associated token accounts. Its methods build
/// the program's four instructions.
#[derive(Clone, Debug)]
pub struct PositionContext {
    pub token_mint: Pubkey,
    pub position: Pubkey,
    pub position_bump: u8,
    pub vault_authority: Pubkey,
    pub vault_bump: u8,
    pub vault_ata: Pubkey,
    pub wsol_vault_ata: Pubkey,
}

impl PositionContext {
    pub fn new(token_mint: Pubkey) -> Self {
        let (position, position_bump) = find_position_address(&token_mint);
        let (vault_authority, vault_bump) = find_vault_authority_address(&token_mint);
        let vault_ata = get_associated_token_address(&vault_authority, &token_mint);
        let wsol_vault_ata = get_associated_token_address(&vault_authority, &wsol_mint());

        Self {
            token_mint,
            position,
            position_bump,
            vault_authority,
            vault_bump,
            vault_ata,
            wsol_vault_ata,
        }
    }

    /// The depositor's associated token account for the position's mint.
    pub fn ata_for(&self, owner: &Pubkey) -> Pubkey {
        get_associated_token_address(owner, &self.token_mint)
    }

    /// Registers the mint: creates the position PDA and both vault ATAs.
    ///
    /// ### Accounts
    ///  0. `[WRITE, SIGNER]` Payer
    ///  1. `[WRITE]` Position PDA
    ///  2. `[READ]` Token mint
    ///  3. `[READ]` Wrapped SOL mint
    ///  4. `[READ]` Vault authority PDA
    ///  5. `[WRITE]` Vault associated token account
    ///  6. `[WRITE]` Wrapped SOL vault associated token account
    ///  7. `[READ]` Token program
    ///  8. `[READ]` Associated token program
    ///  9. `[READ]` System program
    pub fn initialize(&self, payer: &Pubkey) -> Instruction {
        Instruction {
            program_id: program_id(),
            accounts: vec![
                AccountMeta::new(*payer, true),
                AccountMeta::new(self.position, false),
                AccountMeta::new_readonly(self.token_mint, false),
                AccountMeta::new_readonly(wsol_mint(), false),
                AccountMeta::new_readonly(self.vault_authority, false),
                AccountMeta::new(self.vault_ata, false),
                AccountMeta::new(self.wsol_vault_ata, false),
                AccountMeta::new_readonly(spl_token_interface::id(), false),
                AccountMeta::new_readonly(spl_associated_token_account_interface::program::id(), false),
                AccountMeta::new_readonly(solana_system_interface::program::id(), false),
            ],
            data: vec![InstructionTag::Initialize as u8],
        }
    }

    /// Moves `amount` tokens from the depositor's ATA into the vault.
    ///
    /// ### Accounts
    ///  0. `[WRITE, SIGNER]` Depositor
    ///  1. `[WRITE]` Position PDA
    ///  2. `[READ]` Token mint
    ///  3. `[READ]` Vault authority PDA
    ///  4. `[WRITE]` Depositor associated token account
    ///  5. `[WRITE]` Vault associated token account
    ///  6. `[READ]` Token program
    pub fn deposit(&self, depositor: &Pubkey, amount: u64) -> Instruction {
        Instruction {
            program_id: program_id(),
            accounts: vec![
                AccountMeta::new(*depositor, true),
                AccountMeta::new(self.position, false),
                AccountMeta::new_readonly(self.token_mint, false),
                AccountMeta::new_readonly(self.vault_authority, false),
                AccountMeta::new(self.ata_for(depositor), false),
                AccountMeta::new(self.vault_ata, false),
                AccountMeta::new_readonly(spl_token_interface::id(), false),
            ],
            data: data_with_amount(InstructionTag::Deposit, amount),
        }
    }

    /// Swaps one accrued piece of the vault's tokens into wrapped SOL. Only
    /// valid when signed by the trigger authority.
    pub fn sell(&self, pool: &RaydiumPoolKeys) -> Instruction {
        Instruction {
            program_id: program_id(),
            accounts: self.swap_accounts(pool),
            data: vec![InstructionTag::Sell as u8],
        }
    }

    /// Swaps `amount` of vault wrapped SOL back into the token. Only valid
    /// when signed by the trigger authority.
    pub fn buy_back(&self, pool: &RaydiumPoolKeys, amount: u64) -> Instruction {
        Instruction {
            program_id: program_id(),
            accounts: self.swap_accounts(pool),
            data: data_with_amount(InstructionTag::BuyBack, amount),
        }
    }

    /// The shared `Sell`/`BuyBack` account list.
    ///
    /// ### Accounts
    ///  0. `[SIGNER]` Trigger authority
    ///  1. `[READ]` Position PDA
    ///  2. `[READ]` Token mint
    ///  3. `[READ]` Vault authority PDA
    ///  4. `[WRITE]` Vault associated token account
    ///  5. `[WRITE]` Wrapped SOL vault associated token account
    ///  6. `[READ]` Raydium AMM v4 program
    ///  7. `[READ]` Token program
    ///  8.. `[..]` The fourteen pool accounts
    fn swap_accounts(&self, pool: &RaydiumPoolKeys) -> Vec<AccountMeta> {
        let mut accounts = vec![
            AccountMeta::new_readonly(trigger_authority(), true),
            AccountMeta::new_readonly(self.position, false),
            AccountMeta::new_readonly(self.token_mint, false),
            AccountMeta::new_readonly(self.vault_authority, false),
            AccountMeta::new(self.vault_ata, false),
            AccountMeta::new(self.wsol_vault_ata, false),
            AccountMeta::new_readonly(raydium_program(), false),
            AccountMeta::new_readonly(spl_token_interface::id(), false),
        ];
        accounts.extend(pool.to_account_metas());
        accounts
    }
}

fn data_with_amount(tag: InstructionTag, amount: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(9);
    data.push(tag as u8);
    data.extend_from_slice(&AmountInstructionData::new(amount).pack());
    data
}
