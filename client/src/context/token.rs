//! Token-level context containing mint metadata and helpers for deriving
//! associated token accounts and building token instructions.

use anyhow::Context;
use solana_address::Address;
use solana_instruction::Instruction;
use solana_sdk::program_pack::Pack;
use spl_associated_token_account_interface::{
    address::get_associated_token_address,
    instruction::create_associated_token_account,
};
use spl_token_2022_interface::{
    check_spl_token_program_account,
    instruction::mint_to_checked,
};
use spl_token_interface::state::Mint;

use crate::transactions::RpcContext;

pub struct TokenContext {
    pub mint_authority: Option<Address>,
    pub mint_address: Address,
    pub token_program: Address,
    pub mint_decimals: u8,
}

impl TokenContext {
    pub const fn new(
        mint_authority: Option<Address>,
        mint_address: Address,
        token_program: Address,
        mint_decimals: u8,
    ) -> Self {
        Self {
            mint_authority,
            mint_address,
            token_program,
            mint_decimals,
        }
    }

    /// Creates a [`TokenContext`] by fetching the mint account from the
    /// cluster.
    ///
    /// Validates that the account's owner is a recognized SPL token program
    /// and unpacks the mint to extract the authority and decimals.
    pub fn fetch(rpc: &RpcContext, mint_address: Address) -> anyhow::Result<Self> {
        let account = rpc
            .client
            .get_account(&mint_address)
            .context("Couldn't fetch the mint account")?;
        check_spl_token_program_account(&account.owner)?;
        let mint = Mint::unpack(&account.data)?;

        Ok(Self::new(
            mint.mint_authority.into(),
            mint_address,
            account.owner,
            mint.decimals,
        ))
    }

    pub fn get_ata_for(&self, owner: &Address) -> Address {
        get_associated_token_address(owner, &self.mint_address)
    }

    /// Builds a create-ATA instruction for the given `owner`, funded by `funder`.
    pub fn create_ata(&self, funder: &Address, owner: &Address) -> Instruction {
        create_associated_token_account(funder, owner, &self.mint_address, &self.token_program)
    }

    /// Builds a `mint_to_checked` instruction that mints `amount` tokens to the
    /// `owner`'s associated token account.
    pub fn mint_to_owner(&self, owner: &Address, amount: u64) -> anyhow::Result<Instruction> {
        let mint_authority = self
            .mint_authority
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Token doesn't have a mint authority."))?;

        Ok(mint_to_checked(
            &self.token_program,
            &self.mint_address,
            &self.get_ata_for(owner),
            mint_authority,
            &[],
            amount,
            self.mint_decimals,
        )?)
    }
}
