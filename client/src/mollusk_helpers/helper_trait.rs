use std::collections::HashMap;

use firebird_interface::state::position::DcaPosition;
use mollusk_svm::MolluskContext;
use solana_account::Account;
use solana_address::Address;
use solana_sdk::program_pack::Pack;
use spl_associated_token_account_interface::address::get_associated_token_address;
use spl_token_interface::state::Account as TokenAccount;

/// An owned copy of a position account's fields, read out of the mollusk
/// account store.
#[derive(Debug, PartialEq, Eq)]
pub struct PositionView {
    pub token_mint: Address,
    pub piece: u64,
    pub total_deposited: u64,
    pub position_bump: u8,
    pub vault_bump: u8,
}

pub trait FirebirdTestHelper {
    fn get_token_balance(&self, owner: &Address, token_mint: &Address) -> u64;

    fn view_position(&self, position_address: &Address) -> PositionView;
}

impl FirebirdTestHelper for MolluskContext<HashMap<Address, Account>> {
    fn get_token_balance(&self, owner: &Address, token_mint: &Address) -> u64 {
        let account_store = self.account_store.borrow();

        let ata = get_associated_token_address(owner, token_mint);

        let acc = account_store.get(&ata).unwrap_or_else(|| {
            panic!("Token account doesn't exist, owner: {owner}, token account: {ata}")
        });

        TokenAccount::unpack(&acc.data)
            .map(|account| account.amount)
            .expect("Should unpack token account")
    }

    fn view_position(&self, position_address: &Address) -> PositionView {
        let account_store = self.account_store.borrow();

        let acc = account_store
            .get(position_address)
            .expect("Position address should exist in mollusk account store");
        assert_eq!(acc.owner, crate::program_id());

        let position =
            DcaPosition::from_bytes(&acc.data).expect("Account data isn't a valid position");

        PositionView {
            token_mint: Address::from(*position.token_mint()),
            piece: position.piece(),
            total_deposited: position.total_deposited(),
            position_bump: position.position_bump(),
            vault_bump: position.vault_bump(),
        }
    }
}
