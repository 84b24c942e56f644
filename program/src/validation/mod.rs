pub mod mint_info;
pub mod position_account_info;
pub mod raydium_program_info;
pub mod system_program_info;
pub mod token_account_info;
pub mod token_program_info;
pub mod trigger_authority_info;
pub mod uninitialized_account_info;
pub mod vault_authority_info;
