pub mod deposit_context;
pub mod initialize_context;
pub mod swap_context;
