mod buy_back;
mod deposit;
mod initialize;
mod sell;

pub use buy_back::process_buy_back;
pub use deposit::process_deposit;
pub use initialize::process_initialize;
pub use sell::process_sell;
