pub mod raydium_swap;
pub mod seeds;
pub mod token_utils;
