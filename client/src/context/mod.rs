pub mod position;
pub mod token;
