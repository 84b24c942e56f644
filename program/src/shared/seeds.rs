//! Signer macros for the two per-mint PDAs: the position account at
//! `["position", mint]` and the vault authority at `["vault", mint]`.

#[macro_export]
macro_rules! position_signer {
    ( $mint:expr, $bump:expr ) => {
        pinocchio::instruction::Signer::from(&pinocchio::seeds!(
            firebird_interface::state::position::POSITION_SEED_STR,
            $mint.as_ref(),
            &[$bump]
        ))
    };
}

#[macro_export]
macro_rules! vault_signer {
    ( $mint:expr, $bump:expr ) => {
        pinocchio::instruction::Signer::from(&pinocchio::seeds!(
            firebird_interface::state::position::VAULT_SEED_STR,
            $mint.as_ref(),
            &[$bump]
        ))
    };
}
