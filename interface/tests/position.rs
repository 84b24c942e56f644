use firebird_interface::{
    error::FirebirdError,
    state::{
        position::{DcaPosition, PIECE_DIVISOR},
        transmutable::Transmutable,
    },
};
use pinocchio_pubkey::pubkey;

#[test]
fn position_lifecycle_over_raw_account_bytes() {
    let mint = pubkey!("So11111111111111111111111111111111111111112");
    let mut bytes = [0u8; DcaPosition::LEN];

    DcaPosition::initialize(&mut bytes, &mint, 254, 251).expect("Should initialize");

    // Accrue a few deposits, re-viewing the raw bytes each time as the
    // program does across instructions.
    let deposits = [1_000u64, 350, 599, PIECE_DIVISOR];
    let mut expected_piece = 0u64;
    let mut expected_total = 0u64;

    for amount in deposits {
        let position = DcaPosition::from_bytes_mut(&mut bytes).expect("Should load");
        let increment = position.record_deposit(amount).expect("Should deposit");

        // Each deposit contributes its own floored share, not a share of the
        // running total.
        assert_eq!(increment, amount / PIECE_DIVISOR);
        expected_piece += increment;
        expected_total += amount;
    }

    let position = DcaPosition::from_bytes(&bytes).expect("Should load");
    assert!(position.is_for_mint(&mint));
    assert_eq!(position.position_bump(), 254);
    assert_eq!(position.vault_bump(), 251);
    assert_eq!(position.piece(), expected_piece);
    assert_eq!(position.total_deposited(), expected_total);
}

#[test]
fn rejected_deposits_leave_the_position_untouched() {
    let mint = pubkey!("So11111111111111111111111111111111111111112");
    let mut bytes = [0u8; DcaPosition::LEN];

    DcaPosition::initialize(&mut bytes, &mint, 254, 251).expect("Should initialize");

    let snapshot = {
        let position = DcaPosition::from_bytes_mut(&mut bytes).expect("Should load");
        position.record_deposit(12_345).expect("Should deposit");
        bytes
    };

    let position = DcaPosition::from_bytes_mut(&mut bytes).expect("Should load");
    assert_eq!(
        position.record_deposit(PIECE_DIVISOR - 1).unwrap_err(),
        FirebirdError::DepositTooSmall
    );

    assert_eq!(bytes, snapshot);
}
