use client::transactions::{
    classify_error,
    FailureKind,
    RpcContext,
    DEFAULT_RPC_URL,
};
use solana_client::client_error::{
    ClientError,
    ClientErrorKind,
};

#[test]
fn endpoint_and_commitment_from_constructor() {
    let rpc = RpcContext::new("http://127.0.0.1:9999");
    assert_eq!(rpc.client.url(), "http://127.0.0.1:9999");

    let rpc = RpcContext::new(DEFAULT_RPC_URL);
    assert_eq!(rpc.client.url(), DEFAULT_RPC_URL);
    assert_eq!(
        rpc.client.commitment(),
        solana_commitment_config::CommitmentConfig::confirmed()
    );
}

#[test]
fn transport_failures_are_connection_errors() {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
    let error = ClientError::from(ClientErrorKind::Io(io));
    assert_eq!(classify_error(&error), FailureKind::Connection);
}

#[test]
fn cluster_rejections_are_remote_errors() {
    let error = ClientError::from(ClientErrorKind::Custom(
        "Transaction simulation failed".to_string(),
    ));
    assert_eq!(classify_error(&error), FailureKind::Remote);

    let signing = solana_sdk::signer::SignerError::KeypairPubkeyMismatch;
    let error = ClientError::from(ClientErrorKind::SigningError(signing));
    assert_eq!(classify_error(&error), FailureKind::Remote);
}
