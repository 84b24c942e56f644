//! Blocking RPC harness for the e2e examples.
//!
//! Fail-fast by construction: every call either succeeds or returns an
//! `anyhow` error classified as a connection or remote failure. No retries.

use std::time::Duration;

use anyhow::Context;
use colored::Colorize;
use firebird_interface::{
    error::FirebirdError,
    instructions::InstructionTag,
};
use solana_client::{
    client_error::{
        ClientError,
        ClientErrorKind,
    },
    rpc_client::RpcClient,
    rpc_response::RpcSimulateTransactionResult,
};
use solana_commitment_config::CommitmentConfig;
use solana_instruction::Instruction;
use solana_sdk::{
    message::Message,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
    transaction::Transaction,
};

use crate::logs::{
    log_error,
    log_info,
    log_success,
    LogColor,
};

/// Environment variable overriding the RPC endpoint.
pub const RPC_URL_ENV: &str = "FIREBIRD_RPC_URL";

/// The local test validator endpoint, used when [`RPC_URL_ENV`] is unset.
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8899";

/// Per-call timeout. An unreachable endpoint fails within this bound instead
/// of hanging the example.
pub const RPC_TIMEOUT: Duration = Duration::from_secs(30);

/// Lamports airdropped to a freshly funded account.
pub const DEFAULT_FUND_AMOUNT: u64 = 10_000_000_000;

/// How a failed RPC call should be interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum FailureKind {
    /// The endpoint never answered: transport, I/O, or timeout.
    Connection,
    /// The endpoint answered and the cluster rejected the request.
    Remote,
}

/// Classifies a client error as a connection failure or a remote rejection.
pub fn classify_error(error: &ClientError) -> FailureKind {
    match error.kind() {
        ClientErrorKind::Io(_) | ClientErrorKind::Reqwest(_) => FailureKind::Connection,
        _ => FailureKind::Remote,
    }
}

/// An [`RpcClient`] with confirmed commitment and a bounded per-call timeout.
pub struct RpcContext {
    pub client: RpcClient,
}

impl Default for RpcContext {
    fn default() -> Self {
        Self::from_env()
    }
}

impl RpcContext {
    pub fn new(url: impl ToString) -> Self {
        let client = RpcClient::new_with_timeout_and_commitment(
            url.to_string(),
            RPC_TIMEOUT,
            CommitmentConfig::confirmed(),
        );
        Self { client }
    }

    /// Builds a context from [`RPC_URL_ENV`], falling back to the local test
    /// validator.
    pub fn from_env() -> Self {
        let url = std::env::var(RPC_URL_ENV).unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());
        Self::new(url)
    }

    /// Airdrops [`DEFAULT_FUND_AMOUNT`] to the given keypair, generating a
    /// fresh one when `keypair` is `None`, and waits for confirmation.
    pub async fn fund_account(&self, keypair: Option<Keypair>) -> anyhow::Result<Keypair> {
        let payer = match keypair {
            Some(kp) => kp,
            None => Keypair::new(),
        };

        let airdrop_signature = self
            .client
            .request_airdrop(&payer.pubkey(), DEFAULT_FUND_AMOUNT)
            .map_err(|error| classified_context(error, "Failed to request airdrop"))?;

        let mut i = 0;
        // Wait for airdrop confirmation.
        while !self
            .client
            .confirm_transaction(&airdrop_signature)
            .context("Couldn't confirm the airdrop transaction")?
            && i < 10
        {
            std::thread::sleep(Duration::from_millis(500));
            i += 1;
        }

        Ok(payer)
    }

    /// Signs `instructions` with `payer` plus `signers`, submits the
    /// transaction, and waits for confirmed commitment.
    ///
    /// On success the signature is logged and returned; on failure the error
    /// is classified, program-custom codes are decoded, and the error is
    /// propagated.
    pub async fn send_transaction(
        &self,
        payer: &Keypair,
        signers: &[&Keypair],
        instructions: &[Instruction],
    ) -> anyhow::Result<Signature> {
        let blockhash = self
            .client
            .get_latest_blockhash()
            .map_err(|error| classified_context(error, "Failed to fetch a blockhash"))?;

        let msg = Message::new(instructions, Some(&payer.pubkey()));
        let mut tx = Transaction::new_unsigned(msg);
        tx.try_sign(
            &std::iter::once(payer)
                .chain(signers.iter().cloned())
                .collect::<Vec<_>>(),
            blockhash,
        )
        .context("Failed to sign the transaction")?;

        match self.client.send_and_confirm_transaction(&tx) {
            Ok(sig) => {
                let sender_info = format!("{}: {}", "sender".color(LogColor::Gray), payer.pubkey());
                log_success("Signature", format!("{sig}\n{sender_info}"));
                Ok(sig)
            }
            Err(error) => {
                let kind = classify_error(&error);
                log_instruction_error(&error, instructions);
                log_info("Payer", payer.pubkey());

                Err(error).context(format!("Failed transaction submission ({kind} error)"))
            }
        }
    }
}

fn classified_context(error: ClientError, message: &'static str) -> anyhow::Error {
    let kind = classify_error(&error);
    anyhow::Error::new(error).context(format!("{message} ({kind} error)"))
}

/// Decodes a preflight instruction error back into the program's own error
/// and instruction names where possible, and logs it.
pub fn log_instruction_error(error: &ClientError, instructions: &[Instruction]) {
    use solana_client::rpc_request::{
        RpcError::RpcResponseError,
        RpcResponseErrorData,
    };
    use solana_instruction_error::InstructionError;
    use solana_transaction_error::TransactionError;

    let kind = error.kind();
    if let ClientErrorKind::RpcError(RpcResponseError {
        data:
            RpcResponseErrorData::SendTransactionPreflightFailure(RpcSimulateTransactionResult {
                err: Some(ui_err),
                ..
            }),
        ..
    }) = kind
    {
        if let TransactionError::InstructionError(ixn_idx, ixn_error) = ui_err.clone().into() {
            let Some(instruction) = instructions.get(ixn_idx as usize) else {
                log_error("Generic error", error);
                return;
            };

            match ixn_error {
                InstructionError::Custom(code) if instruction.program_id == crate::program_id() => {
                    let decoded = u8::try_from(code)
                        .ok()
                        .and_then(FirebirdError::from_repr)
                        .zip(
                            instruction
                                .data
                                .first()
                                .and_then(|tag| InstructionTag::from_repr(*tag)),
                        );
                    match decoded {
                        Some((program_error, tag)) => {
                            log_error("Firebird error", format!("({tag}, {program_error})"))
                        }
                        None => log_error("Unknown firebird error", error),
                    }
                }
                _ => log_error("Generic error", error),
            }
        }
    } else {
        log_error(format!("{} error", classify_error(error)), error);
    }
}
