use client::{
    context::{
        position::PositionContext,
        token::TokenContext,
    },
    logs::log_info,
    token_instructions::create_mint_instructions,
    transactions::RpcContext,
};
use solana_sdk::{
    program_pack::Pack,
    signature::{
        Keypair,
        Signer,
    },
};
use spl_token_interface::state::Mint;

const MINTED_TOKENS: u64 = 1_000_000;
const DEPOSIT_AMOUNT: u64 = 50_000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let rpc = RpcContext::from_env();
    let payer = rpc.fund_account(None).await?;

    // Create the token mint the position will track.
    let mint = Keypair::new();
    let rent = rpc
        .client
        .get_minimum_balance_for_rent_exemption(Mint::LEN)?;
    let create_mint =
        create_mint_instructions(&payer.pubkey(), &mint.pubkey(), &payer.pubkey(), 6, rent)?;
    rpc.send_transaction(&payer, &[&mint], &create_mint).await?;

    let token = TokenContext::fetch(&rpc, mint.pubkey())?;

    let position = PositionContext::new(mint.pubkey());
    rpc.send_transaction(&payer, &[], &[position.initialize(&payer.pubkey())])
        .await?;

    // Fund the payer's token account so there is something to deposit.
    let fund_ata = [
        token.create_ata(&payer.pubkey(), &payer.pubkey()),
        token.mint_to_owner(&payer.pubkey(), MINTED_TOKENS)?,
    ];
    rpc.send_transaction(&payer, &[], &fund_ata).await?;

    log_info("Depositing", DEPOSIT_AMOUNT);
    let signature = rpc
        .send_transaction(
            &payer,
            &[],
            &[position.deposit(&payer.pubkey(), DEPOSIT_AMOUNT)],
        )
        .await?;

    println!("Transaction signature: {signature}");

    Ok(())
}
