use client::{
    context::position::PositionContext,
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

    let position = PositionContext::new(mint.pubkey());
    log_info("Position", position.position);

    let signature = rpc
        .send_transaction(&payer, &[], &[position.initialize(&payer.pubkey())])
        .await?;

    println!("Transaction signature: {signature}");

    Ok(())
}
