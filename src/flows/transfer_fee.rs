//! Transfer-fee accounting flow
//!
//! Exercises the `TransferFeeConfig` extension end to end: a fee-configured
//! mint, a fee-bearing transfer, and the two ways withheld fees come back
//! out (withdrawn straight from token accounts, or harvested into the mint
//! and withdrawn from there).

use log::{info, warn};
use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer};
use spl_token_2022::extension::{
    transfer_fee::instruction::{
        harvest_withheld_tokens_to_mint, initialize_transfer_fee_config, transfer_checked_with_fee,
        withdraw_withheld_tokens_from_accounts, withdraw_withheld_tokens_from_mint,
    },
    ExtensionType,
};

use crate::{
    client_sdk::TokenClient,
    config::FlowConfig,
    error::FlowResult,
    fees::{accounts_with_withheld_fees, calculate_transfer_fee},
    flows::tx_url,
};

/// What a completed transfer-fee run produced.
#[derive(Debug, Clone)]
pub struct TransferFeeOutcome {
    /// The fee-configured mint created by the run
    pub mint: Pubkey,
    /// Source token account, owned by the payer
    pub source: Pubkey,
    /// Destination token account, owned by a fresh keypair
    pub destination: Pubkey,
    /// Fee withheld by the transfer, in base units
    pub fee_charged: u64,
    /// Token accounts the withdrawal step drained
    pub withdrawn_from: Vec<Pubkey>,
}

/// Runs the fee accounting flow.
///
/// Sequence: fund payer → create mint with fee config → create source and
/// destination token accounts → mint supply → transfer with fee → enumerate
/// the mint's accounts → withdraw withheld fees from the accounts holding
/// any → harvest the destination's withheld balance into the mint →
/// withdraw the mint's withheld balance. Each step is confirmed before the
/// next; the first error aborts the rest.
pub fn run(
    client: &TokenClient,
    config: &FlowConfig,
    payer: &Keypair,
) -> FlowResult<TransferFeeOutcome> {
    info!("Airdropping {} lamports to payer {}", config.airdrop_lamports, payer.pubkey());
    client.fund_account(&payer.pubkey(), config.airdrop_lamports)?;

    // The payer doubles as mint authority, fee-config authority, and
    // withdraw-withheld authority, as in the original demo.
    let mint_keypair = Keypair::new();
    let mint = mint_keypair.pubkey();
    let fee_config = initialize_transfer_fee_config(
        &spl_token_2022::id(),
        &mint,
        Some(&payer.pubkey()),
        Some(&payer.pubkey()),
        config.fee_basis_points,
        config.max_fee,
    )?;
    let signature = client.create_mint(
        payer,
        &mint_keypair,
        &payer.pubkey(),
        config.decimals,
        &[ExtensionType::TransferFeeConfig],
        vec![fee_config],
    )?;
    info!("Create mint account: {}", tx_url(&signature));

    let source = client.create_token_account(payer, &mint, &payer.pubkey())?;
    let recipient = Keypair::new();
    let destination = client.create_token_account(payer, &mint, &recipient.pubkey())?;

    let signature = client.mint_to(payer, &mint, &source, payer, config.mint_amount)?;
    info!("Mint tokens: {}", tx_url(&signature));

    let fee_charged =
        calculate_transfer_fee(config.transfer_amount, config.fee_basis_points, config.max_fee)?;
    let transfer = transfer_checked_with_fee(
        &spl_token_2022::id(),
        &source,
        &mint,
        &destination,
        &payer.pubkey(),
        &[],
        config.transfer_amount,
        config.decimals,
        fee_charged,
    )?;
    let signature = client.send_transaction(payer, &[transfer], &[])?;
    info!(
        "Transfer tokens: {} ({} base units withheld)",
        tx_url(&signature),
        fee_charged
    );

    let all_accounts = client.token_accounts_for_mint(&mint)?;
    let withdrawn_from = accounts_with_withheld_fees(&all_accounts);
    if withdrawn_from.is_empty() {
        // The program rejects a withdrawal with no source accounts
        warn!("No token accounts hold withheld fees, skipping account withdrawal");
    } else {
        let sources: Vec<&Pubkey> = withdrawn_from.iter().collect();
        let withdraw = withdraw_withheld_tokens_from_accounts(
            &spl_token_2022::id(),
            &mint,
            &destination,
            &payer.pubkey(),
            &[],
            &sources,
        )?;
        let signature = client.send_transaction(payer, &[withdraw], &[])?;
        info!("Withdraw fees from token accounts: {}", tx_url(&signature));
    }

    let harvest = harvest_withheld_tokens_to_mint(&spl_token_2022::id(), &mint, &[&destination])?;
    let signature = client.send_transaction(payer, &[harvest], &[])?;
    info!("Harvest fees to mint account: {}", tx_url(&signature));

    let withdraw_mint = withdraw_withheld_tokens_from_mint(
        &spl_token_2022::id(),
        &mint,
        &destination,
        &payer.pubkey(),
        &[],
    )?;
    let signature = client.send_transaction(payer, &[withdraw_mint], &[])?;
    info!("Withdraw fees from mint account: {}", tx_url(&signature));

    Ok(TransferFeeOutcome {
        mint,
        source,
        destination,
        fee_charged,
        withdrawn_from,
    })
}
