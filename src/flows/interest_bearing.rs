//! Interest-bearing mint flow
//!
//! Exercises the `InterestBearingConfig` extension: a mint that accrues
//! interest continuously, a rate update signed by a dedicated rate
//! authority, and the on-chain conversion of a base-unit amount to its UI
//! representation with accrued interest applied.

use std::{thread, time::Duration};

use log::info;
use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer};
use spl_token_2022::extension::{interest_bearing_mint::instruction as interest_instruction, ExtensionType};

use crate::{
    client_sdk::{InterestState, TokenClient},
    config::FlowConfig,
    error::FlowResult,
    flows::tx_url,
};

/// What a completed interest-bearing run produced.
#[derive(Debug, Clone)]
pub struct InterestOutcome {
    /// The interest-bearing mint created by the run
    pub mint: Pubkey,
    /// Decoded config after the rate update
    pub state: InterestState,
    /// UI amount string returned by the on-chain conversion
    pub ui_amount: String,
}

/// Runs the interest-bearing flow.
///
/// Sequence: fund payer → create mint with an initial rate and a dedicated
/// rate authority → update the rate (authority co-signs) → fetch and log
/// the config → let a second of interest accrue → convert a fixed amount
/// through the on-chain query. The conversion's rounding is owned by the
/// program; the returned string is passed through untouched.
pub fn run(
    client: &TokenClient,
    config: &FlowConfig,
    payer: &Keypair,
) -> FlowResult<InterestOutcome> {
    info!("Airdropping {} lamports to payer {}", config.airdrop_lamports, payer.pubkey());
    client.fund_account(&payer.pubkey(), config.airdrop_lamports)?;

    let mint_keypair = Keypair::new();
    let mint = mint_keypair.pubkey();
    let rate_authority = Keypair::new();
    let initialize = interest_instruction::initialize(
        &spl_token_2022::id(),
        &mint,
        Some(rate_authority.pubkey()),
        config.interest_rate,
    )?;
    let signature = client.create_mint(
        payer,
        &mint_keypair,
        &payer.pubkey(),
        config.decimals,
        &[ExtensionType::InterestBearingConfig],
        vec![initialize],
    )?;
    info!("Create mint account: {}", tx_url(&signature));

    let update = interest_instruction::update_rate(
        &spl_token_2022::id(),
        &mint,
        &rate_authority.pubkey(),
        &[],
        config.updated_interest_rate,
    )?;
    let signature = client.send_transaction(payer, &[update], &[&rate_authority])?;
    info!("Update rate: {}", tx_url(&signature));

    let state = client.interest_config(&mint)?;
    info!("Mint config: {:?}", state);

    // Let some interest accrue before converting
    thread::sleep(Duration::from_secs(1));

    let ui_amount = client.ui_amount_with_interest(payer, &mint, config.ui_amount_query)?;
    info!("Amount with accrued interest: {}", ui_amount);

    Ok(InterestOutcome {
        mint,
        state,
        ui_amount,
    })
}
