//! Transfer-fee flow demo against devnet.
//!
//! Generates a fresh payer, funds it from the faucet, and runs the full fee
//! accounting sequence. Any failure is logged and the remaining steps are
//! abandoned; the run is not resumable.

use log::{error, info};
use solana_sdk::{signature::Keypair, signer::Signer};
use token_extension_flows::{flows, FlowConfig, TokenClient};

fn main() {
    env_logger::init();

    let config = FlowConfig::from_env();
    let client = TokenClient::new(&config.rpc_url, config.commitment);
    let payer = Keypair::new();
    info!("Payer public key: {}", payer.pubkey());

    match flows::transfer_fee::run(&client, &config, &payer) {
        Ok(outcome) => {
            info!("Mint: {}", outcome.mint);
            info!("Source token account: {}", outcome.source);
            info!("Destination token account: {}", outcome.destination);
            info!("Fee withheld by transfer: {} base units", outcome.fee_charged);
            info!("Accounts drained by withdrawal: {}", outcome.withdrawn_from.len());
        }
        Err(err) => error!("Error occurred: {err}"),
    }
}
