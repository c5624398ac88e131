//! Interest-bearing flow demo against devnet.

use log::{error, info};
use solana_sdk::{signature::Keypair, signer::Signer};
use token_extension_flows::{flows, FlowConfig, TokenClient};

fn main() {
    env_logger::init();

    let config = FlowConfig::from_env();
    let client = TokenClient::new(&config.rpc_url, config.commitment);
    let payer = Keypair::new();
    info!("Payer public key: {}", payer.pubkey());

    match flows::interest_bearing::run(&client, &config, &payer) {
        Ok(outcome) => {
            info!("Mint: {}", outcome.mint);
            info!("Current rate: {} basis points", outcome.state.current_rate);
            info!("Amount with accrued interest: {}", outcome.ui_amount);
        }
        Err(err) => error!("Error occurred: {err}"),
    }
}
