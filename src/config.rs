//! Run-scoped configuration
//!
//! The original demo scripts kept their knobs in module-level globals. Here
//! they live in an explicit [`FlowConfig`] handed to every flow, so a run's
//! parameters are visible at the call site and nothing outlives the run.

use solana_sdk::commitment_config::CommitmentConfig;

use crate::constants::*;

/// Parameters for one flow run.
#[derive(Debug, Clone)]
pub struct FlowConfig {
    /// RPC endpoint of the target cluster
    pub rpc_url: String,
    /// Commitment level applied to submissions and queries
    pub commitment: CommitmentConfig,
    /// Lamports requested from the faucet for the fresh payer
    pub airdrop_lamports: u64,
    /// Decimals of the demo mint
    pub decimals: u8,
    /// Transfer fee rate in basis points (0-10000)
    pub fee_basis_points: u16,
    /// Cap on the fee charged per transfer, in token base units
    pub max_fee: u64,
    /// Supply minted to the source account
    pub mint_amount: u64,
    /// Amount moved by the fee-bearing transfer
    pub transfer_amount: u64,
    /// Initial interest rate in basis points
    pub interest_rate: i16,
    /// Rate applied by the update step
    pub updated_interest_rate: i16,
    /// Base-unit amount converted by the accrued-interest query
    pub ui_amount_query: u64,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEVNET_RPC_URL.to_string(),
            commitment: CommitmentConfig::confirmed(),
            airdrop_lamports: DEFAULT_AIRDROP_LAMPORTS,
            decimals: DEFAULT_DECIMALS,
            fee_basis_points: DEFAULT_FEE_BASIS_POINTS,
            max_fee: DEFAULT_MAX_FEE,
            mint_amount: DEFAULT_MINT_AMOUNT,
            transfer_amount: DEFAULT_TRANSFER_AMOUNT,
            interest_rate: DEFAULT_INTEREST_RATE,
            updated_interest_rate: DEFAULT_UPDATED_INTEREST_RATE,
            ui_amount_query: 100,
        }
    }
}

impl FlowConfig {
    /// Builds the default configuration, honoring the `RPC_URL` environment
    /// override for runs against a non-devnet cluster.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(RPC_URL_ENV) {
            config.rpc_url = url;
        }
        config
    }
}
