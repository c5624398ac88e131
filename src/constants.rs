//! Constants for the Token Extension Flows
//!
//! This module contains the fee constants, default flow parameters, and
//! cluster endpoints used throughout the crate.

/// Denominator for basis point calculations (1 basis point = 0.01%)
pub const FEE_BASIS_POINTS_DENOMINATOR: u64 = 10000;

/// Maximum fee rate expressible in basis points (100%)
pub const MAX_FEE_BASIS_POINTS: u16 = 10000;

/// Default devnet RPC endpoint
pub const DEVNET_RPC_URL: &str = "https://api.devnet.solana.com";

/// Environment variable that overrides the RPC endpoint
pub const RPC_URL_ENV: &str = "RPC_URL";

/// Lamports requested from the devnet faucet per run (2 SOL)
pub const DEFAULT_AIRDROP_LAMPORTS: u64 = 2_000_000_000;

/// Default decimals for demo mints
pub const DEFAULT_DECIMALS: u8 = 2;

/// Default transfer fee rate (100 basis points = 1%)
pub const DEFAULT_FEE_BASIS_POINTS: u16 = 100;

/// Default cap on the fee charged per transfer, in token base units
pub const DEFAULT_MAX_FEE: u64 = 100;

/// Default supply minted to the source account (2000.00 at 2 decimals)
pub const DEFAULT_MINT_AMOUNT: u64 = 2000_00;

/// Default amount moved by the fee-bearing transfer (1000.00 at 2 decimals)
pub const DEFAULT_TRANSFER_AMOUNT: u64 = 1000_00;

/// Default initial interest rate in basis points (i16 maximum)
pub const DEFAULT_INTEREST_RATE: i16 = 32_767;

/// Default rate applied by the update step
pub const DEFAULT_UPDATED_INTEREST_RATE: i16 = 0;

/// Explorer transaction URL prefix for logged signatures
pub const EXPLORER_TX_URL: &str = "https://solana.fm/tx";

/// Explorer cluster query suffix for logged signatures
pub const EXPLORER_CLUSTER_SUFFIX: &str = "cluster=devnet-solana";
