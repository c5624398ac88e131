//! # Token Extension Flows
//!
//! Demonstration flows for two Token-2022 extensions on a Solana test
//! cluster:
//!
//! - **Transfer fee** — a mint whose transfers withhold a basis-point fee
//!   (capped at a maximum), plus the accounting pass that withdraws and
//!   harvests the withheld balances back out.
//! - **Interest bearing** — a mint that accrues interest continuously, with
//!   a rate update and the on-chain accrued-amount conversion.
//!
//! The crate owns exactly two pieces of logic: the fee calculation
//! (`fee = min(floor(amount * bps / 10000), max_fee)`) and the selection of
//! token accounts holding withheld fees. Everything else delegates to the
//! Solana client SDK and the Token-2022 program crate.

pub mod client_sdk;
pub mod config;
pub mod constants;
pub mod error;
pub mod fees;
pub mod flows;

pub use client_sdk::TokenClient;
pub use config::FlowConfig;
pub use error::{FlowError, FlowResult};
pub use fees::{accounts_with_withheld_fees, calculate_transfer_fee, withheld_amount};
