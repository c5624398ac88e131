//! Extension flows
//!
//! Each flow is a strictly sequential run against the cluster: every step is
//! submitted and confirmed before the next begins, and the first failure
//! aborts the remainder. Flows are not idempotent and not resumable; a rerun
//! creates fresh keypairs and accounts.

pub mod interest_bearing;
pub mod transfer_fee;

use solana_sdk::signature::Signature;

use crate::constants::{EXPLORER_CLUSTER_SUFFIX, EXPLORER_TX_URL};

/// Formats an explorer link for a confirmed transaction signature.
pub fn tx_url(signature: &Signature) -> String {
    format!("{EXPLORER_TX_URL}/{signature}?{EXPLORER_CLUSTER_SUFFIX}")
}
