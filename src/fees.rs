//! Transfer-fee math and withheld-fee accounting
//!
//! The one piece of business logic this crate owns: computing the fee a
//! transfer will be charged, and selecting the token accounts that hold a
//! withheld balance worth withdrawing. Everything else is delegated to the
//! Token-2022 program.

use solana_sdk::{account::Account, pubkey::Pubkey};
use spl_token_2022::{
    extension::{transfer_fee::TransferFeeAmount, BaseStateWithExtensions, StateWithExtensions},
    state::Account as TokenAccount,
};

use crate::{
    constants::{FEE_BASIS_POINTS_DENOMINATOR, MAX_FEE_BASIS_POINTS},
    error::{FlowError, FlowResult},
};

/// Computes the fee charged on a transfer.
///
/// `fee = min(floor(amount * basis_points / 10000), max_fee)`
///
/// The product is widened to u128 so large amounts cannot overflow, and the
/// division floors, matching how the demo scripts compute the fee they pass
/// to `TransferCheckedWithFee`.
///
/// # Arguments
/// * `amount` - Transfer amount in token base units
/// * `basis_points` - Fee rate in basis points (0-10000)
/// * `max_fee` - Absolute cap on the fee, in token base units
///
/// # Errors
/// * `InvalidFeeRate` - If `basis_points` exceeds 10000
pub fn calculate_transfer_fee(amount: u64, basis_points: u16, max_fee: u64) -> FlowResult<u64> {
    if basis_points > MAX_FEE_BASIS_POINTS {
        return Err(FlowError::InvalidFeeRate {
            basis_points,
            max: MAX_FEE_BASIS_POINTS,
        });
    }

    // Widen to u128 to prevent overflow during the multiplication
    let raw_fee = (amount as u128) * (basis_points as u128) / (FEE_BASIS_POINTS_DENOMINATOR as u128);
    let capped = raw_fee.min(max_fee as u128);

    // raw_fee <= amount because basis_points <= 10000, so the cast is safe
    Ok(capped as u64)
}

/// Decodes raw Token-2022 account bytes and reads the withheld fee amount.
///
/// Returns `None` when the bytes do not decode as a token account or the
/// account carries no transfer-fee extension. Absence of the extension is
/// not the same as a zero balance: such accounts cannot hold withheld fees
/// and must not appear in withdrawal lists.
pub fn withheld_amount(data: &[u8]) -> Option<u64> {
    let state = StateWithExtensions::<TokenAccount>::unpack(data).ok()?;
    let extension = state.get_extension::<TransferFeeAmount>().ok()?;
    Some(u64::from(extension.withheld_amount))
}

/// Selects the accounts holding a withheld fee balance worth withdrawing.
///
/// Takes the raw `getProgramAccounts` results for a mint and keeps only the
/// addresses whose transfer-fee extension reports a strictly positive
/// withheld amount. Output ordering follows the input; the filter is
/// idempotent.
pub fn accounts_with_withheld_fees(accounts: &[(Pubkey, Account)]) -> Vec<Pubkey> {
    accounts
        .iter()
        .filter(|(_, account)| matches!(withheld_amount(&account.data), Some(amount) if amount > 0))
        .map(|(address, _)| *address)
        .collect()
}
