/*
MIT License

Copyright (c) 2024 Davinci

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! # Withheld-Fee Aggregation Tests
//!
//! Exercises the selection of token accounts holding withheld fees against
//! packed Token-2022 account bytes, the same data shape the RPC enumeration
//! returns.

mod common;

use common::*;
use solana_sdk::pubkey::Pubkey;
use token_extension_flows::{accounts_with_withheld_fees, withheld_amount};

#[test]
fn selects_only_accounts_with_positive_withheld_fees() -> TestResult {
    let mint = Pubkey::new_unique();
    let owner = Pubkey::new_unique();

    // Withheld amounts {A:0, B:5, C:0, D:12} -> expect {B, D}
    let accounts = vec![
        rpc_account(pack_account_with_withheld_fee(&mint, &owner, 0)),
        rpc_account(pack_account_with_withheld_fee(&mint, &owner, 5)),
        rpc_account(pack_account_with_withheld_fee(&mint, &owner, 0)),
        rpc_account(pack_account_with_withheld_fee(&mint, &owner, 12)),
    ];

    let selected = accounts_with_withheld_fees(&accounts);
    assert_eq!(selected, vec![accounts[1].0, accounts[3].0]);
    println!("✅ Selected exactly the accounts with nonzero withheld fees");
    Ok(())
}

#[test]
fn filter_is_idempotent() -> TestResult {
    let mint = Pubkey::new_unique();
    let owner = Pubkey::new_unique();
    let accounts = vec![
        rpc_account(pack_account_with_withheld_fee(&mint, &owner, 0)),
        rpc_account(pack_account_with_withheld_fee(&mint, &owner, 7)),
        rpc_account(pack_account_without_extension(&mint, &owner)),
        rpc_account(pack_account_with_withheld_fee(&mint, &owner, 3)),
    ];

    let first_pass = accounts_with_withheld_fees(&accounts);

    // Re-filter only the pairs that survived the first pass
    let surviving: Vec<_> = accounts
        .into_iter()
        .filter(|(address, _)| first_pass.contains(address))
        .collect();
    let second_pass = accounts_with_withheld_fees(&surviving);

    assert_eq!(first_pass, second_pass);
    println!("✅ Filtering an already-filtered set yields the same set");
    Ok(())
}

#[test]
fn accounts_without_the_extension_are_excluded() -> TestResult {
    let mint = Pubkey::new_unique();
    let owner = Pubkey::new_unique();

    // A plain account has no withheld balance to report, which is not the
    // same as reporting zero
    let plain = pack_account_without_extension(&mint, &owner);
    assert_eq!(withheld_amount(&plain), None);

    let accounts = vec![
        rpc_account(plain),
        rpc_account(pack_account_with_withheld_fee(&mint, &owner, 9)),
    ];
    let selected = accounts_with_withheld_fees(&accounts);
    assert_eq!(selected, vec![accounts[1].0]);
    println!("✅ Extension-less accounts never appear in the withdrawal list");
    Ok(())
}

#[test]
fn withheld_amount_round_trips_through_packed_bytes() -> TestResult {
    let mint = Pubkey::new_unique();
    let owner = Pubkey::new_unique();

    for amount in [0u64, 1, 100, u64::MAX] {
        let data = pack_account_with_withheld_fee(&mint, &owner, amount);
        assert_eq!(withheld_amount(&data), Some(amount));
    }
    println!("✅ Withheld amounts decode exactly as packed");
    Ok(())
}

#[test]
fn empty_enumeration_selects_nothing() -> TestResult {
    assert!(accounts_with_withheld_fees(&[]).is_empty());
    Ok(())
}
