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

//! # Common Test Utilities
//!
//! Helpers for building synthetic Token-2022 account data so the
//! withheld-fee accounting can be exercised against real wire bytes without
//! a cluster.

use solana_sdk::{account::Account as SolanaAccount, program_pack::Pack, pubkey::Pubkey};
use spl_token_2022::{
    extension::{
        transfer_fee::TransferFeeAmount, BaseStateWithExtensionsMut, ExtensionType,
        StateWithExtensionsMut,
    },
    state::{Account as TokenAccount, AccountState},
};

/// Standard test result type
pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Rent-exempt lamports for a token account, close enough for tests
#[allow(dead_code)]
pub const TOKEN_ACCOUNT_LAMPORTS: u64 = 2_039_280;

#[allow(dead_code)]
fn base_token_account(mint: &Pubkey, owner: &Pubkey) -> TokenAccount {
    TokenAccount {
        mint: *mint,
        owner: *owner,
        state: AccountState::Initialized,
        ..TokenAccount::default()
    }
}

/// Packs a Token-2022 account that carries a `TransferFeeAmount` extension
/// with the given withheld balance.
#[allow(dead_code)]
pub fn pack_account_with_withheld_fee(mint: &Pubkey, owner: &Pubkey, withheld: u64) -> Vec<u8> {
    let space =
        ExtensionType::try_calculate_account_len::<TokenAccount>(&[ExtensionType::TransferFeeAmount])
            .expect("account length");
    let mut data = vec![0u8; space];
    let mut state = StateWithExtensionsMut::<TokenAccount>::unpack_uninitialized(&mut data)
        .expect("uninitialized unpack");
    let extension = state
        .init_extension::<TransferFeeAmount>(true)
        .expect("init extension");
    extension.withheld_amount = withheld.into();
    state.base = base_token_account(mint, owner);
    state.pack_base();
    state.init_account_type().expect("account type");
    data
}

/// Packs a plain Token-2022 account with no extension data at all.
///
/// Such accounts cannot hold withheld fees and must never be selected by
/// the aggregation pass.
#[allow(dead_code)]
pub fn pack_account_without_extension(mint: &Pubkey, owner: &Pubkey) -> Vec<u8> {
    let mut data = vec![0u8; TokenAccount::LEN];
    TokenAccount::pack(base_token_account(mint, owner), &mut data).expect("pack");
    data
}

/// Wraps packed token-account bytes in the shape `getProgramAccounts`
/// returns: a fresh address paired with an owned account record.
#[allow(dead_code)]
pub fn rpc_account(data: Vec<u8>) -> (Pubkey, SolanaAccount) {
    (
        Pubkey::new_unique(),
        SolanaAccount {
            lamports: TOKEN_ACCOUNT_LAMPORTS,
            data,
            owner: spl_token_2022::id(),
            executable: false,
            rent_epoch: 0,
        },
    )
}
