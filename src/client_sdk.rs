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

//! # Token Extension Flows - Client SDK
//!
//! This module provides a high-level client for driving Token-2022 extension
//! flows against a Solana cluster. It wraps the blocking RPC client so every
//! operation is confirmed before the next one begins.
//!
//! ## Features
//! - Faucet funding with confirmation
//! - Mint creation sized for extension data
//! - Associated token account creation and minting
//! - Program-account enumeration filtered by mint
//! - Interest-bearing config queries and accrued-amount conversion

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use solana_account_decoder::UiAccountEncoding;
use solana_client::{
    rpc_client::RpcClient,
    rpc_config::{RpcAccountInfoConfig, RpcProgramAccountsConfig},
    rpc_filter::{Memcmp, RpcFilterType},
};
use solana_sdk::{
    account::Account,
    commitment_config::CommitmentConfig,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    system_instruction,
    transaction::Transaction,
};
use spl_associated_token_account::{
    get_associated_token_address_with_program_id, instruction::create_associated_token_account,
};
use spl_token_2022::{
    extension::{
        interest_bearing_mint::InterestBearingConfig, BaseStateWithExtensions, ExtensionType,
        StateWithExtensions,
    },
    instruction as token_instruction,
    state::Mint,
};

use crate::error::{FlowError, FlowResult};

/// Decoded interest-bearing configuration of a mint.
///
/// Owned snapshot of the on-chain `InterestBearingConfig` extension, with
/// the POD fields converted to native types for logging and assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterestState {
    /// Authority allowed to update the rate, if one is set
    pub rate_authority: Option<Pubkey>,
    /// Timestamp at which the mint was initialized
    pub initialization_timestamp: i64,
    /// Average rate over the period before the last update
    pub pre_update_average_rate: i16,
    /// Timestamp of the last rate update
    pub last_update_timestamp: i64,
    /// Rate currently accruing, in basis points
    pub current_rate: i16,
}

impl From<&InterestBearingConfig> for InterestState {
    fn from(config: &InterestBearingConfig) -> Self {
        Self {
            rate_authority: Option::<Pubkey>::from(config.rate_authority),
            initialization_timestamp: i64::from(config.initialization_timestamp),
            pre_update_average_rate: i16::from(config.pre_update_average_rate),
            last_update_timestamp: i64::from(config.last_update_timestamp),
            current_rate: i16::from(config.current_rate),
        }
    }
}

/// Assembles the instruction sequence that creates and initializes a mint.
///
/// The system-program account creation comes first, then any extension
/// initializers (extensions must be configured before the mint itself), and
/// `InitializeMint` last. Kept free of RPC so instruction assembly can be
/// exercised in tests.
///
/// # Arguments
/// * `payer` - Account funding the new mint account
/// * `mint` - Address of the mint account to create
/// * `mint_authority` - Authority allowed to mint supply
/// * `decimals` - Decimals of the mint
/// * `space` - Account size including extension data
/// * `rent_lamports` - Rent-exempt balance for `space`
/// * `extension_instructions` - Extension initializers to run before `InitializeMint`
pub fn mint_creation_instructions(
    payer: &Pubkey,
    mint: &Pubkey,
    mint_authority: &Pubkey,
    decimals: u8,
    space: usize,
    rent_lamports: u64,
    extension_instructions: Vec<Instruction>,
) -> FlowResult<Vec<Instruction>> {
    let mut instructions = vec![system_instruction::create_account(
        payer,
        mint,
        rent_lamports,
        space as u64,
        &spl_token_2022::id(),
    )];
    instructions.extend(extension_instructions);
    instructions.push(token_instruction::initialize_mint(
        &spl_token_2022::id(),
        mint,
        mint_authority,
        None,
        decimals,
    )?);
    Ok(instructions)
}

/// High-level client for driving extension flows against one cluster.
///
/// Holds the RPC connection and commitment for a single run. All methods
/// block until the cluster has confirmed the operation, which gives the
/// flows their strictly sequential shape.
pub struct TokenClient {
    rpc: RpcClient,
    commitment: CommitmentConfig,
}

impl TokenClient {
    /// Creates a client for the given endpoint and commitment level.
    pub fn new(rpc_url: &str, commitment: CommitmentConfig) -> Self {
        Self {
            rpc: RpcClient::new_with_commitment(rpc_url.to_string(), commitment),
            commitment,
        }
    }

    /// Gets the underlying RPC client.
    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    /// Requests lamports from the faucet and waits for confirmation.
    pub fn fund_account(&self, recipient: &Pubkey, lamports: u64) -> FlowResult<Signature> {
        let signature = self.rpc.request_airdrop(recipient, lamports)?;
        let blockhash = self.rpc.get_latest_blockhash()?;
        self.rpc
            .confirm_transaction_with_spinner(&signature, &blockhash, self.commitment)?;
        Ok(signature)
    }

    /// Signs and submits a transaction, waiting for confirmation.
    ///
    /// # Arguments
    /// * `payer` - Fee payer and first signer
    /// * `instructions` - Instructions for the transaction
    /// * `extra_signers` - Additional required signers beyond the payer
    pub fn send_transaction(
        &self,
        payer: &Keypair,
        instructions: &[Instruction],
        extra_signers: &[&Keypair],
    ) -> FlowResult<Signature> {
        let blockhash = self.rpc.get_latest_blockhash()?;
        let mut signers: Vec<&Keypair> = vec![payer];
        signers.extend_from_slice(extra_signers);
        let transaction = Transaction::new_signed_with_payer(
            instructions,
            Some(&payer.pubkey()),
            &signers,
            blockhash,
        );
        Ok(self.rpc.send_and_confirm_transaction(&transaction)?)
    }

    /// Creates a mint account sized for the given extensions and initializes
    /// it in a single transaction.
    ///
    /// # Arguments
    /// * `payer` - Fee payer funding the mint account
    /// * `mint` - Keypair of the mint account (co-signs the creation)
    /// * `mint_authority` - Authority allowed to mint supply
    /// * `decimals` - Decimals of the mint
    /// * `extensions` - Extensions the account must have room for
    /// * `extension_instructions` - Matching extension initializers
    pub fn create_mint(
        &self,
        payer: &Keypair,
        mint: &Keypair,
        mint_authority: &Pubkey,
        decimals: u8,
        extensions: &[ExtensionType],
        extension_instructions: Vec<Instruction>,
    ) -> FlowResult<Signature> {
        let space = ExtensionType::try_calculate_account_len::<Mint>(extensions)?;
        let rent_lamports = self.rpc.get_minimum_balance_for_rent_exemption(space)?;
        let instructions = mint_creation_instructions(
            &payer.pubkey(),
            &mint.pubkey(),
            mint_authority,
            decimals,
            space,
            rent_lamports,
            extension_instructions,
        )?;
        self.send_transaction(payer, &instructions, &[mint])
    }

    /// Creates the associated token account of `owner` for `mint` and
    /// returns its address.
    pub fn create_token_account(
        &self,
        payer: &Keypair,
        mint: &Pubkey,
        owner: &Pubkey,
    ) -> FlowResult<Pubkey> {
        let instruction = create_associated_token_account(
            &payer.pubkey(),
            owner,
            mint,
            &spl_token_2022::id(),
        );
        self.send_transaction(payer, &[instruction], &[])?;
        Ok(get_associated_token_address_with_program_id(
            owner,
            mint,
            &spl_token_2022::id(),
        ))
    }

    /// Mints supply to a token account. The mint authority signs.
    pub fn mint_to(
        &self,
        payer: &Keypair,
        mint: &Pubkey,
        destination: &Pubkey,
        mint_authority: &Keypair,
        amount: u64,
    ) -> FlowResult<Signature> {
        let instruction = token_instruction::mint_to(
            &spl_token_2022::id(),
            mint,
            destination,
            &mint_authority.pubkey(),
            &[],
            amount,
        )?;
        let mut extra: Vec<&Keypair> = Vec::new();
        if mint_authority.pubkey() != payer.pubkey() {
            extra.push(mint_authority);
        }
        self.send_transaction(payer, &[instruction], &extra)
    }

    /// Retrieves every Token-2022 account belonging to a mint.
    ///
    /// Server-side memcmp filter on the mint address at offset 0, matching
    /// the token account layout. Returned data is the raw account bytes.
    pub fn token_accounts_for_mint(&self, mint: &Pubkey) -> FlowResult<Vec<(Pubkey, Account)>> {
        let config = RpcProgramAccountsConfig {
            filters: Some(vec![RpcFilterType::Memcmp(Memcmp::new_raw_bytes(
                0,
                mint.to_bytes().to_vec(),
            ))]),
            account_config: RpcAccountInfoConfig {
                encoding: Some(UiAccountEncoding::Base64),
                data_slice: None,
                commitment: Some(self.commitment),
                min_context_slot: None,
            },
            with_context: None,
        };
        Ok(self
            .rpc
            .get_program_accounts_with_config(&spl_token_2022::id(), config)?)
    }

    /// Fetches a mint and decodes its interest-bearing configuration.
    pub fn interest_config(&self, mint: &Pubkey) -> FlowResult<InterestState> {
        let account = self.rpc.get_account(mint)?;
        let state = StateWithExtensions::<Mint>::unpack(&account.data)?;
        let config = state.get_extension::<InterestBearingConfig>()?;
        Ok(InterestState::from(config))
    }

    /// Converts a base-unit amount to its UI representation with accrued
    /// interest applied.
    ///
    /// Rounding is owned by the on-chain program: the `AmountToUiAmount`
    /// instruction is simulated and the string it returns is passed through
    /// untouched.
    pub fn ui_amount_with_interest(
        &self,
        payer: &Keypair,
        mint: &Pubkey,
        amount: u64,
    ) -> FlowResult<String> {
        let instruction =
            token_instruction::amount_to_ui_amount(&spl_token_2022::id(), mint, amount)?;
        let blockhash = self.rpc.get_latest_blockhash()?;
        let transaction = Transaction::new_signed_with_payer(
            &[instruction],
            Some(&payer.pubkey()),
            &[payer],
            blockhash,
        );
        let simulation = self.rpc.simulate_transaction(&transaction)?;
        if let Some(err) = simulation.value.err {
            return Err(FlowError::SimulationFailed {
                mint: *mint,
                reason: err.to_string(),
            });
        }
        let return_data = simulation
            .value
            .return_data
            .ok_or(FlowError::MissingReturnData(*mint))?;
        let bytes = BASE64
            .decode(return_data.data.0.as_bytes())
            .map_err(|e| FlowError::MalformedReturnData(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| FlowError::MalformedReturnData(e.to_string()))
    }
}
