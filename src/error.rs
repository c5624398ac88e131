use solana_client::client_error::ClientError;
use solana_sdk::{program_error::ProgramError, pubkey::Pubkey};
use thiserror::Error;

/// Error types for the token extension flows.
///
/// Every failure a flow can hit funnels into this enum so the caller sees a
/// single error at the top level and the remaining sequence is abandoned.
#[derive(Error, Debug)]
pub enum FlowError {
    /// RPC request or transaction submission failed
    #[error("RPC request failed: {0}")]
    Client(#[from] ClientError),

    /// An instruction builder or account unpack rejected its input
    #[error("Token program error: {0}")]
    Program(#[from] ProgramError),

    /// Fee rate outside the valid basis-point range
    #[error("Invalid fee rate: {basis_points} basis points exceeds the {max} maximum")]
    InvalidFeeRate { basis_points: u16, max: u16 },

    /// Transaction simulation was rejected by the cluster
    #[error("Simulation failed for mint {mint}: {reason}")]
    SimulationFailed { mint: Pubkey, reason: String },

    /// Simulation succeeded but carried no return data to decode
    #[error("Simulation returned no data for mint {0}")]
    MissingReturnData(Pubkey),

    /// Return data was present but not the expected base64-encoded UTF-8
    #[error("Malformed simulation return data: {0}")]
    MalformedReturnData(String),
}

/// Convenience alias used by flows and the client wrapper.
pub type FlowResult<T> = Result<T, FlowError>;
