use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("epoch not elapsed (next draw possible at {next_draw_at})")]
    EpochNotElapsed { next_draw_at: u64 },

    #[error("draw already executed for epoch {epoch}")]
    AlreadyExecuted { epoch: u64 },

    #[error("invalid seed: {reason}")]
    InvalidSeed { reason: String },

    #[error("epoch duration must be greater than zero")]
    InvalidEpochDuration,

    #[error("invalid denom: {denom}")]
    InvalidDenom { denom: String },
}
