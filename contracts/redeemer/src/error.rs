use cosmwasm_std::{CheckedMultiplyFractionError, OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Multiply(#[from] CheckedMultiplyFractionError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("redemption amount must be greater than zero")]
    ZeroAmount,

    #[error("must send exactly one coin")]
    InvalidFunds,

    #[error("must send {expected}, got {got}")]
    WrongDenom { expected: String, got: String },

    #[error("no accepted token configured")]
    RedemptionNotConfigured,

    #[error("rate must be greater than zero")]
    InvalidRate,

    #[error("invalid denom: {denom}")]
    InvalidDenom { denom: String },

    #[error("invalid basis points: {field} = {value} (must be <= 10000)")]
    InvalidBps { field: String, value: u16 },

    #[error("reward reserve too small: need {needed}, have {available}")]
    InsufficientReserve {
        needed: Uint128,
        available: Uint128,
    },
}
