use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("amount must be greater than zero")]
    InvalidAmount,

    #[error("must send exactly one coin")]
    InvalidFunds,

    #[error("must send {expected}, got {got}")]
    WrongDenom { expected: String, got: String },

    #[error("invalid denom: {denom}")]
    InvalidDenom { denom: String },

    #[error("epoch duration must be greater than zero")]
    InvalidEpochDuration,

    #[error("insufficient stake: requested {requested}, available {available}")]
    InsufficientStake {
        requested: Uint128,
        available: Uint128,
    },

    #[error("insufficient reward pool: requested {requested}, available {available}")]
    InsufficientPool {
        requested: Uint128,
        available: Uint128,
    },

    /// A ledger counter cannot cover a debit that per-entry accounting
    /// already approved. Mutations of the counter keep failing until an
    /// operator intervenes.
    #[error("ledger out of balance: {counter} holds {available}, debit of {debit} requested")]
    LedgerOutOfBalance {
        counter: String,
        debit: Uint128,
        available: Uint128,
    },

    #[error("authorities already set")]
    AuthoritiesAlreadySet,

    #[error("authorities not set")]
    AuthoritiesNotSet,
}
