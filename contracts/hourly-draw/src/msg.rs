use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;
use lotto_common::types::StakerEntry;

use crate::state::{DrawConfig, DrawResult, DrawStats};

#[cw_serde]
pub struct InstantiateMsg {
    pub operator: String,
    pub stake_vault: String,
    pub eligibility_denom: String,
    /// Start of epoch 0, unix seconds. Defaults to the instantiation block
    /// time.
    pub epoch_origin: Option<u64>,
    /// Defaults to one hour.
    pub epoch_duration_seconds: Option<u64>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Execute the draw for the latest closed epoch. Operator only.
    /// The seed is 32 bytes, hex-encoded.
    Draw { seed_hex: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(DrawConfig)]
    Config {},
    #[returns(Option<DrawResult>)]
    DrawResult { epoch: u64 },
    #[returns(DrawHistoryResponse)]
    DrawHistory {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(DrawStats)]
    Stats {},
    #[returns(UserWinsResponse)]
    UserWins {
        address: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(EpochInfoResponse)]
    EpochInfo {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct DrawHistoryResponse {
    pub draws: Vec<DrawResult>,
}

#[cw_serde]
pub struct UserWinsResponse {
    pub address: String,
    pub total_wins: u32,
    pub total_won_amount: Uint128,
    pub epochs: Vec<u64>,
}

#[cw_serde]
pub struct EpochInfoResponse {
    /// Epoch containing the current block time; None before the origin.
    pub current_epoch: Option<u64>,
    /// When the current epoch closes.
    pub current_epoch_end: Option<u64>,
    /// Latest closed epoch without a stored result, if any.
    pub drawable_epoch: Option<u64>,
    pub last_executed_epoch: Option<u64>,
}

/// Execute message for the stake vault.
#[cw_serde]
pub enum VaultExecuteMsg {
    ReleasePayout {
        epoch: u64,
        winner: String,
        amount: Uint128,
    },
}

/// Query message for the stake vault.
#[cw_serde]
pub enum VaultQueryMsg {
    RewardPool {},
    Stakers {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

/// Mirrors the RewardPoolResponse struct from the vault contract.
#[cw_serde]
pub struct VaultRewardPoolResponse {
    pub balance: Uint128,
}

/// Mirrors the StakersResponse struct from the vault contract.
#[cw_serde]
pub struct VaultStakersResponse {
    pub stakers: Vec<StakerEntry>,
}
