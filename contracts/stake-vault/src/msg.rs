use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;
use lotto_common::types::StakerEntry;

use crate::state::VaultConfig;

#[cw_serde]
pub struct InstantiateMsg {
    /// Denom staked into the vault and paid out of the reward pool.
    pub stake_denom: String,
    /// Start of epoch 0, unix seconds. Defaults to the instantiation block
    /// time.
    pub epoch_origin: Option<u64>,
    pub epoch_duration_seconds: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Stake tokens. Send the stake denom in info.funds.
    Deposit {},
    /// Withdraw part or all of the staked principal.
    Withdraw { amount: Uint128 },
    /// Add reward tokens to the pool. Send the stake denom in info.funds.
    /// Redeemer or draw contract only.
    CreditReward {},
    /// Pay a draw winner out of the reward pool. Draw contract only.
    ReleasePayout {
        epoch: u64,
        winner: String,
        amount: Uint128,
    },
    /// Register the redeemer and draw contract addresses. Admin only, once.
    SetAuthorities { redeemer: String, draw: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(VaultConfig)]
    Config {},
    #[returns(StakeResponse)]
    StakeOf { address: String },
    #[returns(TotalStakedResponse)]
    TotalStaked {},
    #[returns(RewardPoolResponse)]
    RewardPool {},
    #[returns(StakersResponse)]
    Stakers {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(EpochInfoResponse)]
    EpochInfo {},
}

#[cw_serde]
pub struct StakeResponse {
    pub address: String,
    pub principal: Uint128,
    pub deposit_epoch: Option<u64>,
}

#[cw_serde]
pub struct TotalStakedResponse {
    pub total: Uint128,
}

#[cw_serde]
pub struct RewardPoolResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct StakersResponse {
    pub stakers: Vec<StakerEntry>,
}

#[cw_serde]
pub struct EpochInfoResponse {
    /// Epoch containing the current block time; None before the origin.
    pub current_epoch: Option<u64>,
    pub epoch_origin: u64,
    pub epoch_duration_seconds: u64,
}
