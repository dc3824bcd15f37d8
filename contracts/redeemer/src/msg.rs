use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Decimal, Uint128};

use crate::state::{RedeemerConfig, RedemptionRecord};

#[cw_serde]
pub struct InstantiateMsg {
    /// Denom credited into the vault's reward pool.
    pub reward_denom: String,
    /// Denom accepted for redemption; may be left unset and configured
    /// later via SetAcceptedToken.
    pub accepted_denom: Option<String>,
    /// Reward units credited per accepted unit, 18-decimal fixed point.
    pub rate: Decimal,
    pub router: String,
    pub stake_vault: String,
    /// Tolerated shortfall of the replenishing swap, in basis points.
    pub max_slippage_bps: u16,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Redeem the accepted token for reward-pool credit. Send the accepted
    /// denom in info.funds.
    Redeem {},
    /// Configure the accepted token. Admin only.
    SetAcceptedToken { denom: String },
    /// Update the redemption rate. Admin only.
    SetRate { rate: Decimal },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(RedeemerConfig)]
    Config {},
    #[returns(Option<RedemptionRecord>)]
    Redemption { id: u64 },
    #[returns(RedemptionsResponse)]
    Redemptions {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(RedeemStatsResponse)]
    Stats {},
}

#[cw_serde]
pub struct RedemptionsResponse {
    pub redemptions: Vec<RedemptionRecord>,
}

#[cw_serde]
pub struct RedeemStatsResponse {
    pub total_redeemed: Uint128,
    pub redemption_count: u64,
}

/// Execute message for the stake vault.
#[cw_serde]
pub enum VaultExecuteMsg {
    CreditReward {},
}

/// Execute message for the swap router. The router sells the attached
/// funds for `denom_out` and sends the proceeds back to the caller; it
/// fails the transaction when the output would fall below
/// `min_amount_out`.
#[cw_serde]
pub enum RouterExecuteMsg {
    Swap {
        denom_out: String,
        min_amount_out: Uint128,
    },
}
