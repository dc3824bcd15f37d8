use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Decimal, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONFIG: Item<RedeemerConfig> = Item::new("config");
/// Append-only redemption history.
pub const REDEMPTIONS: Map<u64, RedemptionRecord> = Map::new("redemptions");
pub const NEXT_REDEMPTION_ID: Item<u64> = Item::new("next_redemption_id");
/// Cumulative reward credited to the vault across all redemptions.
pub const TOTAL_REDEEMED: Item<Uint128> = Item::new("total_redeemed");

#[cw_serde]
pub struct RedeemerConfig {
    pub admin: Addr,
    /// Denom credited into the vault's reward pool.
    pub reward_denom: String,
    /// Denom accepted for redemption. Unset until the admin configures it;
    /// only one denom is active at a time.
    pub accepted_denom: Option<String>,
    /// Reward units credited per accepted unit, 18-decimal fixed point.
    pub rate: Decimal,
    pub router: Addr,
    pub stake_vault: Addr,
    /// Tolerated shortfall of the replenishing swap, in basis points.
    pub max_slippage_bps: u16,
}

#[cw_serde]
pub struct RedemptionRecord {
    pub id: u64,
    pub account: Addr,
    pub amount_in: Uint128,
    pub denom_in: String,
    pub reward_credited: Uint128,
    /// Rate in force when the redemption settled.
    pub rate: Decimal,
    pub redeemed_at: Timestamp,
}
