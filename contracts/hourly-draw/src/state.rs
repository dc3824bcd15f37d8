use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONFIG: Item<DrawConfig> = Item::new("config");
/// Settled draws keyed by epoch. Append-only; the presence of a key is the
/// epoch's executed flag.
pub const DRAW_RESULTS: Map<u64, DrawResult> = Map::new("draw_results");
pub const DRAW_STATS: Item<DrawStats> = Item::new("draw_stats");

/// Per-user win tracking
pub const USER_WINS: Map<(&Addr, u64), ()> = Map::new("user_wins");
pub const USER_WIN_COUNT: Map<&Addr, u32> = Map::new("user_win_count");
pub const USER_TOTAL_WON: Map<&Addr, Uint128> = Map::new("user_total_won");

#[cw_serde]
pub struct DrawConfig {
    pub admin: Addr,
    /// Wallet allowed to execute draws (the hourly cron signer).
    pub operator: Addr,
    pub stake_vault: Addr,
    /// Holding any amount of this denom at snapshot time makes a staker
    /// eligible.
    pub eligibility_denom: String,
    /// Start of epoch 0, unix seconds.
    pub epoch_origin: u64,
    pub epoch_duration_seconds: u64,
}

#[cw_serde]
pub struct DrawResult {
    pub epoch: u64,
    /// None for an empty draw (no eligible weight at snapshot time).
    pub winner: Option<Addr>,
    pub payout: Uint128,
    pub total_weight: Uint128,
    pub num_eligible: u32,
    /// Ticket the seed mapped to; None for an empty draw.
    pub ticket: Option<Uint128>,
    pub seed_hex: String,
    pub executed_at: Timestamp,
}

#[cw_serde]
pub struct DrawStats {
    pub draws_executed: u64,
    pub draws_empty: u64,
    pub total_paid: Uint128,
    pub last_executed_epoch: Option<u64>,
}
