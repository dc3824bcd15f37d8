use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

/// One row of the vault's staker listing. The draw contract pages through
/// these when it snapshots eligibility at the close of an epoch.
#[cw_serde]
pub struct StakerEntry {
    pub address: String,
    pub principal: Uint128,
    /// Epoch of the holder's most recent deposit.
    pub deposit_epoch: u64,
}

/// A single entry of the in-memory eligibility snapshot. Each entry covers
/// the cumulative-weight range `[start, start + weight)` in listing order.
#[cw_serde]
pub struct StakeWeight {
    pub address: String,
    pub weight: Uint128,
}
