use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONFIG: Item<VaultConfig> = Item::new("config");
/// Addresses allowed to move the reward pool. Wired once by the admin after
/// the redeemer and draw contracts exist, since the vault deploys first.
pub const AUTHORITIES: Item<Authorities> = Item::new("authorities");
pub const STAKES: Map<&Addr, Stake> = Map::new("stakes");
pub const TOTAL_STAKED: Item<Uint128> = Item::new("total_staked");
/// Reward token held for distribution. Credited by the redeemer, debited
/// only through `ReleasePayout`.
pub const REWARD_POOL: Item<Uint128> = Item::new("reward_pool");

#[cw_serde]
pub struct VaultConfig {
    pub admin: Addr,
    /// Denom staked into the vault; also the denom the reward pool pays out.
    pub stake_denom: String,
    /// Start of epoch 0, unix seconds. Epoch boundaries are derived from
    /// this origin, never from draw activity.
    pub epoch_origin: u64,
    pub epoch_duration_seconds: u64,
}

#[cw_serde]
pub struct Authorities {
    pub redeemer: Addr,
    pub draw: Addr,
}

#[cw_serde]
pub struct Stake {
    pub principal: Uint128,
    /// Epoch of the most recent deposit. Resets on every deposit so newly
    /// added funds carry the later stamp.
    pub deposit_epoch: u64,
}
