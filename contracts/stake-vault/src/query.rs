use cosmwasm_std::{to_json_binary, Binary, Deps, Env, Order, StdResult, Uint128};
use cw_storage_plus::Bound;
use lotto_common::epoch::epoch_at;
use lotto_common::types::StakerEntry;

use crate::msg::{
    EpochInfoResponse, RewardPoolResponse, StakeResponse, StakersResponse, TotalStakedResponse,
};
use crate::state::{CONFIG, REWARD_POOL, STAKES, TOTAL_STAKED};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_stake_of(deps: Deps, address: String) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&address)?;
    let stake = STAKES.may_load(deps.storage, &addr)?;
    to_json_binary(&StakeResponse {
        address,
        principal: stake.as_ref().map(|s| s.principal).unwrap_or_default(),
        deposit_epoch: stake.map(|s| s.deposit_epoch),
    })
}

pub fn query_total_staked(deps: Deps) -> StdResult<Binary> {
    let total = TOTAL_STAKED.load(deps.storage)?;
    to_json_binary(&TotalStakedResponse { total })
}

pub fn query_reward_pool(deps: Deps) -> StdResult<Binary> {
    let balance = REWARD_POOL.load(deps.storage)?;
    to_json_binary(&RewardPoolResponse { balance })
}

pub fn query_stakers(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(30).min(100) as usize;
    let start_addr = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let stakers: Vec<StakerEntry> = STAKES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .filter_map(|r| r.ok())
        .map(|(addr, stake)| StakerEntry {
            address: addr.to_string(),
            principal: stake.principal,
            deposit_epoch: stake.deposit_epoch,
        })
        .collect();

    to_json_binary(&StakersResponse { stakers })
}

pub fn query_epoch_info(deps: Deps, env: Env) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&EpochInfoResponse {
        current_epoch: epoch_at(
            config.epoch_origin,
            config.epoch_duration_seconds,
            env.block.time.seconds(),
        ),
        epoch_origin: config.epoch_origin,
        epoch_duration_seconds: config.epoch_duration_seconds,
    })
}

/// Sum of all staker principals. Unbounded iteration, so it is test
/// support for the ledger invariant rather than part of the query dispatch.
pub fn sum_of_stakes(deps: Deps) -> Uint128 {
    STAKES
        .range(deps.storage, None, None, Order::Ascending)
        .filter_map(|r| r.ok())
        .fold(Uint128::zero(), |acc, (_, stake)| acc + stake.principal)
}
