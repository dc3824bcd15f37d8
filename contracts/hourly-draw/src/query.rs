use cosmwasm_std::{to_json_binary, Binary, Deps, Env, Order, StdResult, Uint128};
use cw_storage_plus::Bound;
use lotto_common::epoch::{epoch_at, epoch_end, latest_closed_epoch};

use crate::msg::{DrawHistoryResponse, EpochInfoResponse, UserWinsResponse};
use crate::state::{CONFIG, DRAW_RESULTS, DRAW_STATS, USER_TOTAL_WON, USER_WINS, USER_WIN_COUNT};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_draw_result(deps: Deps, epoch: u64) -> StdResult<Binary> {
    let result = DRAW_RESULTS.may_load(deps.storage, epoch)?;
    to_json_binary(&result)
}

pub fn query_draw_history(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(20).min(100) as usize;
    let start = start_after.map(Bound::exclusive);

    let draws: Vec<_> = DRAW_RESULTS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .filter_map(|r| r.ok())
        .map(|(_, draw)| draw)
        .collect();

    to_json_binary(&DrawHistoryResponse { draws })
}

pub fn query_stats(deps: Deps) -> StdResult<Binary> {
    let stats = DRAW_STATS.load(deps.storage)?;
    to_json_binary(&stats)
}

pub fn query_user_wins(
    deps: Deps,
    address: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&address)?;
    let limit = limit.unwrap_or(100).min(100) as usize;
    let start = start_after.map(Bound::exclusive);

    let epochs: Vec<u64> = USER_WINS
        .prefix(&addr)
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .filter_map(|r| r.ok())
        .map(|(epoch, _)| epoch)
        .collect();

    let total_wins = USER_WIN_COUNT.may_load(deps.storage, &addr)?.unwrap_or(0);
    let total_won = USER_TOTAL_WON
        .may_load(deps.storage, &addr)?
        .unwrap_or(Uint128::zero());

    to_json_binary(&UserWinsResponse {
        address,
        total_wins,
        total_won_amount: total_won,
        epochs,
    })
}

pub fn query_epoch_info(deps: Deps, env: Env) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let stats = DRAW_STATS.load(deps.storage)?;
    let now = env.block.time.seconds();

    let current_epoch = epoch_at(config.epoch_origin, config.epoch_duration_seconds, now);
    let drawable_epoch =
        latest_closed_epoch(config.epoch_origin, config.epoch_duration_seconds, now)
            .filter(|epoch| !DRAW_RESULTS.has(deps.storage, *epoch));

    to_json_binary(&EpochInfoResponse {
        current_epoch,
        current_epoch_end: current_epoch
            .map(|epoch| epoch_end(config.epoch_origin, config.epoch_duration_seconds, epoch)),
        drawable_epoch,
        last_executed_epoch: stats.last_executed_epoch,
    })
}
