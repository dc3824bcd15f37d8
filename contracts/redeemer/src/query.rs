use cosmwasm_std::{to_json_binary, Binary, Deps, Order, StdResult};
use cw_storage_plus::Bound;

use crate::msg::{RedeemStatsResponse, RedemptionsResponse};
use crate::state::{CONFIG, NEXT_REDEMPTION_ID, REDEMPTIONS, TOTAL_REDEEMED};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_redemption(deps: Deps, id: u64) -> StdResult<Binary> {
    let record = REDEMPTIONS.may_load(deps.storage, id)?;
    to_json_binary(&record)
}

pub fn query_redemptions(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(20).min(100) as usize;
    let start = start_after.map(Bound::exclusive);

    let redemptions: Vec<_> = REDEMPTIONS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .filter_map(|r| r.ok())
        .map(|(_, record)| record)
        .collect();

    to_json_binary(&RedemptionsResponse { redemptions })
}

pub fn query_stats(deps: Deps) -> StdResult<Binary> {
    to_json_binary(&RedeemStatsResponse {
        total_redeemed: TOTAL_REDEEMED.load(deps.storage)?,
        redemption_count: NEXT_REDEMPTION_ID.load(deps.storage)?,
    })
}
