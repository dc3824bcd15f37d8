use cosmwasm_std::{
    to_json_binary, Deps, DepsMut, Env, Event, MessageInfo, QueryRequest, Response, StdError,
    Uint128, WasmQuery,
};
use lotto_common::epoch::{epoch_end, latest_closed_epoch};
use lotto_common::selection::{select_winner, winning_ticket};
use lotto_common::types::StakeWeight;

use crate::error::ContractError;
use crate::msg::{VaultQueryMsg, VaultRewardPoolResponse, VaultStakersResponse};
use crate::payout::{self, Settlement};
use crate::state::{DrawConfig, DrawResult, CONFIG, DRAW_RESULTS};

/// Page size used when listing stakers from the vault.
const SNAPSHOT_PAGE_LIMIT: u32 = 30;

/// Execute the draw for the latest closed epoch. Operator only.
///
/// The flow per epoch: gate on the epoch clock, reject replays, snapshot
/// eligible stake weight from the vault, map the seed to a ticket, and
/// settle through the payout module. An epoch with no eligible weight
/// settles with a null winner and zero payout; that is a valid outcome,
/// not an error.
pub fn draw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    seed_hex: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.operator {
        return Err(ContractError::Unauthorized {
            reason: "only operator can execute draws".to_string(),
        });
    }

    let seed = parse_seed(&seed_hex)?;

    let now = env.block.time.seconds();
    let epoch = latest_closed_epoch(config.epoch_origin, config.epoch_duration_seconds, now)
        .ok_or(ContractError::EpochNotElapsed {
            next_draw_at: epoch_end(config.epoch_origin, config.epoch_duration_seconds, 0),
        })?;

    if DRAW_RESULTS.has(deps.storage, epoch) {
        return Err(ContractError::AlreadyExecuted { epoch });
    }

    let (entries, total_weight) = snapshot_eligible(deps.as_ref(), &config)?;
    let num_eligible = entries.len() as u32;

    let (winner, ticket, pool_balance) = match winning_ticket(&seed, total_weight.u128()) {
        Some(ticket) => {
            let entry = select_winner(&entries, ticket)
                .ok_or_else(|| StdError::generic_err("winning ticket outside cumulative weight"))?;
            let winner = deps.api.addr_validate(&entry.address)?;
            let pool_balance = query_reward_pool(deps.as_ref(), &config)?;
            (Some(winner), Some(Uint128::new(ticket)), pool_balance)
        }
        // Zero eligible weight: the epoch settles empty.
        None => (None, None, Uint128::zero()),
    };

    let (release_msg, result) = payout::settle(
        deps.storage,
        &config,
        Settlement {
            epoch,
            winner,
            requested: pool_balance,
            pool_balance,
            ticket,
            total_weight,
            num_eligible,
            seed_hex,
            executed_at: env.block.time,
        },
    )?;

    let mut response = Response::new()
        .add_attribute("action", "draw")
        .add_attribute("epoch", epoch.to_string())
        .add_event(draw_event(&result));
    if let Some(msg) = release_msg {
        response = response.add_message(msg);
    }
    Ok(response)
}

fn parse_seed(seed_hex: &str) -> Result<[u8; 32], ContractError> {
    let bytes = hex::decode(seed_hex).map_err(|_| ContractError::InvalidSeed {
        reason: "not valid hex".to_string(),
    })?;
    bytes.try_into().map_err(|_| ContractError::InvalidSeed {
        reason: "seed must be 32 bytes".to_string(),
    })
}

/// Page through the vault's staker listing and keep every holder with a
/// non-zero principal that holds the eligibility denom at snapshot time.
fn snapshot_eligible(
    deps: Deps,
    config: &DrawConfig,
) -> Result<(Vec<StakeWeight>, Uint128), ContractError> {
    let mut entries = Vec::new();
    let mut total_weight = Uint128::zero();
    let mut start_after: Option<String> = None;

    loop {
        let page: VaultStakersResponse =
            deps.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
                contract_addr: config.stake_vault.to_string(),
                msg: to_json_binary(&VaultQueryMsg::Stakers {
                    start_after: start_after.clone(),
                    limit: Some(SNAPSHOT_PAGE_LIMIT),
                })?,
            }))?;

        let next = page.stakers.last().map(|s| s.address.clone());
        let page_len = page.stakers.len();

        for staker in page.stakers {
            if staker.principal.is_zero() {
                continue;
            }
            let badge = deps
                .querier
                .query_balance(staker.address.as_str(), config.eligibility_denom.as_str())?;
            if badge.amount.is_zero() {
                continue;
            }
            total_weight = total_weight.checked_add(staker.principal)?;
            entries.push(StakeWeight {
                address: staker.address,
                weight: staker.principal,
            });
        }

        if page_len < SNAPSHOT_PAGE_LIMIT as usize {
            break;
        }
        start_after = next;
    }

    Ok((entries, total_weight))
}

fn query_reward_pool(deps: Deps, config: &DrawConfig) -> Result<Uint128, ContractError> {
    let resp: VaultRewardPoolResponse =
        deps.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: config.stake_vault.to_string(),
            msg: to_json_binary(&VaultQueryMsg::RewardPool {})?,
        }))?;
    Ok(resp.balance)
}

fn draw_event(result: &DrawResult) -> Event {
    Event::new("lotto_draw_result")
        .add_attribute("epoch", result.epoch.to_string())
        .add_attribute(
            "winner",
            result
                .winner
                .as_ref()
                .map(|w| w.to_string())
                .unwrap_or_else(|| "none".to_string()),
        )
        .add_attribute("payout", result.payout.to_string())
        .add_attribute("total_weight", result.total_weight.to_string())
        .add_attribute("num_eligible", result.num_eligible.to_string())
        .add_attribute(
            "ticket",
            result
                .ticket
                .map(|t| t.to_string())
                .unwrap_or_else(|| "none".to_string()),
        )
        .add_attribute("seed", result.seed_hex.clone())
        .add_attribute("timestamp", result.executed_at.seconds().to_string())
}
