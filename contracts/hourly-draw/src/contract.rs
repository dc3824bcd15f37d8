use cosmwasm_std::{
    entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw2::{get_contract_version, set_contract_version};

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{DrawConfig, DrawStats, CONFIG, DRAW_STATS};

const CONTRACT_NAME: &str = "crates.io:lotto-hourly-draw";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default epoch length: one hour.
const DEFAULT_EPOCH_DURATION_SECONDS: u64 = 3600;

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.eligibility_denom.is_empty() {
        return Err(ContractError::InvalidDenom {
            denom: msg.eligibility_denom,
        });
    }
    let epoch_duration_seconds = msg
        .epoch_duration_seconds
        .unwrap_or(DEFAULT_EPOCH_DURATION_SECONDS);
    if epoch_duration_seconds == 0 {
        return Err(ContractError::InvalidEpochDuration);
    }

    let config = DrawConfig {
        admin: info.sender.clone(),
        operator: deps.api.addr_validate(&msg.operator)?,
        stake_vault: deps.api.addr_validate(&msg.stake_vault)?,
        eligibility_denom: msg.eligibility_denom,
        epoch_origin: msg.epoch_origin.unwrap_or(env.block.time.seconds()),
        epoch_duration_seconds,
    };
    CONFIG.save(deps.storage, &config)?;

    DRAW_STATS.save(
        deps.storage,
        &DrawStats {
            draws_executed: 0,
            draws_empty: 0,
            total_paid: Uint128::zero(),
            last_executed_epoch: None,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "hourly-draw")
        .add_attribute("operator", config.operator.to_string())
        .add_attribute("epoch_origin", config.epoch_origin.to_string())
        .add_attribute(
            "epoch_duration_seconds",
            config.epoch_duration_seconds.to_string(),
        ))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Draw { seed_hex } => execute::draw(deps, env, info, seed_hex),
    }
}

#[entry_point]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::DrawResult { epoch } => query::query_draw_result(deps, epoch),
        QueryMsg::DrawHistory { start_after, limit } => {
            query::query_draw_history(deps, start_after, limit)
        }
        QueryMsg::Stats {} => query::query_stats(deps),
        QueryMsg::UserWins {
            address,
            start_after,
            limit,
        } => query::query_user_wins(deps, address, start_after, limit),
        QueryMsg::EpochInfo {} => query::query_epoch_info(deps, env),
    }
}

#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::Unauthorized {
            reason: "Cannot migrate from different contract type".to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
