use cosmwasm_std::{
    entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::query;
use crate::state::{RedeemerConfig, CONFIG, NEXT_REDEMPTION_ID, TOTAL_REDEEMED};

const CONTRACT_NAME: &str = "crates.io:lotto-redeemer";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.reward_denom.is_empty() {
        return Err(ContractError::InvalidDenom {
            denom: msg.reward_denom,
        });
    }
    if let Some(denom) = &msg.accepted_denom {
        if denom.is_empty() {
            return Err(ContractError::InvalidDenom {
                denom: denom.clone(),
            });
        }
    }
    if msg.rate.is_zero() {
        return Err(ContractError::InvalidRate);
    }
    if msg.max_slippage_bps > 10_000 {
        return Err(ContractError::InvalidBps {
            field: "max_slippage_bps".to_string(),
            value: msg.max_slippage_bps,
        });
    }

    let config = RedeemerConfig {
        admin: info.sender.clone(),
        reward_denom: msg.reward_denom,
        accepted_denom: msg.accepted_denom,
        rate: msg.rate,
        router: deps.api.addr_validate(&msg.router)?,
        stake_vault: deps.api.addr_validate(&msg.stake_vault)?,
        max_slippage_bps: msg.max_slippage_bps,
    };
    CONFIG.save(deps.storage, &config)?;

    NEXT_REDEMPTION_ID.save(deps.storage, &0u64)?;
    TOTAL_REDEEMED.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "redeemer")
        .add_attribute("rate", config.rate.to_string())
        .add_attribute("admin", info.sender.to_string()))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Redeem {} => execute::redeem(deps, env, info),
        ExecuteMsg::SetAcceptedToken { denom } => {
            execute::set_accepted_token(deps, env, info, denom)
        }
        ExecuteMsg::SetRate { rate } => execute::set_rate(deps, env, info, rate),
    }
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::Redemption { id } => query::query_redemption(deps, id),
        QueryMsg::Redemptions { start_after, limit } => {
            query::query_redemptions(deps, start_after, limit)
        }
        QueryMsg::Stats {} => query::query_stats(deps),
    }
}
