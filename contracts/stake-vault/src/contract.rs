use cosmwasm_std::{
    entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::query;
use crate::state::{VaultConfig, CONFIG, REWARD_POOL, TOTAL_STAKED};

const CONTRACT_NAME: &str = "crates.io:lotto-stake-vault";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.stake_denom.is_empty() {
        return Err(ContractError::InvalidDenom {
            denom: msg.stake_denom,
        });
    }
    if msg.epoch_duration_seconds == 0 {
        return Err(ContractError::InvalidEpochDuration);
    }

    let config = VaultConfig {
        admin: info.sender.clone(),
        stake_denom: msg.stake_denom.clone(),
        epoch_origin: msg.epoch_origin.unwrap_or(env.block.time.seconds()),
        epoch_duration_seconds: msg.epoch_duration_seconds,
    };
    CONFIG.save(deps.storage, &config)?;

    TOTAL_STAKED.save(deps.storage, &Uint128::zero())?;
    REWARD_POOL.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "stake-vault")
        .add_attribute("stake_denom", msg.stake_denom)
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
        ExecuteMsg::Deposit {} => execute::deposit(deps, env, info),
        ExecuteMsg::Withdraw { amount } => execute::withdraw(deps, env, info, amount),
        ExecuteMsg::CreditReward {} => execute::credit_reward(deps, env, info),
        ExecuteMsg::ReleasePayout {
            epoch,
            winner,
            amount,
        } => execute::release_payout(deps, env, info, epoch, winner, amount),
        ExecuteMsg::SetAuthorities { redeemer, draw } => {
            execute::set_authorities(deps, env, info, redeemer, draw)
        }
    }
}

#[entry_point]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::StakeOf { address } => query::query_stake_of(deps, address),
        QueryMsg::TotalStaked {} => query::query_total_staked(deps),
        QueryMsg::RewardPool {} => query::query_reward_pool(deps),
        QueryMsg::Stakers { start_after, limit } => query::query_stakers(deps, start_after, limit),
        QueryMsg::EpochInfo {} => query::query_epoch_info(deps, env),
    }
}
