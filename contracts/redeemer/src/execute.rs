use cosmwasm_std::{
    coins, to_json_binary, Decimal, DepsMut, Env, Event, MessageInfo, Response, WasmMsg,
};

use crate::error::ContractError;
use crate::msg::{RouterExecuteMsg, VaultExecuteMsg};
use crate::state::{
    RedemptionRecord, CONFIG, NEXT_REDEMPTION_ID, REDEMPTIONS, TOTAL_REDEEMED,
};

/// Redeem the accepted token for reward-pool credit.
///
/// The credit is paid from this contract's pre-funded reward reserve so the
/// credited amount is exactly `amount * rate`; the received tokens are
/// swapped back to the reward denom in the same transaction to replenish
/// the reserve. If either message fails downstream the whole redemption
/// reverts: the participant keeps their tokens and no credit lands.
pub fn redeem(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let accepted = config
        .accepted_denom
        .clone()
        .ok_or(ContractError::RedemptionNotConfigured)?;

    if info.funds.is_empty() {
        return Err(ContractError::ZeroAmount);
    }
    if info.funds.len() != 1 {
        return Err(ContractError::InvalidFunds);
    }
    let sent = &info.funds[0];
    if sent.denom != accepted {
        return Err(ContractError::WrongDenom {
            expected: accepted,
            got: sent.denom.clone(),
        });
    }
    let amount = sent.amount;
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let reward = amount.checked_mul_floor(config.rate)?;
    if reward.is_zero() {
        // The configured rate floors this amount to nothing.
        return Err(ContractError::ZeroAmount);
    }

    // The reserve must cover the credit before any message goes out.
    let reserve = deps
        .querier
        .query_balance(&env.contract.address, config.reward_denom.as_str())?
        .amount;
    if reserve < reward {
        return Err(ContractError::InsufficientReserve {
            needed: reward,
            available: reserve,
        });
    }

    let credit_msg = WasmMsg::Execute {
        contract_addr: config.stake_vault.to_string(),
        msg: to_json_binary(&VaultExecuteMsg::CreditReward {})?,
        funds: coins(reward.u128(), &config.reward_denom),
    };

    // Replenish the reserve: sell the received tokens for the reward denom.
    let min_amount_out =
        reward.multiply_ratio(10_000u128 - config.max_slippage_bps as u128, 10_000u128);
    let swap_msg = WasmMsg::Execute {
        contract_addr: config.router.to_string(),
        msg: to_json_binary(&RouterExecuteMsg::Swap {
            denom_out: config.reward_denom.clone(),
            min_amount_out,
        })?,
        funds: coins(amount.u128(), &accepted),
    };

    let id = NEXT_REDEMPTION_ID.load(deps.storage)?;
    let record = RedemptionRecord {
        id,
        account: info.sender.clone(),
        amount_in: amount,
        denom_in: accepted.clone(),
        reward_credited: reward,
        rate: config.rate,
        redeemed_at: env.block.time,
    };
    REDEMPTIONS.save(deps.storage, id, &record)?;
    NEXT_REDEMPTION_ID.save(deps.storage, &(id + 1))?;

    let total = TOTAL_REDEEMED.load(deps.storage)?.checked_add(reward)?;
    TOTAL_REDEEMED.save(deps.storage, &total)?;

    Ok(Response::new()
        .add_message(credit_msg)
        .add_message(swap_msg)
        .add_attribute("action", "redeem")
        .add_attribute("account", info.sender.to_string())
        .add_attribute("amount_in", amount.to_string())
        .add_attribute("reward_credited", reward.to_string())
        .add_event(
            Event::new("lotto_redeemed")
                .add_attribute("id", id.to_string())
                .add_attribute("account", info.sender.to_string())
                .add_attribute("amount_in", amount.to_string())
                .add_attribute("denom_in", accepted)
                .add_attribute("reward_credited", reward.to_string())
                .add_attribute("rate", config.rate.to_string())
                .add_attribute("min_amount_out", min_amount_out.to_string()),
        ))
}

/// Configure the accepted token. Admin only. Switching denoms never touches
/// already-recorded redemptions or settled pool balances.
pub fn set_accepted_token(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    denom: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only admin can set the accepted token".to_string(),
        });
    }
    if denom.is_empty() {
        return Err(ContractError::InvalidDenom { denom });
    }

    config.accepted_denom = Some(denom.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_accepted_token")
        .add_attribute("denom", denom.clone())
        .add_event(Event::new("lotto_accepted_token_updated").add_attribute("denom", denom)))
}

/// Update the redemption rate. Admin only.
pub fn set_rate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    rate: Decimal,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only admin can set the rate".to_string(),
        });
    }
    if rate.is_zero() {
        return Err(ContractError::InvalidRate);
    }

    config.rate = rate;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_rate")
        .add_attribute("rate", rate.to_string())
        .add_event(Event::new("lotto_rate_updated").add_attribute("rate", rate.to_string())))
}
