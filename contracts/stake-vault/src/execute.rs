use cosmwasm_std::{
    coins, BankMsg, DepsMut, Env, Event, MessageInfo, Response, Uint128,
};
use lotto_common::epoch::epoch_at;

use crate::error::ContractError;
use crate::state::{Authorities, Stake, AUTHORITIES, CONFIG, REWARD_POOL, STAKES, TOTAL_STAKED};

/// Validate that exactly one coin of `denom` was sent and return its amount.
fn require_single_coin(info: &MessageInfo, denom: &str) -> Result<Uint128, ContractError> {
    if info.funds.is_empty() {
        return Err(ContractError::InvalidAmount);
    }
    if info.funds.len() != 1 {
        return Err(ContractError::InvalidFunds);
    }
    let sent = &info.funds[0];
    if sent.denom != denom {
        return Err(ContractError::WrongDenom {
            expected: denom.to_string(),
            got: sent.denom.clone(),
        });
    }
    if sent.amount.is_zero() {
        return Err(ContractError::InvalidAmount);
    }
    Ok(sent.amount)
}

/// Stake tokens. The transfer rides in with the message, so custody is
/// established before the ledger credit.
pub fn deposit(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let amount = require_single_coin(&info, &config.stake_denom)?;

    let epoch = epoch_at(
        config.epoch_origin,
        config.epoch_duration_seconds,
        env.block.time.seconds(),
    )
    .unwrap_or(0);

    let previous = STAKES
        .may_load(deps.storage, &info.sender)?
        .map(|s| s.principal)
        .unwrap_or_default();
    let principal = previous.checked_add(amount)?;
    STAKES.save(
        deps.storage,
        &info.sender,
        &Stake {
            principal,
            deposit_epoch: epoch,
        },
    )?;

    let total = TOTAL_STAKED.load(deps.storage)?.checked_add(amount)?;
    TOTAL_STAKED.save(deps.storage, &total)?;

    Ok(Response::new()
        .add_attribute("action", "deposit")
        .add_attribute("staker", info.sender.to_string())
        .add_attribute("amount", amount.to_string())
        .add_event(
            Event::new("lotto_deposit")
                .add_attribute("staker", info.sender.to_string())
                .add_attribute("amount", amount.to_string())
                .add_attribute("principal", principal.to_string())
                .add_attribute("deposit_epoch", epoch.to_string())
                .add_attribute("total_staked", total.to_string()),
        ))
}

/// Withdraw staked principal. The ledger is debited before the bank send is
/// emitted, so a re-entering caller sees the reduced balance.
pub fn withdraw(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount);
    }

    let stake = STAKES
        .may_load(deps.storage, &info.sender)?
        .ok_or(ContractError::InsufficientStake {
            requested: amount,
            available: Uint128::zero(),
        })?;
    if amount > stake.principal {
        return Err(ContractError::InsufficientStake {
            requested: amount,
            available: stake.principal,
        });
    }

    let remaining = stake.principal - amount;
    if remaining.is_zero() {
        STAKES.remove(deps.storage, &info.sender);
    } else {
        STAKES.save(
            deps.storage,
            &info.sender,
            &Stake {
                principal: remaining,
                deposit_epoch: stake.deposit_epoch,
            },
        )?;
    }

    // The per-stake check above passed, so the running total must cover the
    // debit. If it cannot, the ledger has diverged and stays frozen until an
    // operator steps in.
    let total = TOTAL_STAKED.load(deps.storage)?;
    let new_total =
        total
            .checked_sub(amount)
            .map_err(|_| ContractError::LedgerOutOfBalance {
                counter: "total_staked".to_string(),
                debit: amount,
                available: total,
            })?;
    TOTAL_STAKED.save(deps.storage, &new_total)?;

    let send_msg = BankMsg::Send {
        to_address: info.sender.to_string(),
        amount: coins(amount.u128(), &config.stake_denom),
    };

    Ok(Response::new()
        .add_message(send_msg)
        .add_attribute("action", "withdraw")
        .add_attribute("staker", info.sender.to_string())
        .add_attribute("amount", amount.to_string())
        .add_event(
            Event::new("lotto_withdraw")
                .add_attribute("staker", info.sender.to_string())
                .add_attribute("amount", amount.to_string())
                .add_attribute("remaining", remaining.to_string())
                .add_attribute("total_staked", new_total.to_string()),
        ))
}

/// Add reward tokens to the pool. Restricted to the registered redeemer and
/// draw contracts.
pub fn credit_reward(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let authorities = AUTHORITIES
        .may_load(deps.storage)?
        .ok_or(ContractError::AuthoritiesNotSet)?;
    if info.sender != authorities.redeemer && info.sender != authorities.draw {
        return Err(ContractError::Unauthorized {
            reason: "only the redeemer or draw contract can credit rewards".to_string(),
        });
    }

    let amount = require_single_coin(&info, &config.stake_denom)?;

    let balance = REWARD_POOL.load(deps.storage)?.checked_add(amount)?;
    REWARD_POOL.save(deps.storage, &balance)?;

    Ok(Response::new()
        .add_attribute("action", "credit_reward")
        .add_attribute("amount", amount.to_string())
        .add_event(
            Event::new("lotto_reward_credited")
                .add_attribute("from", info.sender.to_string())
                .add_attribute("amount", amount.to_string())
                .add_attribute("pool_balance", balance.to_string()),
        ))
}

/// Pay a draw winner out of the reward pool. Restricted to the draw
/// contract; the pool is debited before the send is emitted.
pub fn release_payout(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    epoch: u64,
    winner: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let authorities = AUTHORITIES
        .may_load(deps.storage)?
        .ok_or(ContractError::AuthoritiesNotSet)?;
    if info.sender != authorities.draw {
        return Err(ContractError::Unauthorized {
            reason: "only the draw contract can release payouts".to_string(),
        });
    }

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount);
    }
    let winner_addr = deps.api.addr_validate(&winner)?;

    let balance = REWARD_POOL.load(deps.storage)?;
    let new_balance = balance
        .checked_sub(amount)
        .map_err(|_| ContractError::InsufficientPool {
            requested: amount,
            available: balance,
        })?;
    REWARD_POOL.save(deps.storage, &new_balance)?;

    let send_msg = BankMsg::Send {
        to_address: winner_addr.to_string(),
        amount: coins(amount.u128(), &config.stake_denom),
    };

    Ok(Response::new()
        .add_message(send_msg)
        .add_attribute("action", "release_payout")
        .add_attribute("epoch", epoch.to_string())
        .add_attribute("winner", winner_addr.to_string())
        .add_attribute("amount", amount.to_string())
        .add_event(
            Event::new("lotto_payout_released")
                .add_attribute("epoch", epoch.to_string())
                .add_attribute("winner", winner_addr.to_string())
                .add_attribute("amount", amount.to_string())
                .add_attribute("pool_balance", new_balance.to_string()),
        ))
}

/// Register the redeemer and draw contract addresses. Admin only; the
/// wiring is one-shot so the authority set cannot drift after deployment.
pub fn set_authorities(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    redeemer: String,
    draw: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only admin can set authorities".to_string(),
        });
    }
    if AUTHORITIES.may_load(deps.storage)?.is_some() {
        return Err(ContractError::AuthoritiesAlreadySet);
    }

    let authorities = Authorities {
        redeemer: deps.api.addr_validate(&redeemer)?,
        draw: deps.api.addr_validate(&draw)?,
    };
    AUTHORITIES.save(deps.storage, &authorities)?;

    Ok(Response::new()
        .add_attribute("action", "set_authorities")
        .add_attribute("redeemer", authorities.redeemer.to_string())
        .add_attribute("draw", authorities.draw.to_string()))
}
