//! Payout settlement. Debits the vault's reward pool through a release
//! message and keeps the append-only draw history and per-user win totals.

use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, Storage, Timestamp, Uint128, WasmMsg};

use crate::error::ContractError;
use crate::msg::VaultExecuteMsg;
use crate::state::{
    DrawConfig, DrawResult, DRAW_RESULTS, DRAW_STATS, USER_TOTAL_WON, USER_WINS, USER_WIN_COUNT,
};

pub struct Settlement {
    pub epoch: u64,
    /// None settles an empty draw.
    pub winner: Option<Addr>,
    /// Amount the scheduler wants to pay.
    pub requested: Uint128,
    /// Reward pool balance at settlement time; the payout never exceeds it.
    pub pool_balance: Uint128,
    pub ticket: Option<Uint128>,
    pub total_weight: Uint128,
    pub num_eligible: u32,
    pub seed_hex: String,
    pub executed_at: Timestamp,
}

/// Settle an epoch: clamp the payout to the pool balance, append the
/// immutable result, update the running stats and win tracking, and build
/// the vault release message when tokens actually move.
///
/// Called exactly once per epoch. The scheduler's replay gate enforces
/// that; it is not re-checked here.
pub fn settle(
    storage: &mut dyn Storage,
    config: &DrawConfig,
    s: Settlement,
) -> Result<(Option<CosmosMsg>, DrawResult), ContractError> {
    // An under-paid draw beats a stalled one: a pool smaller than the
    // requested amount reduces the payout instead of failing the epoch.
    let payout = match &s.winner {
        Some(_) => s.requested.min(s.pool_balance),
        None => Uint128::zero(),
    };

    let result = DrawResult {
        epoch: s.epoch,
        winner: s.winner,
        payout,
        total_weight: s.total_weight,
        num_eligible: s.num_eligible,
        ticket: s.ticket,
        seed_hex: s.seed_hex,
        executed_at: s.executed_at,
    };
    DRAW_RESULTS.save(storage, s.epoch, &result)?;

    let mut stats = DRAW_STATS.load(storage)?;
    stats.draws_executed += 1;
    if result.winner.is_none() {
        stats.draws_empty += 1;
    }
    stats.total_paid = stats.total_paid.checked_add(payout)?;
    stats.last_executed_epoch = Some(s.epoch);
    DRAW_STATS.save(storage, &stats)?;

    if let Some(winner) = &result.winner {
        USER_WINS.save(storage, (winner, s.epoch), &())?;
        let count = USER_WIN_COUNT.may_load(storage, winner)?.unwrap_or(0);
        USER_WIN_COUNT.save(storage, winner, &(count + 1))?;
        let won = USER_TOTAL_WON
            .may_load(storage, winner)?
            .unwrap_or_default();
        USER_TOTAL_WON.save(storage, winner, &won.checked_add(payout)?)?;
    }

    let release_msg = match &result.winner {
        Some(winner) if !payout.is_zero() => Some(
            WasmMsg::Execute {
                contract_addr: config.stake_vault.to_string(),
                msg: to_json_binary(&VaultExecuteMsg::ReleasePayout {
                    epoch: s.epoch,
                    winner: winner.to_string(),
                    amount: payout,
                })?,
                funds: vec![],
            }
            .into(),
        ),
        _ => None,
    };

    Ok((release_msg, result))
}
