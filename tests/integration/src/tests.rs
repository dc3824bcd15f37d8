//! Integration tests for the hourly LOTTO draw protocol.
//!
//! These tests exercise the contract entry points directly using
//! `cosmwasm_std::testing` mocks. Each contract is tested via its
//! `instantiate` / `execute` / `query` entry points.
//!
//! For cross-contract interactions (the draw contract snapshotting the
//! vault, the redeemer crediting the reward pool), we capture the real
//! vault responses and serve them through `MockQuerier::update_wasm`, and
//! we relay the emitted wasm messages into the target contract by hand.
//!
//! Run:
//! ```bash
//! cargo test -p lotto-integration-tests
//! ```

use cosmwasm_std::testing::{message_info, mock_dependencies, mock_env, MockApi, MockQuerier};
use cosmwasm_std::{
    coins, from_json, to_json_binary, Addr, BankMsg, Binary, Coin, ContractResult, CosmosMsg,
    Decimal, Env, MemoryStorage, OwnedDeps, SystemResult, Uint128, WasmMsg, WasmQuery,
};

use lotto_hourly_draw::msg::VaultQueryMsg;

// ─── Constants ───

const HOUR: u64 = 3600;
const STAKE_DENOM: &str = "lotto";
const BADGE_DENOM: &str = "rumwl";
const EXTERNAL_DENOM: &str = "llt";

type Deps = OwnedDeps<MemoryStorage, MockApi, MockQuerier>;

// ─── Helpers ───

fn seed_hex_from_u128(value: u128) -> String {
    let mut seed = [0u8; 32];
    seed[16..].copy_from_slice(&value.to_be_bytes());
    hex::encode(seed)
}

/// Origin one hour before mock time, so epoch 0 is closed and drawable.
fn epoch_origin() -> u64 {
    mock_env().block.time.seconds() - HOUR
}

// ─── Vault helpers ───

fn setup_vault(deps: &mut Deps) {
    let admin = deps.api.addr_make("admin");
    let msg = lotto_stake_vault::msg::InstantiateMsg {
        stake_denom: STAKE_DENOM.to_string(),
        epoch_origin: Some(epoch_origin()),
        epoch_duration_seconds: HOUR,
    };
    let info = message_info(&admin, &[]);
    lotto_stake_vault::contract::instantiate(deps.as_mut(), mock_env(), info, msg).unwrap();
}

/// Wire the vault's authorities to the well-known "redeemer" and "draw"
/// identities and return them.
fn wire_vault_authorities(deps: &mut Deps) -> (Addr, Addr) {
    let admin = deps.api.addr_make("admin");
    let redeemer = deps.api.addr_make("redeemer");
    let draw = deps.api.addr_make("draw");
    let info = message_info(&admin, &[]);
    lotto_stake_vault::contract::execute(
        deps.as_mut(),
        mock_env(),
        info,
        lotto_stake_vault::msg::ExecuteMsg::SetAuthorities {
            redeemer: redeemer.to_string(),
            draw: draw.to_string(),
        },
    )
    .unwrap();
    (redeemer, draw)
}

fn vault_deposit(deps: &mut Deps, staker: &Addr, amount: u128) {
    let info = message_info(staker, &coins(amount, STAKE_DENOM));
    lotto_stake_vault::contract::execute(
        deps.as_mut(),
        mock_env(),
        info,
        lotto_stake_vault::msg::ExecuteMsg::Deposit {},
    )
    .unwrap();
}

fn vault_total_staked(deps: &Deps) -> Uint128 {
    let res = lotto_stake_vault::contract::query(
        deps.as_ref(),
        mock_env(),
        lotto_stake_vault::msg::QueryMsg::TotalStaked {},
    )
    .unwrap();
    let resp: lotto_stake_vault::msg::TotalStakedResponse = from_json(&res).unwrap();
    resp.total
}

fn vault_stake_of(deps: &Deps, address: &Addr) -> Uint128 {
    let res = lotto_stake_vault::contract::query(
        deps.as_ref(),
        mock_env(),
        lotto_stake_vault::msg::QueryMsg::StakeOf {
            address: address.to_string(),
        },
    )
    .unwrap();
    let resp: lotto_stake_vault::msg::StakeResponse = from_json(&res).unwrap();
    resp.principal
}

fn vault_reward_pool(deps: &Deps) -> Uint128 {
    let res = lotto_stake_vault::contract::query(
        deps.as_ref(),
        mock_env(),
        lotto_stake_vault::msg::QueryMsg::RewardPool {},
    )
    .unwrap();
    let resp: lotto_stake_vault::msg::RewardPoolResponse = from_json(&res).unwrap();
    resp.balance
}

/// Relay a wasm execute message emitted by another contract into the vault,
/// impersonating `sender`.
fn relay_to_vault(deps: &mut Deps, env: Env, sender: &Addr, msg: &CosmosMsg) {
    let CosmosMsg::Wasm(WasmMsg::Execute { msg, funds, .. }) = msg else {
        panic!("expected a wasm execute message, got: {:?}", msg);
    };
    let parsed: lotto_stake_vault::msg::ExecuteMsg = from_json(msg).unwrap();
    let info = message_info(sender, funds);
    lotto_stake_vault::contract::execute(deps.as_mut(), env, info, parsed).unwrap();
}

// ─── Draw helpers ───

fn setup_draw(deps: &mut Deps) {
    let admin = deps.api.addr_make("admin");
    let msg = lotto_hourly_draw::msg::InstantiateMsg {
        operator: deps.api.addr_make("operator").to_string(),
        stake_vault: deps.api.addr_make("vault").to_string(),
        eligibility_denom: BADGE_DENOM.to_string(),
        epoch_origin: Some(epoch_origin()),
        epoch_duration_seconds: Some(HOUR),
    };
    let info = message_info(&admin, &[]);
    lotto_hourly_draw::contract::instantiate(deps.as_mut(), mock_env(), info, msg).unwrap();
}

/// Point the draw contract's querier at captured vault responses.
fn mock_vault_into_draw(deps: &mut Deps, stakers_page: Binary, reward_pool: Binary) {
    let empty_page = to_json_binary(&lotto_hourly_draw::msg::VaultStakersResponse {
        stakers: vec![],
    })
    .unwrap();
    deps.querier.update_wasm(move |query| match query {
        WasmQuery::Smart { msg, .. } => match from_json::<VaultQueryMsg>(msg) {
            Ok(VaultQueryMsg::Stakers { start_after, .. }) => {
                // A single page of stakers; later pages are empty.
                let page = if start_after.is_none() {
                    stakers_page.clone()
                } else {
                    empty_page.clone()
                };
                SystemResult::Ok(ContractResult::Ok(page))
            }
            Ok(VaultQueryMsg::RewardPool {}) => {
                SystemResult::Ok(ContractResult::Ok(reward_pool.clone()))
            }
            Err(_) => SystemResult::Err(cosmwasm_std::SystemError::InvalidRequest {
                error: "Unknown query".to_string(),
                request: Default::default(),
            }),
        },
        _ => SystemResult::Err(cosmwasm_std::SystemError::InvalidRequest {
            error: "Only smart queries supported".to_string(),
            request: Default::default(),
        }),
    });
}

/// Capture the vault's live staker listing and reward pool balance as the
/// binaries the draw contract would receive.
fn capture_vault_state(deps: &Deps) -> (Binary, Binary) {
    let stakers = lotto_stake_vault::contract::query(
        deps.as_ref(),
        mock_env(),
        lotto_stake_vault::msg::QueryMsg::Stakers {
            start_after: None,
            limit: Some(30),
        },
    )
    .unwrap();
    let pool = lotto_stake_vault::contract::query(
        deps.as_ref(),
        mock_env(),
        lotto_stake_vault::msg::QueryMsg::RewardPool {},
    )
    .unwrap();
    (stakers, pool)
}

// ─── Redeemer helpers ───

fn setup_redeemer(deps: &mut Deps, rate: Decimal, accepted: Option<&str>) {
    let admin = deps.api.addr_make("admin");
    let msg = lotto_redeemer::msg::InstantiateMsg {
        reward_denom: STAKE_DENOM.to_string(),
        accepted_denom: accepted.map(|d| d.to_string()),
        rate,
        router: deps.api.addr_make("router").to_string(),
        stake_vault: deps.api.addr_make("vault").to_string(),
        max_slippage_bps: 100,
    };
    let info = message_info(&admin, &[]);
    lotto_redeemer::contract::instantiate(deps.as_mut(), mock_env(), info, msg).unwrap();
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_ledger_sum_invariant() {
    // Across any deposit/withdraw sequence, the vault's running total
    // equals the sum of the individual stakes.
    let mut deps = mock_dependencies();
    setup_vault(&mut deps);

    let user1 = deps.api.addr_make("user1");
    let user2 = deps.api.addr_make("user2");
    let user3 = deps.api.addr_make("user3");

    let assert_invariant = |deps: &Deps| {
        let sum = lotto_stake_vault::query::sum_of_stakes(deps.as_ref());
        assert_eq!(vault_total_staked(deps), sum);
    };

    vault_deposit(&mut deps, &user1, 100);
    assert_invariant(&deps);
    vault_deposit(&mut deps, &user2, 300);
    assert_invariant(&deps);
    vault_deposit(&mut deps, &user3, 50);
    vault_deposit(&mut deps, &user1, 25);
    assert_invariant(&deps);
    assert_eq!(vault_total_staked(&deps), Uint128::new(475));

    // Partial withdrawal.
    let info = message_info(&user1, &[]);
    lotto_stake_vault::contract::execute(
        deps.as_mut(),
        mock_env(),
        info,
        lotto_stake_vault::msg::ExecuteMsg::Withdraw {
            amount: Uint128::new(75),
        },
    )
    .unwrap();
    assert_invariant(&deps);

    // Full withdrawal removes the stake entirely.
    let info = message_info(&user3, &[]);
    lotto_stake_vault::contract::execute(
        deps.as_mut(),
        mock_env(),
        info,
        lotto_stake_vault::msg::ExecuteMsg::Withdraw {
            amount: Uint128::new(50),
        },
    )
    .unwrap();
    assert_invariant(&deps);
    assert_eq!(vault_stake_of(&deps, &user3), Uint128::zero());
    assert_eq!(vault_total_staked(&deps), Uint128::new(350));

    eprintln!("test_ledger_sum_invariant passed");
}

#[test]
fn test_withdraw_overdraw_rejected() {
    // withdraw(A, 150) with stakeOf(A) == 100 fails with InsufficientStake
    // and leaves the total untouched.
    let mut deps = mock_dependencies();
    setup_vault(&mut deps);

    let user1 = deps.api.addr_make("user1");
    vault_deposit(&mut deps, &user1, 100);

    let info = message_info(&user1, &[]);
    let err = lotto_stake_vault::contract::execute(
        deps.as_mut(),
        mock_env(),
        info,
        lotto_stake_vault::msg::ExecuteMsg::Withdraw {
            amount: Uint128::new(150),
        },
    )
    .unwrap_err();
    assert!(
        format!("{:?}", err).contains("InsufficientStake"),
        "Expected InsufficientStake, got: {:?}",
        err
    );
    assert_eq!(vault_total_staked(&deps), Uint128::new(100));
    assert_eq!(vault_stake_of(&deps, &user1), Uint128::new(100));

    eprintln!("test_withdraw_overdraw_rejected passed");
}

#[test]
fn test_redeem_round_trip_credits_pool() {
    // redeem(p, X) increases the vault's reward pool by exactly X * rate.
    let mut vault_deps = mock_dependencies();
    setup_vault(&mut vault_deps);
    let (redeemer_authority, _draw) = wire_vault_authorities(&mut vault_deps);

    let mut redeemer_deps = mock_dependencies();
    setup_redeemer(&mut redeemer_deps, Decimal::percent(50), Some(EXTERNAL_DENOM));

    // Pre-fund the redeemer's reward reserve.
    let env = mock_env();
    redeemer_deps
        .querier
        .bank
        .update_balance(&env.contract.address, coins(1_000_000, STAKE_DENOM));

    // User redeems 100_000 llt at rate 0.5 → 50_000 lotto credited.
    let user1 = redeemer_deps.api.addr_make("user1");
    let info = message_info(&user1, &coins(100_000, EXTERNAL_DENOM));
    let res = lotto_redeemer::contract::execute(
        redeemer_deps.as_mut(),
        mock_env(),
        info,
        lotto_redeemer::msg::ExecuteMsg::Redeem {},
    )
    .unwrap();

    // Two messages: the vault credit and the replenishing router swap.
    assert_eq!(res.messages.len(), 2);
    let CosmosMsg::Wasm(WasmMsg::Execute { funds, .. }) = &res.messages[0].msg else {
        panic!("expected wasm credit message");
    };
    assert_eq!(funds, &coins(50_000, STAKE_DENOM));

    // Relay the credit into the vault as the wired redeemer authority.
    relay_to_vault(
        &mut vault_deps,
        mock_env(),
        &redeemer_authority,
        &res.messages[0].msg,
    );
    assert_eq!(vault_reward_pool(&vault_deps), Uint128::new(50_000));

    // The swap sells exactly the received external tokens.
    let CosmosMsg::Wasm(WasmMsg::Execute { funds, .. }) = &res.messages[1].msg else {
        panic!("expected wasm swap message");
    };
    assert_eq!(funds, &coins(100_000, EXTERNAL_DENOM));

    eprintln!("test_redeem_round_trip_credits_pool passed");
}

#[test]
fn test_redeem_unconfigured_moves_nothing() {
    let mut deps = mock_dependencies();
    setup_redeemer(&mut deps, Decimal::one(), None);

    let user1 = deps.api.addr_make("user1");
    let info = message_info(&user1, &coins(100, EXTERNAL_DENOM));
    let err = lotto_redeemer::contract::execute(
        deps.as_mut(),
        mock_env(),
        info,
        lotto_redeemer::msg::ExecuteMsg::Redeem {},
    )
    .unwrap_err();
    assert!(
        format!("{:?}", err).contains("RedemptionNotConfigured"),
        "Expected RedemptionNotConfigured, got: {:?}",
        err
    );

    // No record was written.
    let res = lotto_redeemer::contract::query(
        deps.as_ref(),
        mock_env(),
        lotto_redeemer::msg::QueryMsg::Stats {},
    )
    .unwrap();
    let stats: lotto_redeemer::msg::RedeemStatsResponse = from_json(&res).unwrap();
    assert_eq!(stats.redemption_count, 0);
    assert_eq!(stats.total_redeemed, Uint128::zero());

    eprintln!("test_redeem_unconfigured_moves_nothing passed");
}

#[test]
fn test_full_stake_and_draw_cycle() {
    // Full cross-contract flow:
    // 1. A stakes 100, B stakes 300; both hold the eligibility badge
    // 2. The reward pool is credited 500 by the redeemer authority
    // 3. The operator draws with a seed ≡ 150 (mod 400) → B wins
    // 4. The emitted release message pays B 500 out of the vault
    // 5. Stakes are untouched by the draw; a replay is rejected

    // ── Step 1: vault with two stakers and a funded pool ──
    let mut vault_deps = mock_dependencies();
    setup_vault(&mut vault_deps);
    let (redeemer_authority, draw_authority) = wire_vault_authorities(&mut vault_deps);

    let staker_a = vault_deps.api.addr_make("staker_a");
    let staker_b = vault_deps.api.addr_make("staker_b");
    vault_deposit(&mut vault_deps, &staker_a, 100);
    vault_deposit(&mut vault_deps, &staker_b, 300);

    let info = message_info(&redeemer_authority, &coins(500, STAKE_DENOM));
    lotto_stake_vault::contract::execute(
        vault_deps.as_mut(),
        mock_env(),
        info,
        lotto_stake_vault::msg::ExecuteMsg::CreditReward {},
    )
    .unwrap();

    // ── Step 2: draw contract fed by the captured vault state ──
    let (stakers_page, reward_pool) = capture_vault_state(&vault_deps);

    let mut draw_deps = mock_dependencies();
    mock_vault_into_draw(&mut draw_deps, stakers_page, reward_pool);
    draw_deps
        .querier
        .bank
        .update_balance(&staker_a, vec![Coin::new(1u128, BADGE_DENOM)]);
    draw_deps
        .querier
        .bank
        .update_balance(&staker_b, vec![Coin::new(1u128, BADGE_DENOM)]);
    setup_draw(&mut draw_deps);

    // ── Step 3: draw. Ranges: A [0, 100), B [100, 400); ticket 150 → B ──
    let operator = draw_deps.api.addr_make("operator");
    let info = message_info(&operator, &[]);
    let res = lotto_hourly_draw::contract::execute(
        draw_deps.as_mut(),
        mock_env(),
        info,
        lotto_hourly_draw::msg::ExecuteMsg::Draw {
            seed_hex: seed_hex_from_u128(400 * 3 + 150),
        },
    )
    .unwrap();

    let query_res = lotto_hourly_draw::contract::query(
        draw_deps.as_ref(),
        mock_env(),
        lotto_hourly_draw::msg::QueryMsg::DrawResult { epoch: 0 },
    )
    .unwrap();
    let result: Option<lotto_hourly_draw::state::DrawResult> = from_json(&query_res).unwrap();
    let result = result.unwrap();
    assert_eq!(result.winner, Some(staker_b.clone()));
    assert_eq!(result.payout, Uint128::new(500));
    assert_eq!(result.total_weight, Uint128::new(400));
    assert_eq!(result.ticket, Some(Uint128::new(150)));

    // ── Step 4: relay the payout into the vault ──
    assert_eq!(res.messages.len(), 1);
    relay_to_vault(
        &mut vault_deps,
        mock_env(),
        &draw_authority,
        &res.messages[0].msg,
    );
    assert_eq!(vault_reward_pool(&vault_deps), Uint128::zero());

    // ── Step 5: stakes are untouched by the draw ──
    assert_eq!(vault_stake_of(&vault_deps, &staker_a), Uint128::new(100));
    assert_eq!(vault_stake_of(&vault_deps, &staker_b), Uint128::new(300));
    assert_eq!(vault_total_staked(&vault_deps), Uint128::new(400));

    // A replay of the same epoch is rejected with no state change.
    let info = message_info(&operator, &[]);
    let err = lotto_hourly_draw::contract::execute(
        draw_deps.as_mut(),
        mock_env(),
        info,
        lotto_hourly_draw::msg::ExecuteMsg::Draw {
            seed_hex: seed_hex_from_u128(999),
        },
    )
    .unwrap_err();
    assert!(
        format!("{:?}", err).contains("AlreadyExecuted"),
        "Expected AlreadyExecuted, got: {:?}",
        err
    );

    // Winner bookkeeping recorded the payout.
    let query_res = lotto_hourly_draw::contract::query(
        draw_deps.as_ref(),
        mock_env(),
        lotto_hourly_draw::msg::QueryMsg::UserWins {
            address: staker_b.to_string(),
            start_after: None,
            limit: None,
        },
    )
    .unwrap();
    let wins: lotto_hourly_draw::msg::UserWinsResponse = from_json(&query_res).unwrap();
    assert_eq!(wins.total_wins, 1);
    assert_eq!(wins.total_won_amount, Uint128::new(500));
    assert_eq!(wins.epochs, vec![0]);

    eprintln!("test_full_stake_and_draw_cycle passed");
}

#[test]
fn test_empty_draw_settles_without_winner() {
    // A draw with zero eligible weight records a null winner and zero
    // payout, consuming the epoch without error.
    let mut vault_deps = mock_dependencies();
    setup_vault(&mut vault_deps);
    wire_vault_authorities(&mut vault_deps);

    // One staker, but nobody holds the badge.
    let staker_a = vault_deps.api.addr_make("staker_a");
    vault_deposit(&mut vault_deps, &staker_a, 100);

    let (stakers_page, reward_pool) = capture_vault_state(&vault_deps);
    let mut draw_deps = mock_dependencies();
    mock_vault_into_draw(&mut draw_deps, stakers_page, reward_pool);
    setup_draw(&mut draw_deps);

    let operator = draw_deps.api.addr_make("operator");
    let info = message_info(&operator, &[]);
    let res = lotto_hourly_draw::contract::execute(
        draw_deps.as_mut(),
        mock_env(),
        info,
        lotto_hourly_draw::msg::ExecuteMsg::Draw {
            seed_hex: seed_hex_from_u128(42),
        },
    )
    .unwrap();
    assert!(res.messages.is_empty());

    let query_res = lotto_hourly_draw::contract::query(
        draw_deps.as_ref(),
        mock_env(),
        lotto_hourly_draw::msg::QueryMsg::DrawResult { epoch: 0 },
    )
    .unwrap();
    let result: Option<lotto_hourly_draw::state::DrawResult> = from_json(&query_res).unwrap();
    let result = result.unwrap();
    assert_eq!(result.winner, None);
    assert_eq!(result.payout, Uint128::zero());

    // The next epoch is drawable once its hour passes.
    let mut env = mock_env();
    env.block.time = env.block.time.plus_seconds(HOUR);
    let info = message_info(&operator, &[]);
    lotto_hourly_draw::contract::execute(
        draw_deps.as_mut(),
        env,
        info,
        lotto_hourly_draw::msg::ExecuteMsg::Draw {
            seed_hex: seed_hex_from_u128(43),
        },
    )
    .unwrap();

    eprintln!("test_empty_draw_settles_without_winner passed");
}

#[test]
fn test_payout_reaches_winner_as_bank_send() {
    // The vault turns a release into a single bank send to the winner.
    let mut vault_deps = mock_dependencies();
    setup_vault(&mut vault_deps);
    let (redeemer_authority, draw_authority) = wire_vault_authorities(&mut vault_deps);

    let info = message_info(&redeemer_authority, &coins(700, STAKE_DENOM));
    lotto_stake_vault::contract::execute(
        vault_deps.as_mut(),
        mock_env(),
        info,
        lotto_stake_vault::msg::ExecuteMsg::CreditReward {},
    )
    .unwrap();

    let winner = vault_deps.api.addr_make("winner");
    let info = message_info(&draw_authority, &[]);
    let res = lotto_stake_vault::contract::execute(
        vault_deps.as_mut(),
        mock_env(),
        info,
        lotto_stake_vault::msg::ExecuteMsg::ReleasePayout {
            epoch: 0,
            winner: winner.to_string(),
            amount: Uint128::new(700),
        },
    )
    .unwrap();

    assert_eq!(res.messages.len(), 1);
    assert_eq!(
        res.messages[0].msg,
        CosmosMsg::Bank(BankMsg::Send {
            to_address: winner.to_string(),
            amount: coins(700, STAKE_DENOM),
        })
    );
    assert_eq!(vault_reward_pool(&vault_deps), Uint128::zero());

    eprintln!("test_payout_reaches_winner_as_bank_send passed");
}

#[test]
fn test_rate_update_applies_to_later_redemptions() {
    let mut deps = mock_dependencies();
    setup_redeemer(&mut deps, Decimal::one(), Some(EXTERNAL_DENOM));

    let env = mock_env();
    deps.querier
        .bank
        .update_balance(&env.contract.address, coins(1_000_000, STAKE_DENOM));

    let user1 = deps.api.addr_make("user1");
    let info = message_info(&user1, &coins(10_000, EXTERNAL_DENOM));
    lotto_redeemer::contract::execute(
        deps.as_mut(),
        mock_env(),
        info,
        lotto_redeemer::msg::ExecuteMsg::Redeem {},
    )
    .unwrap();

    // Admin doubles the rate; the next redemption credits twice as much.
    let admin = deps.api.addr_make("admin");
    let info = message_info(&admin, &[]);
    lotto_redeemer::contract::execute(
        deps.as_mut(),
        mock_env(),
        info,
        lotto_redeemer::msg::ExecuteMsg::SetRate {
            rate: Decimal::percent(200),
        },
    )
    .unwrap();

    let info = message_info(&user1, &coins(10_000, EXTERNAL_DENOM));
    lotto_redeemer::contract::execute(
        deps.as_mut(),
        mock_env(),
        info,
        lotto_redeemer::msg::ExecuteMsg::Redeem {},
    )
    .unwrap();

    let res = lotto_redeemer::contract::query(
        deps.as_ref(),
        mock_env(),
        lotto_redeemer::msg::QueryMsg::Redemptions {
            start_after: None,
            limit: None,
        },
    )
    .unwrap();
    let page: lotto_redeemer::msg::RedemptionsResponse = from_json(&res).unwrap();
    assert_eq!(page.redemptions.len(), 2);
    assert_eq!(page.redemptions[0].reward_credited, Uint128::new(10_000));
    assert_eq!(page.redemptions[1].reward_credited, Uint128::new(20_000));

    eprintln!("test_rate_update_applies_to_later_redemptions passed");
}
