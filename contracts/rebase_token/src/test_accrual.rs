//! Interest accrual properties.

#![cfg(test)]

use crate::accrual::{accrued_interest, dynamic_balance};
use crate::test_helpers::*;
use crate::{UserRecord, DEFAULT_INTEREST_RATE, MAX_AMOUNT, SCALE};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

// ═══════════════════════════════════════════════════════════════════
// 1. Pure formula
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_no_interest_without_elapsed_time() {
    assert_eq!(accrued_interest(1_000 * ONE_TOKEN, DEFAULT_INTEREST_RATE, 0), Ok(0));
}

#[test]
fn test_large_holding_at_same_instant_is_principal() {
    let record = UserRecord {
        principal: 1_000 * ONE_TOKEN,
        locked_rate: DEFAULT_INTEREST_RATE,
        last_settled: 5_000,
    };
    assert_eq!(dynamic_balance(&record, 5_000), Ok(1_000 * ONE_TOKEN));
}

#[test]
fn test_dynamic_balance_rounds_down() {
    let record = UserRecord {
        principal: 10_000,
        locked_rate: DEFAULT_INTEREST_RATE,
        last_settled: 0,
    };
    // 10_000 * 5e10 * 3600 / 1e18 = 1.8 -> 1
    assert_eq!(dynamic_balance(&record, 3_600), Ok(10_001));
}

#[test]
fn test_dynamic_balance_zero_principal_is_zero() {
    let record = UserRecord {
        principal: 0,
        locked_rate: u64::MAX,
        last_settled: 0,
    };
    assert_eq!(dynamic_balance(&record, u64::MAX), Ok(0));
}

#[test]
fn test_dynamic_balance_overflow_is_reported() {
    let record = UserRecord {
        principal: i128::MAX / 2,
        locked_rate: DEFAULT_INTEREST_RATE,
        last_settled: 0,
    };
    assert_eq!(
        dynamic_balance(&record, ONE_DAY),
        Err(rebase_errors::ContractError::Overflow)
    );
}

// ═══════════════════════════════════════════════════════════════════
// 2. Time-based behavior through the contract
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_large_holder_accrues_and_stays_movable() {
    let e = Env::default();
    let (client, _owner, minter) = setup(&e);
    let holder = Address::generate(&e);
    let other = Address::generate(&e);
    let principal = 1_000 * ONE_TOKEN;
    client.mint(&minter, &holder, &principal, &DEFAULT_INTEREST_RATE);
    assert_eq!(client.balance(&holder), principal);

    advance(&e, ONE_DAY);
    let expected = expected_balance(principal, DEFAULT_INTEREST_RATE, ONE_DAY);
    assert!(expected > principal);
    assert_eq!(client.balance(&holder), expected);

    assert!(client.transfer(&holder, &other, &ONE_TOKEN));
    assert_eq!(client.balance(&holder), expected - ONE_TOKEN);
    assert_eq!(client.balance(&other), ONE_TOKEN);

    client.burn(&minter, &holder, &MAX_AMOUNT);
    assert_eq!(client.balance(&holder), 0);
    assert_eq!(client.total_supply(), ONE_TOKEN);
}

#[test]
fn test_i64_max_raw_units_accrue_linearly() {
    let e = Env::default();
    let (client, _owner, minter) = setup(&e);
    let holder = Address::generate(&e);
    let principal = i64::MAX as i128;
    client.mint(&minter, &holder, &principal, &DEFAULT_INTEREST_RATE);

    advance(&e, 30 * ONE_DAY);
    let expected = expected_balance(principal, DEFAULT_INTEREST_RATE, 30 * ONE_DAY);
    assert_eq!(client.balance(&holder), expected);

    client.burn(&minter, &holder, &MAX_AMOUNT);
    assert_eq!(client.balance(&holder), 0);
    assert_eq!(client.principal_balance(&holder), 0);
}

#[test]
fn test_balance_is_monotonic_over_time() {
    let e = Env::default();
    let (client, _owner, minter) = setup(&e);
    let user = Address::generate(&e);
    client.mint(&minter, &user, &ONE_TOKEN, &DEFAULT_INTEREST_RATE);

    let mut previous = client.balance(&user);
    for _ in 0..10 {
        advance(&e, ONE_HOUR);
        let current = client.balance(&user);
        assert!(current >= previous);
        previous = current;
    }
    assert!(previous > ONE_TOKEN);
}

#[test]
fn test_equal_intervals_accrue_equal_interest() {
    let e = Env::default();
    let (client, _owner, minter) = setup(&e);
    let user = Address::generate(&e);
    client.mint(&minter, &user, &ONE_TOKEN, &DEFAULT_INTEREST_RATE);

    let start = client.balance(&user);
    advance(&e, ONE_HOUR);
    let middle = client.balance(&user);
    advance(&e, ONE_HOUR);
    let end = client.balance(&user);

    let first = middle - start;
    let second = end - middle;
    assert!((first - second).abs() <= 1);
    assert_eq!(first, ONE_TOKEN * DEFAULT_INTEREST_RATE as i128 * ONE_HOUR as i128 / SCALE);
}

#[test]
fn test_query_does_not_settle() {
    let e = Env::default();
    let (client, _owner, minter) = setup(&e);
    let user = Address::generate(&e);
    client.mint(&minter, &user, &ONE_TOKEN, &DEFAULT_INTEREST_RATE);

    advance(&e, ONE_DAY);
    let _ = client.balance(&user);
    assert_eq!(client.principal_balance(&user), ONE_TOKEN);
    assert_eq!(client.total_supply(), ONE_TOKEN);
}

#[test]
fn test_zero_principal_never_accrues() {
    let e = Env::default();
    let (client, _owner, minter) = setup(&e);
    let user = Address::generate(&e);

    client.mint(&minter, &user, &ONE_TOKEN, &DEFAULT_INTEREST_RATE);
    client.burn(&minter, &user, &crate::MAX_AMOUNT);
    advance(&e, 365 * ONE_DAY);

    assert_eq!(client.get_user_interest_rate(&user), DEFAULT_INTEREST_RATE);
    assert_eq!(client.balance(&user), 0);
}

#[test]
fn test_zero_rate_holder_does_not_accrue() {
    let e = Env::default();
    let (client, _owner, minter) = setup(&e);
    let user = Address::generate(&e);
    client.mint(&minter, &user, &ONE_TOKEN, &0_u64);

    advance(&e, ONE_DAY);
    assert_eq!(client.balance(&user), ONE_TOKEN);
}

#[test]
fn test_settlement_compounds_across_boundaries() {
    let e = Env::default();
    let (client, _owner, minter) = setup(&e);
    let settled = Address::generate(&e);
    let idle = Address::generate(&e);
    client.mint(&minter, &settled, &ONE_TOKEN, &DEFAULT_INTEREST_RATE);
    client.mint(&minter, &idle, &ONE_TOKEN, &DEFAULT_INTEREST_RATE);

    advance(&e, ONE_DAY);
    // A zero-amount mint settles `settled` without changing its balance.
    client.mint(&minter, &settled, &0_i128, &DEFAULT_INTEREST_RATE);
    assert_eq!(client.balance(&settled), client.balance(&idle));

    advance(&e, ONE_DAY);
    assert!(client.balance(&settled) > client.balance(&idle));
}

#[test]
fn test_settlement_keeps_total_supply_in_step() {
    let e = Env::default();
    let (client, _owner, minter) = setup(&e);
    let a = Address::generate(&e);
    let b = Address::generate(&e);
    client.mint(&minter, &a, &ONE_TOKEN, &DEFAULT_INTEREST_RATE);
    client.mint(&minter, &b, &(2 * ONE_TOKEN), &DEFAULT_INTEREST_RATE);

    advance(&e, ONE_DAY);
    client.transfer(&a, &b, &1_000_i128);

    assert_eq!(
        client.total_supply(),
        client.principal_balance(&a) + client.principal_balance(&b)
    );
}
