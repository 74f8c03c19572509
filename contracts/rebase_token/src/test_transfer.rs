//! Transfer conservation and rate propagation.

#![cfg(test)]

use crate::test_helpers::*;
use crate::{ContractError, DEFAULT_INTEREST_RATE, MAX_AMOUNT};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

#[test]
fn test_transfer_conserves_value() {
    let e = Env::default();
    let (client, _owner, minter) = setup(&e);
    let sender = Address::generate(&e);
    let recipient = Address::generate(&e);
    client.mint(&minter, &sender, &ONE_TOKEN, &DEFAULT_INTEREST_RATE);
    client.mint(&minter, &recipient, &(ONE_TOKEN / 3), &DEFAULT_INTEREST_RATE);

    advance(&e, ONE_DAY);
    let before = client.balance(&sender) + client.balance(&recipient);

    assert!(client.transfer(&sender, &recipient, &(ONE_TOKEN / 2)));

    let after = client.balance(&sender) + client.balance(&recipient);
    assert_eq!(before, after);
}

#[test]
fn test_transfer_into_empty_account_inherits_sender_rate() {
    let e = Env::default();
    let (client, owner, minter) = setup(&e);
    let sender = Address::generate(&e);
    let recipient = Address::generate(&e);
    client.mint(&minter, &sender, &ONE_TOKEN, &DEFAULT_INTEREST_RATE);

    client.set_interest_rate(&owner, &(DEFAULT_INTEREST_RATE / 2));
    client.transfer(&sender, &recipient, &(ONE_TOKEN / 2));

    assert_eq!(client.get_user_interest_rate(&recipient), DEFAULT_INTEREST_RATE);
}

#[test]
fn test_transfer_into_funded_account_keeps_recipient_rate() {
    let e = Env::default();
    let (client, owner, minter) = setup(&e);
    let sender = Address::generate(&e);
    let recipient = Address::generate(&e);
    client.mint(&minter, &sender, &ONE_TOKEN, &DEFAULT_INTEREST_RATE);

    let lower = DEFAULT_INTEREST_RATE / 2;
    client.set_interest_rate(&owner, &lower);
    client.mint(&minter, &recipient, &ONE_TOKEN, &lower);

    client.transfer(&sender, &recipient, &(ONE_TOKEN / 2));

    assert_eq!(client.get_user_interest_rate(&recipient), lower);
    assert_eq!(client.get_user_interest_rate(&sender), DEFAULT_INTEREST_RATE);
}

#[test]
fn test_transfer_into_drained_account_takes_new_sender_rate() {
    let e = Env::default();
    let (client, _owner, minter) = setup(&e);
    let sender = Address::generate(&e);
    let recipient = Address::generate(&e);
    client.mint(&minter, &recipient, &ONE_TOKEN, &1_u64);
    client.burn(&minter, &recipient, &MAX_AMOUNT);
    client.mint(&minter, &sender, &ONE_TOKEN, &DEFAULT_INTEREST_RATE);

    client.transfer(&sender, &recipient, &1_000_i128);

    assert_eq!(client.get_user_interest_rate(&recipient), DEFAULT_INTEREST_RATE);
}

#[test]
fn test_transfer_max_moves_entire_accrued_balance() {
    let e = Env::default();
    let (client, _owner, minter) = setup(&e);
    let sender = Address::generate(&e);
    let recipient = Address::generate(&e);
    client.mint(&minter, &sender, &ONE_TOKEN, &DEFAULT_INTEREST_RATE);

    advance(&e, ONE_DAY);
    let full = client.balance(&sender);
    client.transfer(&sender, &recipient, &MAX_AMOUNT);

    assert_eq!(client.balance(&sender), 0);
    assert_eq!(client.balance(&recipient), full);
    assert_eq!(client.principal_balance(&recipient), full);
}

#[test]
fn test_transfer_more_than_balance_fails() {
    let e = Env::default();
    let (client, _owner, minter) = setup(&e);
    let sender = Address::generate(&e);
    let recipient = Address::generate(&e);
    client.mint(&minter, &sender, &1_000_i128, &DEFAULT_INTEREST_RATE);

    assert_eq!(
        client.try_transfer(&sender, &recipient, &1_001_i128),
        Err(Ok(ContractError::InsufficientBalance))
    );
    assert_eq!(client.balance(&sender), 1_000);
    assert_eq!(client.balance(&recipient), 0);
    assert_eq!(client.get_user_interest_rate(&recipient), 0);
}

#[test]
fn test_transfer_negative_amount_fails() {
    let e = Env::default();
    let (client, _owner, minter) = setup(&e);
    let sender = Address::generate(&e);
    let recipient = Address::generate(&e);
    client.mint(&minter, &sender, &1_000_i128, &DEFAULT_INTEREST_RATE);

    assert_eq!(
        client.try_transfer(&sender, &recipient, &-5_i128),
        Err(Ok(ContractError::NegativeAmount))
    );
}

#[test]
fn test_transfer_to_self_is_balance_neutral() {
    let e = Env::default();
    let (client, _owner, minter) = setup(&e);
    let user = Address::generate(&e);
    client.mint(&minter, &user, &ONE_TOKEN, &DEFAULT_INTEREST_RATE);

    advance(&e, ONE_HOUR);
    let before = client.balance(&user);
    client.transfer(&user, &user, &(ONE_TOKEN / 4));

    assert_eq!(client.balance(&user), before);
    assert_eq!(client.get_user_interest_rate(&user), DEFAULT_INTEREST_RATE);
}

#[test]
fn test_recipient_interest_is_settled_before_transfer() {
    let e = Env::default();
    let (client, _owner, minter) = setup(&e);
    let sender = Address::generate(&e);
    let recipient = Address::generate(&e);
    client.mint(&minter, &sender, &ONE_TOKEN, &DEFAULT_INTEREST_RATE);
    client.mint(&minter, &recipient, &ONE_TOKEN, &DEFAULT_INTEREST_RATE);

    advance(&e, ONE_DAY);
    let recipient_before = client.balance(&recipient);
    client.transfer(&sender, &recipient, &1_000_i128);

    assert_eq!(client.principal_balance(&recipient), recipient_before + 1_000);
}
