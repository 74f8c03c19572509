//! Principal ledger: the value-accounting primitive wrapped by the accrual logic.
//!
//! Holds per-address `UserRecord`s and the running `TotalPrincipal`. Nothing in
//! here knows about interest; `accrual` settles before calling in.

use crate::math;
use crate::storage_types::{DataKey, UserRecord, BUMP_TARGET, BUMP_THRESHOLD};
use rebase_errors::ContractError;
use soroban_sdk::{Address, Env};

/// Load the record for `user`, or `UserRecord::zeroed()` if none exists yet.
pub fn read_record(e: &Env, user: &Address) -> UserRecord {
    let key = DataKey::User(user.clone());
    let storage = e.storage().persistent();
    match storage.get::<_, UserRecord>(&key) {
        Some(record) => {
            storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
            record
        }
        None => UserRecord::zeroed(),
    }
}

pub fn write_record(e: &Env, user: &Address, record: &UserRecord) {
    let key = DataKey::User(user.clone());
    e.storage().persistent().set(&key, record);
    e.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

pub fn read_total_principal(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::TotalPrincipal)
        .unwrap_or(0)
}

fn write_total_principal(e: &Env, total: i128) {
    e.storage().instance().set(&DataKey::TotalPrincipal, &total);
}

/// Credit `amount` of principal to `user` and to the total.
pub fn receive_principal(e: &Env, user: &Address, amount: i128) -> Result<(), ContractError> {
    let mut record = read_record(e, user);
    record.principal = math::add_i128(record.principal, amount)?;
    write_record(e, user, &record);
    let total = math::add_i128(read_total_principal(e), amount)?;
    write_total_principal(e, total);
    Ok(())
}

/// Debit `amount` of principal from `user` and from the total.
pub fn spend_principal(e: &Env, user: &Address, amount: i128) -> Result<(), ContractError> {
    let mut record = read_record(e, user);
    if amount > record.principal {
        return Err(ContractError::InsufficientBalance);
    }
    record.principal -= amount;
    write_record(e, user, &record);
    let total = math::sub_i128(read_total_principal(e), amount)?;
    write_total_principal(e, total);
    Ok(())
}

/// Overwrite the locked rate of `user` without touching principal.
pub fn write_locked_rate(e: &Env, user: &Address, rate: u64) {
    let mut record = read_record(e, user);
    record.locked_rate = rate;
    write_record(e, user, &record);
}
