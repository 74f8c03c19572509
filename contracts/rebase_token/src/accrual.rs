//! Interest model.
//!
//! Balances accrue simple (linear) interest against the last-settled principal:
//!
//! ```text
//! factor  = SCALE + locked_rate * (now - last_settled)
//! balance = principal * factor / SCALE        (floor)
//! ```
//!
//! Evaluated as `principal + principal * (factor - SCALE) / SCALE`, which is
//! the same floor since `principal * SCALE / SCALE` is exact. The only
//! intermediate product is `principal * rate * elapsed`.
//!
//! Nothing time-dependent is stored. `settle` folds the interest earned so far
//! into `principal` and restarts the clock, so repeated settlements compound.
//! Every mutating entry point settles each address it touches before doing its
//! own work.

use crate::balance;
use crate::events;
use crate::math;
use crate::storage_types::{UserRecord, SCALE};
use rebase_errors::ContractError;
use soroban_sdk::{log, Address, Env};

/// Interest earned by `principal` at `rate` over `elapsed` seconds, rounded down.
pub fn accrued_interest(principal: i128, rate: u64, elapsed: u64) -> Result<i128, ContractError> {
    let growth = math::rate_times_elapsed(rate, elapsed)?;
    math::div_i128(math::mul_i128(principal, growth)?, SCALE)
}

/// Dynamic balance of `record` at timestamp `now`, rounded down.
///
/// An empty principal always yields 0 whatever the rate or elapsed time.
pub fn dynamic_balance(record: &UserRecord, now: u64) -> Result<i128, ContractError> {
    if record.principal == 0 {
        return Ok(0);
    }
    let elapsed = now.saturating_sub(record.last_settled);
    let interest = accrued_interest(record.principal, record.locked_rate, elapsed)?;
    math::add_i128(record.principal, interest)
}

/// Current dynamic balance of `user`.
pub fn balance_of(e: &Env, user: &Address) -> Result<i128, ContractError> {
    dynamic_balance(&balance::read_record(e, user), e.ledger().timestamp())
}

/// Materialize interest accrued by `user` into principal.
///
/// Idempotent within one ledger timestamp. Returns the settled record.
pub fn settle(e: &Env, user: &Address) -> Result<UserRecord, ContractError> {
    let now = e.ledger().timestamp();
    let mut record = balance::read_record(e, user);
    let settled = dynamic_balance(&record, now)?;
    let delta = math::sub_i128(settled, record.principal)?;

    record.last_settled = now;
    balance::write_record(e, user, &record);

    if delta > 0 {
        balance::receive_principal(e, user, delta)?;
        record.principal = settled;
        log!(e, "interest settled", user.clone(), delta);
        events::emit_interest_accrued(e, user, delta);
    }
    Ok(record)
}
