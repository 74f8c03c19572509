//! Overflow-safe arithmetic helpers for the accrual ledger.
//!
//! Every helper returns `ContractError::Overflow` / `Underflow` instead of
//! wrapping, so a failing calculation aborts the whole invocation.

use rebase_errors::ContractError;

/// Checked `i128` addition.
#[inline]
pub fn add_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}

/// Checked `i128` subtraction.
#[inline]
pub fn sub_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_sub(b).ok_or(ContractError::Underflow)
}

/// Checked `i128` multiplication.
#[inline]
pub fn mul_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_mul(b).ok_or(ContractError::Overflow)
}

/// Checked `i128` floor division for non-negative operands.
#[inline]
pub fn div_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_div(b).ok_or(ContractError::Overflow)
}

/// `rate * elapsed` widened to `i128`.
#[inline]
pub fn rate_times_elapsed(rate: u64, elapsed: u64) -> Result<i128, ContractError> {
    mul_i128(rate as i128, elapsed as i128)
}
