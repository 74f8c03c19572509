//! Rebase Token Contract
//!
//! Interest-bearing token whose balance grows linearly over time at a rate
//! locked in per account. Deposits enter through an authorized minter (the
//! rebase vault); the owner may only ever lower the rate offered to new
//! depositors.
//!
//! ## Key design decisions
//!
//! - **Computed balances**: `balance` is derived from principal, locked rate and
//!   last-settlement time; no continuously changing number is stored.
//! - **Settle before mutate**: every mint, burn and transfer first folds accrued
//!   interest into principal for each account it touches.
//! - **Rate locking**: an account's rate is fixed on its zero -> nonzero
//!   transition. A transfer into an empty account passes on the sender's rate.
//! - **Non-increasing global rate**: `set_interest_rate` rejects any increase.
//! - **Composition over inheritance**: `balance` is a plain principal ledger,
//!   `accrual` wraps it, `access_control` gates privileged calls.

#![no_std]

mod access_control;
mod accrual;
mod allowance;
mod balance;
mod events;
mod math;
pub mod storage_types;

pub use rebase_errors::ContractError;
pub use storage_types::{TokenMetadata, UserRecord, DEFAULT_INTEREST_RATE, MAX_AMOUNT, SCALE};

use soroban_sdk::{contract, contractimpl, log, Address, Env, String};
use storage_types::{DataKey, BUMP_TARGET, BUMP_THRESHOLD};


#[cfg(test)]
mod test_accrual;
#[cfg(test)]
mod test_transfer;

// ─── Helpers ───────────────────────────────────────────────────────────────

fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_TARGET);
}

fn require_initialized(e: &Env) -> Result<(), ContractError> {
    if !e.storage().instance().has(&DataKey::Owner) {
        return Err(ContractError::NotInitialized);
    }
    Ok(())
}

fn require_non_negative(amount: i128) -> Result<(), ContractError> {
    if amount < 0 {
        return Err(ContractError::NegativeAmount);
    }
    Ok(())
}

fn read_global_rate(e: &Env) -> Result<u64, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::GlobalRate)
        .ok_or(ContractError::NotInitialized)
}

/// Shared body of `transfer` and `transfer_from` once authorization is done.
///
/// Returns the resolved amount (MAX_AMOUNT becomes the sender's balance).
fn move_balance(e: &Env, from: &Address, to: &Address, amount: i128) -> Result<i128, ContractError> {
    require_non_negative(amount)?;

    let sender = accrual::settle(e, from)?;
    let recipient = accrual::settle(e, to)?;

    let amount = if amount == MAX_AMOUNT {
        sender.principal
    } else {
        amount
    };
    if amount > sender.principal {
        return Err(ContractError::InsufficientBalance);
    }

    if recipient.principal == 0 && from != to {
        balance::write_locked_rate(e, to, sender.locked_rate);
    }

    balance::spend_principal(e, from, amount)?;
    balance::receive_principal(e, to, amount)?;
    Ok(amount)
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct RebaseToken;

#[contractimpl]
impl RebaseToken {
    // ── Setup ──────────────────────────────────────────────────────────────

    /// One-time initialization.
    ///
    /// # Arguments
    /// * `owner` - Holder of the owner capability (rate updates, role grants)
    /// * `initial_rate` - Starting global rate, scaled by `SCALE`
    /// * `name`, `symbol`, `decimals` - Token metadata
    ///
    /// # Errors
    /// * `AlreadyInitialized` - if called again
    pub fn initialize(
        e: Env,
        owner: Address,
        initial_rate: u64,
        name: String,
        symbol: String,
        decimals: u32,
    ) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Owner) {
            return Err(ContractError::AlreadyInitialized);
        }
        owner.require_auth();

        access_control::write_owner(&e, &owner);
        e.storage()
            .instance()
            .set(&DataKey::GlobalRate, &initial_rate);
        e.storage().instance().set(&DataKey::TotalPrincipal, &0_i128);
        e.storage().instance().set(
            &DataKey::Metadata,
            &TokenMetadata {
                name,
                symbol,
                decimals,
            },
        );
        bump_instance(&e);
        events::emit_interest_rate_set(&e, initial_rate);
        Ok(())
    }

    // ── Owner administration ───────────────────────────────────────────────

    /// Lower the global rate offered to new depositors.
    ///
    /// Existing holders keep their locked rate.
    ///
    /// # Errors
    /// * `Unauthorized` - caller is not the owner
    /// * `RateCanOnlyDecrease` - `new_rate` exceeds the current rate
    pub fn set_interest_rate(e: Env, owner: Address, new_rate: u64) -> Result<(), ContractError> {
        access_control::require_owner(&e, &owner)?;
        let current = read_global_rate(&e)?;
        if new_rate > current {
            log!(&e, "rate can only decrease", current, new_rate);
            return Err(ContractError::RateCanOnlyDecrease);
        }
        e.storage().instance().set(&DataKey::GlobalRate, &new_rate);
        bump_instance(&e);
        events::emit_interest_rate_set(&e, new_rate);
        Ok(())
    }

    /// Grant the mint/burn capability (normally to the vault).
    pub fn grant_mint_and_burn_role(
        e: Env,
        owner: Address,
        account: Address,
    ) -> Result<(), ContractError> {
        access_control::require_owner(&e, &owner)?;
        access_control::set_mint_and_burn_role(&e, &account, true);
        events::emit_role_granted(&e, &account);
        Ok(())
    }

    pub fn revoke_mint_and_burn_role(
        e: Env,
        owner: Address,
        account: Address,
    ) -> Result<(), ContractError> {
        access_control::require_owner(&e, &owner)?;
        access_control::set_mint_and_burn_role(&e, &account, false);
        events::emit_role_revoked(&e, &account);
        Ok(())
    }

    /// Hand the owner capability to `new_owner`. Both parties must authorize.
    pub fn transfer_ownership(
        e: Env,
        owner: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        access_control::require_owner(&e, &owner)?;
        new_owner.require_auth();
        access_control::write_owner(&e, &new_owner);
        bump_instance(&e);
        events::emit_ownership_transferred(&e, &owner, &new_owner);
        Ok(())
    }

    // ── Mint / burn ────────────────────────────────────────────────────────

    /// Mint `amount` to `to`. An empty account locks in `rate`.
    ///
    /// `rate` is chosen by the minter; the vault forwards the global rate read
    /// in the same invocation as the deposit.
    ///
    /// # Errors
    /// * `Unauthorized` - caller lacks the mint/burn role
    /// * `NegativeAmount` - `amount < 0`
    pub fn mint(
        e: Env,
        caller: Address,
        to: Address,
        amount: i128,
        rate: u64,
    ) -> Result<(), ContractError> {
        access_control::require_mint_and_burn_role(&e, &caller)?;
        require_non_negative(amount)?;

        let record = accrual::settle(&e, &to)?;
        if record.principal == 0 {
            balance::write_locked_rate(&e, &to, rate);
        }
        balance::receive_principal(&e, &to, amount)?;

        bump_instance(&e);
        events::emit_mint(&e, &to, amount, rate);
        Ok(())
    }

    /// Burn `amount` from `from`; `MAX_AMOUNT` burns the entire balance.
    ///
    /// # Errors
    /// * `Unauthorized` - caller lacks the mint/burn role
    /// * `InsufficientBalance` - `amount` exceeds the settled principal
    pub fn burn(e: Env, caller: Address, from: Address, amount: i128) -> Result<(), ContractError> {
        access_control::require_mint_and_burn_role(&e, &caller)?;
        require_non_negative(amount)?;

        // Pre-settlement balance equals post-settlement principal.
        let amount = if amount == MAX_AMOUNT {
            accrual::balance_of(&e, &from)?
        } else {
            amount
        };
        accrual::settle(&e, &from)?;
        balance::spend_principal(&e, &from, amount)?;

        bump_instance(&e);
        events::emit_burn(&e, &from, amount);
        Ok(())
    }

    // ── Transfers ──────────────────────────────────────────────────────────

    /// Move `amount` from `from` to `to`; `MAX_AMOUNT` moves everything.
    ///
    /// An empty recipient inherits the sender's locked rate.
    pub fn transfer(e: Env, from: Address, to: Address, amount: i128) -> Result<bool, ContractError> {
        from.require_auth();
        require_initialized(&e)?;
        let moved = move_balance(&e, &from, &to, amount)?;
        bump_instance(&e);
        events::emit_transfer(&e, &from, &to, moved);
        Ok(true)
    }

    /// Allowance-based transfer initiated by `spender`.
    pub fn transfer_from(
        e: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<bool, ContractError> {
        spender.require_auth();
        require_initialized(&e)?;
        let moved = move_balance(&e, &from, &to, amount)?;
        allowance::spend_allowance(&e, &from, &spender, moved)?;
        bump_instance(&e);
        events::emit_transfer(&e, &from, &to, moved);
        Ok(true)
    }

    pub fn approve(
        e: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), ContractError> {
        from.require_auth();
        require_initialized(&e)?;
        allowance::write_allowance(&e, &from, &spender, amount, expiration_ledger)?;
        bump_instance(&e);
        events::emit_approve(&e, &from, &spender, amount, expiration_ledger);
        Ok(())
    }

    pub fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        allowance::read_allowance(&e, &from, &spender).amount
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Dynamic balance including interest accrued since the last settlement.
    pub fn balance(e: Env, id: Address) -> Result<i128, ContractError> {
        accrual::balance_of(&e, &id)
    }

    /// Stored principal, without unsettled interest.
    pub fn principal_balance(e: Env, id: Address) -> i128 {
        balance::read_record(&e, &id).principal
    }

    pub fn get_user_interest_rate(e: Env, id: Address) -> u64 {
        balance::read_record(&e, &id).locked_rate
    }

    pub fn get_interest_rate(e: Env) -> Result<u64, ContractError> {
        read_global_rate(&e)
    }

    /// Sum of all principals (settled supply).
    pub fn total_supply(e: Env) -> i128 {
        balance::read_total_principal(&e)
    }

    pub fn has_mint_and_burn_role(e: Env, account: Address) -> bool {
        access_control::has_mint_and_burn_role(&e, &account)
    }

    pub fn get_owner(e: Env) -> Result<Address, ContractError> {
        access_control::read_owner(&e)
    }

    pub fn name(e: Env) -> Result<String, ContractError> {
        Ok(Self::metadata(&e)?.name)
    }

    pub fn symbol(e: Env) -> Result<String, ContractError> {
        Ok(Self::metadata(&e)?.symbol)
    }

    pub fn decimals(e: Env) -> Result<u32, ContractError> {
        Ok(Self::metadata(&e)?.decimals)
    }
}

impl RebaseToken {
    fn metadata(e: &Env) -> Result<TokenMetadata, ContractError> {
        e.storage()
            .instance()
            .get(&DataKey::Metadata)
            .ok_or(ContractError::NotInitialized)
    }
}
