//! Rebase Vault Contract
//!
//! Exchanges a base asset for rebase tokens one-to-one. Deposits mint at the
//! ledger's current global rate; redemptions burn and pay the base asset back,
//! accrued interest included. The vault holds the mint/burn role on the token
//! and carries no accrual logic of its own.
//!
//! Accrued interest is paid out of the vault's base-asset reserve, which is
//! topped up through `fund_rewards`.

#![no_std]

mod events;
mod ledger;
mod token_integration;

pub use ledger::{LedgerClient, LedgerInterface};
pub use rebase_errors::ContractError;

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};



/// Sentinel amount: redeem the caller's entire rebase balance.
pub const MAX_AMOUNT: i128 = i128::MAX;

#[contracttype]
pub enum DataKey {
    /// Rebase token ledger this vault mints and burns on.
    RebaseToken,
    /// Token contract of the base asset held by the vault.
    BaseAsset,
}

// ─── Helpers ───────────────────────────────────────────────────────────────

fn rebase_token(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::RebaseToken)
        .ok_or(ContractError::NotInitialized)
}

fn ledger_client(e: &Env) -> Result<LedgerClient<'_>, ContractError> {
    let token = rebase_token(e)?;
    Ok(LedgerClient::new(e, &token))
}

fn require_positive(amount: i128) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::AmountMustBePositive);
    }
    Ok(())
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct RebaseVault;

#[contractimpl]
impl RebaseVault {
    /// One-time initialization. Stores the rebase token and base asset.
    ///
    /// The token owner must separately grant this vault the mint/burn role.
    pub fn initialize(e: Env, rebase_token: Address, base_asset: Address) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::RebaseToken) {
            return Err(ContractError::AlreadyInitialized);
        }
        e.storage()
            .instance()
            .set(&DataKey::RebaseToken, &rebase_token);
        e.storage().instance().set(&DataKey::BaseAsset, &base_asset);
        Ok(())
    }

    /// Deposit `amount` of base asset and mint the same amount of rebase
    /// tokens at the current global rate.
    ///
    /// # Errors
    /// * `AmountMustBePositive` - `amount <= 0`
    pub fn deposit(e: Env, user: Address, amount: i128) -> Result<i128, ContractError> {
        user.require_auth();
        require_positive(amount)?;

        let ledger = ledger_client(&e)?;
        token_integration::transfer_into_vault(&e, &user, amount)?;

        let rate = ledger.get_interest_rate();
        ledger.mint(&e.current_contract_address(), &user, &amount, &rate);

        events::emit_deposit(&e, &user, amount);
        Ok(amount)
    }

    /// Burn `amount` rebase tokens (`MAX_AMOUNT` = entire balance) and pay the
    /// same amount of base asset back.
    ///
    /// # Errors
    /// * `AmountMustBePositive` - resolved amount `<= 0`
    /// * `AssetTransferFailed` - the vault could not pay out; the burn is undone
    pub fn redeem(e: Env, user: Address, amount: i128) -> Result<i128, ContractError> {
        user.require_auth();

        let ledger = ledger_client(&e)?;
        let amount = if amount == MAX_AMOUNT {
            ledger.balance(&user)
        } else {
            amount
        };
        require_positive(amount)?;

        ledger.burn(&e.current_contract_address(), &user, &amount);
        token_integration::transfer_from_vault(&e, &user, amount)?;

        events::emit_redeem(&e, &user, amount);
        Ok(amount)
    }

    /// Add base asset to the reserve that backs accrued interest.
    pub fn fund_rewards(e: Env, funder: Address, amount: i128) -> Result<(), ContractError> {
        funder.require_auth();
        require_positive(amount)?;
        token_integration::transfer_into_vault(&e, &funder, amount)?;
        events::emit_rewards_funded(&e, &funder, amount);
        Ok(())
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn get_rebase_token_address(e: Env) -> Result<Address, ContractError> {
        rebase_token(&e)
    }

    /// Address of the base asset deposited into and paid out of the vault.
    pub fn get_underlying_token_address(e: Env) -> Result<Address, ContractError> {
        token_integration::base_asset(&e)
    }

    /// Base asset currently held by the vault.
    pub fn total_reserves(e: Env) -> Result<i128, ContractError> {
        token_integration::reserves(&e)
    }
}
