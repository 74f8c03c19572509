//! Base-asset integration helpers for the rebase vault.
//! Centralizes the asset address lookup and every transfer in or out of the vault.

use crate::DataKey;
use rebase_errors::ContractError;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, Env};

fn token_client(e: &Env) -> Result<TokenClient<'_>, ContractError> {
    let asset = base_asset(e)?;
    Ok(TokenClient::new(e, &asset))
}

/// @notice Returns the configured base-asset address.
pub fn base_asset(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::BaseAsset)
        .ok_or(ContractError::NotInitialized)
}

/// @notice Moves `amount` of base asset from `from` into the vault.
/// @dev `from` must have authorized the enclosing invocation.
pub fn transfer_into_vault(e: &Env, from: &Address, amount: i128) -> Result<(), ContractError> {
    let vault = e.current_contract_address();
    token_client(e)?.transfer(from, &vault, &amount);
    Ok(())
}

/// @notice Pays `amount` of base asset from the vault to `recipient`.
/// @dev A failed payment surfaces as `AssetTransferFailed` so the caller's
///      invocation aborts and every earlier write (the burn) is rolled back.
pub fn transfer_from_vault(e: &Env, recipient: &Address, amount: i128) -> Result<(), ContractError> {
    let vault = e.current_contract_address();
    match token_client(e)?.try_transfer(&vault, recipient, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::AssetTransferFailed),
    }
}

/// @notice Base asset currently held by the vault.
pub fn reserves(e: &Env) -> Result<i128, ContractError> {
    let vault = e.current_contract_address();
    Ok(token_client(e)?.balance(&vault))
}
