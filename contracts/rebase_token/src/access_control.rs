//! Owner capability and the mint/burn role set.
//!
//! A single explicit check at the top of each privileged entry point: the
//! caller authenticates, then its address is looked up.

use crate::storage_types::{DataKey, BUMP_TARGET, BUMP_THRESHOLD};
use rebase_errors::ContractError;
use soroban_sdk::{Address, Env};

pub fn read_owner(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(ContractError::NotInitialized)
}

pub fn write_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&DataKey::Owner, owner);
}

/// Authenticate `caller` and require it to be the owner.
pub fn require_owner(e: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    if read_owner(e)? != *caller {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

pub fn has_mint_and_burn_role(e: &Env, account: &Address) -> bool {
    let key = DataKey::MintBurnRole(account.clone());
    let granted = e.storage().persistent().get(&key).unwrap_or(false);
    if granted {
        e.storage()
            .persistent()
            .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
    }
    granted
}

/// Authenticate `caller` and require the mint/burn role.
pub fn require_mint_and_burn_role(e: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    if !has_mint_and_burn_role(e, caller) {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

pub fn set_mint_and_burn_role(e: &Env, account: &Address, enabled: bool) {
    let key = DataKey::MintBurnRole(account.clone());
    if enabled {
        e.storage().persistent().set(&key, &true);
        e.storage()
            .persistent()
            .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
    } else {
        e.storage().persistent().remove(&key);
    }
}
