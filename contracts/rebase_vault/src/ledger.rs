//! Cross-contract interface to the rebase token ledger.
//!
//! Only the entry points the vault calls are declared here.

use rebase_errors::ContractError;
use soroban_sdk::{contractclient, Address, Env};

#[contractclient(name = "LedgerClient")]
pub trait LedgerInterface {
    fn mint(
        e: Env,
        caller: Address,
        to: Address,
        amount: i128,
        rate: u64,
    ) -> Result<(), ContractError>;

    fn burn(e: Env, caller: Address, from: Address, amount: i128) -> Result<(), ContractError>;

    fn balance(e: Env, id: Address) -> Result<i128, ContractError>;

    fn get_interest_rate(e: Env) -> Result<u64, ContractError>;
}
