use soroban_sdk::{Address, Env, Symbol};

/// Emitted when base asset is deposited and rebase tokens are minted.
///
/// # Topics
/// * `Symbol` - "deposit"
/// * `Address` - The depositor
///
/// # Data
/// * `i128` - The amount deposited (and minted)
pub fn emit_deposit(e: &Env, user: &Address, amount: i128) {
    let topics = (Symbol::new(e, "deposit"), user.clone());
    e.events().publish(topics, amount);
}

/// Emitted when rebase tokens are burned and base asset is paid out.
///
/// # Topics
/// * `Symbol` - "redeem"
/// * `Address` - The redeemer
///
/// # Data
/// * `i128` - The amount redeemed (after resolving the MAX sentinel)
pub fn emit_redeem(e: &Env, user: &Address, amount: i128) {
    let topics = (Symbol::new(e, "redeem"), user.clone());
    e.events().publish(topics, amount);
}

/// Emitted when base asset is added to the reserve that pays accrued interest.
pub fn emit_rewards_funded(e: &Env, funder: &Address, amount: i128) {
    let topics = (Symbol::new(e, "rewards_funded"), funder.clone());
    e.events().publish(topics, amount);
}
