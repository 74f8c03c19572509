use soroban_sdk::{Address, Env, Symbol};

/// Emitted when tokens are minted to an account.
///
/// # Topics
/// * `Symbol` - "mint"
/// * `Address` - The receiving account
///
/// # Data
/// * `i128` - The amount minted
/// * `u64` - The rate passed by the minter
pub fn emit_mint(e: &Env, to: &Address, amount: i128, rate: u64) {
    let topics = (Symbol::new(e, "mint"), to.clone());
    e.events().publish(topics, (amount, rate));
}

/// Emitted when tokens are burned from an account.
///
/// # Topics
/// * `Symbol` - "burn"
/// * `Address` - The account burned from
///
/// # Data
/// * `i128` - The amount burned
pub fn emit_burn(e: &Env, from: &Address, amount: i128) {
    let topics = (Symbol::new(e, "burn"), from.clone());
    e.events().publish(topics, amount);
}

/// Emitted on `transfer` and `transfer_from`.
///
/// # Topics
/// * `Symbol` - "transfer"
/// * `Address` - Sender
/// * `Address` - Recipient
///
/// # Data
/// * `i128` - The amount moved
pub fn emit_transfer(e: &Env, from: &Address, to: &Address, amount: i128) {
    let topics = (Symbol::new(e, "transfer"), from.clone(), to.clone());
    e.events().publish(topics, amount);
}

/// Emitted when settlement materializes accrued interest.
///
/// # Topics
/// * `Symbol` - "interest_accrued"
/// * `Address` - The settled account
///
/// # Data
/// * `i128` - Interest folded into principal
pub fn emit_interest_accrued(e: &Env, user: &Address, delta: i128) {
    let topics = (Symbol::new(e, "interest_accrued"), user.clone());
    e.events().publish(topics, delta);
}

/// Emitted when the owner lowers the global rate.
///
/// # Topics
/// * `Symbol` - "interest_rate_set"
///
/// # Data
/// * `u64` - The new global rate
pub fn emit_interest_rate_set(e: &Env, new_rate: u64) {
    e.events()
        .publish((Symbol::new(e, "interest_rate_set"),), new_rate);
}

pub fn emit_approve(e: &Env, from: &Address, spender: &Address, amount: i128, expiration: u32) {
    let topics = (Symbol::new(e, "approve"), from.clone(), spender.clone());
    e.events().publish(topics, (amount, expiration));
}

pub fn emit_role_granted(e: &Env, account: &Address) {
    e.events()
        .publish((Symbol::new(e, "role_granted"), account.clone()), true);
}

pub fn emit_role_revoked(e: &Env, account: &Address) {
    e.events()
        .publish((Symbol::new(e, "role_revoked"), account.clone()), false);
}

pub fn emit_ownership_transferred(e: &Env, previous: &Address, new_owner: &Address) {
    e.events().publish(
        (Symbol::new(e, "ownership_transferred"),),
        (previous.clone(), new_owner.clone()),
    );
}
