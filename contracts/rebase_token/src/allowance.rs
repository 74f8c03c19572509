use crate::storage_types::{AllowanceDataKey, AllowanceValue, DataKey};
use rebase_errors::ContractError;
use soroban_sdk::{Address, Env};

/// Current spendable allowance; expired entries read as zero.
pub fn read_allowance(e: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = DataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    match e.storage().persistent().get::<_, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger >= e.ledger().sequence() => allowance,
        Some(allowance) => AllowanceValue {
            amount: 0,
            expiration_ledger: allowance.expiration_ledger,
        },
        None => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

pub fn write_allowance(
    e: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), ContractError> {
    if amount < 0 {
        return Err(ContractError::NegativeAmount);
    }
    let now = e.ledger().sequence();
    if amount > 0 && expiration_ledger < now {
        return Err(ContractError::InvalidExpiration);
    }

    let key = DataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    let allowance = AllowanceValue {
        amount,
        expiration_ledger,
    };
    e.storage().persistent().set(&key, &allowance);

    if amount > 0 {
        let live_for = expiration_ledger.saturating_sub(now);
        e.storage().persistent().extend_ttl(&key, live_for, live_for);
    }
    Ok(())
}

/// Deduct `amount` from the `from -> spender` allowance.
pub fn spend_allowance(
    e: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    let allowance = read_allowance(e, from, spender);
    if allowance.amount < amount {
        return Err(ContractError::InsufficientAllowance);
    }
    if amount > 0 {
        write_allowance(
            e,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        )?;
    }
    Ok(())
}
