use soroban_sdk::{contracttype, Address, String};

// ─── Fixed-point and sentinel constants ───────────────────────────────────────

/// Fixed-point scale for interest rates and the accrual factor (1e18 = 1.0).
pub const SCALE: i128 = 1_000_000_000_000_000_000;

/// Sentinel amount meaning "the account's entire current balance" for burn,
/// transfer and redeem.
pub const MAX_AMOUNT: i128 = i128::MAX;

/// Default per-second interest rate handed to new depositors (5e10 / 1e18).
pub const DEFAULT_INTEREST_RATE: u64 = 50_000_000_000;

// ─── TTL constants ────────────────────────────────────────────────────────────

/// Minimum ledger TTL before a bump is requested (~1 day at 5 s/ledger).
pub const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
pub const BUMP_TARGET: u32 = 518_400;

// ─── User state ───────────────────────────────────────────────────────────────

/// Per-address accrual record.
///
/// `principal` excludes interest accrued since `last_settled`; the dynamic
/// balance is derived from all three fields on every read.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserRecord {
    /// Tokens materialized to date (mints, settled interest, net transfers).
    pub principal: i128,
    /// Rate locked at the last zero -> nonzero transition, scaled by `SCALE`.
    pub locked_rate: u64,
    /// Ledger timestamp of the last settlement.
    pub last_settled: u64,
}

impl UserRecord {
    /// Record for an address that has never interacted with the ledger.
    pub fn zeroed() -> Self {
        UserRecord {
            principal: 0,
            locked_rate: 0,
            last_settled: 0,
        }
    }
}

// ─── Token metadata ───────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

// ─── Allowances ───────────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub struct AllowanceDataKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct AllowanceValue {
    pub amount: i128,
    /// Last ledger sequence at which the allowance is still spendable.
    pub expiration_ledger: u32,
}

// ─── Storage keys ─────────────────────────────────────────────────────────────

/// Keys for each logical piece of contract state.
///
/// * `Owner`, `GlobalRate`, `TotalPrincipal`, `Metadata` live in `instance()`.
/// * `User`, `MintBurnRole`, `Allowance` live in `persistent()` and are bumped
///   independently.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Owner capability: rate updates and role administration.
    Owner,
    /// Rate assigned to new depositors. Never increases.
    GlobalRate,
    /// Sum of every account's principal.
    TotalPrincipal,
    /// Name, symbol and decimals.
    Metadata,
    /// Per-address accrual record.
    User(Address),
    /// Mint/burn capability flag per address.
    MintBurnRole(Address),
    /// Spending allowance `from -> spender`.
    Allowance(AllowanceDataKey),
}
