#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups errors by domain for monitoring and off-chain handling.
/// @dev    Consumers should switch on this value first, then on the specific
///         `ContractError` code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup and initialization errors (codes 1-99).
    Initialization,
    /// Caller identity and capability errors (codes 100-199).
    Authorization,
    /// Principal ledger and allowance errors (codes 200-299).
    Ledger,
    /// Global interest rate policy errors (codes 300-399).
    Rate,
    /// Vault deposit/redeem errors (codes 400-499).
    Vault,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  ContractError
/// @notice Canonical error enum shared by the rebase token and vault contracts.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Ledger
///   300 - 399 : Rate
///   400 - 499 : Vault
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ContractError {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized yet.
    /// Contracts: token, vault
    NotInitialized = 1,

    /// Contract has already been initialized and cannot be re-initialized.
    /// Contracts: token, vault
    AlreadyInitialized = 2,

    // --- Authorization (100-199) ---
    /// Caller lacks the capability required for the operation
    /// (mint/burn role, or owner for rate and role administration).
    /// Contracts: token
    Unauthorized = 100,

    // --- Ledger (200-299) ---
    /// Burn or transfer amount exceeds the settled principal of the account.
    /// Contracts: token
    InsufficientBalance = 200,

    /// Spender allowance is missing, expired, or smaller than the amount.
    /// Contracts: token
    InsufficientAllowance = 201,

    /// Amount argument is negative.
    /// Contracts: token
    NegativeAmount = 202,

    /// Allowance expiration ledger is already in the past.
    /// Contracts: token
    InvalidExpiration = 203,

    // --- Rate (300-399) ---
    /// Global interest rate update attempted to raise the rate.
    /// Contracts: token
    RateCanOnlyDecrease = 300,

    // --- Vault (400-499) ---
    /// Deposit or reward amount must be strictly positive (> 0).
    /// Contracts: vault
    AmountMustBePositive = 400,

    /// Outbound base-asset payment failed; the preceding burn is rolled back.
    /// Contracts: vault
    AssetTransferFailed = 401,

    // --- Arithmetic (700-799) ---
    /// Integer overflow detected during a checked arithmetic operation.
    /// Contracts: token
    Overflow = 700,

    /// Integer underflow detected during a checked arithmetic operation.
    /// Contracts: token
    Underflow = 701,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every ContractError variant.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for ContractError {
    fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorCategory::Initialization
            }
            ContractError::Unauthorized => ErrorCategory::Authorization,

            ContractError::InsufficientBalance
            | ContractError::InsufficientAllowance
            | ContractError::NegativeAmount
            | ContractError::InvalidExpiration => ErrorCategory::Ledger,

            ContractError::RateCanOnlyDecrease => ErrorCategory::Rate,

            ContractError::AmountMustBePositive | ContractError::AssetTransferFailed => {
                ErrorCategory::Vault
            }

            ContractError::Overflow | ContractError::Underflow => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract has already been initialized",
            ContractError::Unauthorized => "Caller lacks the required capability",
            ContractError::InsufficientBalance => "Amount exceeds the settled principal",
            ContractError::InsufficientAllowance => "Allowance is missing, expired or too small",
            ContractError::NegativeAmount => "Amount must not be negative",
            ContractError::InvalidExpiration => "Allowance expiration ledger is in the past",
            ContractError::RateCanOnlyDecrease => "Global interest rate can only decrease",
            ContractError::AmountMustBePositive => "Amount must be strictly positive (> 0)",
            ContractError::AssetTransferFailed => "Base asset payment failed",
            ContractError::Overflow => "Integer overflow in checked arithmetic",
            ContractError::Underflow => "Integer underflow in checked arithmetic",
        }
    }
}
