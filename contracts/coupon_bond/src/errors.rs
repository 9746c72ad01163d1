use soroban_sdk::contracterror;

/// Canonical error enum for the coupon bond contract.
///
/// Codes are wire-stable. Never renumber a variant after deployment;
/// append new variants at the end of their category block only.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Bond registry
///   300 - 399 : Purchase ledger
///   400 - 499 : Unit ledger policy
///   500 - 599 : Funds
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum Error {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized yet.
    NotInitialized = 1,

    /// Contract has already been initialized and cannot be re-initialized.
    AlreadyInitialized = 2,

    // --- Authorization (100-199) ---
    /// Caller does not hold the capability required for this operation.
    Unauthorized = 100,

    // --- Bond registry (200-299) ---
    /// An argument is zero or otherwise invalid.
    InvalidParameter = 200,

    /// The referenced bond id was never issued.
    UnknownBond = 201,

    /// The purchase amount exceeds the bond's remaining supply.
    InsufficientSupply = 202,

    // --- Purchase ledger (300-399) ---
    /// The referenced lot index is out of range for this holder and bond.
    UnknownLot = 300,

    /// Paid value does not equal `price * amount` exactly.
    IncorrectPayment = 301,

    /// The debit amount exceeds the lot's remaining balance.
    InsufficientLotBalance = 302,

    /// No whole payout interval has elapsed; there is nothing to collect.
    NoInterestDue = 303,

    // --- Unit ledger policy (400-499) ---
    /// Bond units cannot be transferred between holders.
    NonTransferable = 400,

    // --- Funds (500-599) ---
    /// The withdrawal would leave the balance below the minimum reserve.
    ReserveViolation = 500,

    /// The currency transfer did not succeed.
    TransferFailed = 501,
}
