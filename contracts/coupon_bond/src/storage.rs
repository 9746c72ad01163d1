//! Typed helpers over the two Soroban storage tiers.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key          | Type      | Description                               |
//! |--------------|-----------|-------------------------------------------|
//! | `Token`      | `Address` | Payment token address                     |
//! | `Treasury`   | `Address` | Recipient of administrative withdrawals   |
//! | `BondCount`  | `u64`     | Auto-increment bond id counter            |
//! | `TotalFunds` | `i128`    | Sales proceeds net of redeemed principal  |
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                        | Type               | Description          |
//! |----------------------------|--------------------|----------------------|
//! | `Bond(id)`                 | `BondSpec`         | Issued bond type     |
//! | `Lots(holder, id)`         | `Vec<PurchaseLot>` | Purchase lot list    |
//! | `UnitBalance(holder, id)`  | `u64`              | Bond unit balance    |
//!
//! Instance TTL is bumped by 7 days when below 1 day remaining; persistent
//! entries by 30 days when below 7 days remaining.

use soroban_sdk::{contracttype, panic_with_error, Address, Env};

use crate::errors::Error;
use crate::math;

// ── TTL constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage keys ─────────────────────────────────────────────────────

/// All contract storage keys except role membership (see `access`).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Payment token address (Instance).
    Token,
    /// Treasury receiving administrative withdrawals (Instance).
    Treasury,
    /// Auto-increment bond id counter, doubling as the issued-type count
    /// (Instance).
    BondCount,
    /// Cumulative sales proceeds net of redeemed principal (Instance).
    TotalFunds,
    /// Issued bond specification keyed by id (Persistent).
    Bond(u64),
    /// Ordered purchase lots keyed by holder and bond id (Persistent).
    Lots(Address, u64),
    /// Bond unit balance keyed by holder and bond id (Persistent).
    UnitBalance(Address, u64),
}

// ── TTL helpers ──────────────────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Extend a persistent entry's TTL if the entry exists.
pub fn bump_persistent(env: &Env, key: &DataKey) {
    if env.storage().persistent().has(key) {
        env.storage().persistent().extend_ttl(
            key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }
}

// ── Instance scalars ─────────────────────────────────────────────────

/// True once `initialize` has stored the payment token.
pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Token)
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
    bump_instance(env);
}

/// The configured payment token. Fails with `NotInitialized` before setup.
pub fn get_token(env: &Env) -> Address {
    bump_instance(env);
    match env.storage().instance().get(&DataKey::Token) {
        Some(token) => token,
        None => panic_with_error!(env, Error::NotInitialized),
    }
}

pub fn set_treasury(env: &Env, treasury: &Address) {
    env.storage().instance().set(&DataKey::Treasury, treasury);
    bump_instance(env);
}

/// The configured treasury. Fails with `NotInitialized` before setup.
pub fn get_treasury(env: &Env) -> Address {
    bump_instance(env);
    match env.storage().instance().get(&DataKey::Treasury) {
        Some(treasury) => treasury,
        None => panic_with_error!(env, Error::NotInitialized),
    }
}

/// Atomically reads, increments, and stores the bond id counter.
/// Returns the id to use for the bond being issued (pre-increment value).
pub fn get_and_increment_bond_id(env: &Env) -> u64 {
    bump_instance(env);
    let current: u64 = env
        .storage()
        .instance()
        .get(&DataKey::BondCount)
        .unwrap_or(0);
    let next = math::add_u64(current, 1, "bond id counter overflow");
    env.storage().instance().set(&DataKey::BondCount, &next);
    current
}

/// Number of bond types issued so far.
pub fn bond_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::BondCount)
        .unwrap_or(0)
}

/// Tracked sales proceeds net of redeemed principal. Signed: redemption of
/// principal in excess of tracked sales drives it negative.
pub fn get_total_funds(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalFunds)
        .unwrap_or(0)
}

pub fn set_total_funds(env: &Env, value: i128) {
    env.storage().instance().set(&DataKey::TotalFunds, &value);
    bump_instance(env);
}
