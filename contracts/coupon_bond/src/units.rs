//! Per-bond fungible unit balances.
//!
//! Units come into existence on purchase (mint) and leave on redemption
//! (burn); the public `transfer` entry point rejects every holder-to-holder
//! move, so mint and burn are the only mutations.

use soroban_sdk::{Address, Env};

use crate::math;
use crate::storage::{self, DataKey};

/// Units of `bond_id` held by `holder`.
pub fn balance(env: &Env, holder: &Address, bond_id: u64) -> u64 {
    let key = DataKey::UnitBalance(holder.clone(), bond_id);
    storage::bump_persistent(env, &key);
    env.storage().persistent().get(&key).unwrap_or(0)
}

/// Credit `amount` units of `bond_id` to `holder`.
pub fn mint(env: &Env, holder: &Address, bond_id: u64, amount: u64) {
    let key = DataKey::UnitBalance(holder.clone(), bond_id);
    let current = balance(env, holder, bond_id);
    let next = math::add_u64(current, amount, "unit balance overflow");
    env.storage().persistent().set(&key, &next);
    storage::bump_persistent(env, &key);
}

/// Debit `amount` units of `bond_id` from `holder`.
///
/// The engine debits the backing lot first, so the balance always covers
/// the burn; the subtraction stays checked regardless.
pub fn burn(env: &Env, holder: &Address, bond_id: u64, amount: u64) {
    let key = DataKey::UnitBalance(holder.clone(), bond_id);
    let current = balance(env, holder, bond_id);
    let next = math::sub_u64(current, amount, "unit burn exceeds balance");
    env.storage().persistent().set(&key, &next);
    storage::bump_persistent(env, &key);
}
