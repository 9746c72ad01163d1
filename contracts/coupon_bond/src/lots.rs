//! Purchase Ledger: append-only lot lists with stable positional indices.
//!
//! Each (holder, bond) pair owns an ordered sequence of purchase lots. Lots
//! are never removed or compacted; an index handed out at purchase time
//! stays valid for the life of the contract.

use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::errors::Error;
use crate::storage::{self, DataKey};
use crate::types::PurchaseLot;

/// Every lot of `holder` in `bond_id`, in purchase order.
pub fn all(env: &Env, holder: &Address, bond_id: u64) -> Vec<PurchaseLot> {
    let key = DataKey::Lots(holder.clone(), bond_id);
    storage::bump_persistent(env, &key);
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| Vec::new(env))
}

/// Number of lots recorded for `holder` in `bond_id`.
pub fn count(env: &Env, holder: &Address, bond_id: u64) -> u32 {
    all(env, holder, bond_id).len()
}

/// Append a new lot with its settlement clock at `now`; returns the lot's
/// stable index.
pub fn record_purchase(
    env: &Env,
    holder: &Address,
    bond_id: u64,
    amount: u64,
    now: u64,
) -> u32 {
    let mut lots = all(env, holder, bond_id);
    let index = lots.len();
    lots.push_back(PurchaseLot {
        amount,
        last_settlement_time: now,
    });
    save(env, holder, bond_id, &lots);
    index
}

/// Fetch one lot. Fails with `UnknownLot` when `index` is out of range.
pub fn get_lot(env: &Env, holder: &Address, bond_id: u64, index: u32) -> PurchaseLot {
    all(env, holder, bond_id)
        .get(index)
        .unwrap_or_else(|| panic_with_error!(env, Error::UnknownLot))
}

/// Debit a lot. Fails with `InsufficientLotBalance` when `amount` exceeds
/// the lot's remaining balance. A lot drained to zero stays in place, inert.
pub fn reduce_amount(env: &Env, holder: &Address, bond_id: u64, index: u32, amount: u64) {
    let mut lots = all(env, holder, bond_id);
    let mut lot = lots
        .get(index)
        .unwrap_or_else(|| panic_with_error!(env, Error::UnknownLot));
    lot.amount = match lot.amount.checked_sub(amount) {
        Some(remaining) => remaining,
        None => panic_with_error!(env, Error::InsufficientLotBalance),
    };
    lots.set(index, lot);
    save(env, holder, bond_id, &lots);
}

/// Overwrite a lot's settlement clock. The engine only ever advances it.
pub fn set_settlement(env: &Env, holder: &Address, bond_id: u64, index: u32, timestamp: u64) {
    let mut lots = all(env, holder, bond_id);
    let mut lot = lots
        .get(index)
        .unwrap_or_else(|| panic_with_error!(env, Error::UnknownLot));
    lot.last_settlement_time = timestamp;
    lots.set(index, lot);
    save(env, holder, bond_id, &lots);
}

fn save(env: &Env, holder: &Address, bond_id: u64, lots: &Vec<PurchaseLot>) {
    let key = DataKey::Lots(holder.clone(), bond_id);
    env.storage().persistent().set(&key, lots);
    storage::bump_persistent(env, &key);
}
