//! Bond Registry: immutable-after-issue specifications plus a mutable
//! remaining-supply counter, keyed by dense sequential bond ids.

use soroban_sdk::{panic_with_error, Env};

use crate::errors::Error;
use crate::storage::{self, DataKey};
use crate::types::BondSpec;

/// Validate and store a new bond specification, assigning the next id.
///
/// Every field must be strictly positive at issuance; fails with
/// `InvalidParameter` otherwise.
pub fn issue(env: &Env, spec: &BondSpec) -> u64 {
    if spec.par_value <= 0
        || spec.price <= 0
        || spec.coupon_rate == 0
        || spec.maturity_period == 0
        || spec.payout_interval == 0
        || spec.supply == 0
    {
        panic_with_error!(env, Error::InvalidParameter);
    }
    let bond_id = storage::get_and_increment_bond_id(env);
    save(env, bond_id, spec);
    bond_id
}

/// Load a bond spec. Fails with `UnknownBond` for ids never issued.
pub fn get(env: &Env, bond_id: u64) -> BondSpec {
    let key = DataKey::Bond(bond_id);
    match env.storage().persistent().get(&key) {
        Some(spec) => {
            storage::bump_persistent(env, &key);
            spec
        }
        None => panic_with_error!(env, Error::UnknownBond),
    }
}

/// Overwrite the remaining supply unconditionally (zero and increases are
/// both allowed). Returns the previous value.
pub fn set_supply(env: &Env, bond_id: u64, new_supply: u64) -> u64 {
    let mut spec = get(env, bond_id);
    let old_supply = spec.supply;
    spec.supply = new_supply;
    save(env, bond_id, &spec);
    old_supply
}

/// Debit `amount` units of supply. Fails with `InsufficientSupply` when the
/// debit would underflow.
pub fn decrease_supply(env: &Env, bond_id: u64, amount: u64) {
    let mut spec = get(env, bond_id);
    spec.supply = match spec.supply.checked_sub(amount) {
        Some(remaining) => remaining,
        None => panic_with_error!(env, Error::InsufficientSupply),
    };
    save(env, bond_id, &spec);
}

fn save(env: &Env, bond_id: u64, spec: &BondSpec) {
    let key = DataKey::Bond(bond_id);
    env.storage().persistent().set(&key, spec);
    storage::bump_persistent(env, &key);
}
