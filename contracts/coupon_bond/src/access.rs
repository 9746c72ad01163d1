//! Two-capability access control.
//!
//! Exactly two named capabilities exist: `Issuer` (bond issuance and supply
//! management) and `Admin` (treasury and withdrawal). Membership is a flat
//! per-address set with no hierarchy; an address may hold both.

use soroban_sdk::{contracttype, panic_with_error, Address, Env};

use crate::errors::Error;
use crate::storage;

/// A named capability.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    /// May issue bonds and manage remaining supply.
    Issuer,
    /// May update the treasury and withdraw non-reserved funds.
    Admin,
}

/// Role membership storage key, kept separate from the main `DataKey`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum RoleKey {
    Member(Role, Address),
}

/// Add `target` to the member set of `role`.
pub fn grant(env: &Env, target: &Address, role: Role) {
    env.storage()
        .instance()
        .set(&RoleKey::Member(role, target.clone()), &true);
    storage::bump_instance(env);
}

/// Remove `target` from the member set of `role`.
pub fn revoke(env: &Env, target: &Address, role: Role) {
    env.storage()
        .instance()
        .remove(&RoleKey::Member(role, target.clone()));
}

/// True if `address` holds `role`.
pub fn has(env: &Env, address: &Address, role: Role) -> bool {
    env.storage()
        .instance()
        .get(&RoleKey::Member(role, address.clone()))
        .unwrap_or(false)
}

/// Fails with `Unauthorized` unless `caller` holds `role`.
///
/// Identity is proven separately via `require_auth` at the entry point;
/// this only checks set membership.
pub fn require_role(env: &Env, role: Role, caller: &Address) {
    if !has(env, caller, role) {
        panic_with_error!(env, Error::Unauthorized);
    }
}
