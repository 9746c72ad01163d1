//! Coupon Bond Contract
//!
//! An issuer defines interest-bearing bond types with a fixed par value,
//! unit price, coupon rate, and payout interval; buyers purchase units
//! against escrowed funds. Interest accrues per purchase lot in whole
//! payout intervals and is claimable at any time; holders may redeem units
//! at any point for principal plus unclaimed interest.
//!
//! ## Key design decisions
//!
//! - **Per-lot settlement clocks**: every purchase is an independent lot
//!   with its own interest clock; lots are append-only so indices stay
//!   stable for the life of the contract.
//! - **Whole-period accrual**: interest settles in whole payout intervals
//!   only; the remainder stays on the clock toward the next period.
//! - **Checks-Effects-Interactions**: storage is updated before outbound
//!   token transfers; a failed payout aborts the invocation, so state and
//!   payment always commit together.
//! - **Reserve floor**: administrative withdrawal must leave at least half
//!   of the tracked sales proceeds in the contract. Redemption and
//!   interest payouts are deliberately not gated by the floor; holder
//!   obligations outrank the reserve rule.
//! - **Non-transferable units**: bond units move only through purchase
//!   (mint) and redemption (burn); holder-to-holder transfers are
//!   rejected wholesale.

#![no_std]

mod access;
mod accrual;
mod errors;
mod events;
mod lots;
mod math;
mod payment;
mod registry;
mod storage;
mod types;
mod units;

pub use access::Role;
pub use errors::Error;
pub use types::{BondSpec, PurchaseLot};

use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, Vec};







#[cfg(test)]
mod test_withdraw;


#[cfg(test)]
mod test_access;


#[contract]
pub struct CouponBond;

#[contractimpl]
impl CouponBond {
    // ── Setup ──────────────────────────────────────────────────────────────

    /// One-time initialization. Stores the payment token and treasury and
    /// grants the two capabilities. Fails with `AlreadyInitialized` on any
    /// later call.
    pub fn initialize(e: Env, admin: Address, issuer: Address, token: Address, treasury: Address) {
        admin.require_auth();
        if storage::is_initialized(&e) {
            panic_with_error!(&e, Error::AlreadyInitialized);
        }
        storage::set_token(&e, &token);
        storage::set_treasury(&e, &treasury);
        access::grant(&e, &admin, Role::Admin);
        access::grant(&e, &issuer, Role::Issuer);
    }

    // ── Role management ────────────────────────────────────────────────────

    /// Add `target` to the member set of `role`. Admin capability required.
    pub fn grant_role(e: Env, caller: Address, target: Address, role: Role) {
        caller.require_auth();
        access::require_role(&e, Role::Admin, &caller);
        access::grant(&e, &target, role);
    }

    /// Remove `target` from the member set of `role`. Admin capability
    /// required.
    pub fn revoke_role(e: Env, caller: Address, target: Address, role: Role) {
        caller.require_auth();
        access::require_role(&e, Role::Admin, &caller);
        access::revoke(&e, &target, role);
    }

    /// True if `target` holds `role`.
    pub fn has_role(e: Env, target: Address, role: Role) -> bool {
        access::has(&e, &target, role)
    }

    // ── Issuance ───────────────────────────────────────────────────────────

    /// Issue a new bond type and return its id. Issuer capability required.
    ///
    /// Every field of `spec` must be strictly positive; fails with
    /// `InvalidParameter` otherwise. Ids are dense and sequential in
    /// issuance order.
    pub fn issue_bond(e: Env, issuer: Address, spec: BondSpec) -> u64 {
        issuer.require_auth();
        access::require_role(&e, Role::Issuer, &issuer);
        let bond_id = registry::issue(&e, &spec);
        events::emit_bond_issued(&e, bond_id, &issuer);
        bond_id
    }

    /// Overwrite a bond's remaining supply. Issuer capability required.
    ///
    /// Any non-negative value is accepted, including zero and values above
    /// the previous supply.
    pub fn set_supply(e: Env, issuer: Address, bond_id: u64, new_supply: u64) {
        issuer.require_auth();
        access::require_role(&e, Role::Issuer, &issuer);
        let old_supply = registry::set_supply(&e, bond_id, new_supply);
        events::emit_supply_updated(&e, bond_id, old_supply, new_supply, &issuer);
    }

    // ── Purchase ───────────────────────────────────────────────────────────

    /// Purchase `amount` units of `bond_id` for exactly `paid_value`.
    /// Returns the index of the recorded lot.
    ///
    /// Requirements:
    /// - `amount` > 0
    /// - `paid_value` == `price * amount` exactly (no tolerance either way)
    /// - `amount` does not exceed the remaining supply
    ///
    /// There is no cap on repeated purchases; each purchase is recorded as
    /// an independent lot with its own settlement clock.
    pub fn purchase_bonds(
        e: Env,
        buyer: Address,
        bond_id: u64,
        amount: u64,
        paid_value: i128,
    ) -> u32 {
        buyer.require_auth();
        if amount == 0 {
            panic_with_error!(&e, Error::InvalidParameter);
        }
        let spec = registry::get(&e, bond_id);
        let expected = math::mul_i128(spec.price, amount as i128, "purchase cost overflow");
        if paid_value != expected {
            panic_with_error!(&e, Error::IncorrectPayment);
        }

        // Pull the payment in first; the checks above fixed its exact size.
        payment::pull(&e, &buyer, paid_value);

        registry::decrease_supply(&e, bond_id, amount);
        storage::set_total_funds(
            &e,
            math::add_i128(storage::get_total_funds(&e), paid_value, "total funds overflow"),
        );

        let now = e.ledger().timestamp();
        let lot_index = lots::record_purchase(&e, &buyer, bond_id, amount, now);
        units::mint(&e, &buyer, bond_id, amount);

        events::emit_bonds_purchased(&e, bond_id, &buyer, amount, lot_index, now);
        lot_index
    }

    // ── Interest ───────────────────────────────────────────────────────────

    /// Collect all settled interest on one lot. Returns the amount paid.
    ///
    /// Fails with `NoInterestDue` when less than one whole payout interval
    /// has elapsed since the lot's settlement clock.
    pub fn collect_interest(e: Env, caller: Address, bond_id: u64, lot_index: u32) -> i128 {
        caller.require_auth();
        let spec = registry::get(&e, bond_id);
        let lot = lots::get_lot(&e, &caller, bond_id, lot_index);
        let accrued = accrual::compute_accrual(&spec, &lot, e.ledger().timestamp());
        if accrued.interest_due == 0 {
            panic_with_error!(&e, Error::NoInterestDue);
        }

        // Clock first, payout second: a failed payout aborts the invocation
        // and the clock update rolls back with it.
        lots::set_settlement(&e, &caller, bond_id, lot_index, accrued.new_settlement_time);
        payment::payout(&e, &caller, accrued.interest_due);

        events::emit_interest_collected(
            &e,
            bond_id,
            &caller,
            lot_index,
            accrued.interest_due,
            accrued.new_settlement_time,
        );
        accrued.interest_due
    }

    // ── Redemption ─────────────────────────────────────────────────────────

    /// Redeem `amount` units from one lot for par value plus any unclaimed
    /// interest. Returns the total payout.
    ///
    /// Redemption is permitted at any time; `maturity_period` is
    /// informational and never checked. The lot's interest is settled with
    /// the same computation as `collect_interest` before the debit, and
    /// only the principal component reduces the tracked sales proceeds.
    pub fn redeem_bond(e: Env, caller: Address, bond_id: u64, lot_index: u32, amount: u64) -> i128 {
        caller.require_auth();
        if amount == 0 {
            panic_with_error!(&e, Error::InvalidParameter);
        }
        let spec = registry::get(&e, bond_id);
        let lot = lots::get_lot(&e, &caller, bond_id, lot_index);
        if amount > lot.amount {
            panic_with_error!(&e, Error::InsufficientLotBalance);
        }
        let accrued = accrual::compute_accrual(&spec, &lot, e.ledger().timestamp());

        let principal = math::mul_i128(spec.par_value, amount as i128, "principal overflow");
        let payout_total = math::add_i128(principal, accrued.interest_due, "payout overflow");

        lots::set_settlement(&e, &caller, bond_id, lot_index, accrued.new_settlement_time);
        lots::reduce_amount(&e, &caller, bond_id, lot_index, amount);
        // Principal only: interest paid out never reduces the accumulator.
        storage::set_total_funds(
            &e,
            math::sub_i128(storage::get_total_funds(&e), principal, "total funds underflow"),
        );
        units::burn(&e, &caller, bond_id, amount);

        payment::payout(&e, &caller, payout_total);

        events::emit_bond_redeemed(&e, bond_id, &caller, lot_index, amount, payout_total);
        payout_total
    }

    // ── Unit ledger ────────────────────────────────────────────────────────

    /// Bond units are not transferable between holders. Always fails with
    /// `NonTransferable`.
    pub fn transfer(e: Env, _from: Address, _to: Address, _bond_id: u64, _amount: u64) {
        panic_with_error!(&e, Error::NonTransferable);
    }

    /// Units of `bond_id` held by `holder`.
    pub fn balance(e: Env, holder: Address, bond_id: u64) -> u64 {
        units::balance(&e, &holder, bond_id)
    }

    // ── Treasury & reserve ─────────────────────────────────────────────────

    /// Update the treasury address. Admin capability required.
    pub fn set_treasury(e: Env, admin: Address, treasury: Address) {
        admin.require_auth();
        access::require_role(&e, Role::Admin, &admin);
        storage::set_treasury(&e, &treasury);
        events::emit_treasury_updated(&e, &treasury);
    }

    /// Withdraw `amount` of collected funds to the treasury. Admin
    /// capability required.
    ///
    /// Fails with `ReserveViolation` when the withdrawal would leave the
    /// contract balance below half of the tracked sales proceeds. The floor
    /// gates administrative withdrawal only; interest and redemption
    /// payouts may draw the balance below it.
    pub fn withdraw_funds(e: Env, admin: Address, amount: i128) {
        admin.require_auth();
        access::require_role(&e, Role::Admin, &admin);
        if amount <= 0 {
            panic_with_error!(&e, Error::InvalidParameter);
        }
        let remaining = math::sub_i128(
            payment::contract_balance(&e),
            amount,
            "withdrawal underflow",
        );
        if remaining < storage::get_total_funds(&e) / 2 {
            panic_with_error!(&e, Error::ReserveViolation);
        }
        let treasury = storage::get_treasury(&e);
        payment::payout(&e, &treasury, amount);
        events::emit_funds_withdrawn(&e, &treasury, amount);
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// The spec of `bond_id`. Fails with `UnknownBond` if never issued.
    pub fn get_bond(e: Env, bond_id: u64) -> BondSpec {
        registry::get(&e, bond_id)
    }

    /// Number of bond types issued so far.
    pub fn get_total_bonds_issued(e: Env) -> u64 {
        storage::bond_count(&e)
    }

    /// One purchase lot. Fails with `UnknownLot` if out of range.
    pub fn get_lot(e: Env, holder: Address, bond_id: u64, lot_index: u32) -> PurchaseLot {
        lots::get_lot(&e, &holder, bond_id, lot_index)
    }

    /// Number of lots recorded for `holder` in `bond_id`.
    pub fn get_lot_count(e: Env, holder: Address, bond_id: u64) -> u32 {
        lots::count(&e, &holder, bond_id)
    }

    /// Interest currently claimable on one lot. Read-only; uses the same
    /// accrual computation as `collect_interest` and `redeem_bond`.
    pub fn get_accrued_interest(e: Env, holder: Address, bond_id: u64, lot_index: u32) -> i128 {
        let spec = registry::get(&e, bond_id);
        let lot = lots::get_lot(&e, &holder, bond_id, lot_index);
        accrual::compute_accrual(&spec, &lot, e.ledger().timestamp()).interest_due
    }

    /// Claimable interest for every lot of `holder` in `bond_id`, by lot
    /// index.
    pub fn get_accrued_interest_all(e: Env, holder: Address, bond_id: u64) -> Vec<i128> {
        let spec = registry::get(&e, bond_id);
        let now = e.ledger().timestamp();
        let mut out = Vec::new(&e);
        for lot in lots::all(&e, &holder, bond_id).iter() {
            out.push_back(accrual::compute_accrual(&spec, &lot, now).interest_due);
        }
        out
    }

    /// Minimum balance that must remain after an administrative withdrawal:
    /// half of the tracked sales proceeds.
    pub fn get_current_reserve(e: Env) -> i128 {
        storage::get_total_funds(&e) / 2
    }

    /// Tracked sales proceeds net of redeemed principal.
    pub fn get_total_funds(e: Env) -> i128 {
        storage::get_total_funds(&e)
    }

    /// The configured treasury address.
    pub fn get_treasury(e: Env) -> Address {
        storage::get_treasury(&e)
    }
}
