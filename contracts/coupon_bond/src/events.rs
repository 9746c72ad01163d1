use soroban_sdk::{Address, Env, Symbol};

/// Emitted when a new bond type is issued.
///
/// # Topics
/// * `Symbol` - "bond_issued"
/// * `u64` - The new bond id
///
/// # Data
/// * `Address` - The issuer
pub fn emit_bond_issued(e: &Env, bond_id: u64, issuer: &Address) {
    let topics = (Symbol::new(e, "bond_issued"), bond_id);
    e.events().publish(topics, issuer.clone());
}

/// Emitted when the issuer overwrites a bond's remaining supply.
///
/// # Topics
/// * `Symbol` - "supply_updated"
/// * `u64` - The bond id
///
/// # Data
/// * `u64` - The previous supply
/// * `u64` - The new supply
/// * `Address` - The caller
pub fn emit_supply_updated(
    e: &Env,
    bond_id: u64,
    old_supply: u64,
    new_supply: u64,
    caller: &Address,
) {
    let topics = (Symbol::new(e, "supply_updated"), bond_id);
    let data = (old_supply, new_supply, caller.clone());
    e.events().publish(topics, data);
}

/// Emitted when a buyer purchases bond units.
///
/// # Topics
/// * `Symbol` - "bonds_purchased"
/// * `Address` - The buyer
///
/// # Data
/// * `u64` - The bond id
/// * `u64` - Units purchased
/// * `u32` - Index of the recorded lot
/// * `u64` - Purchase timestamp (the lot's initial settlement clock)
pub fn emit_bonds_purchased(
    e: &Env,
    bond_id: u64,
    buyer: &Address,
    amount: u64,
    lot_index: u32,
    timestamp: u64,
) {
    let topics = (Symbol::new(e, "bonds_purchased"), buyer.clone());
    let data = (bond_id, amount, lot_index, timestamp);
    e.events().publish(topics, data);
}

/// Emitted when a holder collects settled interest on one lot.
///
/// # Topics
/// * `Symbol` - "interest_collected"
/// * `Address` - The holder
///
/// # Data
/// * `u64` - The bond id
/// * `u32` - The lot index
/// * `i128` - Interest paid out
/// * `u64` - The lot's advanced settlement clock
pub fn emit_interest_collected(
    e: &Env,
    bond_id: u64,
    holder: &Address,
    lot_index: u32,
    interest: i128,
    settled_to: u64,
) {
    let topics = (Symbol::new(e, "interest_collected"), holder.clone());
    let data = (bond_id, lot_index, interest, settled_to);
    e.events().publish(topics, data);
}

/// Emitted when a holder redeems units from one lot.
///
/// # Topics
/// * `Symbol` - "bond_redeemed"
/// * `Address` - The holder
///
/// # Data
/// * `u64` - The bond id
/// * `u32` - The lot index
/// * `u64` - Units redeemed
/// * `i128` - Total payout (principal plus unclaimed interest)
pub fn emit_bond_redeemed(
    e: &Env,
    bond_id: u64,
    holder: &Address,
    lot_index: u32,
    amount: u64,
    payout: i128,
) {
    let topics = (Symbol::new(e, "bond_redeemed"), holder.clone());
    let data = (bond_id, lot_index, amount, payout);
    e.events().publish(topics, data);
}

/// Emitted when the admin updates the treasury address.
///
/// # Topics
/// * `Symbol` - "treasury_updated"
///
/// # Data
/// * `Address` - The new treasury
pub fn emit_treasury_updated(e: &Env, treasury: &Address) {
    e.events()
        .publish((Symbol::new(e, "treasury_updated"),), treasury.clone());
}

/// Emitted when the admin withdraws funds to the treasury.
///
/// # Topics
/// * `Symbol` - "funds_withdrawn"
///
/// # Data
/// * `Address` - The treasury that received the funds
/// * `i128` - Amount withdrawn
pub fn emit_funds_withdrawn(e: &Env, treasury: &Address, amount: i128) {
    e.events().publish(
        (Symbol::new(e, "funds_withdrawn"),),
        (treasury.clone(), amount),
    );
}
