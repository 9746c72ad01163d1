use soroban_sdk::contracttype;

// ─── Bond specification ────────────────────────────────────────────────────

/// Economic terms and remaining supply of one issued bond type.
///
/// Everything except `supply` is immutable after issuance.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BondSpec {
    /// Currency units redeemable per unit of this bond.
    pub par_value: i128,
    /// Currency units required to purchase one unit.
    pub price: i128,
    /// Annualized coupon rate in tenths of a percent (50 = 5.0%).
    pub coupon_rate: u32,
    /// Nominal maturity in seconds. Informational; redemption is never
    /// gated on it.
    pub maturity_period: u64,
    /// Seconds between interest settlements.
    pub payout_interval: u64,
    /// Units still available for purchase.
    pub supply: u64,
}

// ─── Purchase lots ─────────────────────────────────────────────────────────

/// One purchase transaction's remaining holdings and its settlement clock.
///
/// Lots are append-only per (holder, bond): a fully redeemed lot stays in
/// place with amount 0 so previously issued indices remain valid.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PurchaseLot {
    /// Units still held from this lot. Never exceeds the amount originally
    /// purchased.
    pub amount: u64,
    /// Timestamp up to which interest has been settled for this lot.
    pub last_settlement_time: u64,
}
