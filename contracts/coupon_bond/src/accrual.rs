//! Whole-period interest accrual.
//!
//! Interest accrues per lot from its settlement clock in whole payout
//! intervals. Time short of a full interval earns nothing yet; it stays on
//! the clock and counts toward the next period.

use crate::math;
use crate::types::{BondSpec, PurchaseLot};

/// Seconds in a 365-day year.
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Coupon rates are expressed in tenths of a percent.
pub const RATE_SCALE: i128 = 1_000;

/// Result of accruing a lot up to a point in time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Accrual {
    /// Interest owed for the covered whole periods, in currency units.
    pub interest_due: i128,
    /// Settlement clock advanced by the covered whole periods.
    pub new_settlement_time: u64,
}

/// Accrue `lot` against `spec` up to `now`.
///
/// Pure and side-effect-free; shared by the read-only interest queries and
/// the settlement paths so both always agree. Per covered unit-second the
/// lot earns `par_value * coupon_rate / (SECONDS_PER_YEAR * RATE_SCALE)`,
/// floor division, no rounding correction.
pub fn compute_accrual(spec: &BondSpec, lot: &PurchaseLot, now: u64) -> Accrual {
    let elapsed = now.saturating_sub(lot.last_settlement_time);
    let periods = elapsed / spec.payout_interval;
    if periods == 0 {
        return Accrual {
            interest_due: 0,
            new_settlement_time: lot.last_settlement_time,
        };
    }

    let covered = math::mul_u64(spec.payout_interval, periods, "covered time overflow");
    let numerator = math::mul_i128(
        math::mul_i128(
            spec.par_value,
            spec.coupon_rate as i128,
            "interest numerator overflow",
        ),
        covered as i128,
        "interest numerator overflow",
    );
    let interest_per_unit = numerator / (SECONDS_PER_YEAR as i128 * RATE_SCALE);
    let interest_due = math::mul_i128(
        interest_per_unit,
        lot.amount as i128,
        "interest total overflow",
    );

    Accrual {
        interest_due,
        new_settlement_time: math::add_u64(
            lot.last_settlement_time,
            covered,
            "settlement time overflow",
        ),
    }
}
