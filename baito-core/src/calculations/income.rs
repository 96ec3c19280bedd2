//! Monthly income of a single job.
//!
//! | Value       | Formula |
//! |-------------|---------|
//! | `gross`     | hourly wage × weekly hours × 4 |
//! | `transport` | transport cost per day × work days per week × 4 |
//! | `net`       | `gross` − `transport` |
//!
//! A month is modelled as exactly four weeks. No rounding is applied.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use baito_core::compute_income;
//!
//! let income = compute_income(dec!(2800), dec!(2), dec!(1), dec!(800));
//!
//! assert_eq!(income.gross, dec!(22400));
//! assert_eq!(income.transport, dec!(3200));
//! assert_eq!(income.net, dec!(19200));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Weeks counted per month.
pub const WEEKS_PER_MONTH: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

/// Monthly income figures derived from a job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeResult {
    /// Wages earned before any deduction.
    pub gross: Decimal,

    /// Commute cost paid out of pocket over the month.
    pub transport: Decimal,

    /// What is actually left: `gross - transport`.
    pub net: Decimal,
}

impl IncomeResult {
    /// Whether the job costs anything to commute to.
    pub fn has_transport_cost(&self) -> bool {
        self.transport > Decimal::ZERO
    }
}

/// Computes the monthly income of a job from its four numeric fields.
///
/// Inputs are used as-is; negative values and more than seven work days are
/// not rejected. Products that would overflow [`Decimal`] saturate.
pub fn compute_income(
    hourly_wage: Decimal,
    weekly_hours: Decimal,
    work_days_per_week: Decimal,
    transport_cost_per_day: Decimal,
) -> IncomeResult {
    let gross = hourly_wage
        .saturating_mul(weekly_hours)
        .saturating_mul(WEEKS_PER_MONTH);
    let transport = transport_cost_per_day
        .saturating_mul(work_days_per_week)
        .saturating_mul(WEEKS_PER_MONTH);

    IncomeResult {
        gross,
        transport,
        net: gross.saturating_sub(transport),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn weeks_per_month_is_four() {
        assert_eq!(WEEKS_PER_MONTH, dec!(4));
    }

    #[test]
    fn compute_income_without_transport() {
        let result = compute_income(dec!(1500), dec!(30), dec!(5), dec!(0));

        assert_eq!(
            result,
            IncomeResult {
                gross: dec!(180000),
                transport: dec!(0),
                net: dec!(180000),
            }
        );
        assert!(!result.has_transport_cost());
    }

    #[test]
    fn compute_income_subtracts_transport() {
        let result = compute_income(dec!(2800), dec!(2), dec!(1), dec!(800));

        assert_eq!(result.gross, dec!(22400));
        assert_eq!(result.transport, dec!(3200));
        assert_eq!(result.net, dec!(19200));
        assert!(result.has_transport_cost());
    }

    #[test]
    fn compute_income_all_zero_is_zero() {
        let result = compute_income(dec!(0), dec!(0), dec!(0), dec!(0));

        assert_eq!(result, IncomeResult::default());
    }

    #[test]
    fn compute_income_net_can_go_negative() {
        let result = compute_income(dec!(1000), dec!(1), dec!(5), dec!(1500));

        assert_eq!(result.gross, dec!(4000));
        assert_eq!(result.transport, dec!(30000));
        assert_eq!(result.net, dec!(-26000));
    }

    #[test]
    fn compute_income_does_not_round() {
        let result = compute_income(dec!(1012.5), dec!(3.5), dec!(2), dec!(333.3));

        assert_eq!(result.gross, dec!(14175.00));
        assert_eq!(result.transport, dec!(2666.4));
        assert_eq!(result.net, result.gross - result.transport);
    }

    #[test]
    fn compute_income_accepts_unbounded_work_days() {
        let result = compute_income(dec!(1000), dec!(10), dec!(9), dec!(100));

        assert_eq!(result.transport, dec!(3600));
    }

    #[test]
    fn compute_income_is_idempotent() {
        let first = compute_income(dec!(1234), dec!(17), dec!(4), dec!(560));
        let second = compute_income(dec!(1234), dec!(17), dec!(4), dec!(560));

        assert_eq!(first, second);
    }

    #[test]
    fn compute_income_holds_formula_over_grid() {
        let values = [dec!(0), dec!(1), dec!(7), dec!(950), dec!(2800)];

        for wage in values {
            for hours in values {
                for days in values {
                    for cost in values {
                        let result = compute_income(wage, hours, days, cost);

                        assert_eq!(result.gross, wage * hours * dec!(4));
                        assert_eq!(result.transport, cost * days * dec!(4));
                        assert_eq!(result.net, result.gross - result.transport);
                    }
                }
            }
        }
    }

    #[test]
    fn compute_income_saturates_instead_of_panicking() {
        let result = compute_income(Decimal::MAX, dec!(2), dec!(0), dec!(0));

        assert_eq!(result.gross, Decimal::MAX);
        assert_eq!(result.net, Decimal::MAX);
    }
}
