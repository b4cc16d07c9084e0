//! Property tests for pricing and registration-period arithmetic.

use proptest::prelude::*;

use domain_store::domain::catalog::{plan_for, BillingPeriod};
use domain_store::domain::reconciliation::amount_matches;
use domain_store::domain::registry::registration_years;

proptest! {
    #[test]
    fn registration_years_cover_the_paid_months(months in 1u32..=120) {
        let years = registration_years(months);
        prop_assert!(years >= 1);
        // The registration never expires before the paid period ends.
        prop_assert!(years * 12 >= months);
        // And never grants a full spare year.
        prop_assert!((years - 1) * 12 < months);
    }

    #[test]
    fn amounts_within_one_cent_match(total in 1i64..=100_000_000, delta in -1i64..=1) {
        prop_assert!(amount_matches(total, total + delta));
    }

    #[test]
    fn amounts_beyond_tolerance_never_match(
        total in 1i64..=100_000_000,
        delta in 2i64..=1_000_000,
    ) {
        prop_assert!(!amount_matches(total, total + delta));
        prop_assert!(!amount_matches(total, total - delta));
    }
}

#[test]
fn plan_charge_is_total_minus_discount() {
    for period in BillingPeriod::all() {
        let plan = plan_for(period);
        assert_eq!(plan.charge_cents(), plan.total_cents - plan.discount_cents);
        assert_eq!(
            plan.total_cents,
            plan.price_per_month_cents * plan.months as i64
        );
    }
}
