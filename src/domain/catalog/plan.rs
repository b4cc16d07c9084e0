//! Billing plan catalog for registration periods.
//!
//! The catalog is the single source of truth for pricing. Checkout never
//! accepts a price from the client; it snapshots these values into the order.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Registration period offered by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingPeriod {
    /// One month (`PERIOD_1_MONTH`).
    OneMonth,
    /// Twelve months (`PERIOD_1_YEAR`).
    OneYear,
    /// Twenty-four months (`PERIOD_2_YEARS`).
    TwoYears,
}

impl BillingPeriod {
    /// Returns the wire selector string for this period.
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingPeriod::OneMonth => "PERIOD_1_MONTH",
            BillingPeriod::OneYear => "PERIOD_1_YEAR",
            BillingPeriod::TwoYears => "PERIOD_2_YEARS",
        }
    }

    /// Returns the number of months covered by this period.
    pub fn months(&self) -> u32 {
        match self {
            BillingPeriod::OneMonth => 1,
            BillingPeriod::OneYear => 12,
            BillingPeriod::TwoYears => 24,
        }
    }

    /// Returns all known periods.
    pub fn all() -> [BillingPeriod; 3] {
        [
            BillingPeriod::OneMonth,
            BillingPeriod::OneYear,
            BillingPeriod::TwoYears,
        ]
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BillingPeriod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PERIOD_1_MONTH" => Ok(BillingPeriod::OneMonth),
            "PERIOD_1_YEAR" => Ok(BillingPeriod::OneYear),
            "PERIOD_2_YEARS" => Ok(BillingPeriod::TwoYears),
            other => Err(ValidationError::invalid_format(
                "period",
                format!("Unknown billing period: {}", other),
            )),
        }
    }
}

/// Pricing and gateway configuration for a registration period.
///
/// All monetary amounts are ARS cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingPlan {
    pub period: BillingPeriod,
    pub months: u32,
    pub price_per_month_cents: i64,
    pub total_cents: i64,
    pub discount_cents: i64,
    /// Gateway subscription-plan id for this period.
    pub plan_ref: &'static str,
}

impl BillingPlan {
    /// Final charge for this plan.
    pub fn charge_cents(&self) -> i64 {
        self.total_cents - self.discount_cents
    }
}

const PRICE_PER_MONTH_CENTS: i64 = 590_000;

fn build_plan(period: BillingPeriod) -> BillingPlan {
    let months = period.months();
    BillingPlan {
        period,
        months,
        price_per_month_cents: PRICE_PER_MONTH_CENTS,
        total_cents: PRICE_PER_MONTH_CENTS * months as i64,
        discount_cents: 0,
        plan_ref: match period {
            BillingPeriod::OneMonth => "b21689b7fa8e48839d591d23b87f2f1b",
            BillingPeriod::OneYear => "4d00df0a99b34973857c28b10012d1bd",
            BillingPeriod::TwoYears => "7f13f82fe69545308fea8056fe4ef83d",
        },
    }
}

static PLANS: Lazy<[BillingPlan; 3]> = Lazy::new(|| {
    [
        build_plan(BillingPeriod::OneMonth),
        build_plan(BillingPeriod::OneYear),
        build_plan(BillingPeriod::TwoYears),
    ]
});

/// Looks up the billing plan for a period.
pub fn plan_for(period: BillingPeriod) -> &'static BillingPlan {
    match period {
        BillingPeriod::OneMonth => &PLANS[0],
        BillingPeriod::OneYear => &PLANS[1],
        BillingPeriod::TwoYears => &PLANS[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_parses_known_selectors() {
        assert_eq!(
            "PERIOD_1_MONTH".parse::<BillingPeriod>().unwrap(),
            BillingPeriod::OneMonth
        );
        assert_eq!(
            "PERIOD_1_YEAR".parse::<BillingPeriod>().unwrap(),
            BillingPeriod::OneYear
        );
        assert_eq!(
            "PERIOD_2_YEARS".parse::<BillingPeriod>().unwrap(),
            BillingPeriod::TwoYears
        );
    }

    #[test]
    fn period_rejects_unknown_selector() {
        let result = "PERIOD_3_YEARS".parse::<BillingPeriod>();
        assert!(result.is_err());
    }

    #[test]
    fn period_roundtrips_through_display() {
        for period in BillingPeriod::all() {
            let parsed: BillingPeriod = period.to_string().parse().unwrap();
            assert_eq!(parsed, period);
        }
    }

    #[test]
    fn plan_for_one_month_prices() {
        let plan = plan_for(BillingPeriod::OneMonth);
        assert_eq!(plan.months, 1);
        assert_eq!(plan.total_cents, 590_000);
        assert_eq!(plan.discount_cents, 0);
        assert_eq!(plan.charge_cents(), 590_000);
    }

    #[test]
    fn plan_for_two_years_totals_months_times_price() {
        let plan = plan_for(BillingPeriod::TwoYears);
        assert_eq!(plan.months, 24);
        assert_eq!(plan.total_cents, 590_000 * 24);
    }

    #[test]
    fn plan_for_returns_the_matching_period() {
        for period in BillingPeriod::all() {
            assert_eq!(plan_for(period).period, period);
            assert_eq!(plan_for(period).months, period.months());
        }
    }

    #[test]
    fn all_plans_have_distinct_plan_refs() {
        let refs: Vec<_> = BillingPeriod::all()
            .iter()
            .map(|&p| plan_for(p).plan_ref)
            .collect();
        assert_eq!(refs.len(), 3);
        assert_ne!(refs[0], refs[1]);
        assert_ne!(refs[1], refs[2]);
    }
}
