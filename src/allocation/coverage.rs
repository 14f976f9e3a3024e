//! Term-life coverage sizing
//!
//! Cover is estimated under up to three independent methods and the
//! recommendation is the maximum, net of cover already in force:
//! an age-banded income multiple, the discounted value of earnings to
//! retirement, and a needs sum (liabilities plus dependent support).

use serde::{Deserialize, Serialize};

use crate::validate::{Bounds, ValidationError};

const ANNUAL_INCOME: Bounds = Bounds::new("annual_income", 100_000.0, 1_000_000_000.0);
const AGE: Bounds = Bounds::new("age", 18.0, 65.0);
const DEPENDENTS: Bounds = Bounds::new("dependents", 0.0, 10.0);
const EXISTING_COVER: Bounds = Bounds::new("existing_cover", 0.0, 1_000_000_000.0);
const LIABILITIES: Bounds = Bounds::new("outstanding_liabilities", 0.0, 1_000_000_000.0);
const MONTHLY_EXPENSES: Bounds = Bounds::new("monthly_expenses", 0.0, 10_000_000.0);

/// Earnings are discounted at this flat annual rate.
const DISCOUNT_RATE: f64 = 0.06;

/// Working life is assumed to end at this age.
const RETIREMENT_AGE: u32 = 60;

/// One-time goal provision per dependent (education corpus), a hardcoded
/// planning constant like the scheme rates elsewhere.
const GOAL_PER_DEPENDENT: f64 = 2_000_000.0;

/// Income multiple by age band
fn income_multiple(age: u32) -> f64 {
    match age {
        0..=30 => 25.0,
        31..=40 => 20.0,
        41..=50 => 15.0,
        51..=55 => 10.0,
        _ => 5.0,
    }
}

/// Inputs for coverage sizing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageInput {
    /// Annual take-home income
    pub annual_income: f64,

    /// Current age in years
    pub age: u32,

    /// Number of financial dependents
    pub dependents: u32,

    /// Cover already in force; defaults to 0
    pub existing_cover: Option<f64>,

    /// Outstanding loan balances; enables the needs-sum method
    pub outstanding_liabilities: Option<f64>,

    /// Household monthly expenses; enables the needs-sum method
    pub monthly_expenses: Option<f64>,
}

/// Coverage sizing result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageResult {
    /// Cover under the age-banded income multiple method
    pub income_multiple_cover: f64,

    /// Present value of earnings to retirement
    pub future_earnings_cover: f64,

    /// Liabilities + dependent support + goals, when the inputs for it
    /// were supplied
    pub needs_sum_cover: Option<f64>,

    /// Maximum of the methods, net of existing cover, floored at zero
    pub recommended_cover: f64,
}

/// Present value of a level annual amount over `years`, end-of-year
/// discounting at the flat rate
fn annuity_present_value(annual_amount: f64, years: u32) -> f64 {
    let factor = (1.0 - (1.0 + DISCOUNT_RATE).powi(-(years as i32))) / DISCOUNT_RATE;
    annual_amount * factor
}

/// Size recommended term-life cover from up to three methods
pub fn compute_coverage(input: &CoverageInput) -> Result<CoverageResult, ValidationError> {
    let income = ANNUAL_INCOME.check(input.annual_income)?;
    AGE.check(input.age as f64)?;
    DEPENDENTS.check(input.dependents as f64)?;
    let existing = EXISTING_COVER.check_or(input.existing_cover, 0.0)?;
    let liabilities = match input.outstanding_liabilities {
        Some(v) => Some(LIABILITIES.check(v)?),
        None => None,
    };
    let expenses = match input.monthly_expenses {
        Some(v) => Some(MONTHLY_EXPENSES.check(v)?),
        None => None,
    };

    let years_to_retirement = RETIREMENT_AGE.saturating_sub(input.age);

    let income_multiple_cover = income * income_multiple(input.age);
    let future_earnings_cover = annuity_present_value(income, years_to_retirement);

    // Needs sum requires at least one of liabilities / expenses.
    let needs_sum_cover = if liabilities.is_some() || expenses.is_some() {
        let support = expenses.unwrap_or(0.0) * 12.0 * years_to_retirement as f64;
        let goals = GOAL_PER_DEPENDENT * input.dependents as f64;
        Some(liabilities.unwrap_or(0.0) + support + goals)
    } else {
        None
    };

    let gross = income_multiple_cover
        .max(future_earnings_cover)
        .max(needs_sum_cover.unwrap_or(0.0));
    let recommended_cover = (gross - existing).max(0.0);

    Ok(CoverageResult {
        income_multiple_cover,
        future_earnings_cover,
        needs_sum_cover,
        recommended_cover,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn base_input() -> CoverageInput {
        CoverageInput {
            annual_income: 1_200_000.0,
            age: 32,
            dependents: 2,
            existing_cover: None,
            outstanding_liabilities: None,
            monthly_expenses: None,
        }
    }

    #[test]
    fn test_two_methods_without_needs_inputs() {
        let result = compute_coverage(&base_input()).unwrap();

        assert_relative_eq!(result.income_multiple_cover, 24_000_000.0);
        assert!(result.needs_sum_cover.is_none());
        // 28 years of 1.2M discounted at 6%
        assert_relative_eq!(
            result.future_earnings_cover,
            annuity_present_value(1_200_000.0, 28),
            max_relative = 1e-12
        );
        assert!(result.future_earnings_cover < result.income_multiple_cover);
    }

    #[test]
    fn test_recommendation_is_max_of_methods() {
        let mut input = base_input();
        input.outstanding_liabilities = Some(5_000_000.0);
        input.monthly_expenses = Some(200_000.0);
        let result = compute_coverage(&input).unwrap();

        let needs = result.needs_sum_cover.unwrap();
        // 5M + 200k*12*28 + 2*2M = 76.2M, the largest of the three
        assert_relative_eq!(needs, 76_200_000.0, max_relative = 1e-12);
        assert_relative_eq!(result.recommended_cover, needs, max_relative = 1e-12);
    }

    #[test]
    fn test_existing_cover_netted_and_floored() {
        let mut input = base_input();
        input.existing_cover = Some(25_000_000.0);
        let result = compute_coverage(&input).unwrap();
        assert!(result.recommended_cover < result.income_multiple_cover);

        input.existing_cover = Some(1_000_000_000.0);
        let result = compute_coverage(&input).unwrap();
        assert_eq!(result.recommended_cover, 0.0);
    }

    #[test]
    fn test_multiplier_declines_with_age() {
        let mut prev = f64::INFINITY;
        for age in [25, 35, 45, 52, 60] {
            let mut input = base_input();
            input.age = age;
            let cover = compute_coverage(&input).unwrap().income_multiple_cover;
            assert!(cover < prev);
            prev = cover;
        }
    }

    #[test]
    fn test_at_retirement_age_no_future_earnings() {
        let mut input = base_input();
        input.age = 62;
        let result = compute_coverage(&input).unwrap();
        assert_eq!(result.future_earnings_cover, 0.0);
    }

    #[test]
    fn test_dependents_band_enforced() {
        let mut input = base_input();
        input.dependents = 11;
        let err = compute_coverage(&input).unwrap_err();
        assert_eq!(err.field(), "dependents");
    }
}
