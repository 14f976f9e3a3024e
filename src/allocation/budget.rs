//! 50/30/20 budget rule

use serde::{Deserialize, Serialize};

use crate::validate::{Bounds, ValidationError};

const MONTHLY_INCOME: Bounds = Bounds::new("monthly_income", 10_000.0, 10_000_000.0);

const NEEDS_SHARE: f64 = 0.50;
const WANTS_SHARE: f64 = 0.30;

/// Variance tolerance as a share of income: within 5% per category the
/// budget counts as balanced.
const BALANCE_TOLERANCE: f64 = 0.05;

/// Amounts across the three budget categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CategoryAmounts {
    pub needs: f64,
    pub wants: f64,
    pub savings: f64,
}

impl CategoryAmounts {
    pub fn total(&self) -> f64 {
        self.needs + self.wants + self.savings
    }
}

/// Inputs for the budget rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetInput {
    /// Monthly take-home income
    pub monthly_income: f64,

    /// Current spending per category, if the caller wants a variance
    /// report against the recommendation
    pub actual: Option<CategoryAmounts>,
}

/// Budget rule result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetResult {
    /// Recommended 50/30/20 split; always sums exactly to income
    pub recommended: CategoryAmounts,

    /// Recommended minus actual, per category (present when actuals were
    /// supplied)
    pub variance: Option<CategoryAmounts>,

    /// True when every category's variance is within 5% of income
    pub balanced: Option<bool>,
}

/// Apply the 50/30/20 split and, when actuals are supplied, report the
/// per-category variance and whether the budget is balanced
pub fn compute_budget(input: &BudgetInput) -> Result<BudgetResult, ValidationError> {
    let income = MONTHLY_INCOME.check(input.monthly_income)?;

    if let Some(actual) = &input.actual {
        let category = Bounds::new("actual", 0.0, income);
        category.check(actual.needs)?;
        category.check(actual.wants)?;
        category.check(actual.savings)?;
        if actual.total() > income {
            return Err(ValidationError::Inconsistent {
                field: "actual",
                reason: format!(
                    "allocations total {:.0}, more than the income of {:.0}",
                    actual.total(),
                    income
                ),
            });
        }
    }

    let needs = income * NEEDS_SHARE;
    let wants = income * WANTS_SHARE;
    // Savings takes the remainder so the split sums exactly to income.
    let recommended = CategoryAmounts {
        needs,
        wants,
        savings: income - needs - wants,
    };

    let variance = input.actual.as_ref().map(|actual| CategoryAmounts {
        needs: recommended.needs - actual.needs,
        wants: recommended.wants - actual.wants,
        savings: recommended.savings - actual.savings,
    });

    let balanced = variance.as_ref().map(|v| {
        let tolerance = income * BALANCE_TOLERANCE;
        v.needs.abs() <= tolerance && v.wants.abs() <= tolerance && v.savings.abs() <= tolerance
    });

    Ok(BudgetResult {
        recommended,
        variance,
        balanced,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_split() {
        let result = compute_budget(&BudgetInput {
            monthly_income: 75_000.0,
            actual: None,
        })
        .unwrap();

        assert_relative_eq!(result.recommended.needs, 37_500.0);
        assert_relative_eq!(result.recommended.wants, 22_500.0);
        assert_relative_eq!(result.recommended.savings, 15_000.0);
        assert!(result.variance.is_none());
        assert!(result.balanced.is_none());
    }

    #[test]
    fn test_split_sums_exactly_to_income() {
        for income in [10_000.0, 33_333.0, 75_000.0, 123_456.0, 9_999_999.0] {
            let result = compute_budget(&BudgetInput {
                monthly_income: income,
                actual: None,
            })
            .unwrap();
            assert_eq!(result.recommended.total(), income);
        }
    }

    #[test]
    fn test_balanced_within_tolerance() {
        let result = compute_budget(&BudgetInput {
            monthly_income: 75_000.0,
            actual: Some(CategoryAmounts {
                needs: 39_000.0,
                wants: 21_000.0,
                savings: 14_500.0,
            }),
        })
        .unwrap();

        // Each variance is below 3,750 (5% of income)
        assert_eq!(result.balanced, Some(true));
        let v = result.variance.unwrap();
        assert_relative_eq!(v.needs, -1_500.0);
        assert_relative_eq!(v.wants, 1_500.0);
        assert_relative_eq!(v.savings, 500.0);
    }

    #[test]
    fn test_unbalanced_outside_tolerance() {
        let result = compute_budget(&BudgetInput {
            monthly_income: 75_000.0,
            actual: Some(CategoryAmounts {
                needs: 55_000.0,
                wants: 15_000.0,
                savings: 5_000.0,
            }),
        })
        .unwrap();

        assert_eq!(result.balanced, Some(false));
    }

    #[test]
    fn test_overspent_actuals_rejected() {
        let err = compute_budget(&BudgetInput {
            monthly_income: 75_000.0,
            actual: Some(CategoryAmounts {
                needs: 50_000.0,
                wants: 20_000.0,
                savings: 10_000.0,
            }),
        })
        .unwrap_err();

        assert_eq!(err.field(), "actual");
        assert!(matches!(err, ValidationError::Inconsistent { .. }));
    }

    #[test]
    fn test_income_band_enforced() {
        let err = compute_budget(&BudgetInput {
            monthly_income: 9_999.0,
            actual: None,
        })
        .unwrap_err();
        assert_eq!(err.field(), "monthly_income");
    }
}
