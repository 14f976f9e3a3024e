//! Emergency fund sizing

use serde::{Deserialize, Serialize};

use crate::validate::{Bounds, ValidationError};

const MONTHLY_EXPENSES: Bounds = Bounds::new("monthly_expenses", 1_000.0, 10_000_000.0);
const FUND_MONTHS: Bounds = Bounds::new("fund_months", 1.0, 24.0);
const CURRENT_SAVINGS: Bounds = Bounds::new("current_savings", 0.0, 1_000_000_000.0);
const MONTHLY_SAVINGS: Bounds = Bounds::new("monthly_savings", 0.0, 10_000_000.0);

/// Inputs for emergency fund sizing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyFundInput {
    /// Essential monthly expenses to be covered
    pub monthly_expenses: f64,

    /// Months of expenses the fund should cover
    pub fund_months: u32,

    /// Amount already set aside; defaults to 0
    pub current_savings: Option<f64>,

    /// Amount saved towards the fund each month; defaults to 0
    pub monthly_savings: Option<f64>,
}

/// Emergency fund result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyFundResult {
    /// Monthly expenses times fund months
    pub target: f64,

    /// Target less current savings, floored at zero
    pub shortfall: f64,

    /// Share of the target already funded, capped at 100
    pub funded_pct: f64,

    /// Whole months of saving needed to close the shortfall; absent when
    /// there is a shortfall but no monthly saving
    pub months_to_target: Option<u32>,
}

/// Size the emergency fund and the time to reach it
pub fn compute_emergency_fund(
    input: &EmergencyFundInput,
) -> Result<EmergencyFundResult, ValidationError> {
    let expenses = MONTHLY_EXPENSES.check(input.monthly_expenses)?;
    let months = FUND_MONTHS.check(input.fund_months as f64)?;
    let current = CURRENT_SAVINGS.check_or(input.current_savings, 0.0)?;
    let saving = MONTHLY_SAVINGS.check_or(input.monthly_savings, 0.0)?;

    let target = expenses * months;
    let shortfall = (target - current).max(0.0);
    let funded_pct = ((current / target) * 100.0).min(100.0);

    let months_to_target = if shortfall <= 0.0 {
        Some(0)
    } else if saving > 0.0 {
        Some((shortfall / saving).ceil() as u32)
    } else {
        None
    };

    Ok(EmergencyFundResult {
        target,
        shortfall,
        funded_pct,
        months_to_target,
    })
}
