//! Annuity amortization engine for fixed-rate loans

use serde::{Deserialize, Serialize};

use super::schedule::{AmortizationRow, LoanResult};
use crate::validate::{Bounds, ValidationError};

const PRINCIPAL: Bounds = Bounds::new("principal", 10_000.0, 200_000_000.0);
const ANNUAL_RATE: Bounds = Bounds::new("annual_rate_pct", 1.0, 20.0);
const TENURE_YEARS: Bounds = Bounds::new("tenure_years", 1.0, 30.0);

/// Inputs for an amortizing loan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    /// Amount borrowed
    pub principal: f64,

    /// Annual interest rate in percent
    pub annual_rate_pct: f64,

    /// Tenure in whole years
    pub tenure_years: u32,
}

impl LoanInput {
    fn validate(&self) -> Result<(), ValidationError> {
        PRINCIPAL.check(self.principal)?;
        ANNUAL_RATE.check(self.annual_rate_pct)?;
        TENURE_YEARS.check(self.tenure_years as f64)?;
        Ok(())
    }

    fn monthly_rate(&self) -> f64 {
        self.annual_rate_pct / 12.0 / 100.0
    }

    fn months(&self) -> u32 {
        self.tenure_years * 12
    }
}

/// EMI = P·i·(1+i)^m / ((1+i)^m − 1)
///
/// The rate band starts at 1%, so the i = 0 degenerate form of the annuity
/// formula is never reached.
fn equated_installment(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    let factor = (1.0 + monthly_rate).powi(months as i32);
    principal * monthly_rate * factor / (factor - 1.0)
}

/// Compute the EMI and full amortization schedule for a loan
///
/// The schedule walks every month: interest = outstanding balance times the
/// monthly rate, principal portion = EMI − interest, balance decreases
/// until it reaches zero. The final installment may be short by
/// construction; the balance is clamped at zero, never negative. Rows are
/// rolled up per year.
pub fn compute(input: &LoanInput) -> Result<LoanResult, ValidationError> {
    input.validate()?;

    let i = input.monthly_rate();
    let months = input.months();
    let emi = equated_installment(input.principal, i, months);

    let mut schedule = Vec::with_capacity(input.tenure_years as usize);
    let mut balance = input.principal;

    for year in 1..=input.tenure_years {
        let opening_balance = balance;
        let mut principal_paid = 0.0;
        let mut interest_paid = 0.0;

        for _month in 1..=12 {
            let interest = balance * i;
            // Cap the principal portion at what is still outstanding so
            // the balance cannot cross zero on the last installment.
            let principal_portion = (emi - interest).min(balance);
            balance -= principal_portion;
            principal_paid += principal_portion;
            interest_paid += interest;
        }
        balance = balance.max(0.0);

        schedule.push(AmortizationRow {
            year,
            opening_balance,
            principal_paid,
            interest_paid,
            total_paid: principal_paid + interest_paid,
            closing_balance: balance,
        });
    }

    let total_payment = emi * months as f64;
    Ok(LoanResult {
        emi,
        months,
        total_payment,
        total_interest: total_payment - input.principal,
        schedule,
    })
}
