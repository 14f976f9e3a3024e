//! Amortization schedule output structures

use serde::{Deserialize, Serialize};

/// One year of an amortization schedule
///
/// Monthly installments are rolled up into yearly rows; the monthly split
/// between interest and principal is still computed month by month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Loan year (1-indexed)
    pub year: u32,

    /// Outstanding balance at the start of the year
    pub opening_balance: f64,

    /// Principal repaid during the year
    pub principal_paid: f64,

    /// Interest paid during the year
    pub interest_paid: f64,

    /// Total paid during the year
    pub total_paid: f64,

    /// Outstanding balance at the end of the year (never negative)
    pub closing_balance: f64,
}

/// Complete amortization result for a loan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanResult {
    /// Equated monthly installment
    pub emi: f64,

    /// Number of installments (tenure in months)
    pub months: u32,

    /// EMI times number of installments
    pub total_payment: f64,

    /// Total payment less principal
    pub total_interest: f64,

    /// Year-by-year schedule
    pub schedule: Vec<AmortizationRow>,
}

impl LoanResult {
    /// Balance outstanding after the final installment
    pub fn final_balance(&self) -> f64 {
        self.schedule.last().map(|r| r.closing_balance).unwrap_or(0.0)
    }
}
