//! Year-wise breakdown output structures for compound growth

use serde::{Deserialize, Serialize};

/// One year of a compound growth projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthYearRow {
    /// Projection year (1-indexed)
    pub year: u32,

    /// Balance at the start of the year
    pub opening_balance: f64,

    /// Amount contributed during the year (after step-up)
    pub contribution: f64,

    /// Interest credited for the year, on opening balance plus half the
    /// year's contribution (mid-year averaging)
    pub interest: f64,

    /// Balance at the end of the year
    pub closing_balance: f64,
}

/// Complete compound growth result
///
/// `breakdown` is capped at a display limit of 15 rows; the scalar summary
/// fields always reflect the full projected duration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthResult {
    /// Closing balance of the final projected year
    pub maturity_value: f64,

    /// Opening balance the projection started from
    pub opening_balance: f64,

    /// Sum of all contributions over the full duration
    pub total_contributions: f64,

    /// Maturity less contributions and opening balance
    pub total_interest: f64,

    /// Years actually projected
    pub years: u32,

    /// Year-wise rows, at most 15
    pub breakdown: Vec<GrowthYearRow>,
}
