//! Comparison output structures for rent vs. buy

use serde::{Deserialize, Serialize};

/// One year of the rent-vs-buy comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Comparison year (1-indexed)
    pub year: u32,

    /// Rent paid across all years so far
    pub cumulative_rent: f64,

    /// Cash paid out for the ownership scenario so far
    pub cumulative_outlay: f64,

    /// Property value at the end of the year
    pub property_value: f64,

    /// Loan balance at the end of the year
    pub loan_balance: f64,

    /// Property value less loan balance
    pub equity: f64,

    /// Ownership outlay net of equity
    pub net_ownership_cost: f64,
}

/// Final three-way recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Renting ends up costlier by more than the threshold
    Buy,
    /// Owning ends up costlier by more than the threshold
    Rent,
    /// Difference within the threshold either way
    Neutral,
}

/// Complete rent-vs-buy result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentVsBuyResult {
    /// Year-by-year comparison rows
    pub rows: Vec<ComparisonRow>,

    /// First year where cumulative rent reaches the net ownership cost;
    /// absent when it never happens within the horizon
    pub break_even_year: Option<u32>,

    /// Cumulative rent at the horizon
    pub final_rent_cost: f64,

    /// Net ownership cost at the horizon
    pub final_ownership_cost: f64,

    /// Final-year recommendation
    pub verdict: Verdict,
}
