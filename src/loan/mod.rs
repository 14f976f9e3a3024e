//! Fixed-rate annuity amortization (loan EMI)

mod engine;
mod schedule;

pub use engine::{compute, LoanInput};
pub use schedule::{AmortizationRow, LoanResult};
