//! fincalc - Deterministic projection engine for consumer finance calculators
//!
//! This library provides:
//! - Fixed-rate annuity amortization (loan EMI) with yearly schedules
//! - Compound growth with periodic contributions (EPF, SIP, gold SIP)
//! - Percentage allocation (budget rule, coverage sizing, emergency fund)
//! - Multi-year rent-vs-buy comparison
//! - Batch scenario running over independent inputs

pub mod allocation;
pub mod growth;
pub mod housing;
pub mod loan;
pub mod scenario;
pub mod validate;

// Re-export commonly used types
pub use loan::{LoanInput, LoanResult};
pub use scenario::{Outcome, Scenario, ScenarioRunner};
pub use validate::{Bounds, ValidationError};
