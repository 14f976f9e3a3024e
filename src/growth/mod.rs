//! Compound growth with periodic contributions (EPF, SIP, gold SIP, savings)

mod breakdown;
mod engine;

pub use breakdown::{GrowthResult, GrowthYearRow};
pub use engine::{compute, ContributionSchedule, GrowthInput, GrowthKind};
