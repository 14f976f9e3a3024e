//! Compound growth engine with periodic contributions and annual step-up

use serde::{Deserialize, Serialize};

use super::breakdown::{GrowthResult, GrowthYearRow};
use crate::validate::{Bounds, ValidationError};

/// Breakdown tables stop at this many rows; computation always runs the
/// full duration.
pub const BREAKDOWN_DISPLAY_YEARS: u32 = 15;

const YEARS: Bounds = Bounds::new("years", 1.0, 40.0);
const OPENING_BALANCE: Bounds = Bounds::new("opening_balance", 0.0, 500_000_000.0);
const STEPUP: Bounds = Bounds::new("annual_stepup_pct", 0.0, 50.0);

/// Instrument being projected
///
/// Each kind carries its own rate band and default rate; the defaults are
/// the hardcoded scheme constants (statutory EPF rate, long-run gold
/// appreciation) rather than live market feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthKind {
    /// Employee Provident Fund corpus
    Epf,
    /// Equity mutual fund systematic investment plan
    Sip,
    /// Gold accumulated through a monthly plan
    GoldSip,
    /// Bank savings / recurring deposit
    Savings,
}

impl GrowthKind {
    /// Allowed annual rate band for this instrument
    pub fn rate_bounds(&self) -> Bounds {
        match self {
            GrowthKind::Epf => Bounds::new("annual_rate_pct", 7.0, 9.5),
            GrowthKind::Sip => Bounds::new("annual_rate_pct", 1.0, 30.0),
            GrowthKind::GoldSip => Bounds::new("annual_rate_pct", 1.0, 20.0),
            GrowthKind::Savings => Bounds::new("annual_rate_pct", 1.0, 15.0),
        }
    }

    /// Rate assumed when the caller does not supply one
    pub fn default_rate(&self) -> f64 {
        match self {
            GrowthKind::Epf => 8.25,
            GrowthKind::Sip => 12.0,
            GrowthKind::GoldSip => 9.0,
            GrowthKind::Savings => 6.0,
        }
    }
}

/// How money goes into the instrument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContributionSchedule {
    /// Single opening amount, no further contributions
    LumpSum,
    /// Fixed amount every month
    Monthly,
    /// Fixed amount once a year
    Yearly,
}

impl ContributionSchedule {
    fn periods_per_year(&self) -> f64 {
        match self {
            ContributionSchedule::LumpSum => 0.0,
            ContributionSchedule::Monthly => 12.0,
            ContributionSchedule::Yearly => 1.0,
        }
    }
}

/// Inputs for a compound growth projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthInput {
    /// Instrument kind (selects rate band and default rate)
    pub kind: GrowthKind,

    /// Contribution mode
    pub schedule: ContributionSchedule,

    /// Starting balance; defaults to 0, required for lump-sum mode
    pub opening_balance: Option<f64>,

    /// Per-period contribution; required unless lump-sum
    pub contribution: Option<f64>,

    /// Annual growth rate in percent; defaults per kind
    pub annual_rate_pct: Option<f64>,

    /// Duration in whole years
    pub years: u32,

    /// Annual escalation of the contribution, in percent; defaults to 0
    pub annual_stepup_pct: Option<f64>,
}

struct Validated {
    opening_balance: f64,
    contribution: f64,
    rate: f64,
    years: u32,
    stepup: f64,
}

impl GrowthInput {
    fn validate(&self) -> Result<Validated, ValidationError> {
        let contribution_bounds = Bounds::new("contribution", 100.0, 10_000_000.0);

        let (opening_balance, contribution) = match self.schedule {
            ContributionSchedule::LumpSum => {
                let opening = OPENING_BALANCE.check_required(self.opening_balance)?;
                (opening, 0.0)
            }
            _ => {
                let opening = OPENING_BALANCE.check_or(self.opening_balance, 0.0)?;
                let contribution = contribution_bounds.check_required(self.contribution)?;
                (opening, contribution)
            }
        };

        let rate = self
            .kind
            .rate_bounds()
            .check_or(self.annual_rate_pct, self.kind.default_rate())?;
        YEARS.check(self.years as f64)?;
        let stepup = STEPUP.check_or(self.annual_stepup_pct, 0.0)?;

        Ok(Validated {
            opening_balance,
            contribution,
            rate: rate / 100.0,
            years: self.years,
            stepup: stepup / 100.0,
        })
    }
}

/// Project year-by-year compound growth
///
/// Per year: the step-up (if any) escalates the contribution, interest is
/// credited on the opening balance plus half the year's contribution, and
/// the balance rolls forward. Accumulation is unrounded throughout;
/// rounding is a display concern.
pub fn compute(input: &GrowthInput) -> Result<GrowthResult, ValidationError> {
    let v = input.validate()?;

    let periods = input.schedule.periods_per_year();
    let mut contribution = v.contribution;
    let mut balance = v.opening_balance;
    let mut total_contributions = 0.0;
    let mut breakdown = Vec::with_capacity(v.years.min(BREAKDOWN_DISPLAY_YEARS) as usize);

    for year in 1..=v.years {
        if year > 1 {
            contribution *= 1.0 + v.stepup;
        }
        let year_contribution = contribution * periods;
        let interest = (balance + 0.5 * year_contribution) * v.rate;
        let closing_balance = balance + year_contribution + interest;

        if year <= BREAKDOWN_DISPLAY_YEARS {
            breakdown.push(GrowthYearRow {
                year,
                opening_balance: balance,
                contribution: year_contribution,
                interest,
                closing_balance,
            });
        }

        total_contributions += year_contribution;
        balance = closing_balance;
    }

    Ok(GrowthResult {
        maturity_value: balance,
        opening_balance: v.opening_balance,
        total_contributions,
        total_interest: balance - total_contributions - v.opening_balance,
        years: v.years,
        breakdown,
    })
}
