//! Scenario runner for batch calculator runs
//!
//! Every calculation is a pure function of its input record, so a batch
//! of scenarios can fan out across a thread pool with no coordination;
//! results come back in input order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::allocation::{BudgetInput, CoverageInput, EmergencyFundInput};
use crate::allocation::{BudgetResult, CoverageResult, EmergencyFundResult};
use crate::growth::{GrowthInput, GrowthResult};
use crate::housing::{RentVsBuyInput, RentVsBuyResult};
use crate::loan::{LoanInput, LoanResult};
use crate::validate::ValidationError;
use crate::{allocation, growth, housing, loan};

/// One calculator invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Scenario {
    Loan(LoanInput),
    Growth(GrowthInput),
    Budget(BudgetInput),
    Coverage(CoverageInput),
    EmergencyFund(EmergencyFundInput),
    RentVsBuy(RentVsBuyInput),
}

/// The matching calculator result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Outcome {
    Loan(LoanResult),
    Growth(GrowthResult),
    Budget(BudgetResult),
    Coverage(CoverageResult),
    EmergencyFund(EmergencyFundResult),
    RentVsBuy(RentVsBuyResult),
}

/// Dispatches scenarios to the calculator engines
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner;

impl ScenarioRunner {
    pub fn new() -> Self {
        Self
    }

    /// Run a single scenario
    pub fn run(&self, scenario: &Scenario) -> Result<Outcome, ValidationError> {
        match scenario {
            Scenario::Loan(input) => loan::compute(input).map(Outcome::Loan),
            Scenario::Growth(input) => growth::compute(input).map(Outcome::Growth),
            Scenario::Budget(input) => allocation::compute_budget(input).map(Outcome::Budget),
            Scenario::Coverage(input) => {
                allocation::compute_coverage(input).map(Outcome::Coverage)
            }
            Scenario::EmergencyFund(input) => {
                allocation::compute_emergency_fund(input).map(Outcome::EmergencyFund)
            }
            Scenario::RentVsBuy(input) => housing::compute(input).map(Outcome::RentVsBuy),
        }
    }

    /// Run many scenarios in parallel, preserving input order
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<Result<Outcome, ValidationError>> {
        scenarios.par_iter().map(|s| self.run(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loan_scenario(principal: f64) -> Scenario {
        Scenario::Loan(LoanInput {
            principal,
            annual_rate_pct: 8.5,
            tenure_years: 20,
        })
    }

    #[test]
    fn test_batch_preserves_order() {
        let runner = ScenarioRunner::new();
        let scenarios: Vec<_> = (1..=8)
            .map(|k| loan_scenario(k as f64 * 1_000_000.0))
            .collect();

        let results = runner.run_batch(&scenarios);
        assert_eq!(results.len(), 8);

        let mut prev_emi = 0.0;
        for result in &results {
            match result.as_ref().unwrap() {
                Outcome::Loan(r) => {
                    assert!(r.emi > prev_emi);
                    prev_emi = r.emi;
                }
                _ => panic!("expected a loan outcome"),
            }
        }
    }

    #[test]
    fn test_batch_keeps_per_scenario_errors() {
        let runner = ScenarioRunner::new();
        let scenarios = vec![
            loan_scenario(2_500_000.0),
            loan_scenario(1.0), // below the principal band
            Scenario::Budget(BudgetInput {
                monthly_income: 75_000.0,
                actual: None,
            }),
        ];

        let results = runner.run_batch(&scenarios);
        assert!(results[0].is_ok());
        assert_eq!(results[1].as_ref().unwrap_err().field(), "principal");
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let runner = ScenarioRunner::new();
        let scenarios: Vec<_> = (1..=16)
            .map(|k| loan_scenario(k as f64 * 500_000.0))
            .collect();

        let parallel = runner.run_batch(&scenarios);
        for (scenario, from_batch) in scenarios.iter().zip(&parallel) {
            let sequential = runner.run(scenario).unwrap();
            match (sequential, from_batch.as_ref().unwrap()) {
                (Outcome::Loan(a), Outcome::Loan(b)) => {
                    assert_eq!(a.emi.to_bits(), b.emi.to_bits());
                    assert_eq!(a.total_interest.to_bits(), b.total_interest.to_bits());
                }
                _ => panic!("expected loan outcomes"),
            }
        }
    }
}
