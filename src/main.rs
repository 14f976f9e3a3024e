//! fincalc CLI
//!
//! Command-line front end for the calculator engines

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use fincalc::allocation::{BudgetInput, CategoryAmounts, CoverageInput, EmergencyFundInput};
use fincalc::growth::{ContributionSchedule, GrowthInput, GrowthKind};
use fincalc::housing::{RentVsBuyInput, Verdict};
use fincalc::{LoanInput, Outcome, Scenario, ScenarioRunner};

#[derive(Parser)]
#[command(name = "fincalc", version, about = "Consumer finance calculators")]
struct Cli {
    /// Emit the full result record as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    /// Also write the breakdown rows to a CSV file
    #[arg(long, global = true, value_name = "PATH")]
    csv: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Epf,
    Sip,
    GoldSip,
    Savings,
}

impl From<KindArg> for GrowthKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Epf => GrowthKind::Epf,
            KindArg::Sip => GrowthKind::Sip,
            KindArg::GoldSip => GrowthKind::GoldSip,
            KindArg::Savings => GrowthKind::Savings,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Loan EMI with a yearly amortization schedule
    Emi {
        #[arg(long)]
        principal: f64,
        /// Annual rate in percent
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: u32,
    },

    /// Compound growth projection (EPF, SIP, gold SIP, savings)
    Growth {
        #[arg(long, value_enum, default_value = "sip")]
        kind: KindArg,
        /// Monthly contribution
        #[arg(long, conflicts_with_all = ["yearly", "lump_sum"])]
        monthly: Option<f64>,
        /// Yearly contribution
        #[arg(long, conflicts_with = "lump_sum")]
        yearly: Option<f64>,
        /// One-time investment instead of periodic contributions
        #[arg(long)]
        lump_sum: Option<f64>,
        /// Starting balance alongside periodic contributions
        #[arg(long)]
        opening: Option<f64>,
        /// Annual rate in percent; defaults per kind
        #[arg(long)]
        rate: Option<f64>,
        #[arg(long)]
        years: u32,
        /// Annual contribution step-up in percent
        #[arg(long)]
        stepup: Option<f64>,
    },

    /// 50/30/20 budget rule
    Budget {
        #[arg(long)]
        income: f64,
        #[arg(long)]
        needs: Option<f64>,
        #[arg(long)]
        wants: Option<f64>,
        #[arg(long)]
        savings: Option<f64>,
    },

    /// Term-life coverage sizing
    Coverage {
        /// Annual income
        #[arg(long)]
        income: f64,
        #[arg(long)]
        age: u32,
        #[arg(long, default_value_t = 0)]
        dependents: u32,
        #[arg(long)]
        existing_cover: Option<f64>,
        #[arg(long)]
        liabilities: Option<f64>,
        #[arg(long)]
        expenses: Option<f64>,
    },

    /// Emergency fund target and time to reach it
    Emergency {
        #[arg(long)]
        expenses: f64,
        #[arg(long, default_value_t = 6)]
        months: u32,
        #[arg(long)]
        saved: Option<f64>,
        #[arg(long)]
        saving: Option<f64>,
    },

    /// Rent vs. buy over a horizon
    RentVsBuy {
        #[arg(long)]
        price: f64,
        #[arg(long)]
        down_payment_pct: Option<f64>,
        /// Annual loan rate in percent
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        tenure: u32,
        #[arg(long)]
        rent: f64,
        #[arg(long)]
        rent_escalation: Option<f64>,
        #[arg(long)]
        appreciation: Option<f64>,
        #[arg(long)]
        maintenance: Option<f64>,
        #[arg(long)]
        property_tax: Option<f64>,
        #[arg(long)]
        horizon: u32,
    },
}

impl Command {
    fn to_scenario(&self) -> Scenario {
        match self {
            Command::Emi {
                principal,
                rate,
                years,
            } => Scenario::Loan(LoanInput {
                principal: *principal,
                annual_rate_pct: *rate,
                tenure_years: *years,
            }),

            Command::Growth {
                kind,
                monthly,
                yearly,
                lump_sum,
                opening,
                rate,
                years,
                stepup,
            } => {
                let (schedule, contribution, opening_balance) = match (monthly, yearly, lump_sum)
                {
                    (Some(m), _, _) => (ContributionSchedule::Monthly, Some(*m), *opening),
                    (_, Some(y), _) => (ContributionSchedule::Yearly, Some(*y), *opening),
                    _ => (ContributionSchedule::LumpSum, None, *lump_sum),
                };
                Scenario::Growth(GrowthInput {
                    kind: (*kind).into(),
                    schedule,
                    opening_balance,
                    contribution,
                    annual_rate_pct: *rate,
                    years: *years,
                    annual_stepup_pct: *stepup,
                })
            }

            Command::Budget {
                income,
                needs,
                wants,
                savings,
            } => {
                let actual = match (needs, wants, savings) {
                    (Some(n), Some(w), Some(s)) => Some(CategoryAmounts {
                        needs: *n,
                        wants: *w,
                        savings: *s,
                    }),
                    _ => None,
                };
                Scenario::Budget(BudgetInput {
                    monthly_income: *income,
                    actual,
                })
            }

            Command::Coverage {
                income,
                age,
                dependents,
                existing_cover,
                liabilities,
                expenses,
            } => Scenario::Coverage(CoverageInput {
                annual_income: *income,
                age: *age,
                dependents: *dependents,
                existing_cover: *existing_cover,
                outstanding_liabilities: *liabilities,
                monthly_expenses: *expenses,
            }),

            Command::Emergency {
                expenses,
                months,
                saved,
                saving,
            } => Scenario::EmergencyFund(EmergencyFundInput {
                monthly_expenses: *expenses,
                fund_months: *months,
                current_savings: *saved,
                monthly_savings: *saving,
            }),

            Command::RentVsBuy {
                price,
                down_payment_pct,
                rate,
                tenure,
                rent,
                rent_escalation,
                appreciation,
                maintenance,
                property_tax,
                horizon,
            } => Scenario::RentVsBuy(RentVsBuyInput {
                property_price: *price,
                down_payment_pct: *down_payment_pct,
                loan_rate_pct: *rate,
                loan_tenure_years: *tenure,
                monthly_rent: *rent,
                rent_escalation_pct: *rent_escalation,
                appreciation_pct: *appreciation,
                maintenance_pct: *maintenance,
                property_tax_pct: *property_tax,
                horizon_years: *horizon,
            }),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let scenario = cli.command.to_scenario();
    let outcome = ScenarioRunner::new().run(&scenario)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome);
    }

    if let Some(path) = &cli.csv {
        write_csv(path, &outcome)?;
        eprintln!("Breakdown written to: {}", path.display());
    }

    Ok(())
}

fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Loan(r) => {
            println!("EMI:            {:>14.0}", r.emi);
            println!("Total payment:  {:>14.0}", r.total_payment);
            println!("Total interest: {:>14.0}", r.total_interest);
            println!();
            println!(
                "{:>4} {:>14} {:>14} {:>14} {:>14}",
                "Year", "Opening", "Principal", "Interest", "Closing"
            );
            for row in &r.schedule {
                println!(
                    "{:>4} {:>14.0} {:>14.0} {:>14.0} {:>14.0}",
                    row.year,
                    row.opening_balance,
                    row.principal_paid,
                    row.interest_paid,
                    row.closing_balance
                );
            }
        }

        Outcome::Growth(r) => {
            println!("Maturity value:      {:>14.0}", r.maturity_value);
            println!("Total contributions: {:>14.0}", r.total_contributions);
            println!("Total interest:      {:>14.0}", r.total_interest);
            println!();
            println!(
                "{:>4} {:>14} {:>14} {:>14} {:>14}",
                "Year", "Opening", "Contribution", "Interest", "Closing"
            );
            for row in &r.breakdown {
                println!(
                    "{:>4} {:>14.0} {:>14.0} {:>14.0} {:>14.0}",
                    row.year, row.opening_balance, row.contribution, row.interest, row.closing_balance
                );
            }
            if r.years as usize > r.breakdown.len() {
                println!("... ({} more years in the projection)", r.years as usize - r.breakdown.len());
            }
        }

        Outcome::Budget(r) => {
            println!("Needs (50%):   {:>12.0}", r.recommended.needs);
            println!("Wants (30%):   {:>12.0}", r.recommended.wants);
            println!("Savings (20%): {:>12.0}", r.recommended.savings);
            if let (Some(variance), Some(balanced)) = (&r.variance, r.balanced) {
                println!();
                println!(
                    "Variance: needs {:+.0}, wants {:+.0}, savings {:+.0}",
                    variance.needs, variance.wants, variance.savings
                );
                println!("Balanced: {}", if balanced { "yes" } else { "no" });
            }
        }

        Outcome::Coverage(r) => {
            println!("Income multiple:  {:>14.0}", r.income_multiple_cover);
            println!("Future earnings:  {:>14.0}", r.future_earnings_cover);
            if let Some(needs) = r.needs_sum_cover {
                println!("Needs sum:        {:>14.0}", needs);
            }
            println!("Recommended:      {:>14.0}", r.recommended_cover);
        }

        Outcome::EmergencyFund(r) => {
            println!("Target:    {:>12.0}", r.target);
            println!("Shortfall: {:>12.0}", r.shortfall);
            println!("Funded:    {:>11.1}%", r.funded_pct);
            match r.months_to_target {
                Some(0) => println!("Months to target: already there"),
                Some(m) => println!("Months to target: {m}"),
                None => println!("Months to target: never at the current saving rate"),
            }
        }

        Outcome::RentVsBuy(r) => {
            println!(
                "{:>4} {:>14} {:>14} {:>14} {:>14}",
                "Year", "Rent (cum)", "Outlay (cum)", "Equity", "Net own cost"
            );
            for row in &r.rows {
                println!(
                    "{:>4} {:>14.0} {:>14.0} {:>14.0} {:>14.0}",
                    row.year,
                    row.cumulative_rent,
                    row.cumulative_outlay,
                    row.equity,
                    row.net_ownership_cost
                );
            }
            println!();
            match r.break_even_year {
                Some(year) => println!("Break-even in year {year}"),
                None => println!("No break-even within the horizon"),
            }
            let verdict = match r.verdict {
                Verdict::Buy => "buying favored",
                Verdict::Rent => "renting favored",
                Verdict::Neutral => "neutral",
            };
            println!("Verdict: {verdict}");
        }
    }
}

fn write_csv(path: &Path, outcome: &Outcome) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("cannot create {}", path.display()))?;

    match outcome {
        Outcome::Loan(r) => {
            for row in &r.schedule {
                writer.serialize(row)?;
            }
        }
        Outcome::Growth(r) => {
            for row in &r.breakdown {
                writer.serialize(row)?;
            }
        }
        Outcome::RentVsBuy(r) => {
            for row in &r.rows {
                writer.serialize(row)?;
            }
        }
        _ => bail!("this calculator has no breakdown rows to export"),
    }

    writer.flush()?;
    Ok(())
}
