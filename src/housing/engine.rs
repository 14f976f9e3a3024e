//! Rent-vs-buy comparison engine

use log::debug;
use serde::{Deserialize, Serialize};

use super::comparison::{ComparisonRow, RentVsBuyResult, Verdict};
use super::state::{OwnershipState, RentalState};
use crate::validate::{Bounds, ValidationError};

const PROPERTY_PRICE: Bounds = Bounds::new("property_price", 500_000.0, 500_000_000.0);
const DOWN_PAYMENT_PCT: Bounds = Bounds::new("down_payment_pct", 0.0, 90.0);
const LOAN_RATE: Bounds = Bounds::new("loan_rate_pct", 0.0, 20.0);
const LOAN_TENURE: Bounds = Bounds::new("loan_tenure_years", 1.0, 30.0);
const MONTHLY_RENT: Bounds = Bounds::new("monthly_rent", 1_000.0, 10_000_000.0);
const RENT_ESCALATION: Bounds = Bounds::new("rent_escalation_pct", 0.0, 20.0);
const APPRECIATION: Bounds = Bounds::new("appreciation_pct", 0.0, 20.0);
const MAINTENANCE: Bounds = Bounds::new("maintenance_pct", 0.0, 5.0);
const PROPERTY_TAX: Bounds = Bounds::new("property_tax_pct", 0.0, 3.0);
const HORIZON: Bounds = Bounds::new("horizon_years", 1.0, 30.0);

/// The verdict is Neutral while the final-year difference stays within
/// this share of the property price.
const VERDICT_THRESHOLD: f64 = 0.10;

/// Inputs for the rent-vs-buy comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentVsBuyInput {
    /// Purchase price of the property
    pub property_price: f64,

    /// Down payment as a percentage of the price; defaults to 20
    pub down_payment_pct: Option<f64>,

    /// Annual loan rate in percent (0 allowed for a free-financing
    /// comparison)
    pub loan_rate_pct: f64,

    /// Loan tenure in whole years
    pub loan_tenure_years: u32,

    /// Starting monthly rent for the rental scenario
    pub monthly_rent: f64,

    /// Annual rent escalation in percent; defaults to 5
    pub rent_escalation_pct: Option<f64>,

    /// Annual property appreciation in percent; defaults to 5
    pub appreciation_pct: Option<f64>,

    /// Annual maintenance as a percentage of property value; defaults to 1
    pub maintenance_pct: Option<f64>,

    /// Annual property tax as a percentage of property value; defaults
    /// to 0.5
    pub property_tax_pct: Option<f64>,

    /// Comparison horizon in whole years
    pub horizon_years: u32,
}

struct Validated {
    price: f64,
    down_payment: f64,
    monthly_rate: f64,
    tenure_months: u32,
    monthly_rent: f64,
    escalation: f64,
    appreciation: f64,
    holding_cost_rate: f64,
    horizon: u32,
}

impl RentVsBuyInput {
    fn validate(&self) -> Result<Validated, ValidationError> {
        let price = PROPERTY_PRICE.check(self.property_price)?;
        let dp_pct = DOWN_PAYMENT_PCT.check_or(self.down_payment_pct, 20.0)?;
        let rate = LOAN_RATE.check(self.loan_rate_pct)?;
        LOAN_TENURE.check(self.loan_tenure_years as f64)?;
        let monthly_rent = MONTHLY_RENT.check(self.monthly_rent)?;
        let escalation = RENT_ESCALATION.check_or(self.rent_escalation_pct, 5.0)?;
        let appreciation = APPRECIATION.check_or(self.appreciation_pct, 5.0)?;
        let maintenance = MAINTENANCE.check_or(self.maintenance_pct, 1.0)?;
        let tax = PROPERTY_TAX.check_or(self.property_tax_pct, 0.5)?;
        HORIZON.check(self.horizon_years as f64)?;

        Ok(Validated {
            price,
            down_payment: price * dp_pct / 100.0,
            monthly_rate: rate / 12.0 / 100.0,
            tenure_months: self.loan_tenure_years * 12,
            monthly_rent,
            escalation: escalation / 100.0,
            appreciation: appreciation / 100.0,
            holding_cost_rate: (maintenance + tax) / 100.0,
            horizon: self.horizon_years,
        })
    }
}

/// Level installment for the loan; the 0% branch is reachable here
/// because free financing is a valid comparison scenario.
fn annuity_payment(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    if monthly_rate.abs() < 1e-12 {
        return principal / months as f64;
    }
    let factor = (1.0 + monthly_rate).powi(months as i32);
    principal * monthly_rate * factor / (factor - 1.0)
}

/// Compare renting against buying over the horizon
///
/// Both scenarios advance independently year by year. Break-even is the
/// first year where cumulative rent reaches the net ownership cost
/// (outlay minus equity); the verdict classifies the final-year
/// difference against 10% of the property price.
pub fn compute(input: &RentVsBuyInput) -> Result<RentVsBuyResult, ValidationError> {
    let v = input.validate()?;

    let loan_amount = v.price - v.down_payment;
    let installment = annuity_payment(loan_amount, v.monthly_rate, v.tenure_months);

    let mut ownership = OwnershipState::new(v.price, loan_amount, v.down_payment);
    let mut rental = RentalState::new(v.monthly_rent);

    let mut rows = Vec::with_capacity(v.horizon as usize);
    let mut break_even_year = None;

    for year in 1..=v.horizon {
        ownership.advance_year(
            installment,
            v.monthly_rate,
            v.holding_cost_rate,
            v.appreciation,
        );
        rental.advance_year(v.escalation);

        let net_ownership_cost = ownership.net_cost();
        if break_even_year.is_none() && rental.cumulative_rent >= net_ownership_cost {
            debug!("rent overtakes ownership in year {year}");
            break_even_year = Some(year);
        }

        rows.push(ComparisonRow {
            year,
            cumulative_rent: rental.cumulative_rent,
            cumulative_outlay: ownership.cumulative_outlay,
            property_value: ownership.property_value,
            loan_balance: ownership.loan_balance,
            equity: ownership.equity(),
            net_ownership_cost,
        });
    }

    let final_rent_cost = rental.cumulative_rent;
    let final_ownership_cost = ownership.net_cost();
    let difference = final_rent_cost - final_ownership_cost;
    let threshold = v.price * VERDICT_THRESHOLD;
    let verdict = if difference > threshold {
        Verdict::Buy
    } else if difference < -threshold {
        Verdict::Rent
    } else {
        Verdict::Neutral
    };

    Ok(RentVsBuyResult {
        rows,
        break_even_year,
        final_rent_cost,
        final_ownership_cost,
        verdict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_input() -> RentVsBuyInput {
        RentVsBuyInput {
            property_price: 7_500_000.0,
            down_payment_pct: Some(20.0),
            loan_rate_pct: 8.5,
            loan_tenure_years: 20,
            monthly_rent: 25_000.0,
            rent_escalation_pct: Some(5.0),
            appreciation_pct: Some(5.0),
            maintenance_pct: Some(1.0),
            property_tax_pct: Some(0.5),
            horizon_years: 15,
        }
    }

    #[test]
    fn test_rows_cover_horizon() {
        let result = compute(&test_input()).unwrap();

        assert_eq!(result.rows.len(), 15);
        assert_eq!(result.rows.last().unwrap().year, 15);
        assert_relative_eq!(
            result.final_rent_cost,
            result.rows.last().unwrap().cumulative_rent
        );
    }

    #[test]
    fn test_scenarios_move_in_expected_directions() {
        let result = compute(&test_input()).unwrap();

        for pair in result.rows.windows(2) {
            // Rent only accumulates; the loan only amortizes; the
            // property only appreciates.
            assert!(pair[1].cumulative_rent > pair[0].cumulative_rent);
            assert!(pair[1].loan_balance < pair[0].loan_balance);
            assert!(pair[1].property_value > pair[0].property_value);
        }
    }

    #[test]
    fn test_zero_growth_free_loan_terminates() {
        let input = RentVsBuyInput {
            property_price: 5_000_000.0,
            down_payment_pct: Some(20.0),
            loan_rate_pct: 0.0,
            loan_tenure_years: 20,
            monthly_rent: 20_000.0,
            rent_escalation_pct: Some(0.0),
            appreciation_pct: Some(0.0),
            maintenance_pct: Some(1.0),
            property_tax_pct: Some(0.0),
            horizon_years: 30,
        };
        let result = compute(&input).unwrap();

        assert_eq!(result.rows.len(), 30);
        // With a free loan, net ownership cost is holding costs only:
        // 1% of a flat 5M value per year, against 240k rent per year.
        assert_eq!(result.break_even_year, Some(1));
        assert_eq!(result.verdict, Verdict::Buy);
    }

    #[test]
    fn test_break_even_absent_when_rent_stays_cheap() {
        let mut input = test_input();
        input.monthly_rent = 1_000.0;
        input.rent_escalation_pct = Some(0.0);
        input.appreciation_pct = Some(0.0);
        input.horizon_years = 5;
        let result = compute(&input).unwrap();

        assert_eq!(result.break_even_year, None);
        assert_eq!(result.verdict, Verdict::Rent);
    }

    #[test]
    fn test_equity_identity_per_row() {
        let result = compute(&test_input()).unwrap();

        for row in &result.rows {
            assert_relative_eq!(
                row.equity,
                row.property_value - row.loan_balance,
                max_relative = 1e-12
            );
            assert_relative_eq!(
                row.net_ownership_cost,
                row.cumulative_outlay - row.equity,
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn test_rate_zero_is_valid_but_negative_is_not() {
        let mut input = test_input();
        input.loan_rate_pct = 0.0;
        assert!(compute(&input).is_ok());

        input.loan_rate_pct = -1.0;
        assert_eq!(compute(&input).unwrap_err().field(), "loan_rate_pct");
    }
}
