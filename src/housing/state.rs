//! Per-scenario state for the rent-vs-buy comparison
//!
//! The two scenarios advance independently, one year at a time; neither
//! ever reads the other's state.

/// Ownership scenario: amortizing loan, appreciating property, recurring
/// holding costs
#[derive(Debug, Clone)]
pub struct OwnershipState {
    /// Outstanding loan balance
    pub loan_balance: f64,

    /// Current market value of the property
    pub property_value: f64,

    /// Cash paid out so far: down payment, installments, maintenance, tax
    pub cumulative_outlay: f64,
}

impl OwnershipState {
    pub fn new(property_price: f64, loan_amount: f64, down_payment: f64) -> Self {
        Self {
            loan_balance: loan_amount,
            property_value: property_price,
            cumulative_outlay: down_payment,
        }
    }

    /// Advance one year: twelve installments amortize the balance (the
    /// loan may pay off mid-year; payments stop once it does), holding
    /// costs accrue on the property value, then the value appreciates.
    pub fn advance_year(
        &mut self,
        installment: f64,
        monthly_rate: f64,
        holding_cost_rate: f64,
        appreciation_rate: f64,
    ) {
        for _month in 1..=12 {
            if self.loan_balance <= 0.0 {
                break;
            }
            let interest = self.loan_balance * monthly_rate;
            let principal = (installment - interest).min(self.loan_balance);
            self.loan_balance -= principal;
            self.cumulative_outlay += interest + principal;
        }
        self.loan_balance = self.loan_balance.max(0.0);

        self.cumulative_outlay += self.property_value * holding_cost_rate;
        self.property_value *= 1.0 + appreciation_rate;
    }

    /// Property value less the outstanding loan
    pub fn equity(&self) -> f64 {
        self.property_value - self.loan_balance
    }

    /// Cash outlay net of accumulated equity
    pub fn net_cost(&self) -> f64 {
        self.cumulative_outlay - self.equity()
    }
}

/// Rental scenario: escalating rent, nothing owned
#[derive(Debug, Clone)]
pub struct RentalState {
    /// Monthly rent for the current year
    pub monthly_rent: f64,

    /// Rent paid so far
    pub cumulative_rent: f64,
}

impl RentalState {
    pub fn new(starting_monthly_rent: f64) -> Self {
        Self {
            monthly_rent: starting_monthly_rent,
            cumulative_rent: 0.0,
        }
    }

    /// Advance one year: pay twelve months at the current rent, then
    /// escalate for the next year.
    pub fn advance_year(&mut self, escalation_rate: f64) {
        self.cumulative_rent += self.monthly_rent * 12.0;
        self.monthly_rent *= 1.0 + escalation_rate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rent_escalates_after_the_year() {
        let mut rent = RentalState::new(25_000.0);
        rent.advance_year(0.10);

        assert_relative_eq!(rent.cumulative_rent, 300_000.0);
        assert_relative_eq!(rent.monthly_rent, 27_500.0);
    }

    #[test]
    fn test_free_loan_amortizes_linearly() {
        let mut own = OwnershipState::new(1_000_000.0, 800_000.0, 200_000.0);
        // 0% loan over 10 years: installment is balance / months
        let installment = 800_000.0 / 120.0;
        own.advance_year(installment, 0.0, 0.0, 0.0);

        assert_relative_eq!(own.loan_balance, 800_000.0 * 0.9, max_relative = 1e-12);
        assert_relative_eq!(own.cumulative_outlay, 280_000.0, max_relative = 1e-12);
        assert_relative_eq!(own.property_value, 1_000_000.0);
    }

    #[test]
    fn test_payments_stop_once_paid_off() {
        let mut own = OwnershipState::new(1_000_000.0, 60_000.0, 940_000.0);
        let installment = 10_000.0;
        own.advance_year(installment, 0.0, 0.0, 0.0);

        assert_relative_eq!(own.loan_balance, 0.0);
        // Only 6 installments were needed
        assert_relative_eq!(own.cumulative_outlay, 1_000_000.0, max_relative = 1e-12);

        let outlay_before = own.cumulative_outlay;
        own.advance_year(installment, 0.0, 0.0, 0.0);
        assert_relative_eq!(own.cumulative_outlay, outlay_before);
    }
}
