//! Accumulation state tracking for a single scenario

/// Balance of one scenario at a point in the horizon
#[derive(Debug, Clone)]
pub struct AccumulationState {
    /// Current period (0 = before any growth or contribution)
    pub period: u32,

    /// Nominal balance at end of period
    pub nominal_balance: f64,

    /// Cumulative inflation factor `(1 + inflation)^period`
    pub price_level: f64,
}

impl AccumulationState {
    /// Initialize state at period 0
    pub fn new(initial_balance: f64) -> Self {
        Self {
            period: 0,
            nominal_balance: initial_balance,
            price_level: 1.0,
        }
    }

    /// Advance one period: grow the balance, then add the contribution
    ///
    /// The contribution earns nothing in the period it is made.
    pub fn advance_period(&mut self, periodic_rate: f64, contribution: f64, inflation_rate: f64) {
        self.period += 1;
        self.nominal_balance = self.nominal_balance * (1.0 + periodic_rate) + contribution;
        // Compounded from period 0, not rolled forward from the prior period
        self.price_level = (1.0 + inflation_rate).powf(self.period as f64);
    }

    /// Nominal balance deflated to period-0 purchasing power
    pub fn real_balance(&self) -> f64 {
        self.nominal_balance / self.price_level
    }
}
