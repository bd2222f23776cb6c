//! Balance series produced by simulating one scenario

use serde::Serialize;

/// Nominal and inflation-adjusted balances for periods `0..=horizon`
///
/// Both sequences always have the same, non-zero length, and index 0 holds the
/// initial balance in both. Construction is limited to the engine so those
/// invariants cannot be broken from outside.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    nominal: Vec<f64>,
    real: Vec<f64>,
}

impl Series {
    pub(crate) fn with_capacity(initial_balance: f64, horizon: u32) -> Self {
        let len = horizon as usize + 1;
        let mut nominal = Vec::with_capacity(len);
        let mut real = Vec::with_capacity(len);
        nominal.push(initial_balance);
        real.push(initial_balance);
        Self { nominal, real }
    }

    pub(crate) fn push(&mut self, nominal: f64, real: f64) {
        self.nominal.push(nominal);
        self.real.push(real);
    }

    pub fn nominal(&self) -> &[f64] {
        &self.nominal
    }

    pub fn real(&self) -> &[f64] {
        &self.real
    }

    /// Number of simulated periods (series length minus one)
    pub fn horizon(&self) -> u32 {
        (self.nominal.len() - 1) as u32
    }

    pub fn len(&self) -> usize {
        self.nominal.len()
    }

    /// Always false; a series holds at least the initial balance
    pub fn is_empty(&self) -> bool {
        self.nominal.is_empty()
    }

    pub fn terminal_nominal(&self) -> f64 {
        self.nominal.last().copied().unwrap_or(0.0)
    }

    pub fn terminal_real(&self) -> f64 {
        self.real.last().copied().unwrap_or(0.0)
    }

    /// Iterate `(period, nominal, real)`
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64, f64)> + '_ {
        self.nominal
            .iter()
            .zip(&self.real)
            .enumerate()
            .map(|(period, (&nominal, &real))| (period as u32, nominal, real))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_point_series() {
        let series = Series::with_capacity(250.0, 0);
        assert_eq!(series.len(), 1);
        assert!(!series.is_empty());
        assert_eq!(series.horizon(), 0);
        assert_eq!(series.terminal_nominal(), 250.0);
        assert_eq!(series.terminal_real(), 250.0);
    }

    #[test]
    fn test_push_and_iter() {
        let mut series = Series::with_capacity(100.0, 2);
        series.push(110.0, 105.0);
        series.push(121.0, 110.0);

        let rows: Vec<_> = series.iter().collect();
        assert_eq!(rows, [(0, 100.0, 100.0), (1, 110.0, 105.0), (2, 121.0, 110.0)]);
        assert_eq!(series.horizon(), 2);
        assert_eq!(series.terminal_nominal(), 121.0);
        assert_eq!(series.terminal_real(), 110.0);
    }
}
