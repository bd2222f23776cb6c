//! Conversion between annual and monthly compounding rates

use crate::error::{Result, SimulationError};

/// Compounding periods per year
pub const PERIODS_PER_YEAR: u32 = 12;

/// Check that a rate is finite and strictly greater than -100%
pub fn validate_rate(rate: f64) -> Result<()> {
    if !rate.is_finite() || rate <= -1.0 {
        return Err(SimulationError::InvalidRate { rate });
    }
    Ok(())
}

/// Convert an annual rate to the monthly rate that compounds to it over a year
///
/// `p = (1 + r)^(1/12) - 1`. No rounding is applied.
///
/// # Errors
/// `InvalidRate` when `annual_rate <= -1` or is not finite.
pub fn monthly_rate(annual_rate: f64) -> Result<f64> {
    validate_rate(annual_rate)?;
    Ok((1.0 + annual_rate).powf(1.0 / PERIODS_PER_YEAR as f64) - 1.0)
}

/// Convert a monthly rate back to its annual equivalent: `(1 + p)^12 - 1`
pub fn annual_rate(monthly_rate: f64) -> Result<f64> {
    validate_rate(monthly_rate)?;
    Ok((1.0 + monthly_rate).powi(PERIODS_PER_YEAR as i32) - 1.0)
}
