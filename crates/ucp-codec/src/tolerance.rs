//! Concise-uncertainty notation parsing.
//!
//! The concise form of uncertainty notation writes the standard uncertainty
//! in parentheses, scaled to the least-significant digits of the quoted
//! value: `1.23(4)` means `1.23 ± 0.04`. See the NIST reference on
//! uncertainty of measurement results:
//! <https://physics.nist.gov/cgi-bin/cuu/Info/Constants/definitions.html>
//!
//! The coprocessor models such a token as a uniform distribution; this
//! module only derives the interval endpoints that become an operand pair.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ToleranceError;

/// Interval derived from one concise-uncertainty token.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToleranceInterval {
    /// Lower endpoint (`value - uncertainty * 10^order`).
    pub min: f64,
    /// Upper endpoint (`value + uncertainty * 10^order`).
    pub max: f64,
}

impl ToleranceInterval {
    /// Parse a `<number>(<digits>)` token.
    ///
    /// The uncertainty digits apply to the least-significant decimal place
    /// of the value: with `d` digits after the decimal point, the
    /// uncertainty is scaled by `10^-d`. A value without a decimal point
    /// has order zero. Only `.` is accepted as the decimal separator.
    ///
    /// # Errors
    ///
    /// - [`ToleranceError::MissingParentheses`] unless the token contains
    ///   exactly one `(` and one trailing `)`
    /// - [`ToleranceError::InvalidValue`] when the value part is not a
    ///   number
    /// - [`ToleranceError::InvalidUncertainty`] when the parenthesized part
    ///   is not a non-negative integer
    pub fn parse(text: &str) -> Result<Self, ToleranceError> {
        if text.matches('(').count() != 1 || text.matches(')').count() != 1 {
            return Err(ToleranceError::MissingParentheses);
        }

        let (value_part, rest) = text
            .split_once('(')
            .ok_or(ToleranceError::MissingParentheses)?;
        let uncertainty_part = rest
            .strip_suffix(')')
            .ok_or(ToleranceError::MissingParentheses)?;

        // Order of the least-significant quoted digit.
        let order = match value_part.split_once('.') {
            Some((_, decimal_part)) => -(decimal_part.len() as i32),
            None => 0,
        };

        let value: f64 = value_part
            .parse()
            .map_err(|_| ToleranceError::InvalidValue {
                text: value_part.to_string(),
            })?;
        let uncertainty: u64 =
            uncertainty_part
                .parse()
                .map_err(|_| ToleranceError::InvalidUncertainty {
                    text: uncertainty_part.to_string(),
                })?;

        let half_width = uncertainty as f64 * 10f64.powi(order);
        Ok(Self {
            min: value - half_width,
            max: value + half_width,
        })
    }
}

impl FromStr for ToleranceInterval {
    type Err = ToleranceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
