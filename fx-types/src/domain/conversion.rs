//! A single conversion and its outcome.

use rust_decimal::{Decimal, RoundingStrategy};

use super::currency::CurrencyCode;

/// One form submission: convert `amount` units of `from` into `to`.
///
/// `amount` is kept as submitted; it is echoed verbatim in the display line
/// and only parsed for the arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub amount: String,
}

impl ConversionRequest {
    pub fn new(
        from: impl Into<CurrencyCode>,
        to: impl Into<CurrencyCode>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount: amount.into(),
        }
    }

    /// Numeric value of the submitted amount. Blank input counts as zero;
    /// anything else that is not a decimal number yields `NaN`.
    pub fn amount_value(&self) -> f64 {
        let raw = self.amount.trim();
        if raw.is_empty() {
            return 0.0;
        }
        raw.parse().unwrap_or(f64::NAN)
    }

    /// Applies `rate` and formats the line shown to the user,
    /// e.g. `100 USD = 92.00 EUR`.
    pub fn display_with_rate(&self, rate: f64) -> String {
        format!(
            "{} {} = {} {}",
            self.amount,
            self.from,
            fixed_two(self.amount_value() * rate),
            self.to
        )
    }
}

/// Two-decimal rendering of `value`; exact midpoints round away from zero.
fn fixed_two(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    match Decimal::from_f64_retain(value) {
        Some(exact) => format!(
            "{:.2}",
            exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        ),
        None => format!("{value:.2}"),
    }
}

/// Outcome of a conversion: either the display text or the error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionResult {
    Converted { display_text: String },
    Failed { message: String },
}

impl ConversionResult {
    pub fn display_text(&self) -> Option<&str> {
        match self {
            ConversionResult::Converted { display_text } => Some(display_text),
            ConversionResult::Failed { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ConversionResult::Converted { .. } => None,
            ConversionResult::Failed { message } => Some(message),
        }
    }
}

impl<E: std::fmt::Display> From<Result<String, E>> for ConversionResult {
    fn from(res: Result<String, E>) -> Self {
        match res {
            Ok(display_text) => ConversionResult::Converted { display_text },
            Err(e) => ConversionResult::Failed {
                message: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_rounds_to_two_places() {
        let req = ConversionRequest::new("USD", "EUR", "100");
        assert_eq!(req.display_with_rate(0.92), "100 USD = 92.00 EUR");
    }

    #[test]
    fn test_display_keeps_fractional_amount() {
        let req = ConversionRequest::new("EUR", "USD", "12.5");
        assert_eq!(req.display_with_rate(1.1), "12.5 EUR = 13.75 USD");
    }

    #[test]
    fn test_display_rounds_midpoint_up() {
        let req = ConversionRequest::new("USD", "EUR", "1");
        assert_eq!(req.display_with_rate(1.125), "1 USD = 1.13 EUR");
        assert_eq!(req.display_with_rate(0.125), "1 USD = 0.13 EUR");
    }

    #[test]
    fn test_display_echoes_amount_as_submitted() {
        let req = ConversionRequest::new("USD", "EUR", "100.50");
        assert_eq!(req.display_with_rate(0.92), "100.50 USD = 92.46 EUR");
    }

    #[test]
    fn test_amount_value() {
        assert_eq!(ConversionRequest::new("USD", "EUR", " 42.5 ").amount_value(), 42.5);
        assert!(ConversionRequest::new("USD", "EUR", "abc").amount_value().is_nan());
        assert_eq!(ConversionRequest::new("USD", "EUR", "").amount_value(), 0.0);
        assert_eq!(ConversionRequest::new("USD", "EUR", "  ").amount_value(), 0.0);
    }

    #[test]
    fn test_blank_amount_converts_to_zero() {
        let req = ConversionRequest::new("USD", "EUR", "");
        assert_eq!(req.display_with_rate(0.92), " USD = 0.00 EUR");
    }

    #[test]
    fn test_nan_amount_is_displayed() {
        let req = ConversionRequest::new("USD", "EUR", "abc");
        assert_eq!(req.display_with_rate(0.92), "abc USD = NaN EUR");
    }

    #[test]
    fn test_fixed_two_pads_and_handles_infinity() {
        assert_eq!(fixed_two(92.0), "92.00");
        assert_eq!(fixed_two(-2.675), "-2.67");
        assert_eq!(fixed_two(f64::INFINITY), "Infinity");
    }

    #[test]
    fn test_result_exposes_exactly_one_side() {
        let ok = ConversionResult::Converted {
            display_text: "1 USD = 0.92 EUR".into(),
        };
        assert_eq!(ok.display_text(), Some("1 USD = 0.92 EUR"));
        assert_eq!(ok.error_message(), None);

        let failed = ConversionResult::Failed {
            message: "boom".into(),
        };
        assert_eq!(failed.display_text(), None);
        assert_eq!(failed.error_message(), Some("boom"));
    }

    #[test]
    fn test_from_result() {
        let res: ConversionResult = Err::<String, _>("upstream down").into();
        assert_eq!(res.display_text(), None);
        assert_eq!(res.error_message(), Some("upstream down"));
    }
}
