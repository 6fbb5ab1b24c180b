//! Commission rates are stored as fractions and edited as percentages.

/// `0.075` becomes `"7.5"`.
pub fn fraction_to_percent_input(rate: f64) -> String {
    let percent = (rate * 100.0 * 1_000_000.0).round() / 1_000_000.0;
    format!("{}", percent)
}

/// `"10"` becomes `Some(0.1)`. Blank, negative or non-numeric input is `None`.
pub fn parse_percent(input: &str) -> Option<f64> {
    let value: f64 = input.trim().parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(value / 100.0)
}

pub fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{}%", fraction_to_percent_input(rate)),
        None => "-".to_string(),
    }
}
