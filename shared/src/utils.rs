// Helpers shared by the engine and the dashboard.

/// Rounds to two decimal places, as shown in the results table. Ties go to
/// the even digit.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

pub mod brazilian_format {
    use anyhow::{anyhow, Result};
    use std::str::FromStr;

    // Parses decimals like "1.234,56" or "123,45" into f64
    pub fn parse_decimal(s: &str) -> Result<f64> {
        let normalized = s.trim()
            .replace('.', "")  // Remove thousand separators
            .replace(',', "."); // Replace decimal separator

        f64::from_str(&normalized)
            .map_err(|e| anyhow!("Failed to parse decimal '{}': {}", s, e))
    }

    /// "1234.5" -> "1.234,50" with `decimals` places.
    pub fn format_decimal(value: f64, decimals: usize) -> String {
        let formatted = format!("{:.decimals$}", value.abs(), decimals = decimals);
        let (int_part, frac_part) = match formatted.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (formatted.as_str(), None),
        };

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }

        let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') { "-" } else { "" };
        match frac_part {
            Some(frac) => format!("{}{},{}", sign, grouped, frac),
            None => format!("{}{}", sign, grouped),
        }
    }

    pub fn format_brl(value: f64) -> String {
        format!("R$ {}", format_decimal(value, 2))
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_rounds_to_nearest() {
        assert_eq!(round2(28.456), 28.46);
        assert_eq!(round2(49.0), 49.0);
        assert_eq!(round2(10.004), 10.0);
    }

    #[test]
    fn round2_sends_ties_to_even() {
        assert_eq!(round2(50.125), 50.12);
        assert_eq!(round2(28.125), 28.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(-50.125), -50.12);
    }
}
