//! Formatting utilities used for grid and form outputs.

/// Payment as shown in the grid: always two decimals.
pub fn format_payment(value: f64) -> String {
    format!("{:.2}", value)
}

/// Payment as put back into a form field: shortest exact form
/// (`150` rather than `150.00`), so re-parsing yields the same value.
pub fn payment_field(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_payment_has_two_decimals() {
        assert_eq!(format_payment(150.0), "150.00");
        assert_eq!(format_payment(99.999), "100.00");
    }

    #[test]
    fn field_payment_reparses_exactly() {
        for v in [150.0, 0.1, 1234.56] {
            assert_eq!(payment_field(v).parse::<f64>().unwrap(), v);
        }
    }
}
