use chrono::NaiveDate;

/// Format users type and read dates in.
pub const DISPLAY_FORMAT: &str = "%d-%m-%Y";

/// Format dates are persisted in.
pub const STORAGE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `dd-mm-yyyy` date, rejecting impossible calendar days.
pub fn parse_display_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DISPLAY_FORMAT).ok()
}

pub fn parse_storage_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, STORAGE_FORMAT).ok()
}

pub fn to_display(d: NaiveDate) -> String {
    d.format(DISPLAY_FORMAT).to_string()
}

pub fn to_storage(d: NaiveDate) -> String {
    d.format(STORAGE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_date_is_normalized_for_storage() {
        let d = parse_display_date("01-06-2024").unwrap();
        assert_eq!(to_storage(d), "2024-06-01");
    }

    #[test]
    fn impossible_calendar_days_are_rejected() {
        assert!(parse_display_date("31-02-2024").is_none());
        assert!(parse_display_date("29-02-2023").is_none());
        assert!(parse_display_date("29-02-2024").is_some());
    }

    #[test]
    fn wrong_layout_is_rejected() {
        assert!(parse_display_date("2024-06-01").is_none());
        assert!(parse_display_date("01/06/2024").is_none());
        assert!(parse_display_date("").is_none());
    }

    #[test]
    fn stored_date_survives_display_round_trip() {
        for stored in ["2024-06-01", "1999-12-31", "2024-02-29", "2030-01-09"] {
            let d = parse_storage_date(stored).unwrap();
            let reparsed = parse_display_date(&to_display(d)).unwrap();
            assert_eq!(to_storage(reparsed), stored);
        }
    }
}
