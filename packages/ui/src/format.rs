//! Date display helpers.

use chrono::NaiveDate;

/// Today as an ISO `YYYY-MM-DD` string, for date-input prefills.
pub fn today_iso() -> String {
    chrono::Local::now().date_naive().to_string()
}

/// Render an ISO date (or datetime) like `February 15, 2025`. Values that do
/// not parse pass through unchanged.
pub fn long_date(value: &str) -> String {
    let date_part = value.split('T').next().unwrap_or(value);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_date_from_plain_date() {
        assert_eq!(long_date("2025-02-15"), "February 15, 2025");
        assert_eq!(long_date("2024-11-03"), "November 3, 2024");
    }

    #[test]
    fn test_long_date_from_datetime() {
        assert_eq!(long_date("2024-11-15T10:30:00Z"), "November 15, 2024");
    }

    #[test]
    fn test_unparseable_value_passes_through() {
        assert_eq!(long_date("soon"), "soon");
        assert_eq!(long_date(""), "");
    }

    #[test]
    fn test_today_iso_shape() {
        let today = today_iso();
        assert_eq!(today.len(), 10);
        assert!(NaiveDate::parse_from_str(&today, "%Y-%m-%d").is_ok());
    }
}
