use chrono::NaiveDate;

use crate::server::error::AppError;

/// Parses a date in the client-facing DD/MM/YYYY format.
///
/// # Arguments
/// - `value` - The date string to parse, e.g. `"01/12/2025"`
///
/// # Returns
/// - `Ok(NaiveDate)` - Successfully parsed date
/// - `Err(AppError::BadRequest)` - The string is not a valid DD/MM/YYYY date
pub fn parse_date_dmy(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%d/%m/%Y").map_err(|_| {
        AppError::BadRequest(format!(
            "Invalid date '{}', expected DD/MM/YYYY format",
            value
        ))
    })
}

/// Resolves a month/year pair to the date range `[first day, first day of
/// the next month)`.
///
/// # Returns
/// - `Ok((start, end))` - Half-open range covering the month
/// - `Err(AppError::BadRequest)` - Month outside 1-12
pub fn month_bounds(month: u32, year: i32) -> Result<(NaiveDate, NaiveDate), AppError> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid month/year: {}/{}", month, year)))?;

    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| AppError::BadRequest(format!("Invalid month/year: {}/{}", month, year)))?;

    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_bounds_cover_a_calendar_month() {
        let (start, end) = month_bounds(10, 2025).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 10, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2025, 11, 1).unwrap());
    }

    #[test]
    fn month_bounds_roll_over_december() {
        let (start, end) = month_bounds(12, 2025).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
    }

    #[test]
    fn month_bounds_reject_month_thirteen() {
        assert!(month_bounds(13, 2025).is_err());
    }

    #[test]
    fn parses_valid_date() {
        let date = parse_date_dmy("01/12/2025").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let date = parse_date_dmy(" 15/06/2026 ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 6, 15).unwrap());
    }

    #[test]
    fn rejects_iso_format() {
        assert!(parse_date_dmy("2025-12-01").is_err());
    }

    #[test]
    fn rejects_out_of_range_day() {
        assert!(parse_date_dmy("32/01/2025").is_err());
    }
}
