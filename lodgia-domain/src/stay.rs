//! Nights-of-stay and price arithmetic for the booking flow.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

const SECONDS_PER_DAY: i64 = 86_400;

/// Number of nights between two calendar dates. Returns 0 when
/// `check_out <= check_in`, guarding against negative-night bookings.
pub fn calculate_nights(check_in: NaiveDate, check_out: NaiveDate) -> u32 {
    if check_out <= check_in {
        return 0;
    }
    (check_out - check_in).num_days() as u32
}

/// String-input variant. Accepts `YYYY-MM-DD` (interpreted as UTC midnight)
/// or an RFC 3339 datetime, and takes the ceiling of the day difference so a
/// checkout instant that lands past midnight still counts a whole night.
pub fn calculate_nights_between(check_in: &str, check_out: &str) -> u32 {
    let (Some(start), Some(end)) = (parse_utc_instant(check_in), parse_utc_instant(check_out))
    else {
        return 0;
    };
    if end <= start {
        return 0;
    }
    // seconds > 0 here, so plain integer ceiling division is safe.
    let seconds = (end - start).num_seconds();
    ((seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY) as u32
}

fn parse_utc_instant(input: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }
    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|instant| instant.with_timezone(&Utc))
}

/// Long-form date for display, fixed en-US style, UTC. Absent or
/// unparseable input renders as "N/A".
pub fn format_date(date: Option<&str>) -> String {
    let Some(raw) = date.filter(|value| !value.is_empty()) else {
        return "N/A".to_string();
    };
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => format_calendar_date(date),
        Err(_) => "N/A".to_string(),
    }
}

pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Two-decimal dollar rendering, e.g. `"$1250.00"`.
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Total price for a stay.
pub fn stay_total(nights: u32, price_per_night: f64) -> f64 {
    f64::from(nights) * price_per_night
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid date")
    }

    #[test]
    fn five_nights_across_november() {
        assert_eq!(calculate_nights(date("2025-11-20"), date("2025-11-25")), 5);
        assert_eq!(calculate_nights_between("2025-11-20", "2025-11-25"), 5);
    }

    #[test]
    fn same_day_and_inverted_ranges_are_zero_nights() {
        assert_eq!(calculate_nights(date("2025-11-20"), date("2025-11-20")), 0);
        assert_eq!(calculate_nights(date("2025-11-25"), date("2025-11-20")), 0);
        assert_eq!(calculate_nights_between("2025-11-25", "2025-11-20"), 0);
    }

    #[test]
    fn checkout_past_midnight_rounds_up_to_a_whole_night() {
        // Timezone confusion can hand us an instant rather than a date; the
        // ceiling keeps the night count integral.
        assert_eq!(
            calculate_nights_between("2025-11-20", "2025-11-22T01:30:00Z"),
            3
        );
        assert_eq!(
            calculate_nights_between("2025-11-20T00:00:00Z", "2025-11-21T00:00:00Z"),
            1
        );
    }

    #[test]
    fn unparseable_inputs_are_zero_nights() {
        assert_eq!(calculate_nights_between("not-a-date", "2025-11-25"), 0);
        assert_eq!(calculate_nights_between("2025-11-20", ""), 0);
    }

    #[test]
    fn long_form_date_rendering() {
        assert_eq!(format_date(Some("2025-11-20")), "November 20, 2025");
        assert_eq!(format_date(Some("2025-03-05")), "March 5, 2025");
        assert_eq!(format_date(None), "N/A");
        assert_eq!(format_date(Some("")), "N/A");
        assert_eq!(format_date(Some("garbage")), "N/A");
    }

    #[test]
    fn total_price_renders_with_two_decimals() {
        let nights = calculate_nights(date("2025-11-20"), date("2025-11-25"));
        assert_eq!(format_price(stay_total(nights, 250.0)), "$1250.00");
        assert_eq!(format_price(stay_total(3, 99.5)), "$298.50");
        assert_eq!(format_price(0.0), "$0.00");
    }
}
