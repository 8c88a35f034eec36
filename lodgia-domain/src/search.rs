use chrono::NaiveDate;
use serde::Deserialize;

/// The last-submitted search, carried from the search page to the booking
/// confirmation flow. A missing date means "no criteria yet"; consumers must
/// render an explicit error state rather than proceed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub guest_capacity: u32,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            check_in_date: None,
            check_out_date: None,
            guest_capacity: 1,
        }
    }
}

impl SearchCriteria {
    /// True when the booking flow has everything it needs. No cross-field
    /// validation beyond presence; a past check-in date is accepted.
    pub fn is_complete(&self) -> bool {
        self.check_in_date.is_some() && self.check_out_date.is_some() && self.guest_capacity >= 1
    }
}

/// Query parameters for the public room search. Absent fields are omitted
/// from the query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomSearchParams {
    pub city: Option<String>,
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub guest_capacity: Option<u32>,
}

/// Paginated response envelope. Defaults keep a sparse or failed body
/// renderable: empty content, a single page.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    // An explicit default path keeps the derive from demanding T: Default.
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default = "default_total_pages")]
    pub total_pages: u32,
}

fn default_total_pages() -> u32 {
    1
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_pages: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::Booking;

    #[test]
    fn criteria_defaults_to_incomplete_single_guest() {
        let criteria = SearchCriteria::default();
        assert_eq!(criteria.guest_capacity, 1);
        assert!(!criteria.is_complete());
    }

    #[test]
    fn criteria_complete_with_both_dates() {
        let criteria = SearchCriteria {
            check_in_date: NaiveDate::from_ymd_opt(2025, 11, 20),
            check_out_date: NaiveDate::from_ymd_opt(2025, 11, 25),
            guest_capacity: 2,
        };
        assert!(criteria.is_complete());
    }

    #[test]
    fn page_deserializes_sparse_body() {
        let page: Page<Booking> = serde_json::from_str("{}").expect("deserialize");
        assert!(page.content.is_empty());
        assert_eq!(page.total_pages, 1);

        let page: Page<Booking> =
            serde_json::from_str(r#"{"content": [], "totalPages": 4}"#).expect("deserialize");
        assert_eq!(page.total_pages, 4);
    }
}
