use chrono::NaiveDate;
use lodgia_domain::SearchCriteria;
use std::sync::{Mutex, PoisonError};

/// Holder of the last-submitted search. Set exactly once per search
/// submission and read by the booking confirmation flow. Writes overwrite
/// unconditionally; no validation is applied (a past check-in is accepted).
#[derive(Debug, Default)]
pub struct SearchCriteriaStore {
    criteria: Mutex<SearchCriteria>,
}

impl SearchCriteriaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search_dates(&self, check_in: NaiveDate, check_out: NaiveDate, guests: u32) {
        *self.criteria.lock().unwrap_or_else(PoisonError::into_inner) = SearchCriteria {
            check_in_date: Some(check_in),
            check_out_date: Some(check_out),
            guest_capacity: guests,
        };
    }

    pub fn criteria(&self) -> SearchCriteria {
        self.criteria
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid date")
    }

    #[test]
    fn starts_empty_and_overwrites_whole_record() {
        let store = SearchCriteriaStore::new();
        assert!(!store.criteria().is_complete());

        store.set_search_dates(date("2025-11-20"), date("2025-11-25"), 2);
        let criteria = store.criteria();
        assert!(criteria.is_complete());
        assert_eq!(criteria.guest_capacity, 2);

        // Last write wins outright, including a past check-in date.
        store.set_search_dates(date("2020-01-01"), date("2020-01-02"), 4);
        let criteria = store.criteria();
        assert_eq!(criteria.check_in_date, Some(date("2020-01-01")));
        assert_eq!(criteria.guest_capacity, 4);
    }
}
