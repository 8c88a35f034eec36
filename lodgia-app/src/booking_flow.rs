use chrono::NaiveDate;
use lodgia_domain::stay::{calculate_nights, stay_total};
use lodgia_domain::{BookingRequest, RoomDetails};
use lodgia_session::SearchCriteriaStore;
use std::sync::Arc;
use thiserror::Error;

use crate::effects::{Navigator, Notifier};
use crate::gateway::BookingGateway;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    /// The search criteria store has no usable dates; there is no fallback
    /// to re-derive them, the guest must start a new search.
    #[error("Booking details are missing. Please start a new search.")]
    MissingBookingDetails,
}

/// Guest contact fields, all required before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuestDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

impl GuestDetails {
    fn is_complete(&self) -> bool {
        !self.first_name.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.phone_number.trim().is_empty()
    }
}

/// Price summary shown before submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StayQuote {
    pub nights: u32,
    pub total: f64,
}

/// Orchestrates booking confirmation for one room: read the stored search
/// criteria, quote the price, collect guest details, submit exactly once.
pub struct BookingFlow {
    gateway: Arc<dyn BookingGateway>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    room: RoomDetails,
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests: u32,
    pub guest: GuestDetails,
    error: Option<String>,
    submitting: bool,
}

impl BookingFlow {
    /// Fails up front when check-in, check-out, or guest count is missing
    /// from the criteria store; the flow renders a terminal error instead.
    pub fn new(
        gateway: Arc<dyn BookingGateway>,
        criteria: &SearchCriteriaStore,
        room: RoomDetails,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, FlowError> {
        let criteria = criteria.criteria();
        let (Some(check_in), Some(check_out)) = (criteria.check_in_date, criteria.check_out_date)
        else {
            return Err(FlowError::MissingBookingDetails);
        };
        if criteria.guest_capacity == 0 {
            return Err(FlowError::MissingBookingDetails);
        }
        Ok(Self {
            gateway,
            notifier,
            navigator,
            room,
            check_in,
            check_out,
            guests: criteria.guest_capacity,
            guest: GuestDetails::default(),
            error: None,
            submitting: false,
        })
    }

    pub fn quote(&self) -> StayQuote {
        let nights = calculate_nights(self.check_in, self.check_out);
        StayQuote {
            nights,
            total: stay_total(nights, self.room.price_per_night),
        }
    }

    /// The submit control is disabled while a request is in flight and for
    /// zero-night stays (blocks zero/negative-value bookings).
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.quote().nights > 0
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submits the booking. Rapid double submits are rejected by the
    /// in-flight flag; the guest fields themselves stay editable. Every
    /// exit path re-enables the control.
    pub async fn submit(&mut self) {
        if !self.can_submit() {
            return;
        }
        self.submitting = true;
        self.error = None;

        let result = self.try_submit().await;
        self.submitting = false;
        if let Err(message) = result {
            self.error = Some(message);
        }
    }

    async fn try_submit(&mut self) -> Result<(), String> {
        if !self.guest.is_complete() {
            return Err("Please fill in all guest details.".to_string());
        }

        let request = BookingRequest {
            first_name: self.guest.first_name.clone(),
            last_name: self.guest.last_name.clone(),
            email: self.guest.email.clone(),
            phone_number: self.guest.phone_number.clone(),
            room_id: self.room.id,
            check_in_date: self.check_in,
            check_out_date: self.check_out,
            number_of_guests: self.guests,
        };
        let booking = self
            .gateway
            .create_booking(&request)
            .await
            .map_err(|e| e.user_message())?;

        tracing::info!("booking {} created", booking.id);
        self.notifier.success("Booking confirmed successfully!");
        self.guest = GuestDetails::default();
        self.navigator.navigate("/");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockGateway, RecordingNavigator, RecordingNotifier};
    use lodgia_client::ApiError;

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid date")
    }

    fn room() -> RoomDetails {
        RoomDetails {
            id: 10,
            room_number: "101".to_string(),
            room_type_id: 1,
            room_type_name: "Deluxe Suite".to_string(),
            image_url: None,
            price_per_night: 250.0,
            status: Some("Available".to_string()),
            capacity: 2,
            hotel_name: Some("The Grand Hotel".to_string()),
        }
    }

    struct Harness {
        gateway: Arc<MockGateway>,
        notifier: Arc<RecordingNotifier>,
        navigator: Arc<RecordingNavigator>,
        criteria: SearchCriteriaStore,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                gateway: Arc::new(MockGateway::new()),
                notifier: Arc::new(RecordingNotifier::default()),
                navigator: Arc::new(RecordingNavigator::default()),
                criteria: SearchCriteriaStore::new(),
            }
        }

        fn flow(&self) -> Result<BookingFlow, FlowError> {
            BookingFlow::new(
                self.gateway.clone(),
                &self.criteria,
                room(),
                self.notifier.clone(),
                self.navigator.clone(),
            )
        }
    }

    fn fill_guest(flow: &mut BookingFlow) {
        flow.guest = GuestDetails {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone_number: "555-0100".to_string(),
        };
    }

    #[test]
    fn missing_criteria_is_a_terminal_error() {
        let harness = Harness::new();
        let err = harness.flow().map(|_| ()).expect_err("no criteria");
        assert_eq!(err, FlowError::MissingBookingDetails);
        assert_eq!(
            err.to_string(),
            "Booking details are missing. Please start a new search."
        );
    }

    #[test]
    fn quote_multiplies_nights_by_nightly_rate() {
        let harness = Harness::new();
        harness
            .criteria
            .set_search_dates(date("2025-11-20"), date("2025-11-25"), 2);
        let flow = harness.flow().expect("flow");
        let quote = flow.quote();
        assert_eq!(quote.nights, 5);
        assert_eq!(quote.total, 1250.0);
        assert!(flow.can_submit());
    }

    #[test]
    fn zero_night_stay_disables_submit() {
        let harness = Harness::new();
        harness
            .criteria
            .set_search_dates(date("2025-11-25"), date("2025-11-20"), 2);
        let flow = harness.flow().expect("flow");
        assert_eq!(flow.quote().nights, 0);
        assert!(!flow.can_submit());
    }

    #[tokio::test]
    async fn successful_submit_calls_gateway_once_with_full_payload() {
        let harness = Harness::new();
        harness
            .criteria
            .set_search_dates(date("2025-11-20"), date("2025-11-25"), 2);
        let mut flow = harness.flow().expect("flow");
        fill_guest(&mut flow);

        flow.submit().await;

        let created = harness.gateway.created_requests();
        assert_eq!(created.len(), 1);
        let request = &created[0];
        assert_eq!(request.first_name, "Ada");
        assert_eq!(request.last_name, "Lovelace");
        assert_eq!(request.email, "ada@example.com");
        assert_eq!(request.phone_number, "555-0100");
        assert_eq!(request.room_id, 10);
        assert_eq!(request.check_in_date, date("2025-11-20"));
        assert_eq!(request.check_out_date, date("2025-11-25"));
        assert_eq!(request.number_of_guests, 2);

        assert_eq!(
            harness.notifier.successes(),
            vec!["Booking confirmed successfully!".to_string()]
        );
        assert_eq!(harness.navigator.visits(), vec!["/".to_string()]);
        // Guest fields cleared, control re-enabled, no error shown.
        assert_eq!(flow.guest, GuestDetails::default());
        assert!(flow.error().is_none());
        assert!(!flow.is_submitting());
    }

    #[tokio::test]
    async fn rejection_surfaces_the_exact_message_and_reenables_submit() {
        let harness = Harness::new();
        harness
            .criteria
            .set_search_dates(date("2025-11-20"), date("2025-11-25"), 2);
        harness
            .gateway
            .queue_create(Err(ApiError::Rejected("Room is no longer available".to_string())));
        let mut flow = harness.flow().expect("flow");
        fill_guest(&mut flow);

        flow.submit().await;

        assert_eq!(flow.error(), Some("Room is no longer available"));
        assert!(flow.can_submit());
        assert!(harness.notifier.successes().is_empty());
        assert!(harness.navigator.visits().is_empty());
        // The guest can retry without retyping.
        assert_eq!(flow.guest.first_name, "Ada");
    }

    #[tokio::test]
    async fn retry_after_failure_replaces_the_previous_error() {
        let harness = Harness::new();
        harness
            .criteria
            .set_search_dates(date("2025-11-20"), date("2025-11-25"), 2);
        harness
            .gateway
            .queue_create(Err(ApiError::Rejected("Room is no longer available".to_string())));
        let mut flow = harness.flow().expect("flow");
        fill_guest(&mut flow);

        flow.submit().await;
        assert!(flow.error().is_some());

        flow.submit().await;
        assert!(flow.error().is_none());
        assert_eq!(harness.gateway.created_requests().len(), 2);
    }

    #[tokio::test]
    async fn incomplete_guest_details_never_reach_the_gateway() {
        let harness = Harness::new();
        harness
            .criteria
            .set_search_dates(date("2025-11-20"), date("2025-11-25"), 2);
        let mut flow = harness.flow().expect("flow");
        flow.guest.first_name = "Ada".to_string();

        flow.submit().await;

        assert!(harness.gateway.created_requests().is_empty());
        assert_eq!(flow.error(), Some("Please fill in all guest details."));
        assert!(flow.can_submit());
    }
}
