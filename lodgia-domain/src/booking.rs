use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Booking status in the lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

/// A staff action requesting a status transition
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingAction {
    Confirm,
    CheckIn,
    CheckOut,
    Cancel,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::CheckedIn => "CHECKED_IN",
            BookingStatus::CheckedOut => "CHECKED_OUT",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }

    /// The transition table. Returns the next status when `action` is legal
    /// from this status, `None` otherwise. This is the single source of
    /// truth shared by button rendering and pre-flight validation, so an
    /// illegal transition is rejected before it ever reaches the backend.
    pub fn apply(&self, action: BookingAction) -> Option<BookingStatus> {
        match (self, action) {
            (BookingStatus::Pending, BookingAction::Confirm) => Some(BookingStatus::Confirmed),
            (BookingStatus::Pending, BookingAction::Cancel) => Some(BookingStatus::Cancelled),
            (BookingStatus::Confirmed, BookingAction::CheckIn) => Some(BookingStatus::CheckedIn),
            (BookingStatus::Confirmed, BookingAction::Cancel) => Some(BookingStatus::Cancelled),
            (BookingStatus::CheckedIn, BookingAction::CheckOut) => Some(BookingStatus::CheckedOut),
            (BookingStatus::CheckedIn, BookingAction::Cancel) => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }

    /// Actions that are legal from this status, in display order.
    pub fn available_actions(&self) -> &'static [BookingAction] {
        match self {
            BookingStatus::Pending => &[BookingAction::Confirm, BookingAction::Cancel],
            BookingStatus::Confirmed => &[BookingAction::CheckIn, BookingAction::Cancel],
            BookingStatus::CheckedIn => &[BookingAction::CheckOut, BookingAction::Cancel],
            // Terminal states
            BookingStatus::CheckedOut | BookingStatus::Cancelled => &[],
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.available_actions().is_empty()
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl BookingAction {
    /// The status this action transitions into when legal.
    pub fn target(&self) -> BookingStatus {
        match self {
            BookingAction::Confirm => BookingStatus::Confirmed,
            BookingAction::CheckIn => BookingStatus::CheckedIn,
            BookingAction::CheckOut => BookingStatus::CheckedOut,
            BookingAction::Cancel => BookingStatus::Cancelled,
        }
    }

    /// Lowercase label for user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            BookingAction::Confirm => "confirm",
            BookingAction::CheckIn => "check in",
            BookingAction::CheckOut => "check out",
            BookingAction::Cancel => "cancel",
        }
    }
}

/// Guest contact details nested inside a booking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

impl Customer {
    /// Placeholder used when the backend omits the nested customer.
    pub fn placeholder() -> Self {
        Self {
            first_name: "-".to_string(),
            last_name: "-".to_string(),
            email: "-".to_string(),
            phone_number: "-".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomTypeSummary {
    pub name: String,
    #[serde(default)]
    pub price_per_night: f64,
}

/// The room a booking refers to, as embedded in booking responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookedRoom {
    pub room_number: String,
    pub room_type: RoomTypeSummary,
}

impl BookedRoom {
    pub fn placeholder() -> Self {
        Self {
            room_number: "N/A".to_string(),
            room_type: RoomTypeSummary {
                name: "-".to_string(),
                price_per_night: 0.0,
            },
        }
    }
}

/// A booking as returned by the backend. Backend-owned: the client never
/// recomputes `total_price` for an existing booking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    #[serde(default)]
    pub customer: Option<Customer>,
    #[serde(default)]
    pub room: Option<BookedRoom>,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    #[serde(default)]
    pub number_of_guests: u32,
    #[serde(default)]
    pub total_price: f64,
    pub status: BookingStatus,
}

impl Booking {
    /// Fills in placeholder structures for missing nested objects so list
    /// rendering never dereferences an absent customer or room.
    pub fn normalized(mut self) -> Self {
        if self.customer.is_none() {
            self.customer = Some(Customer::placeholder());
        }
        if self.room.is_none() {
            self.room = Some(BookedRoom::placeholder());
        }
        self
    }
}

/// Payload for booking creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub room_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub number_of_guests: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_table_covers_the_lifecycle() {
        assert_eq!(
            BookingStatus::Pending.apply(BookingAction::Confirm),
            Some(BookingStatus::Confirmed)
        );
        assert_eq!(
            BookingStatus::Confirmed.apply(BookingAction::CheckIn),
            Some(BookingStatus::CheckedIn)
        );
        assert_eq!(
            BookingStatus::CheckedIn.apply(BookingAction::CheckOut),
            Some(BookingStatus::CheckedOut)
        );
        // Cancellation is a side transition from every non-terminal state
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::CheckedIn,
        ] {
            assert_eq!(
                status.apply(BookingAction::Cancel),
                Some(BookingStatus::Cancelled)
            );
        }
    }

    #[test]
    fn terminal_states_reject_every_action() {
        for status in [BookingStatus::CheckedOut, BookingStatus::Cancelled] {
            assert!(status.is_terminal());
            for action in [
                BookingAction::Confirm,
                BookingAction::CheckIn,
                BookingAction::CheckOut,
                BookingAction::Cancel,
            ] {
                assert_eq!(status.apply(action), None);
            }
        }
        // Skipping ahead is also illegal
        assert_eq!(BookingStatus::Pending.apply(BookingAction::CheckOut), None);
        assert_eq!(BookingStatus::Confirmed.apply(BookingAction::Confirm), None);
    }

    #[test]
    fn status_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&BookingStatus::CheckedIn).expect("serialize");
        assert_eq!(json, "\"CHECKED_IN\"");
        let parsed: BookingStatus = serde_json::from_str("\"CANCELLED\"").expect("deserialize");
        assert_eq!(parsed, BookingStatus::Cancelled);
    }

    #[test]
    fn booking_deserializes_sparse_body_and_normalizes() {
        let json = r#"
            {
                "id": 42,
                "checkInDate": "2025-11-20",
                "checkOutDate": "2025-11-25",
                "numberOfGuests": 2,
                "status": "PENDING"
            }
        "#;
        let booking: Booking = serde_json::from_str(json).expect("deserialize");
        assert!(booking.customer.is_none());
        assert!(booking.room.is_none());
        assert_eq!(booking.total_price, 0.0);

        let booking = booking.normalized();
        let customer = booking.customer.expect("placeholder customer");
        assert_eq!(customer.first_name, "-");
        let room = booking.room.expect("placeholder room");
        assert_eq!(room.room_number, "N/A");
        assert_eq!(room.room_type.price_per_night, 0.0);
    }

    #[test]
    fn booking_request_serializes_camel_case() {
        let request = BookingRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone_number: "555-0100".to_string(),
            room_id: 7,
            check_in_date: NaiveDate::from_ymd_opt(2025, 11, 20).expect("valid date"),
            check_out_date: NaiveDate::from_ymd_opt(2025, 11, 25).expect("valid date"),
            number_of_guests: 2,
        };
        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(value["firstName"], "Ada");
        assert_eq!(value["phoneNumber"], "555-0100");
        assert_eq!(value["checkInDate"], "2025-11-20");
        assert_eq!(value["numberOfGuests"], 2);
    }
}
