use lodgia_domain::Booking;
use std::sync::Arc;

use crate::gateway::BookingGateway;

/// Read-only listing of the signed-in guest's own bookings. Fetch failures
/// degrade to an empty list so the page stays renderable.
pub struct MyBookingsView {
    gateway: Arc<dyn BookingGateway>,
    bookings: Vec<Booking>,
    loaded: bool,
}

impl MyBookingsView {
    pub fn new(gateway: Arc<dyn BookingGateway>) -> Self {
        Self {
            gateway,
            bookings: Vec::new(),
            loaded: false,
        }
    }

    pub async fn load(&mut self) {
        let bookings = match self.gateway.my_bookings().await {
            Ok(bookings) => bookings,
            Err(e) => {
                tracing::warn!("failed to fetch own bookings: {}", e);
                Vec::new()
            }
        };
        self.bookings = bookings.into_iter().map(Booking::normalized).collect();
        self.loaded = true;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockGateway;
    use chrono::NaiveDate;
    use lodgia_client::ApiError;
    use lodgia_domain::BookingStatus;

    fn booking(id: i64) -> Booking {
        Booking {
            id,
            customer: None,
            room: None,
            check_in_date: NaiveDate::from_ymd_opt(2025, 11, 20).expect("valid date"),
            check_out_date: NaiveDate::from_ymd_opt(2025, 11, 25).expect("valid date"),
            number_of_guests: 2,
            total_price: 1250.0,
            status: BookingStatus::Confirmed,
        }
    }

    #[tokio::test]
    async fn load_normalizes_rows() {
        let gateway = Arc::new(MockGateway::new());
        gateway.queue_my_bookings(Ok(vec![booking(7)]));
        let mut view = MyBookingsView::new(gateway);

        view.load().await;

        assert!(view.is_loaded());
        assert_eq!(view.bookings().len(), 1);
        let room = view.bookings()[0].room.as_ref().expect("placeholder room");
        assert_eq!(room.room_number, "N/A");
    }

    #[tokio::test]
    async fn fetch_failure_degrades_to_empty_list() {
        let gateway = Arc::new(MockGateway::new());
        gateway.queue_my_bookings(Err(ApiError::Transport("connection refused".to_string())));
        let mut view = MyBookingsView::new(gateway);

        view.load().await;

        assert!(view.is_loaded());
        assert!(view.bookings().is_empty());
    }
}
