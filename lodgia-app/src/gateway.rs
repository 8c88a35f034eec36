use async_trait::async_trait;
use lodgia_client::{ApiClient, ApiError};
use lodgia_domain::{Booking, BookingRequest, BookingStatus, Page};

/// The slice of the API surface the flows consume, as a trait so tests can
/// substitute a scripted gateway.
#[async_trait]
pub trait BookingGateway: Send + Sync {
    async fn create_booking(&self, request: &BookingRequest) -> Result<Booking, ApiError>;
    async fn list_bookings(
        &self,
        status: Option<BookingStatus>,
        page: u32,
        size: u32,
    ) -> Result<Page<Booking>, ApiError>;
    async fn update_booking_status(&self, id: i64, status: BookingStatus) -> Result<(), ApiError>;
    async fn my_bookings(&self) -> Result<Vec<Booking>, ApiError>;
}

#[async_trait]
impl BookingGateway for ApiClient {
    async fn create_booking(&self, request: &BookingRequest) -> Result<Booking, ApiError> {
        ApiClient::create_booking(self, request).await
    }

    async fn list_bookings(
        &self,
        status: Option<BookingStatus>,
        page: u32,
        size: u32,
    ) -> Result<Page<Booking>, ApiError> {
        ApiClient::list_bookings(self, status, page, size).await
    }

    async fn update_booking_status(&self, id: i64, status: BookingStatus) -> Result<(), ApiError> {
        ApiClient::update_booking_status(self, id, status).await
    }

    async fn my_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        ApiClient::my_bookings(self).await
    }
}
