use lodgia_domain::{Booking, BookingRequest, BookingStatus, Page};

use crate::app_config::BookingAuthMode;
use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// Creates a booking. Whether the bearer token rides along is decided by
    /// configuration; in bearer mode an anonymous session still goes
    /// through without a token (the endpoint accepts guests).
    pub async fn create_booking(&self, request: &BookingRequest) -> Result<Booking, ApiError> {
        let mut builder = self.http().post(self.url("/bookings")).json(request);
        if self.config().booking.auth == BookingAuthMode::Bearer {
            self.session().check_expiry();
            if let Some(token) = self.session().bearer_token() {
                builder = builder.bearer_auth(token);
            }
        }
        self.fetch(builder).await
    }

    /// One page of bookings, optionally filtered by status. Zero-based page
    /// index; the status parameter is omitted entirely when absent.
    pub async fn list_bookings(
        &self,
        status: Option<BookingStatus>,
        page: u32,
        size: u32,
    ) -> Result<Page<Booking>, ApiError> {
        let token = self.bearer()?;
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(status) = status {
            query.push(("status", status.as_str().to_string()));
        }
        query.push(("page", page.to_string()));
        query.push(("size", size.to_string()));
        self.fetch(
            self.http()
                .get(self.url("/bookings"))
                .bearer_auth(token)
                .query(&query),
        )
        .await
    }

    /// Requests a status transition. The response body is ignored; callers
    /// re-fetch the page to pick up server-authoritative state.
    pub async fn update_booking_status(
        &self,
        id: i64,
        status: BookingStatus,
    ) -> Result<(), ApiError> {
        let token = self.bearer()?;
        self.execute(
            self.http()
                .patch(self.url(&format!("/bookings/{}/status", id)))
                .bearer_auth(token)
                .query(&[("status", status.as_str())]),
        )
        .await?;
        Ok(())
    }

    /// The authenticated user's own bookings.
    pub async fn my_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        let token = self.bearer()?;
        self.fetch(
            self.http()
                .get(self.url("/bookings/my-bookings"))
                .bearer_auth(token),
        )
        .await
    }
}
