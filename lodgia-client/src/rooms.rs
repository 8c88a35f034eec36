use lodgia_domain::models::RoomPayload;
use lodgia_domain::{RoomDetails, RoomSearchParams, RoomSearchResult};

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// Public room search. Absent criteria are left off the query string.
    pub async fn search_rooms(
        &self,
        params: &RoomSearchParams,
    ) -> Result<Vec<RoomSearchResult>, ApiError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(city) = &params.city {
            query.push(("city", city.clone()));
        }
        if let Some(check_in) = params.check_in_date {
            query.push(("checkInDate", check_in.to_string()));
        }
        if let Some(check_out) = params.check_out_date {
            query.push(("checkOutDate", check_out.to_string()));
        }
        if let Some(guests) = params.guest_capacity {
            query.push(("guestCapacity", guests.to_string()));
        }
        self.fetch(
            self.http()
                .get(self.url("/public/rooms/search"))
                .query(&query),
        )
        .await
    }

    pub async fn room_details(&self, id: i64) -> Result<RoomDetails, ApiError> {
        self.fetch(self.http().get(self.url(&format!("/rooms/{}", id))))
            .await
    }

    pub async fn list_rooms(&self) -> Result<Vec<RoomDetails>, ApiError> {
        self.fetch(self.http().get(self.url("/rooms"))).await
    }

    pub async fn create_room(&self, payload: &RoomPayload) -> Result<RoomDetails, ApiError> {
        let token = self.bearer()?;
        self.fetch(
            self.http()
                .post(self.url("/rooms"))
                .bearer_auth(token)
                .json(payload),
        )
        .await
    }

    pub async fn update_room(
        &self,
        id: i64,
        payload: &RoomPayload,
    ) -> Result<RoomDetails, ApiError> {
        let token = self.bearer()?;
        self.fetch(
            self.http()
                .put(self.url(&format!("/rooms/{}", id)))
                .bearer_auth(token)
                .json(payload),
        )
        .await
    }

    pub async fn delete_room(&self, id: i64) -> Result<(), ApiError> {
        let token = self.bearer()?;
        self.execute(
            self.http()
                .delete(self.url(&format!("/rooms/{}", id)))
                .bearer_auth(token),
        )
        .await?;
        Ok(())
    }
}
