use lodgia_domain::models::HotelPayload;
use lodgia_domain::Hotel;

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    pub async fn top_rated_hotels(&self) -> Result<Vec<Hotel>, ApiError> {
        self.fetch(self.http().get(self.url("/hotels/top-rated")))
            .await
    }

    pub async fn list_hotels(&self) -> Result<Vec<Hotel>, ApiError> {
        self.fetch(self.http().get(self.url("/hotels"))).await
    }

    pub async fn hotel(&self, id: i64) -> Result<Hotel, ApiError> {
        self.fetch(self.http().get(self.url(&format!("/hotels/{}", id))))
            .await
    }

    pub async fn create_hotel(&self, payload: &HotelPayload) -> Result<Hotel, ApiError> {
        let token = self.bearer()?;
        self.fetch(
            self.http()
                .post(self.url("/hotels"))
                .bearer_auth(token)
                .json(payload),
        )
        .await
    }

    pub async fn update_hotel(&self, id: i64, payload: &HotelPayload) -> Result<Hotel, ApiError> {
        let token = self.bearer()?;
        self.fetch(
            self.http()
                .put(self.url(&format!("/hotels/{}", id)))
                .bearer_auth(token)
                .json(payload),
        )
        .await
    }

    pub async fn delete_hotel(&self, id: i64) -> Result<(), ApiError> {
        let token = self.bearer()?;
        self.execute(
            self.http()
                .delete(self.url(&format!("/hotels/{}", id)))
                .bearer_auth(token),
        )
        .await?;
        Ok(())
    }
}
