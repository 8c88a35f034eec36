use lodgia_domain::models::RoomTypePayload;
use lodgia_domain::RoomType;

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    pub async fn list_room_types(&self) -> Result<Vec<RoomType>, ApiError> {
        self.fetch(self.http().get(self.url("/room-types"))).await
    }

    pub async fn room_type(&self, id: i64) -> Result<RoomType, ApiError> {
        self.fetch(self.http().get(self.url(&format!("/room-types/{}", id))))
            .await
    }

    pub async fn create_room_type(&self, payload: &RoomTypePayload) -> Result<RoomType, ApiError> {
        let token = self.bearer()?;
        self.fetch(
            self.http()
                .post(self.url("/room-types"))
                .bearer_auth(token)
                .json(payload),
        )
        .await
    }

    pub async fn update_room_type(
        &self,
        id: i64,
        payload: &RoomTypePayload,
    ) -> Result<RoomType, ApiError> {
        let token = self.bearer()?;
        self.fetch(
            self.http()
                .put(self.url(&format!("/room-types/{}", id)))
                .bearer_auth(token)
                .json(payload),
        )
        .await
    }

    pub async fn delete_room_type(&self, id: i64) -> Result<(), ApiError> {
        let token = self.bearer()?;
        self.execute(
            self.http()
                .delete(self.url(&format!("/room-types/{}", id)))
                .bearer_auth(token),
        )
        .await?;
        Ok(())
    }
}
