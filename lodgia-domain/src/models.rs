//! Backend-owned reference entities: hotels, rooms, room types. The client
//! treats these as read-mostly and re-fetches on every page load.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone_number: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rating: f64,
}

/// Create/update payload for hotel CRUD.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotelPayload {
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone_number: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub price_per_night: f64,
    pub capacity: u32,
    #[serde(default)]
    pub hotel_id: Option<i64>,
    #[serde(default)]
    pub hotel_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomTypePayload {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price_per_night: f64,
    pub capacity: u32,
    pub hotel_id: i64,
}

/// One row of a public room search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomSearchResult {
    pub room_id: i64,
    pub hotel_name: String,
    #[serde(default)]
    pub city: Option<String>,
    pub room_type: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub price_per_night: f64,
    pub capacity: u32,
}

/// Full room record, as served by `/rooms/{id}` and the admin room list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetails {
    pub id: i64,
    pub room_number: String,
    pub room_type_id: i64,
    pub room_type_name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub price_per_night: f64,
    #[serde(default)]
    pub status: Option<String>,
    pub capacity: u32,
    #[serde(default)]
    pub hotel_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomPayload {
    pub room_number: String,
    pub room_type_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
