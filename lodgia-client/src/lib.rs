//! API gateway for the external reservation backend. Every call returns a
//! uniform `Result<T, ApiError>`; callers pattern-match instead of
//! duck-typing on response shapes. Bearer-authenticated calls run the
//! session expiry check before the request goes out.

pub mod app_config;
pub mod auth;
pub mod bookings;
pub mod client;
pub mod error;
pub mod hotels;
pub mod room_types;
pub mod rooms;

pub use app_config::{BookingAuthMode, ClientConfig};
pub use auth::{LoginResponse, RegisterRequest, RegisterResponse};
pub use client::ApiClient;
pub use error::ApiError;
