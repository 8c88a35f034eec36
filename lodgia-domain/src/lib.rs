//! Shared data model for the Lodgia booking client.
//!
//! Everything here mirrors the wire shapes of the reservation backend:
//! bookings and their status lifecycle, the reference entities used to
//! populate search results and admin forms, and the stay (nights/price)
//! arithmetic the booking flow depends on.

pub mod booking;
pub mod identity;
pub mod models;
pub mod search;
pub mod stay;

pub use booking::{BookedRoom, Booking, BookingAction, BookingRequest, BookingStatus, Customer};
pub use identity::SessionUser;
pub use models::{Hotel, RoomDetails, RoomSearchResult, RoomType};
pub use search::{Page, RoomSearchParams, SearchCriteria};
