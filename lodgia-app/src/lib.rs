//! Orchestration flows over the gateway and the shared stores: booking
//! confirmation, staff booking management, the user's own bookings, and the
//! role guard for the admin subtree. Side effects (notifications,
//! navigation, destructive-action confirmation) go through injected traits
//! so flows stay testable without a UI.

pub mod booking_flow;
pub mod effects;
pub mod gateway;
pub mod guard;
pub mod manager;
pub mod mocks;
pub mod my_bookings;

pub use booking_flow::{BookingFlow, FlowError, GuestDetails, StayQuote};
pub use effects::{ConfirmPrompt, Navigator, Notifier};
pub use gateway::BookingGateway;
pub use guard::{GuardOutcome, RoleGuard};
pub use manager::{BookingManager, StaffView, PAGE_SIZE};
pub use my_bookings::MyBookingsView;
