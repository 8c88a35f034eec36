use lodgia_domain::{Booking, BookingAction, BookingStatus, Page};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::effects::{ConfirmPrompt, Notifier};
use crate::gateway::BookingGateway;

/// Fixed page size for the staff booking list.
pub const PAGE_SIZE: u32 = 10;

/// Which back-office surface is driving the manager. The admin screen does
/// not offer check-out; the receptionist screen offers the full set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffView {
    Admin,
    Receptionist,
}

impl StaffView {
    pub fn allows(&self, action: BookingAction) -> bool {
        match self {
            StaffView::Admin => action != BookingAction::CheckOut,
            StaffView::Receptionist => true,
        }
    }
}

#[derive(Debug, Default)]
struct ManagerState {
    bookings: Vec<Booking>,
    page: u32,
    total_pages: u32,
    status_filter: Option<BookingStatus>,
    updating: HashSet<i64>,
    loading: bool,
}

enum Decision {
    Proceed(BookingStatus),
    Reject(String),
    Ignore,
}

/// Staff booking management: paginated, filterable listing plus status
/// transitions with a per-row mutation lock. Rows stay independently
/// actionable; there is no global lock. Shared via `Arc`, so concurrent
/// row actions interleave through the internal mutex.
pub struct BookingManager {
    gateway: Arc<dyn BookingGateway>,
    notifier: Arc<dyn Notifier>,
    confirm: Arc<dyn ConfirmPrompt>,
    view: StaffView,
    state: Mutex<ManagerState>,
}

impl BookingManager {
    pub fn new(
        gateway: Arc<dyn BookingGateway>,
        notifier: Arc<dyn Notifier>,
        confirm: Arc<dyn ConfirmPrompt>,
        view: StaffView,
    ) -> Self {
        Self {
            gateway,
            notifier,
            confirm,
            view,
            state: Mutex::new(ManagerState {
                total_pages: 1,
                ..ManagerState::default()
            }),
        }
    }

    /// Fetches the current page. A fetch failure degrades to an empty page
    /// so the list view stays renderable; no error is surfaced.
    pub async fn load(&self) {
        let (filter, page) = {
            let mut state = self.lock();
            state.loading = true;
            (state.status_filter, state.page)
        };

        let result = self.gateway.list_bookings(filter, page, PAGE_SIZE).await;
        let page_data = match result {
            Ok(page_data) => page_data,
            Err(e) => {
                tracing::warn!("failed to fetch bookings page: {}", e);
                Page::default()
            }
        };

        let mut state = self.lock();
        state.bookings = page_data
            .content
            .into_iter()
            .map(Booking::normalized)
            .collect();
        state.total_pages = page_data.total_pages.max(1);
        state.loading = false;
    }

    /// Changing the filter resets to page 0 so the new filter can never
    /// land on an out-of-range page.
    pub async fn set_status_filter(&self, filter: Option<BookingStatus>) {
        {
            let mut state = self.lock();
            state.status_filter = filter;
            state.page = 0;
        }
        self.load().await;
    }

    pub fn can_go_previous(&self) -> bool {
        self.lock().page > 0
    }

    pub fn can_go_next(&self) -> bool {
        let state = self.lock();
        state.page + 1 < state.total_pages
    }

    pub async fn next_page(&self) {
        {
            let mut state = self.lock();
            if state.page + 1 >= state.total_pages {
                return;
            }
            state.page += 1;
        }
        self.load().await;
    }

    pub async fn previous_page(&self) {
        {
            let mut state = self.lock();
            if state.page == 0 {
                return;
            }
            state.page -= 1;
        }
        self.load().await;
    }

    /// The actions to offer for a row: legal per the status machine and
    /// allowed in this view.
    pub fn actions_for(&self, booking: &Booking) -> Vec<BookingAction> {
        booking
            .status
            .available_actions()
            .iter()
            .copied()
            .filter(|action| self.view.allows(*action))
            .collect()
    }

    pub fn is_row_updating(&self, id: i64) -> bool {
        self.lock().updating.contains(&id)
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    pub fn bookings(&self) -> Vec<Booking> {
        self.lock().bookings.clone()
    }

    pub fn page(&self) -> u32 {
        self.lock().page
    }

    pub fn total_pages(&self) -> u32 {
        self.lock().total_pages
    }

    pub fn status_filter(&self) -> Option<BookingStatus> {
        self.lock().status_filter
    }

    /// Applies a status transition to one booking. Cancellation asks for
    /// confirmation first. Illegal transitions are rejected locally with a
    /// clear message instead of being forwarded. On success the page is
    /// re-fetched rather than patched locally.
    pub async fn apply(&self, id: i64, action: BookingAction) {
        if action == BookingAction::Cancel
            && !self
                .confirm
                .confirm("Are you sure you want to cancel this booking?")
        {
            return;
        }

        let decision = {
            let mut state = self.lock();
            if state.updating.contains(&id) {
                Decision::Ignore
            } else if let Some(booking) = state.bookings.iter().find(|b| b.id == id) {
                if !self.view.allows(action) {
                    Decision::Reject("This action is not available in this view.".to_string())
                } else {
                    match booking.status.apply(action) {
                        Some(next) => {
                            state.updating.insert(id);
                            Decision::Proceed(next)
                        }
                        None => Decision::Reject(format!(
                            "Cannot {} a booking that is {}.",
                            action.label(),
                            booking.status
                        )),
                    }
                }
            } else {
                Decision::Ignore
            }
        };

        let next = match decision {
            Decision::Proceed(next) => next,
            Decision::Reject(message) => {
                self.notifier.error(&message);
                return;
            }
            Decision::Ignore => return,
        };

        match self.gateway.update_booking_status(id, next).await {
            Ok(()) => {
                tracing::info!("booking {} moved to {}", id, next);
                self.load().await;
            }
            Err(e) => {
                // No optimistic update was applied, so nothing to roll back.
                self.notifier.error(&e.user_message());
            }
        }
        self.lock().updating.remove(&id);
    }

    fn lock(&self) -> MutexGuard<'_, ManagerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
