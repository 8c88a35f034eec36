//! Recording and scripted implementations of the effect ports and the
//! gateway, for tests and for embedding without a UI.

use async_trait::async_trait;
use lodgia_client::ApiError;
use lodgia_domain::{Booking, BookingRequest, BookingStatus, Page};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::Notify;

use crate::effects::{ConfirmPrompt, Navigator, Notifier};
use crate::gateway::BookingGateway;

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    successes: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn successes(&self) -> Vec<String> {
        lock(&self.successes).clone()
    }

    pub fn errors(&self) -> Vec<String> {
        lock(&self.errors).clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        lock(&self.successes).push(message.to_string());
    }

    fn error(&self, message: &str) {
        lock(&self.errors).push(message.to_string());
    }
}

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<String> {
        lock(&self.visits).clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        lock(&self.visits).push(path.to_string());
    }
}

/// Confirms or declines every prompt according to `answer`.
#[derive(Debug)]
pub struct ScriptedConfirm {
    answer: AtomicBool,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn new(answer: bool) -> Self {
        Self {
            answer: AtomicBool::new(answer),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        lock(&self.prompts).clone()
    }
}

impl ConfirmPrompt for ScriptedConfirm {
    fn confirm(&self, message: &str) -> bool {
        lock(&self.prompts).push(message.to_string());
        self.answer.load(Ordering::SeqCst)
    }
}

/// Scripted gateway: queued results are popped per call, and every call is
/// recorded. When a queue is empty the call succeeds with an empty value.
/// `hold_status_updates` parks status-change calls until released, which
/// lets tests observe per-row in-flight state.
#[derive(Default)]
pub struct MockGateway {
    pub create_results: Mutex<VecDeque<Result<Booking, ApiError>>>,
    pub created: Mutex<Vec<BookingRequest>>,
    pub page_results: Mutex<VecDeque<Result<Page<Booking>, ApiError>>>,
    pub list_calls: Mutex<Vec<(Option<BookingStatus>, u32, u32)>>,
    pub status_results: Mutex<VecDeque<Result<(), ApiError>>>,
    pub status_calls: Mutex<Vec<(i64, BookingStatus)>>,
    pub my_bookings_results: Mutex<VecDeque<Result<Vec<Booking>, ApiError>>>,
    status_gate: Mutex<Option<Arc<Notify>>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_create(&self, result: Result<Booking, ApiError>) {
        lock(&self.create_results).push_back(result);
    }

    pub fn queue_page(&self, result: Result<Page<Booking>, ApiError>) {
        lock(&self.page_results).push_back(result);
    }

    pub fn queue_status(&self, result: Result<(), ApiError>) {
        lock(&self.status_results).push_back(result);
    }

    pub fn queue_my_bookings(&self, result: Result<Vec<Booking>, ApiError>) {
        lock(&self.my_bookings_results).push_back(result);
    }

    /// Parks subsequent status-change calls until `release_status_updates`.
    pub fn hold_status_updates(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *lock(&self.status_gate) = Some(gate.clone());
        gate
    }

    pub fn created_requests(&self) -> Vec<BookingRequest> {
        lock(&self.created).clone()
    }

    pub fn recorded_list_calls(&self) -> Vec<(Option<BookingStatus>, u32, u32)> {
        lock(&self.list_calls).clone()
    }

    pub fn recorded_status_calls(&self) -> Vec<(i64, BookingStatus)> {
        lock(&self.status_calls).clone()
    }
}

#[async_trait]
impl BookingGateway for MockGateway {
    async fn create_booking(&self, request: &BookingRequest) -> Result<Booking, ApiError> {
        lock(&self.created).push(request.clone());
        lock(&self.create_results).pop_front().unwrap_or_else(|| {
            Ok(Booking {
                id: 1,
                customer: None,
                room: None,
                check_in_date: request.check_in_date,
                check_out_date: request.check_out_date,
                number_of_guests: request.number_of_guests,
                total_price: 0.0,
                status: BookingStatus::Pending,
            })
        })
    }

    async fn list_bookings(
        &self,
        status: Option<BookingStatus>,
        page: u32,
        size: u32,
    ) -> Result<Page<Booking>, ApiError> {
        lock(&self.list_calls).push((status, page, size));
        lock(&self.page_results)
            .pop_front()
            .unwrap_or_else(|| Ok(Page::default()))
    }

    async fn update_booking_status(&self, id: i64, status: BookingStatus) -> Result<(), ApiError> {
        lock(&self.status_calls).push((id, status));
        let gate = lock(&self.status_gate).clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        lock(&self.status_results)
            .pop_front()
            .unwrap_or_else(|| Ok(()))
    }

    async fn my_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        lock(&self.my_bookings_results)
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
