//! State of the fetch lifecycle.

use std::fmt;

use crate::api::FetchFailure;
use crate::model::ResultRecord;
use crate::ui::mvi::UiState;

/// Monotonic id of an issued request. The first request is `#1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub const FIRST: RequestId = RequestId(1);

    pub fn next(self) -> Self {
        RequestId(self.0.wrapping_add(1))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FetchState {
    pub phase: Phase,
    /// Most recent successful result. Survives later loads and failures.
    pub last_result: Option<ResultRecord>,
    pub last_error: Option<FetchFailure>,
    /// Latest issued request; only its outcome may change state.
    pub current_request: Option<RequestId>,
}

impl UiState for FetchState {}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// "Generate New" is available whenever no request is in flight.
    pub fn can_trigger(&self) -> bool {
        !self.is_loading()
    }

    pub fn is_current(&self, request: RequestId) -> bool {
        self.current_request == Some(request)
    }

    /// Banner text, shown whenever an error is recorded, whatever the phase.
    pub fn error_banner(&self) -> Option<&str> {
        self.last_error.as_ref().map(|err| err.message.as_str())
    }

    /// Full-screen loading is only used for the very first result.
    /// Afterwards the vehicle view carries the loading indicator.
    pub fn shows_full_screen_loading(&self) -> bool {
        self.is_loading() && self.last_result.is_none()
    }

    /// Result to render, including a stale one while a newer fetch runs.
    pub fn visible_result(&self) -> Option<&ResultRecord> {
        self.last_result.as_ref()
    }
}
