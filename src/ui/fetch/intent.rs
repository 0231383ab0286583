//! Intents for the fetch lifecycle.

use crate::api::FetchFailure;
use crate::model::ResultRecord;
use crate::ui::mvi::Intent;

use super::state::RequestId;

/// How a request ended.
pub type FetchOutcome = Result<ResultRecord, FetchFailure>;

#[derive(Debug)]
pub enum FetchIntent {
    /// A request was issued. It supersedes any request still in flight.
    Start { request: RequestId },

    /// A request finished. Ignored unless `request` is the current one.
    Settled {
        request: RequestId,
        outcome: FetchOutcome,
    },
}

impl Intent for FetchIntent {}
