//! Result-fetch lifecycle.
//!
//! Tracks one logical request at a time to the detection service.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - `FetchState` (phase, last result, last error, current request)
//! - `intent.rs` - `Start` / `Settled`
//! - `reducer.rs` - transitions `Idle → Loading → {Success, Failure}`
//!
//! Issuing the HTTP request and allocating request ids happens in
//! `App`; the reducer only records what happened.

mod intent;
mod reducer;
mod state;

pub use intent::{FetchIntent, FetchOutcome};
pub use reducer::FetchReducer;
pub use state::{FetchState, Phase, RequestId};
