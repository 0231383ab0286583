//! Client side of the detection service contract.
//!
//! - `client.rs` - `PlateSource` trait and the reqwest-backed `PlateClient`
//! - `error.rs` - transport / status / decode error taxonomy
//! - `worker.rs` - executes `UiCommand`s and reports back to the UI loop

mod client;
mod error;
mod worker;

pub use client::{PlateClient, PlateSource};
pub use error::{FetchError, FetchErrorKind, FetchFailure};
pub use worker::run_fetch_worker;
