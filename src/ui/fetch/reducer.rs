//! Reducer for the fetch lifecycle.

use crate::ui::mvi::Reducer;

use super::intent::FetchIntent;
use super::state::{FetchState, Phase};

/// Pure transitions; issuing requests and logging stay with the caller.
pub struct FetchReducer;

impl Reducer for FetchReducer {
    type State = FetchState;
    type Intent = FetchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FetchIntent::Start { request } => FetchState {
                phase: Phase::Loading,
                last_result: state.last_result,
                last_error: None,
                current_request: Some(request),
            },

            FetchIntent::Settled { request, outcome } => {
                // Superseded or duplicate outcomes never touch the screen.
                if !state.is_current(request) || state.phase != Phase::Loading {
                    return state;
                }
                match outcome {
                    Ok(record) => FetchState {
                        phase: Phase::Success,
                        last_result: Some(record),
                        last_error: None,
                        current_request: state.current_request,
                    },
                    Err(failure) => FetchState {
                        phase: Phase::Failure,
                        last_result: state.last_result,
                        last_error: Some(failure),
                        current_request: state.current_request,
                    },
                }
            }
        }
    }
}
