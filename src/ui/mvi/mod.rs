//! Model-View-Intent (MVI) primitives.
//!
//! State transitions in the UI go through a reducer so that every change
//! to what is on screen can be traced to a single intent.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── App (side effects) ──┘
//! ```
//!
//! - **State**: everything a view needs to render
//! - **Intent**: user actions or settled requests
//! - **Reducer**: pure `(State, Intent) -> State`; network calls and
//!   logging stay in `App`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
