//! Model-View-Intent (MVI) architecture primitives.
//!
//! Base traits for unidirectional data flow in the UI layer: intents
//! (user actions, timer expiries, transport outcomes) feed a reducer,
//! the reducer produces the next state, and the view renders from state
//! alone. Side effects never live in a reducer; the runtime inspects the
//! state after a dispatch and performs them.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
