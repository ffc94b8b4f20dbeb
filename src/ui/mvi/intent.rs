//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents cover user actions (keystrokes, focus moves), system events
/// (transport outcomes, timer expiries), and navigation. Reducers consume
/// them to produce new states.
pub trait Intent: Send + 'static {}
