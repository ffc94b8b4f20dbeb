//! One-shot reveal animations driven by viewport visibility.

mod sequencer;
mod viewport;

pub use sequencer::{Reveal, Typewriter};
pub use viewport::Viewport;
