use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub submission: SubmissionConfig,
}

/// Timing knobs for reveal animations and the typewriter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Event-loop tick interval in milliseconds; one typewriter character
    /// is revealed per tick (default: 70).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Ticks a section's fade-in spans once triggered (default: 6).
    #[serde(default = "default_reveal_ticks")]
    pub reveal_ticks: u32,
    /// Extra delay in ticks between staggered siblings (default: 2).
    #[serde(default = "default_stagger_ticks")]
    pub stagger_ticks: u32,
}

/// Timing knobs for the contact form lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionConfig {
    /// Simulated transport round trip in milliseconds (default: 1500).
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
    /// How long a success/error banner stays up before auto-resetting
    /// (default: 3000).
    #[serde(default = "default_status_reset_ms")]
    pub status_reset_ms: u64,
    /// How long the email "copied" indicator stays up (default: 2000).
    #[serde(default = "default_copied_reset_ms")]
    pub copied_reset_ms: u64,
}

fn default_tick_ms() -> u64 {
    70
}

fn default_reveal_ticks() -> u32 {
    6
}

fn default_stagger_ticks() -> u32 {
    2
}

fn default_submit_delay_ms() -> u64 {
    1500
}

fn default_status_reset_ms() -> u64 {
    3000
}

fn default_copied_reset_ms() -> u64 {
    2000
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            reveal_ticks: default_reveal_ticks(),
            stagger_ticks: default_stagger_ticks(),
        }
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay_ms(),
            status_reset_ms: default_status_reset_ms(),
            copied_reset_ms: default_copied_reset_ms(),
        }
    }
}

impl AnimationConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl SubmissionConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn status_reset(&self) -> Duration {
        Duration::from_millis(self.status_reset_ms)
    }

    pub fn copied_reset(&self) -> Duration {
        Duration::from_millis(self.copied_reset_ms)
    }
}
