//! Outbound delivery of composed contact messages.
//!
//! The submission lifecycle depends only on the [`Transport`] contract, so
//! a real carrier (HTTP endpoint, mail relay) can be wired in without
//! touching the form state machine. The shipped implementation simulates
//! the round trip with a fixed delay.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use thiserror::Error;

use crate::form::MessageDraft;

pub type DeliveryFuture = Pin<Box<dyn Future<Output = Result<(), DeliveryError>> + Send>>;

/// Failure reported by a transport. One attempt, all-or-nothing; retrying
/// is the user's decision, not the transport's.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("message rejected by transport: {reason}")]
    Rejected { reason: String },
}

pub trait Transport: Send + Sync {
    fn deliver(&self, draft: MessageDraft) -> DeliveryFuture;
}

/// Stand-in transport: waits a fixed delay, then reports the configured
/// outcome. The delay mirrors a network round trip so the submitting
/// state is actually observable.
pub struct SimulatedTransport {
    delay: Duration,
    outcome: Result<(), DeliveryError>,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            outcome: Ok(()),
        }
    }

    /// A transport that always fails, for exercising the error branch.
    pub fn failing(delay: Duration) -> Self {
        Self {
            delay,
            outcome: Err(DeliveryError::Rejected {
                reason: "simulated delivery failure".to_string(),
            }),
        }
    }
}

impl Transport for SimulatedTransport {
    fn deliver(&self, draft: MessageDraft) -> DeliveryFuture {
        let delay = self.delay;
        let outcome = self.outcome.clone();
        Box::pin(async move {
            tracing::debug!(from = %draft.email, subject = %draft.subject, "simulating delivery");
            tokio::time::sleep(delay).await;
            outcome
        })
    }
}
