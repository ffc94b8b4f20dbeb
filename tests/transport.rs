use std::time::Duration;

use termfolio::form::MessageDraft;
use termfolio::transport::{DeliveryError, SimulatedTransport, Transport};

fn draft() -> MessageDraft {
    MessageDraft {
        name: "Jo".to_string(),
        email: "a@b.co".to_string(),
        subject: "Hi there".to_string(),
        message: "1234567890".to_string(),
    }
}

#[tokio::test]
async fn simulated_delivery_succeeds_after_delay() {
    let transport = SimulatedTransport::new(Duration::from_millis(5));
    let result = transport.deliver(draft()).await;
    assert_eq!(result, Ok(()));
}

#[tokio::test]
async fn failing_transport_reports_rejection() {
    let transport = SimulatedTransport::failing(Duration::from_millis(5));
    let result = transport.deliver(draft()).await;
    assert!(matches!(result, Err(DeliveryError::Rejected { .. })));
}

#[tokio::test]
async fn transport_is_usable_through_the_trait_object() {
    let transport: Box<dyn Transport> = Box::new(SimulatedTransport::new(Duration::ZERO));
    assert_eq!(transport.deliver(draft()).await, Ok(()));
}
