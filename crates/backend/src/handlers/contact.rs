use axum::{http::StatusCode, Json};
use contracts::contact::{ContactPayload, ContactResponse, Delivery};

use crate::shared::mailer;

/// POST /api/contact
pub async fn send(Json(payload): Json<ContactPayload>) -> (StatusCode, Json<ContactResponse>) {
    let (status, response) = relay(mailer::get_mailer(), &payload).await;
    (status, Json(response))
}

/// Validates the payload and hands it to the delivery channel.
pub async fn relay<D: Delivery>(
    delivery: Option<&D>,
    payload: &ContactPayload,
) -> (StatusCode, ContactResponse) {
    if let Err(reason) = payload.validate() {
        tracing::warn!("Rejected contact payload: {}", reason);
        return (StatusCode::BAD_REQUEST, response(false, reason));
    }

    let Some(delivery) = delivery else {
        tracing::error!("Contact message dropped: mailer is not configured");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            response(false, "mailer is not configured".to_string()),
        );
    };

    match delivery.send(payload).await {
        Ok(()) => (StatusCode::OK, response(true, "sent".to_string())),
        Err(e) => {
            tracing::error!("Failed to relay contact message: {}", e);
            (StatusCode::BAD_GATEWAY, response(false, e.to_string()))
        }
    }
}

fn response(success: bool, message: String) -> ContactResponse {
    ContactResponse { success, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::contact::DeliveryError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeDelivery {
        fail: bool,
        calls: AtomicUsize,
    }

    impl FakeDelivery {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl Delivery for FakeDelivery {
        async fn send(&self, _payload: &ContactPayload) -> Result<(), DeliveryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(DeliveryError::new("EmailJS rejected the message (400)"))
            } else {
                Ok(())
            }
        }
    }

    fn payload() -> ContactPayload {
        ContactPayload {
            sender_name: "Amal".into(),
            sender_email: "amal@example.com".into(),
            body: "Name: Amal\nEmail: amal@example.com\nInterests: nature\n\nMessage:\nhi".into(),
        }
    }

    #[tokio::test]
    async fn test_relay_success() {
        let delivery = FakeDelivery::new(false);
        let (status, body) = relay(Some(&delivery), &payload()).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.success);
        assert_eq!(delivery.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_relay_rejects_invalid_payload_without_sending() {
        let delivery = FakeDelivery::new(false);
        let mut bad = payload();
        bad.sender_email = "not-an-email".into();

        let (status, body) = relay(Some(&delivery), &bad).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.success);
        assert_eq!(delivery.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_relay_upstream_failure_is_bad_gateway() {
        let delivery = FakeDelivery::new(true);
        let (status, body) = relay(Some(&delivery), &payload()).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(!body.success);
    }

    #[tokio::test]
    async fn test_relay_without_mailer_is_unavailable() {
        let (status, _) = relay::<FakeDelivery>(None, &payload()).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
