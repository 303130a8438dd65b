use thiserror::Error;

use super::payload::ContactPayload;

/// Ошибка доставки сообщения. Причина не различается: таймаут, ответ сервера
/// и обрыв связи показываются посетителю одинаково.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("delivery failed: {0}")]
pub struct DeliveryError(pub String);

impl DeliveryError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Outbound channel for a composed contact message.
///
/// Implemented over HTTP in the browser (`POST /api/contact`) and over the
/// EmailJS REST API on the server. Futures are not required to be `Send`
/// so the browser implementation can run on `spawn_local`.
#[allow(async_fn_in_trait)]
pub trait Delivery {
    async fn send(&self, payload: &ContactPayload) -> Result<(), DeliveryError>;
}
