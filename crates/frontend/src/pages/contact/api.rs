use contracts::contact::{ContactPayload, ContactResponse, Delivery, DeliveryError};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Отправить заявку на сервер, который пересылает её в EmailJS
pub async fn send_contact(payload: &ContactPayload) -> Result<(), String> {
    let response = Request::post(&api_url("/api/contact"))
        .json(payload)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let ok = response.ok();
    let status = response.status();
    let data: Option<ContactResponse> = response.json().await.ok();

    match data {
        Some(data) if ok && data.success => Ok(()),
        Some(data) => Err(data.message),
        None => Err(format!("HTTP error: {}", status)),
    }
}

/// Delivery over the site's own `/api/contact` endpoint.
pub struct HttpDelivery;

impl Delivery for HttpDelivery {
    async fn send(&self, payload: &ContactPayload) -> Result<(), DeliveryError> {
        send_contact(payload).await.map_err(DeliveryError::new)
    }
}
