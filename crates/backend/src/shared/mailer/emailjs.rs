use std::time::Duration;

use contracts::contact::{ContactPayload, Delivery, DeliveryError};
use serde::Serialize;
use thiserror::Error;

use crate::shared::config::MailerConfig;

/// Ошибки отправки через EmailJS
#[derive(Debug, Error)]
pub enum MailerError {
    #[error("EmailJS credentials are not configured")]
    NotConfigured,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("EmailJS rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Тело запроса `POST /api/v1.0/email/send`
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// Поля шаблона письма (совпадают с именами полей формы на сайте)
#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    user_name: &'a str,
    user_email: &'a str,
    reply_to: &'a str,
    message: &'a str,
}

/// EmailJS REST client used as the server side delivery channel.
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    http: reqwest::Client,
    config: MailerConfig,
}

impl EmailJsClient {
    pub fn new(config: MailerConfig) -> Result<Self, MailerError> {
        if !config.is_configured() {
            return Err(MailerError::NotConfigured);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    fn build_request<'a>(&'a self, payload: &'a ContactPayload) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: TemplateParams {
                user_name: &payload.sender_name,
                user_email: &payload.sender_email,
                reply_to: &payload.sender_email,
                message: &payload.body,
            },
        }
    }

    pub async fn send_message(&self, payload: &ContactPayload) -> Result<(), MailerError> {
        let request = self.build_request(payload);

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailerError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!("Contact message from {} relayed", payload.sender_email);
        Ok(())
    }
}

impl Delivery for EmailJsClient {
    async fn send(&self, payload: &ContactPayload) -> Result<(), DeliveryError> {
        self.send_message(payload)
            .await
            .map_err(|e| DeliveryError::new(e.to_string()))
    }
}
