use serde::{Deserialize, Serialize};

use super::answers::FormAnswers;
use super::validation::is_valid_email;

/// Сообщение, которое уходит в сервис доставки
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub sender_name: String,
    pub sender_email: String,
    pub body: String,
}

impl ContactPayload {
    /// Builds the outgoing message: all answers go into `body`, name and email
    /// are also kept as separate fields for the reply-to header.
    pub fn compose(answers: &FormAnswers) -> Self {
        let body = format!(
            "Name: {}\nEmail: {}\nInterests: {}\n\nMessage:\n{}",
            answers.name.trim(),
            answers.email.trim(),
            answers.interests_line(),
            answers.message.trim(),
        );

        Self {
            sender_name: answers.name.trim().to_string(),
            sender_email: answers.email.trim().to_string(),
            body,
        }
    }

    /// Server side re-check of a payload received over HTTP.
    pub fn validate(&self) -> Result<(), String> {
        if self.sender_name.trim().is_empty() {
            return Err("sender_name is empty".to_string());
        }
        if !is_valid_email(&self.sender_email) {
            return Err(format!("sender_email is not an email: {}", self.sender_email));
        }
        if self.body.trim().is_empty() {
            return Err("body is empty".to_string());
        }
        Ok(())
    }
}

/// Ответ `POST /api/contact`
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}
