//! Отправка писем с контактной формы.

pub mod emailjs;

use once_cell::sync::OnceCell;

pub use emailjs::{EmailJsClient, MailerError};

static MAILER: OnceCell<EmailJsClient> = OnceCell::new();

/// Installs the process-wide mailer. Later calls are ignored.
pub fn initialize(client: EmailJsClient) {
    if MAILER.set(client).is_err() {
        tracing::warn!("Mailer already initialized, keeping the first instance");
    }
}

/// `None` when EmailJS keys were not configured at startup.
pub fn get_mailer() -> Option<&'static EmailJsClient> {
    MAILER.get()
}
