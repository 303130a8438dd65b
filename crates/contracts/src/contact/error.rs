use chrono::Duration;
use thiserror::Error;

use crate::shared::Language;

/// Почему попытка отправки формы не состоялась
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The honeypot field was filled in. Never shown to the visitor.
    #[error("spam detected")]
    SpamDetected,

    #[error("rate limited, retry in {}s", .retry_after.num_seconds())]
    RateLimited { retry_after: Duration },

    #[error("form answers did not validate")]
    ValidationFailed,

    /// A delivery is already running.
    #[error("submission already in flight")]
    InFlight,

    #[error("delivery failed: {0}")]
    DeliveryFailed(String),
}

impl SubmitError {
    /// Text for the status banner. `None` means the failure stays silent.
    pub fn user_message(&self, language: Language) -> Option<&'static str> {
        let text = match (self, language) {
            (SubmitError::SpamDetected, _) | (SubmitError::InFlight, _) => return None,
            (SubmitError::RateLimited { .. }, Language::Ar) => {
                "يرجى الانتظار قبل إرسال رسالة أخرى."
            }
            (SubmitError::RateLimited { .. }, Language::En) => {
                "Please wait before sending another message."
            }
            (SubmitError::ValidationFailed, Language::Ar) => "يرجى إكمال جميع الحقول بشكل صحيح.",
            (SubmitError::ValidationFailed, Language::En) => {
                "Please complete all fields correctly."
            }
            (SubmitError::DeliveryFailed(_), Language::Ar) => {
                "حدث خطأ أثناء الإرسال. يرجى المحاولة مرة أخرى."
            }
            (SubmitError::DeliveryFailed(_), Language::En) => {
                "Something went wrong. Please try again."
            }
        };
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_errors_have_no_message() {
        for lang in Language::all() {
            assert_eq!(SubmitError::SpamDetected.user_message(lang), None);
            assert_eq!(SubmitError::InFlight.user_message(lang), None);
        }
    }

    #[test]
    fn test_visible_errors_are_localised() {
        let limited = SubmitError::RateLimited {
            retry_after: Duration::seconds(30),
        };
        assert_ne!(
            limited.user_message(Language::Ar),
            limited.user_message(Language::En)
        );
        assert!(SubmitError::DeliveryFailed("timeout".into())
            .user_message(Language::En)
            .is_some());
        assert_eq!(limited.to_string(), "rate limited, retry in 30s");
    }
}
