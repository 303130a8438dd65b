//! Multi-step contact form ("conversational form") shared by UI and server.

pub mod answers;
pub mod controller;
pub mod delivery;
pub mod error;
pub mod interest;
pub mod payload;
pub mod validation;

pub use answers::FormAnswers;
pub use controller::{FormTiming, StepFormController, SubmissionStatus};
pub use delivery::{Delivery, DeliveryError};
pub use error::SubmitError;
pub use interest::InterestTag;
pub use payload::{ContactPayload, ContactResponse};
pub use validation::{is_valid_email, validate_step};

/// Количество шагов формы
pub const TOTAL_STEPS: u8 = 4;
