//! Types shared between the Yemen Gems front end and back end.
//!
//! - `contact` - the multi-step contact form: answers, step validation,
//!   the `StepFormController` state machine and the delivery seam.
//! - `shared` - language selection and bilingual text.

pub mod contact;
pub mod shared;
