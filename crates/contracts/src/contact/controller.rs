//! State machine behind the conversational contact form.
//!
//! The controller owns the whole form state; the UI only reads it through
//! getters and changes it through the operations below. Time is passed in
//! explicitly so the cooldown and the status auto-dismiss are testable.

use chrono::{DateTime, Duration, Utc};

use super::answers::FormAnswers;
use super::delivery::{Delivery, DeliveryError};
use super::error::SubmitError;
use super::interest::InterestTag;
use super::payload::ContactPayload;
use super::validation::validate_step;
use super::TOTAL_STEPS;

/// Статус отправки формы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionStatus {
    /// Succeeded or Failed: a result banner is on screen.
    pub fn is_settled(&self) -> bool {
        matches!(self, SubmissionStatus::Succeeded | SubmissionStatus::Failed)
    }
}

/// Временные параметры формы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormTiming {
    /// Minimum time between two successful deliveries.
    pub cooldown: Duration,
    /// How long a Succeeded/Failed banner stays before `tick` clears it.
    pub status_display: Duration,
}

impl Default for FormTiming {
    fn default() -> Self {
        Self {
            cooldown: Duration::seconds(60),
            status_display: Duration::seconds(5),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StepFormController {
    current_step: u8,
    answers: FormAnswers,
    status: SubmissionStatus,
    status_changed_at: Option<DateTime<Utc>>,
    last_submit_at: Option<DateTime<Utc>>,
    timing: FormTiming,
}

impl Default for StepFormController {
    fn default() -> Self {
        Self::new()
    }
}

impl StepFormController {
    pub fn new() -> Self {
        Self::with_timing(FormTiming::default())
    }

    pub fn with_timing(timing: FormTiming) -> Self {
        Self {
            current_step: 1,
            answers: FormAnswers::default(),
            status: SubmissionStatus::Idle,
            status_changed_at: None,
            last_submit_at: None,
            timing,
        }
    }

    // ------------------------------------------------------------------
    // Чтение состояния
    // ------------------------------------------------------------------

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    pub fn total_steps(&self) -> u8 {
        TOTAL_STEPS
    }

    pub fn answers(&self) -> &FormAnswers {
        &self.answers
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn last_submit_at(&self) -> Option<DateTime<Utc>> {
        self.last_submit_at
    }

    pub fn timing(&self) -> FormTiming {
        self.timing
    }

    pub fn is_first_step(&self) -> bool {
        self.current_step == 1
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step == TOTAL_STEPS
    }

    /// Whether the gate of the current step is open.
    pub fn can_advance(&self) -> bool {
        validate_step(self.current_step, &self.answers)
    }

    /// Progress in percent for the progress bar.
    pub fn progress_percent(&self) -> u8 {
        (u16::from(self.current_step) * 100 / u16::from(TOTAL_STEPS)) as u8
    }

    // ------------------------------------------------------------------
    // Редактирование ответов
    // ------------------------------------------------------------------

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.answers.name = name.into();
        self.touch();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.answers.email = email.into();
        self.touch();
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.answers.message = message.into();
        self.touch();
    }

    pub fn toggle_interest(&mut self, tag: InterestTag) {
        self.answers.toggle_interest(tag);
        self.touch();
    }

    // ------------------------------------------------------------------
    // Навигация по шагам
    // ------------------------------------------------------------------

    /// Moves to the next step if the current one validates. Returns whether
    /// the step changed.
    pub fn advance(&mut self) -> bool {
        if self.current_step >= TOTAL_STEPS || !self.can_advance() {
            return false;
        }
        self.current_step += 1;
        self.touch();
        true
    }

    /// Moves back one step. Going back is never gated.
    pub fn retreat(&mut self) -> bool {
        if self.current_step <= 1 {
            return false;
        }
        self.current_step -= 1;
        self.touch();
        true
    }

    // ------------------------------------------------------------------
    // Отправка
    // ------------------------------------------------------------------

    /// First half of a submission: runs the preconditions and, when they
    /// pass, switches to `Submitting` and hands back the payload to deliver.
    ///
    /// Order: in-flight guard, honeypot, cooldown, validation. None of the
    /// rejections change state.
    pub fn begin_submit(
        &mut self,
        honeypot: &str,
        now: DateTime<Utc>,
    ) -> Result<ContactPayload, SubmitError> {
        if self.status == SubmissionStatus::Submitting {
            return Err(SubmitError::InFlight);
        }

        if !honeypot.is_empty() {
            return Err(SubmitError::SpamDetected);
        }

        if let Some(last) = self.last_submit_at {
            let elapsed = now - last;
            if elapsed < self.timing.cooldown {
                return Err(SubmitError::RateLimited {
                    retry_after: self.timing.cooldown - elapsed,
                });
            }
        }

        if !(1..=TOTAL_STEPS).all(|step| validate_step(step, &self.answers)) {
            return Err(SubmitError::ValidationFailed);
        }

        self.set_status(SubmissionStatus::Submitting, now);
        Ok(ContactPayload::compose(&self.answers))
    }

    /// Second half of a submission: applies the delivery outcome.
    ///
    /// Success resets step and answers and starts the cooldown. Failure keeps
    /// everything so the visitor can retry at once. Outcomes arriving while no
    /// submission is running leave the state alone.
    pub fn complete_submit(
        &mut self,
        outcome: Result<(), DeliveryError>,
        now: DateTime<Utc>,
    ) -> Result<(), SubmitError> {
        let in_flight = self.status == SubmissionStatus::Submitting;

        match outcome {
            Ok(()) => {
                if in_flight {
                    self.current_step = 1;
                    self.answers = FormAnswers::default();
                    self.last_submit_at = Some(now);
                    self.set_status(SubmissionStatus::Succeeded, now);
                }
                Ok(())
            }
            Err(DeliveryError(reason)) => {
                if in_flight {
                    self.set_status(SubmissionStatus::Failed, now);
                }
                Err(SubmitError::DeliveryFailed(reason))
            }
        }
    }

    /// Full submission against a delivery collaborator.
    pub async fn submit<D: Delivery>(
        &mut self,
        delivery: &D,
        honeypot: &str,
        now: DateTime<Utc>,
    ) -> Result<(), SubmitError> {
        let payload = self.begin_submit(honeypot, now)?;
        let outcome = delivery.send(&payload).await;
        self.complete_submit(outcome, now)
    }

    /// Clears a Succeeded/Failed banner once it has been displayed long
    /// enough. Returns whether the status changed.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        if !self.status.is_settled() {
            return false;
        }
        let shown_since = self.status_changed_at.unwrap_or(now);
        if now - shown_since < self.timing.status_display {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        self.status_changed_at = Some(now);
        true
    }

    /// Any interaction dismisses a settled status immediately.
    fn touch(&mut self) {
        if self.status.is_settled() {
            self.status = SubmissionStatus::Idle;
            self.status_changed_at = None;
        }
    }

    fn set_status(&mut self, status: SubmissionStatus, now: DateTime<Utc>) {
        self.status = status;
        self.status_changed_at = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use chrono::TimeZone;

    struct RecordingDelivery {
        fail: bool,
        sent: RefCell<Vec<ContactPayload>>,
    }

    impl RecordingDelivery {
        fn ok() -> Self {
            Self {
                fail: false,
                sent: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                sent: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.sent.borrow().len()
        }
    }

    impl Delivery for RecordingDelivery {
        async fn send(&self, payload: &ContactPayload) -> Result<(), DeliveryError> {
            self.sent.borrow_mut().push(payload.clone());
            if self.fail {
                Err(DeliveryError::new("upstream 500"))
            } else {
                Ok(())
            }
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    fn filled() -> StepFormController {
        let mut form = StepFormController::new();
        form.set_name("Amal");
        assert!(form.advance());
        form.set_email("amal@example.com");
        assert!(form.advance());
        form.toggle_interest(InterestTag::Nature);
        assert!(form.advance());
        form.set_message("Tell me about Socotra");
        form
    }

    #[test]
    fn test_new_form_is_initial() {
        let form = StepFormController::new();
        assert_eq!(form.current_step(), 1);
        assert!(form.answers().is_empty());
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.last_submit_at(), None);
        assert_eq!(form.progress_percent(), 25);
    }

    #[test]
    fn test_advance_iff_step_validates() {
        let mut form = StepFormController::new();
        assert!(!form.advance());
        assert_eq!(form.current_step(), 1);

        form.set_name("  ");
        assert!(!form.advance());
        form.set_name("Amal");
        assert!(form.advance());
        assert_eq!(form.current_step(), 2);

        form.set_email("not-an-email");
        assert!(!form.advance());
        assert_eq!(form.current_step(), 2);
        form.set_email("amal@example.com");
        assert!(form.advance());

        assert!(!form.advance());
        assert_eq!(form.current_step(), 3);
        form.toggle_interest(InterestTag::Food);
        assert!(form.advance());
        assert_eq!(form.current_step(), 4);
    }

    #[test]
    fn test_advance_at_last_step_is_noop() {
        let mut form = filled();
        assert!(form.is_last_step());
        assert!(form.can_advance());
        assert!(!form.advance());
        assert_eq!(form.current_step(), 4);
        assert_eq!(form.progress_percent(), 100);
    }

    #[test]
    fn test_retreat_never_validates() {
        let mut form = filled();
        form.set_message("");
        form.set_name("");
        assert!(form.retreat());
        assert_eq!(form.current_step(), 3);
        assert!(form.retreat());
        assert!(form.retreat());
        assert_eq!(form.current_step(), 1);
        assert!(!form.retreat());
        assert_eq!(form.current_step(), 1);
    }

    #[test]
    fn test_toggle_interest_is_involution() {
        let mut form = StepFormController::new();
        form.toggle_interest(InterestTag::Culture);
        let before = form.answers().clone();
        form.toggle_interest(InterestTag::Photography);
        form.toggle_interest(InterestTag::Photography);
        assert_eq!(form.answers(), &before);
    }

    #[tokio::test]
    async fn test_successful_submission_resets_form() {
        let delivery = RecordingDelivery::ok();
        let mut form = filled();

        let result = form.submit(&delivery, "", t0()).await;
        assert_eq!(result, Ok(()));
        assert_eq!(delivery.calls(), 1);

        let sent = delivery.sent.borrow()[0].clone();
        assert_eq!(sent.sender_name, "Amal");
        assert_eq!(sent.sender_email, "amal@example.com");
        assert!(sent.body.contains("Interests: nature"));
        assert!(sent.body.ends_with("Tell me about Socotra"));

        assert_eq!(form.status(), SubmissionStatus::Succeeded);
        assert_eq!(form.current_step(), 1);
        assert!(form.answers().is_empty());
        assert_eq!(form.last_submit_at(), Some(t0()));

        assert!(!form.tick(t0() + Duration::seconds(4)));
        assert_eq!(form.status(), SubmissionStatus::Succeeded);
        assert!(form.tick(t0() + Duration::seconds(5)));
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn test_honeypot_is_silent_and_skips_delivery() {
        let delivery = RecordingDelivery::ok();
        let mut form = filled();
        let before = form.answers().clone();

        let result = form.submit(&delivery, "http://spam.example", t0()).await;
        assert_eq!(result, Err(SubmitError::SpamDetected));
        assert_eq!(delivery.calls(), 0);
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.answers(), &before);
        assert_eq!(form.current_step(), 4);
    }

    #[tokio::test]
    async fn test_cooldown_blocks_second_submission() {
        let delivery = RecordingDelivery::ok();
        let mut form = filled();
        form.submit(&delivery, "", t0()).await.unwrap();

        form.set_name("Amal");
        form.advance();
        form.set_email("amal@example.com");
        form.advance();
        form.toggle_interest(InterestTag::Culture);
        form.advance();
        form.set_message("Again");

        let result = form.submit(&delivery, "", t0() + Duration::seconds(30)).await;
        assert_eq!(
            result,
            Err(SubmitError::RateLimited {
                retry_after: Duration::seconds(30)
            })
        );
        assert_eq!(delivery.calls(), 1);
        assert_eq!(form.status(), SubmissionStatus::Idle);

        let result = form.submit(&delivery, "", t0() + Duration::seconds(60)).await;
        assert_eq!(result, Ok(()));
        assert_eq!(delivery.calls(), 2);
    }

    #[tokio::test]
    async fn test_honeypot_checked_before_cooldown() {
        let delivery = RecordingDelivery::ok();
        let mut form = filled();
        form.submit(&delivery, "", t0()).await.unwrap();

        let result = form.submit(&delivery, "bot", t0() + Duration::seconds(1)).await;
        assert_eq!(result, Err(SubmitError::SpamDetected));
    }

    #[tokio::test]
    async fn test_invalid_answers_rejected_at_submit() {
        let delivery = RecordingDelivery::ok();
        let mut form = filled();
        form.set_message("   ");
        assert_eq!(
            form.submit(&delivery, "", t0()).await,
            Err(SubmitError::ValidationFailed)
        );

        form.set_message("hello");
        form.set_email("broken");
        assert_eq!(
            form.submit(&delivery, "", t0()).await,
            Err(SubmitError::ValidationFailed)
        );
        assert_eq!(delivery.calls(), 0);
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn test_failed_delivery_keeps_answers_and_allows_retry() {
        let failing = RecordingDelivery::failing();
        let mut form = filled();
        let before = form.answers().clone();

        let result = form.submit(&failing, "", t0()).await;
        assert_eq!(
            result,
            Err(SubmitError::DeliveryFailed("upstream 500".into()))
        );
        assert_eq!(form.status(), SubmissionStatus::Failed);
        assert_eq!(form.answers(), &before);
        assert_eq!(form.current_step(), 4);
        assert_eq!(form.last_submit_at(), None);

        let ok = RecordingDelivery::ok();
        let retry = form.submit(&ok, "", t0() + Duration::seconds(1)).await;
        assert_eq!(retry, Ok(()));
        assert_eq!(ok.calls(), 1);
    }

    #[test]
    fn test_duplicate_trigger_while_submitting() {
        let mut form = filled();
        let payload = form.begin_submit("", t0());
        assert!(payload.is_ok());
        assert_eq!(form.status(), SubmissionStatus::Submitting);

        assert_eq!(form.begin_submit("", t0()), Err(SubmitError::InFlight));

        assert_eq!(form.complete_submit(Ok(()), t0()), Ok(()));
        assert_eq!(form.status(), SubmissionStatus::Succeeded);
    }

    #[test]
    fn test_stray_completion_is_ignored() {
        let mut form = filled();
        let before = form.answers().clone();
        assert_eq!(form.complete_submit(Ok(()), t0()), Ok(()));
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.answers(), &before);
        assert_eq!(form.last_submit_at(), None);
    }

    #[test]
    fn test_edit_after_failure_clears_status() {
        let mut form = filled();
        form.begin_submit("", t0()).unwrap();
        let _ = form.complete_submit(Err(DeliveryError::new("offline")), t0());
        assert_eq!(form.status(), SubmissionStatus::Failed);

        form.set_message("Tell me about Socotra, please");
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_tick_ignores_idle_and_submitting() {
        let mut form = filled();
        assert!(!form.tick(t0() + Duration::hours(1)));
        form.begin_submit("", t0()).unwrap();
        assert!(!form.tick(t0() + Duration::hours(1)));
        assert_eq!(form.status(), SubmissionStatus::Submitting);
    }

    #[test]
    fn test_custom_timing() {
        let timing = FormTiming {
            cooldown: Duration::seconds(10),
            status_display: Duration::seconds(1),
        };
        let mut form = StepFormController::with_timing(timing);
        assert_eq!(form.timing(), timing);

        form.set_name("Amal");
        form.advance();
        form.set_email("amal@example.com");
        form.advance();
        form.toggle_interest(InterestTag::Food);
        form.advance();
        form.set_message("hi");
        form.begin_submit("", t0()).unwrap();
        form.complete_submit(Ok(()), t0()).unwrap();
        assert!(form.tick(t0() + Duration::seconds(1)));
    }
}
