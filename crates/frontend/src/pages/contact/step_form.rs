//! Conversational contact form: one question per screen.
//!
//! All form rules live in [`StepFormController`]; this component only keeps
//! it in a signal, renders the current step and drives the async delivery.

use chrono::Utc;
use contracts::contact::{
    Delivery, InterestTag, StepFormController, SubmissionStatus, SubmitError, TOTAL_STEPS,
};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::HttpDelivery;
use crate::shared::content::contact;
use crate::shared::icons::icon;
use crate::shared::language::use_language;

/// Applies an edit and drops a rate-limit/validation notice left over from
/// the previous attempt.
fn apply_edit(
    form: &mut StepFormController,
    notice: &mut Option<SubmitError>,
    apply: impl FnOnce(&mut StepFormController),
) {
    apply(form);
    *notice = None;
}

fn edit(
    form: RwSignal<StepFormController>,
    notice: RwSignal<Option<SubmitError>>,
    apply: impl FnOnce(&mut StepFormController),
) {
    let mut current = notice.get_untracked();
    let had_notice = current.is_some();
    form.update(|f| apply_edit(f, &mut current, apply));
    if had_notice {
        notice.set(current);
    }
}

/// Which rejections of `begin_submit` are shown to the visitor.
fn rejection_notice(error: SubmitError) -> Option<SubmitError> {
    match error {
        SubmitError::SpamDetected | SubmitError::InFlight => None,
        other => Some(other),
    }
}

/// Delay before a Succeeded/Failed banner is handed to `tick`.
fn status_reset_delay_ms(form: &StepFormController) -> u32 {
    let millis = form.timing().status_display.num_milliseconds().max(0);
    u32::try_from(millis).unwrap_or(u32::MAX)
}

/// Schedules the reset of the success/failure banner.
fn schedule_status_reset(form: RwSignal<StepFormController>) {
    let Some(delay) = form.try_with_untracked(status_reset_delay_ms) else {
        return;
    };

    Timeout::new(delay, move || {
        let _ = form.try_update(|f| f.tick(Utc::now()));
    })
    .forget();
}

#[component]
pub fn StepForm() -> impl IntoView {
    let lang = use_language();
    let form = RwSignal::new(StepFormController::new());
    let notice = RwSignal::new(Option::<SubmitError>::None);
    let honeypot = RwSignal::new(String::new());

    // Шаг меняется реже, чем ответы: поля ввода не пересоздаются при наборе
    let step = Memo::new(move |_| form.with(|f| f.current_step()));
    let status = Memo::new(move |_| form.with(|f| f.status()));
    let submitting = move || status.get() == SubmissionStatus::Submitting;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if !form.with_untracked(|f| f.is_last_step()) {
            edit(form, notice, |f| {
                f.advance();
            });
            return;
        }

        let trap = honeypot.get_untracked();
        let started = form.try_update(|f| f.begin_submit(&trap, Utc::now()));

        match started {
            Some(Ok(payload)) => {
                spawn_local(async move {
                    let outcome = HttpDelivery.send(&payload).await;
                    let completed = form.try_update(|f| f.complete_submit(outcome, Utc::now()));
                    match completed {
                        Some(Ok(())) => log::info!("Contact form delivered"),
                        Some(Err(e)) => log::error!("Contact form: {}", e),
                        None => return,
                    }
                    schedule_status_reset(form);
                });
            }
            Some(Err(SubmitError::SpamDetected)) => {
                log::warn!("Contact form: honeypot filled, submission dropped");
            }
            Some(Err(e)) => {
                log::debug!("Contact form rejected: {}", e);
                if let Some(shown) = rejection_notice(e) {
                    notice.set(Some(shown));
                }
            }
            None => {}
        }
    };

    let name_step = move || {
        view! {
            <div class="step-form__step">
                <label class="step-form__question" for="contact-name">
                    {move || lang.text(&contact::NAME_QUESTION)}
                </label>
                <input
                    id="contact-name"
                    type="text"
                    name="user_name"
                    autocomplete="name"
                    placeholder=move || lang.text(&contact::NAME_PLACEHOLDER)
                    prop:value=move || form.with(|f| f.answers().name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit(form, notice, |f| f.set_name(value));
                    }
                />
            </div>
        }
    };

    let email_step = move || {
        view! {
            <div class="step-form__step">
                <label class="step-form__question" for="contact-email">
                    {move || lang.text(&contact::EMAIL_QUESTION)}
                </label>
                <input
                    id="contact-email"
                    type="email"
                    name="user_email"
                    autocomplete="email"
                    dir="ltr"
                    placeholder=move || lang.text(&contact::EMAIL_PLACEHOLDER)
                    prop:value=move || form.with(|f| f.answers().email.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit(form, notice, |f| f.set_email(value));
                    }
                />
            </div>
        }
    };

    let interests_step = move || {
        view! {
            <div class="step-form__step">
                <p class="step-form__question">{move || lang.text(&contact::INTERESTS_QUESTION)}</p>
                <p class="step-form__hint">{move || lang.text(&contact::INTERESTS_HINT)}</p>
                <div class="interest-chips">
                    {InterestTag::all().into_iter().map(|tag| {
                        let selected = move || form.with(|f| f.answers().has_interest(tag));
                        view! {
                            <button
                                type="button"
                                class=move || if selected() { "interest-chip selected" } else { "interest-chip" }
                                aria-pressed=move || selected().to_string()
                                on:click=move |_| edit(form, notice, |f| f.toggle_interest(tag))
                            >
                                <span class="interest-chip__icon">{tag.icon()}</span>
                                {move || tag.label_in(lang.get())}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
        }
    };

    let message_step = move || {
        view! {
            <div class="step-form__step">
                <label class="step-form__question" for="contact-message">
                    {move || lang.text(&contact::MESSAGE_QUESTION)}
                </label>
                <textarea
                    id="contact-message"
                    name="message"
                    rows="5"
                    placeholder=move || lang.text(&contact::MESSAGE_PLACEHOLDER)
                    prop:value=move || form.with(|f| f.answers().message.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit(form, notice, |f| f.set_message(value));
                    }
                ></textarea>
            </div>
        }
    };

    view! {
        <form class="step-form" on:submit=on_submit novalidate=true>
            <div class="step-form__progress">
                <div
                    class="step-form__progress-bar"
                    style:width=move || format!("{}%", form.with(|f| f.progress_percent()))
                ></div>
            </div>
            <div class="step-form__counter">
                {move || format!("{} {} / {}", lang.text(&contact::STEP_OF), step.get(), TOTAL_STEPS)}
            </div>

            // Ловушка для ботов: человек это поле не видит
            <input
                type="text"
                name="website_url"
                class="step-form__trap"
                style="position:absolute;left:-9999px;opacity:0;"
                tabindex="-1"
                autocomplete="off"
                aria-hidden="true"
                prop:value=move || honeypot.get()
                on:input=move |ev| honeypot.set(event_target_value(&ev))
            />

            <div class="step-form__body">
                {move || match step.get() {
                    1 => name_step().into_any(),
                    2 => email_step().into_any(),
                    3 => interests_step().into_any(),
                    _ => message_step().into_any(),
                }}
            </div>

            {move || match status.get() {
                SubmissionStatus::Succeeded => Some(view! {
                    <div class="step-form__status success" role="status">
                        {icon("check")}
                        <span>{move || lang.text(&contact::SUCCESS)}</span>
                    </div>
                }.into_any()),
                SubmissionStatus::Failed => Some(view! {
                    <div class="step-form__status error" role="alert">
                        {icon("alert")}
                        <span>{move || {
                            SubmitError::DeliveryFailed(String::new())
                                .user_message(lang.get())
                                .unwrap_or_default()
                        }}</span>
                    </div>
                }.into_any()),
                _ => None,
            }}

            {move || {
                notice
                    .get()
                    .and_then(|e| e.user_message(lang.get()))
                    .map(|text| view! {
                        <div class="step-form__status warning" role="alert">
                            {icon("alert")}
                            <span>{text}</span>
                        </div>
                    })
            }}

            <div class="step-form__actions">
                <Show when=move || { step.get() > 1 }>
                    <button
                        type="button"
                        class="btn-secondary"
                        disabled=submitting
                        on:click=move |_| edit(form, notice, |f| {
                            f.retreat();
                        })
                    >
                        {move || lang.text(&contact::BACK)}
                    </button>
                </Show>

                <Show
                    when=move || { step.get() < TOTAL_STEPS }
                    fallback=move || view! {
                        <button type="submit" class="btn-primary" disabled=submitting>
                            {move || if submitting() {
                                lang.text(&contact::SENDING)
                            } else {
                                lang.text(&contact::SUBMIT)
                            }}
                        </button>
                    }
                >
                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || !form.with(|f| f.can_advance())
                    >
                        {move || lang.text(&contact::NEXT)}
                    </button>
                </Show>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone};
    use contracts::contact::DeliveryError;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    fn filled() -> StepFormController {
        let mut form = StepFormController::new();
        form.set_name("Amal");
        form.set_email("amal@example.com");
        form.toggle_interest(InterestTag::Nature);
        form.set_message("Socotra in November?");
        form
    }

    #[test]
    fn test_edit_clears_rate_limit_notice() {
        let mut form = StepFormController::new();
        let mut notice = Some(SubmitError::RateLimited {
            retry_after: Duration::seconds(30),
        });

        apply_edit(&mut form, &mut notice, |f| f.set_name("Amal"));

        assert!(notice.is_none());
        assert_eq!(form.answers().name, "Amal");
    }

    #[test]
    fn test_next_step_clears_validation_notice() {
        let mut form = StepFormController::new();
        form.set_name("Amal");
        let mut notice = Some(SubmitError::ValidationFailed);

        apply_edit(&mut form, &mut notice, |f| {
            f.advance();
        });

        assert!(notice.is_none());
        assert_eq!(form.current_step(), 2);
    }

    #[test]
    fn test_silent_rejections_have_no_notice() {
        assert_eq!(rejection_notice(SubmitError::SpamDetected), None);
        assert_eq!(rejection_notice(SubmitError::InFlight), None);
        assert_eq!(
            rejection_notice(SubmitError::ValidationFailed),
            Some(SubmitError::ValidationFailed)
        );
    }

    #[test]
    fn test_failed_status_cleared_after_reset_delay() {
        let mut form = filled();
        form.begin_submit("", t0()).unwrap();
        let result = form.complete_submit(Err(DeliveryError::new("offline")), t0());
        assert!(matches!(result, Err(SubmitError::DeliveryFailed(_))));
        assert_eq!(form.status(), SubmissionStatus::Failed);

        let delay = status_reset_delay_ms(&form);
        assert_eq!(delay, 5000);
        assert!(!form.tick(t0() + Duration::milliseconds(i64::from(delay) - 1)));
        assert!(form.tick(t0() + Duration::milliseconds(i64::from(delay))));
        assert_eq!(form.status(), SubmissionStatus::Idle);
        // Ответы сохраняются для повторной попытки
        assert_eq!(form.answers().name, "Amal");
    }

    #[test]
    fn test_succeeded_status_cleared_after_reset_delay() {
        let mut form = filled();
        form.begin_submit("", t0()).unwrap();
        form.complete_submit(Ok(()), t0()).unwrap();
        assert_eq!(form.status(), SubmissionStatus::Succeeded);

        let delay = i64::from(status_reset_delay_ms(&form));
        assert!(form.tick(t0() + Duration::milliseconds(delay)));
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }
}
