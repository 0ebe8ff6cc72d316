//! Submit button phases and the status banner shown after a send.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{error, info};
use yew::prelude::*;

use crate::error::UiError;
use crate::mailer::{ContactMessage, EmailDelivery};

/// How long a success banner stays up.
pub const SUCCESS_BANNER_MS: u32 = 5_000;
/// How long the button shows its "sent" state before going idle again.
pub const SENT_STATE_MS: u32 = 2_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

impl SubmitPhase {
    pub fn is_busy(self) -> bool {
        self != SubmitPhase::Idle
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub kind: BannerKind,
    pub message: String,
    /// `None` keeps the banner until the visitor dismisses it.
    pub auto_hide_ms: Option<u32>,
}

impl StatusBanner {
    pub fn success() -> Self {
        Self {
            kind: BannerKind::Success,
            message: "¡Mensaje enviado! Te responderemos a la brevedad.".to_string(),
            auto_hide_ms: Some(SUCCESS_BANNER_MS),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            kind: BannerKind::Error,
            message,
            auto_hide_ms: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionAction {
    Start,
    Rejected(UiError),
    Delivered,
    Failed(UiError),
    SentElapsed,
    Dismiss,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub phase: SubmitPhase,
    pub banner: Option<StatusBanner>,
}

impl Reducible for SubmissionState {
    type Action = SubmissionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SubmissionAction::Start => {
                if self.phase.is_busy() {
                    return self;
                }
                next.phase = SubmitPhase::Sending;
                next.banner = None;
            }
            SubmissionAction::Rejected(err) => {
                next.banner = Some(StatusBanner::error(err.user_message()));
            }
            SubmissionAction::Delivered => {
                next.phase = SubmitPhase::Sent;
                next.banner = Some(StatusBanner::success());
            }
            SubmissionAction::Failed(err) => {
                next.phase = SubmitPhase::Idle;
                next.banner = Some(StatusBanner::error(err.user_message()));
            }
            SubmissionAction::SentElapsed => {
                if self.phase != SubmitPhase::Sent {
                    return self;
                }
                next.phase = SubmitPhase::Idle;
            }
            SubmissionAction::Dismiss => next.banner = None,
        }
        Rc::new(next)
    }
}

/// Hands the message to the delivery service and maps the outcome onto the
/// action that completes the submission.
pub async fn deliver<D>(delivery: &D, message: &ContactMessage) -> SubmissionAction
where
    D: EmailDelivery + ?Sized,
{
    match delivery.send(message).await {
        Ok(()) => {
            info!("contact message delivered");
            SubmissionAction::Delivered
        }
        Err(err) => {
            error!("contact message not delivered: {}", err);
            SubmissionAction::Failed(err)
        }
    }
}

/// Dismisses a self-hiding banner once its delay runs out. Banners without
/// a delay get no timer.
pub fn banner_timer(
    auto_hide_ms: Option<u32>,
    dispatch: impl FnOnce(SubmissionAction) + 'static,
) -> Option<Timeout> {
    auto_hide_ms.map(|ms| Timeout::new(ms, move || dispatch(SubmissionAction::Dismiss)))
}

/// Returns the button to idle [`SENT_STATE_MS`] after a successful send.
pub fn sent_timer(
    phase: SubmitPhase,
    dispatch: impl FnOnce(SubmissionAction) + 'static,
) -> Option<Timeout> {
    (phase == SubmitPhase::Sent)
        .then(|| Timeout::new(SENT_STATE_MS, move || dispatch(SubmissionAction::SentElapsed)))
}

/// Submission state with its timers attached: the success banner hides
/// itself and the "sent" button state lapses back to idle.
#[hook]
pub fn use_submission() -> UseReducerHandle<SubmissionState> {
    let submission = use_reducer(SubmissionState::default);

    {
        let dispatcher = submission.dispatcher();
        use_effect_with_deps(
            move |auto_hide: &Option<u32>| {
                let timer = banner_timer(*auto_hide, move |action| dispatcher.dispatch(action));
                move || drop(timer)
            },
            submission.banner.as_ref().and_then(|b| b.auto_hide_ms),
        );
    }

    {
        let dispatcher = submission.dispatcher();
        use_effect_with_deps(
            move |phase: &SubmitPhase| {
                let timer = sent_timer(*phase, move |action| dispatcher.dispatch(action));
                move || drop(timer)
            },
            submission.phase,
        );
    }

    submission
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use async_trait::async_trait;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::validation::{ContactFields, Field, FormAction, FormMsg, FormState, ValidationMode};

    #[derive(Default)]
    struct RecordingDelivery {
        sent: RefCell<Vec<ContactMessage>>,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl EmailDelivery for RecordingDelivery {
        async fn send(&self, message: &ContactMessage) -> Result<(), UiError> {
            self.sent.borrow_mut().push(message.clone());
            if self.fail {
                Err(UiError::Delivery("status 500".into()))
            } else {
                Ok(())
            }
        }
    }

    fn filled_form() -> Rc<FormState> {
        let mut form = Rc::new(FormState::default());
        for (field, value) in [
            (Field::Name, "Ana Gomez"),
            (Field::Email, "ana@test.com"),
            (Field::Subject, "Consulta"),
            (Field::Message, "Hola, quiero mas info"),
        ] {
            form = form.reduce(FormMsg::Edit(field, value.to_string()));
        }
        form
    }

    #[test]
    fn valid_form_is_delivered_once_then_reset() {
        let delivery = RecordingDelivery::default();
        let form = filled_form();
        let state = Rc::new(SubmissionState::default());

        let message = form.fields.validate(ValidationMode::Strict).unwrap();
        let state = state.reduce(SubmissionAction::Start);
        assert_eq!(state.phase, SubmitPhase::Sending);

        let outcome = block_on(deliver(&delivery, &message));
        assert_eq!(outcome, SubmissionAction::Delivered);
        let form = form.reduce(FormMsg::Do(FormAction::Reset));
        let state = state.reduce(outcome);

        assert_eq!(
            *delivery.sent.borrow(),
            vec![ContactMessage {
                from_name: "Ana Gomez".into(),
                from_email: "ana@test.com".into(),
                subject: "Consulta".into(),
                message: "Hola, quiero mas info".into(),
            }]
        );
        assert_eq!(form.fields, ContactFields::default());
        assert_eq!(state.phase, SubmitPhase::Sent);
        let banner = state.banner.clone().unwrap();
        assert_eq!(banner.kind, BannerKind::Success);
        assert_eq!(banner.auto_hide_ms, Some(SUCCESS_BANNER_MS));

        // the banner's timer dismisses it; the button timer returns to idle
        let state = state.reduce(SubmissionAction::Dismiss);
        let state = state.reduce(SubmissionAction::SentElapsed);
        assert_eq!(*state, SubmissionState::default());
    }

    #[test]
    fn resubmit_while_sending_is_ignored() {
        let state = Rc::new(SubmissionState::default()).reduce(SubmissionAction::Start);
        let again = state.clone().reduce(SubmissionAction::Start);
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn failure_restores_button_and_keeps_error() {
        let delivery = RecordingDelivery {
            fail: true,
            ..Default::default()
        };
        let message = filled_form().fields.validate(ValidationMode::Strict).unwrap();
        let state = Rc::new(SubmissionState::default()).reduce(SubmissionAction::Start);

        let state = state.reduce(block_on(deliver(&delivery, &message)));
        assert_eq!(state.phase, SubmitPhase::Idle);
        let banner = state.banner.clone().unwrap();
        assert_eq!(banner.kind, BannerKind::Error);
        assert_eq!(banner.auto_hide_ms, None);
        assert!(banner.message.contains(crate::config::get_fallback_contact()));
    }

    #[test]
    fn rejected_form_never_reaches_delivery() {
        let mut form = (*filled_form()).clone();
        form.set_value(Field::Name, "A".into());
        let err = form.fields.validate(ValidationMode::Strict).unwrap_err();

        let state = Rc::new(SubmissionState::default()).reduce(SubmissionAction::Rejected(err));
        assert_eq!(state.phase, SubmitPhase::Idle);
        assert_eq!(state.banner.as_ref().map(|b| b.kind), Some(BannerKind::Error));
    }

    #[test]
    fn only_self_hiding_banners_and_sent_phase_get_timers() {
        assert!(banner_timer(None, |_| ()).is_none());
        assert!(sent_timer(SubmitPhase::Idle, |_| ()).is_none());
        assert!(sent_timer(SubmitPhase::Sending, |_| ()).is_none());
    }
}
