use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, FocusEvent, HtmlInputElement, HtmlTextAreaElement, InputEvent, MouseEvent};
use yew::prelude::*;

use crate::animation::RevealStyle;
use crate::content::SOCIAL_LINKS;
use crate::hooks::{use_reduced_motion, use_reveal, WatchOptions};
use crate::mailer::EmailJs;
use crate::submission::{deliver, use_submission, BannerKind, SubmissionAction, SubmitPhase};
use crate::validation::{
    Field, FormAction, FormMsg, FormState, ValidationMode, TYPING_DEBOUNCE_MS,
};

const SOCIAL_STAGGER: RevealStyle = RevealStyle::Stagger { step_ms: 100 };

/// Click ripple on the submit button, positioned relative to the button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub id: u32,
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// Square ripple covering the button, centred on the click point.
    /// `rect` is the button's (left, top, width, height).
    pub fn at(id: u32, rect: (f64, f64, f64, f64), x: f64, y: f64) -> Self {
        let (left, top, width, height) = rect;
        let size = width.max(height);
        Self {
            id,
            size,
            left: x - left - size / 2.0,
            top: y - top - size / 2.0,
        }
    }

    fn style(&self) -> String {
        format!(
            "width: {0}px; height: {0}px; left: {1}px; top: {2}px;",
            self.size, self.left, self.top
        )
    }
}

fn button_label(phase: SubmitPhase) -> &'static str {
    match phase {
        SubmitPhase::Idle => "Enviar Mensaje",
        SubmitPhase::Sending => "Enviando...",
        SubmitPhase::Sent => "¡Enviado!",
    }
}

/// Submit button classes for each phase.
fn submit_classes(phase: SubmitPhase) -> Vec<&'static str> {
    let mut classes = vec!["button", "contact__submit"];
    match phase {
        SubmitPhase::Idle => {}
        SubmitPhase::Sending => classes.push("is-loading"),
        SubmitPhase::Sent => classes.push("is-success"),
    }
    classes
}

fn stagger_style(index: usize) -> String {
    format!("--stagger-delay: {}ms;", SOCIAL_STAGGER.delay(index))
}

fn input_value(e: &InputEvent) -> String {
    let target = e.target();
    if let Some(input) = target.clone().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
        return input.value();
    }
    target
        .and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok())
        .map(|area| area.value())
        .unwrap_or_default()
}

#[function_component(SocialLinks)]
fn social_links() -> Html {
    let node = use_node_ref();
    let reduced_motion = use_reduced_motion();
    let revealed = use_reveal(node.clone(), WatchOptions::threshold(0.5));
    let shown = revealed || reduced_motion;

    html! {
        <div class="contact__social-links" ref={node}>
            { for SOCIAL_LINKS.iter().enumerate().map(|(index, link)| html! {
                <a
                    href={link.href}
                    class={classes!("social-btn", shown.then(|| "is-visible"))}
                    style={stagger_style(index)}
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label={link.label}
                >
                    {link.label}
                </a>
            }) }
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_reducer(FormState::default);
    let submission = use_submission();
    let debounce = use_mut_ref(HashMap::<Field, Timeout>::new);
    let reduced_motion = use_reduced_motion();
    let ripple = use_state(|| None::<Ripple>);
    let ripple_seq = use_mut_ref(|| 0u32);

    let on_input = |field: Field| {
        let form = form.clone();
        let debounce = debounce.clone();
        Callback::from(move |e: InputEvent| {
            form.dispatch(FormMsg::Edit(field, input_value(&e)));
            let dispatcher = form.dispatcher();
            // replacing the entry drops, and so cancels, the previous timer
            debounce.borrow_mut().insert(
                field,
                Timeout::new(TYPING_DEBOUNCE_MS, move || {
                    dispatcher.dispatch(FormMsg::Do(FormAction::Settled(field)))
                }),
            );
        })
    };

    let on_blur = |field: Field| {
        let form = form.clone();
        let debounce = debounce.clone();
        Callback::from(move |_: FocusEvent| {
            debounce.borrow_mut().remove(&field);
            form.dispatch(FormMsg::Do(FormAction::Blur(field)));
        })
    };

    let on_submit = {
        let form = form.clone();
        let submission = submission.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if submission.phase.is_busy() {
                debug!("submit ignored, send already in flight");
                return;
            }
            let message = match form.fields.validate(ValidationMode::Strict) {
                Ok(message) => message,
                Err(err) => {
                    warn!("contact form rejected: {}", err);
                    submission.dispatch(SubmissionAction::Rejected(err));
                    return;
                }
            };

            submission.dispatch(SubmissionAction::Start);
            let form = form.dispatcher();
            let submission = submission.dispatcher();
            spawn_local(async move {
                let outcome = deliver(&EmailJs::from_config(), &message).await;
                if outcome == SubmissionAction::Delivered {
                    form.dispatch(FormMsg::Do(FormAction::Reset));
                }
                submission.dispatch(outcome);
            });
        })
    };

    let on_button_click = {
        let ripple = ripple.clone();
        Callback::from(move |e: MouseEvent| {
            if reduced_motion {
                return;
            }
            let Some(button) = e.current_target().and_then(|t| t.dyn_into::<Element>().ok())
            else {
                return;
            };
            let r = button.get_bounding_client_rect();
            let mut seq = ripple_seq.borrow_mut();
            *seq = seq.wrapping_add(1);
            ripple.set(Some(Ripple::at(
                *seq,
                (r.left(), r.top(), r.width(), r.height()),
                f64::from(e.client_x()),
                f64::from(e.client_y()),
            )));
        })
    };

    let on_ripple_end = {
        let ripple = ripple.clone();
        Callback::from(move |_: AnimationEvent| ripple.set(None))
    };

    let on_dismiss = {
        let submission = submission.clone();
        Callback::from(move |_: MouseEvent| submission.dispatch(SubmissionAction::Dismiss))
    };

    let group = |field: Field, id: &'static str, kind: &'static str| {
        let state = form.field_state(field);
        let value = form.fields.get(field).to_string();
        html! {
            <div class={classes!(state.group_classes())}>
                if kind == "textarea" {
                    <textarea
                        class={classes!(state.input_classes(), "contact__textarea")}
                        id={id}
                        name={id}
                        rows="6"
                        {value}
                        oninput={on_input(field)}
                        onblur={on_blur(field)}
                    />
                } else {
                    <input
                        class={classes!(state.input_classes())}
                        type={kind}
                        id={id}
                        name={id}
                        {value}
                        oninput={on_input(field)}
                        onblur={on_blur(field)}
                    />
                }
                <label class="contact__label" for={id}>{field.label()}</label>
                <span class="contact__focus-line"></span>
            </div>
        }
    };

    let phase = submission.phase;

    html! {
        <section class="contact section" id="contacto">
            <div class="container contact__container">
                <h2 class="section__title">{"Contacto"}</h2>

                <form class="contact__form" id="contactForm" novalidate={true} onsubmit={on_submit}>
                    { group(Field::Name, "name", "text") }
                    { group(Field::Email, "email", "email") }
                    { group(Field::Subject, "subject", "text") }
                    { group(Field::Message, "message", "textarea") }

                    <button
                        type="submit"
                        class={classes!(submit_classes(phase))}
                        disabled={phase.is_busy()}
                        onclick={on_button_click}
                    >
                        if phase == SubmitPhase::Sending {
                            <span class="button__spinner" aria-hidden="true"></span>
                        }
                        if phase == SubmitPhase::Sent {
                            <svg
                                class="button__icon button__icon--success"
                                xmlns="http://www.w3.org/2000/svg"
                                width="20"
                                height="20"
                                viewBox="0 0 24 24"
                                fill="none"
                                stroke="currentColor"
                                stroke-width="2"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                            >
                                <polyline points="20 6 9 17 4 12"></polyline>
                            </svg>
                        }
                        {button_label(phase)}
                        if let Some(r) = *ripple {
                            <span
                                key={r.id.to_string()}
                                class="button__ripple"
                                style={r.style()}
                                onanimationend={on_ripple_end}
                            />
                        }
                    </button>
                </form>

                if let Some(banner) = submission.banner.as_ref() {
                    <div
                        class={classes!(
                            "contact__status",
                            match banner.kind {
                                BannerKind::Success => "contact__status--success",
                                BannerKind::Error => "contact__status--error",
                            },
                        )}
                        role="status"
                        aria-live="polite"
                    >
                        <p>{banner.message.clone()}</p>
                        <button class="contact__status-close" aria-label="Cerrar" onclick={on_dismiss}>
                            {"✕"}
                        </button>
                    </div>
                }

                <SocialLinks />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ripple_is_centered_on_the_click() {
        let ripple = Ripple::at(1, (10.0, 20.0, 200.0, 40.0), 60.0, 40.0);
        assert_eq!(
            ripple,
            Ripple {
                id: 1,
                size: 200.0,
                left: -50.0,
                top: -80.0
            }
        );
    }

    #[test]
    fn button_follows_submit_phase() {
        assert_eq!(button_label(SubmitPhase::Idle), "Enviar Mensaje");
        assert_eq!(button_label(SubmitPhase::Sending), "Enviando...");
        assert_eq!(button_label(SubmitPhase::Sent), "¡Enviado!");
    }

    #[test]
    fn submit_button_state_classes() {
        assert_eq!(submit_classes(SubmitPhase::Idle), vec!["button", "contact__submit"]);
        assert_eq!(
            submit_classes(SubmitPhase::Sending),
            vec!["button", "contact__submit", "is-loading"]
        );
        assert_eq!(
            submit_classes(SubmitPhase::Sent),
            vec!["button", "contact__submit", "is-success"]
        );
    }

    #[test]
    fn social_links_stagger_through_custom_property() {
        assert_eq!(stagger_style(0), "--stagger-delay: 0ms;");
        assert_eq!(stagger_style(2), "--stagger-delay: 200ms;");
    }
}
