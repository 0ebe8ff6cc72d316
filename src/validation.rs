//! Contact form rules: field checks, sanitizing and the per-field
//! typing/valid/filled state behind the form's inline feedback.

use std::fmt;
use std::rc::Rc;

use once_cell::sync::Lazy;
use regex::Regex;
use yew::Reducible;

use crate::error::UiError;
use crate::mailer::ContactMessage;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Idle time after the last keystroke before a field is re-checked.
pub const TYPING_DEBOUNCE_MS: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    fn slot(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Nombre",
            Field::Email => "Email",
            Field::Subject => "Asunto",
            Field::Message => "Mensaje",
        }
    }

    /// Inclusive character bounds enforced on submit.
    pub fn length_bounds(self) -> Option<(usize, usize)> {
        match self {
            Field::Name => Some((2, 100)),
            Field::Subject => Some((3, 150)),
            Field::Message => Some((10, 2000)),
            Field::Email => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Non-empty, plus the email pattern. Used for inline feedback.
    Basic,
    /// Basic plus length bounds. Used on submit.
    Strict,
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn check_field(field: Field, value: &str, mode: ValidationMode) -> Result<(), UiError> {
    let value = value.trim();
    let fail = |reason: String| Err(UiError::Validation { field, reason });

    if value.is_empty() {
        return fail(format!("El campo {} es obligatorio.", field.label()));
    }
    if field == Field::Email && !is_valid_email(value) {
        return fail("Ingresa un email válido.".to_string());
    }
    if mode == ValidationMode::Strict {
        if let Some((min, max)) = field.length_bounds() {
            let len = value.chars().count();
            if len < min {
                return fail(format!(
                    "{} debe tener al menos {} caracteres.",
                    field.label(),
                    min
                ));
            }
            if len > max {
                return fail(format!(
                    "{} no puede superar los {} caracteres.",
                    field.label(),
                    max
                ));
            }
        }
    }
    Ok(())
}

/// Escapes the characters that could open markup in the delivered email.
pub fn sanitize(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.trim().chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// First failing field wins; on success returns the sanitized message.
    pub fn validate(&self, mode: ValidationMode) -> Result<ContactMessage, UiError> {
        for field in Field::ALL {
            check_field(field, self.get(field), mode)?;
        }
        Ok(ContactMessage {
            from_name: sanitize(&self.name),
            from_email: sanitize(&self.email),
            subject: sanitize(&self.subject),
            message: sanitize(&self.message),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldState {
    pub is_typing: bool,
    pub is_valid: bool,
    pub is_filled: bool,
}

impl FieldState {
    /// Classes for the `.contact__group` wrapper.
    pub fn group_classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["contact__group"];
        if self.is_typing {
            classes.push("is-typing");
        }
        if self.is_valid {
            classes.push("is-valid");
        }
        classes
    }

    /// Classes for the input itself; `is-filled` drives the floating label.
    pub fn input_classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["contact__input"];
        if self.is_filled {
            classes.push("is-filled");
        }
        classes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Input(Field),
    /// Debounce window elapsed without further input.
    Settled(Field),
    Blur(Field),
    Reset,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub fields: ContactFields,
    states: [FieldState; 4],
}

impl FormState {
    pub fn field_state(&self, field: Field) -> FieldState {
        self.states[field.slot()]
    }

    pub fn set_value(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Input(field) => {
                let state = &mut self.states[field.slot()];
                state.is_valid = false;
                state.is_typing = true;
            }
            FormAction::Settled(field) => {
                let valid = self.basic_valid(field);
                let state = &mut self.states[field.slot()];
                state.is_typing = false;
                state.is_valid = valid;
            }
            FormAction::Blur(field) => {
                let valid = self.basic_valid(field);
                let filled = !self.fields.get(field).trim().is_empty();
                let state = &mut self.states[field.slot()];
                state.is_typing = false;
                state.is_valid = valid;
                state.is_filled = filled;
            }
            FormAction::Reset => *self = FormState::default(),
        }
    }

    fn basic_valid(&self, field: Field) -> bool {
        check_field(field, self.fields.get(field), ValidationMode::Basic).is_ok()
    }
}

/// Reducer message: a value change carries the new text, everything else
/// is a plain [`FormAction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMsg {
    Edit(Field, String),
    Do(FormAction),
}

impl Reducible for FormState {
    type Action = FormMsg;

    fn reduce(self: Rc<Self>, msg: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match msg {
            FormMsg::Edit(field, value) => {
                next.set_value(field, value);
                next.apply(FormAction::Input(field));
            }
            FormMsg::Do(action) => next.apply(action),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("user@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("us er@example.com"));
    }

    #[test]
    fn name_length_bounds() {
        let strict = |len: usize| check_field(Field::Name, &"a".repeat(len), ValidationMode::Strict);
        assert!(strict(1).is_err());
        assert!(strict(2).is_ok());
        assert!(strict(100).is_ok());
        assert!(strict(101).is_err());
    }

    #[test]
    fn bounds_count_characters_not_bytes() {
        // 100 two-byte characters
        let name = "ñ".repeat(100);
        assert!(check_field(Field::Name, &name, ValidationMode::Strict).is_ok());
    }

    #[test]
    fn basic_mode_skips_bounds() {
        assert!(check_field(Field::Message, "hola", ValidationMode::Basic).is_ok());
        assert!(check_field(Field::Message, "hola", ValidationMode::Strict).is_err());
        assert!(check_field(Field::Subject, "   ", ValidationMode::Basic).is_err());
    }

    #[test]
    fn sanitize_escapes_markup() {
        assert_eq!(
            sanitize(" <b>\"hi\" it's</b> "),
            "&lt;b&gt;&quot;hi&quot; it&#39;s&lt;/b&gt;"
        );
    }

    #[test]
    fn validate_reports_first_bad_field() {
        let fields = ContactFields {
            name: "Ana".into(),
            email: "ana@".into(),
            subject: "x".into(),
            message: String::new(),
        };
        match fields.validate(ValidationMode::Strict) {
            Err(UiError::Validation { field, .. }) => assert_eq!(field, Field::Email),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn typing_then_settle_marks_valid() {
        let form = Rc::new(FormState::default());
        let form = form.reduce(FormMsg::Edit(Field::Email, "ana@test.com".into()));
        assert_eq!(
            form.field_state(Field::Email),
            FieldState { is_typing: true, is_valid: false, is_filled: false }
        );

        let form = form.reduce(FormMsg::Do(FormAction::Settled(Field::Email)));
        assert!(!form.field_state(Field::Email).is_typing);
        assert!(form.field_state(Field::Email).is_valid);
    }

    #[test]
    fn blur_to_empty_resets_field() {
        let form = Rc::new(FormState::default());
        let form = form.reduce(FormMsg::Edit(Field::Name, "Ana".into()));
        let form = form.reduce(FormMsg::Do(FormAction::Blur(Field::Name)));
        assert!(form.field_state(Field::Name).is_filled);

        let form = form.reduce(FormMsg::Edit(Field::Name, "  ".into()));
        let form = form.reduce(FormMsg::Do(FormAction::Blur(Field::Name)));
        assert_eq!(form.field_state(Field::Name), FieldState::default());
    }

    #[test]
    fn invalid_email_is_not_marked_valid_on_blur() {
        let form = Rc::new(FormState::default());
        let form = form.reduce(FormMsg::Edit(Field::Email, "ana@test".into()));
        let form = form.reduce(FormMsg::Do(FormAction::Blur(Field::Email)));
        let state = form.field_state(Field::Email);
        assert!(!state.is_valid);
        assert!(state.is_filled);
        assert_eq!(state.group_classes(), vec!["contact__group"]);
        assert_eq!(state.input_classes(), vec!["contact__input", "is-filled"]);
    }

    #[test]
    fn group_and_input_carry_their_own_classes() {
        let form = Rc::new(FormState::default());
        let form = form.reduce(FormMsg::Edit(Field::Name, "Ana".into()));
        let typing = form.field_state(Field::Name);
        assert_eq!(typing.group_classes(), vec!["contact__group", "is-typing"]);
        assert_eq!(typing.input_classes(), vec!["contact__input"]);

        let form = form.reduce(FormMsg::Do(FormAction::Blur(Field::Name)));
        let settled = form.field_state(Field::Name);
        assert_eq!(settled.group_classes(), vec!["contact__group", "is-valid"]);
        assert_eq!(settled.input_classes(), vec!["contact__input", "is-filled"]);
    }
}
