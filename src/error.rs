use thiserror::Error;

use crate::validation::Field;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UiError {
    #[error("missing element: {0}")]
    MissingElement(&'static str),

    #[error("no template found for id=\"template-{0}\"")]
    MissingTemplate(String),

    #[error("trigger has no usable index: {0:?}")]
    InvalidTrigger(String),

    #[error("index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("collection is empty")]
    EmptyCollection,

    #[error("{field}: {reason}")]
    Validation { field: Field, reason: String },

    #[error("email delivery failed: {0}")]
    Delivery(String),
}

impl From<gloo_net::Error> for UiError {
    fn from(err: gloo_net::Error) -> Self {
        UiError::Delivery(err.to_string())
    }
}

impl UiError {
    /// Message shown to the visitor. Internal details stay in the log.
    pub fn user_message(&self) -> String {
        match self {
            UiError::Validation { reason, .. } => reason.clone(),
            UiError::Delivery(_) => format!(
                "No pudimos enviar tu mensaje. Escríbenos directamente a {}.",
                crate::config::get_fallback_contact()
            ),
            _ => "Ocurrió un error inesperado.".to_string(),
        }
    }
}
