use async_trait::async_trait;
use gloo_net::http::Request;
use log::{debug, error};
use serde::Serialize;

use crate::config;
use crate::error::UiError;

/// Sanitized contact form contents, as handed to the delivery service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
}

#[async_trait(?Send)]
pub trait EmailDelivery {
    async fn send(&self, message: &ContactMessage) -> Result<(), UiError>;
}

#[derive(Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactMessage,
}

/// EmailJS REST delivery. No retries: a failure goes straight back to the
/// form, which points the visitor at the fallback address.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailJs {
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
}

impl EmailJs {
    pub fn new(
        endpoint: impl Into<String>,
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(
            config::get_email_api_url(),
            config::get_email_service_id(),
            config::get_email_template_id(),
            config::get_email_public_key(),
        )
    }

    fn payload<'a>(&'a self, message: &'a ContactMessage) -> EmailJsRequest<'a> {
        EmailJsRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: message,
        }
    }
}

#[async_trait(?Send)]
impl EmailDelivery for EmailJs {
    async fn send(&self, message: &ContactMessage) -> Result<(), UiError> {
        debug!("sending contact message via {}", self.service_id);
        let response = Request::post(&self.endpoint)
            .json(&self.payload(message))?
            .send()
            .await?;

        if response.ok() {
            return Ok(());
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        error!("email service answered {}: {}", status, body);
        Err(UiError::Delivery(format!("status {}: {}", status, body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn payload_matches_emailjs_shape() {
        let mailer = EmailJs::new("https://mail.test/send", "svc", "tpl", "key");
        let message = ContactMessage {
            from_name: "Ana Gomez".into(),
            from_email: "ana@test.com".into(),
            subject: "Consulta".into(),
            message: "Hola, quiero mas info".into(),
        };

        let json = serde_json::to_value(mailer.payload(&message)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "service_id": "svc",
                "template_id": "tpl",
                "user_id": "key",
                "template_params": {
                    "from_name": "Ana Gomez",
                    "from_email": "ana@test.com",
                    "subject": "Consulta",
                    "message": "Hola, quiero mas info"
                }
            })
        );
    }
}
