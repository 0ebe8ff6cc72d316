use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn get_email_api_url() -> &'static str {
    option_env!("EMAILJS_API_URL").unwrap_or("https://api.emailjs.com/api/v1.0/email/send")
}

pub fn get_email_service_id() -> &'static str {
    option_env!("EMAILJS_SERVICE_ID").unwrap_or("service_ffconsultores")
}

#[cfg(debug_assertions)]
pub fn get_email_template_id() -> &'static str {
    option_env!("EMAILJS_TEMPLATE_ID").unwrap_or("template_contact_dev")
}

#[cfg(not(debug_assertions))]
pub fn get_email_template_id() -> &'static str {
    option_env!("EMAILJS_TEMPLATE_ID").unwrap_or("template_contact")
}

pub fn get_email_public_key() -> &'static str {
    option_env!("EMAILJS_PUBLIC_KEY").unwrap_or("")
}

// Shown when the delivery service rejects a message.
pub fn get_fallback_contact() -> &'static str {
    option_env!("FALLBACK_CONTACT").unwrap_or("contacto@fyfconsultores.com")
}
