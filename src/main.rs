use log::info;
use yew::prelude::*;

mod animation;
mod config;
mod content;
mod dom;
mod effects;
mod error;
mod gesture;
mod hooks;
mod mailer;
mod overlay;
mod submission;
mod validation;

mod components {
    pub mod contact;
    pub mod faq;
    pub mod header;
    pub mod hero;
    pub mod modal;
    pub mod projects;
    pub mod services;
    pub mod showcase;
    pub mod testimonials;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component(App)]
pub fn app() -> Html {
    html! { <Landing /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(err) = console_log::init_with_level(config::log_level()) {
        // no logger yet, so this one goes straight to the console
        gloo_console::error!(format!("error initializing log: {}", err));
    }

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
