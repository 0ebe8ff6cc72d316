use yew::prelude::*;

use crate::components::{
    contact::Contact, faq::Faq, header::Header, hero::Hero, projects::Projects,
    services::Services, showcase::Showcase, testimonials::Testimonials,
};
use crate::config;
use crate::content::NAV_LINKS;

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <>
            <Header />
            <main class="main">
                <Hero />
                <Services />
                <Projects />
                <Showcase />
                <Testimonials />
                <Faq />
                <Contact />
            </main>
            <footer class="footer">
                <div class="container footer__container">
                    <a href="#inicio" class="footer__logo">{"F&F Consultores"}</a>
                    <ul class="footer__links">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <li><a href={link.href} class="footer__link">{link.label}</a></li>
                        }) }
                    </ul>
                    <p class="footer__contact">
                        <a href={format!("mailto:{}", config::get_fallback_contact())}>
                            {config::get_fallback_contact()}
                        </a>
                    </p>
                    <p class="footer__copy">{"© F&F Consultores. Todos los derechos reservados."}</p>
                </div>
            </footer>
        </>
    }
}
