use web_sys::{window, Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::content::NAV_LINKS;

/// Scroll offset past which the header gets its shadow.
const SCROLLED_AT_PX: f64 = 50.0;

fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| scroll_y() >= SCROLLED_AT_PX);

    {
        let is_scrolled = is_scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            let scrolled = scroll_y() >= SCROLLED_AT_PX;
            if scrolled != *is_scrolled {
                is_scrolled.set(scrolled);
            }
        });
    }

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(true))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <header class={classes!("header", (*is_scrolled).then(|| "scrolled"))} id="header">
            <nav class="nav container">
                <a href="#inicio" class="nav__logo">{"F&F Consultores"}</a>

                <div class={classes!("nav__menu", (*menu_open).then(|| "show-menu"))} id="nav-menu">
                    <ul class="nav__list">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <li class="nav__item">
                                <a href={link.href} class="nav__link" onclick={close_menu.clone()}>
                                    {link.label}
                                </a>
                            </li>
                        }) }
                    </ul>
                    <button class="nav__close" aria-label="Cerrar menú" onclick={close_menu.clone()}>
                        {"✕"}
                    </button>
                </div>

                <button
                    class="header__toggle"
                    aria-label="Abrir menú"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={open_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>
        </header>
    }
}
