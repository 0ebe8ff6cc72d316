use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::animation::RevealStyle;
use crate::content::{Testimonial, TESTIMONIALS};
use crate::hooks::{use_reduced_motion, use_reveal, WatchOptions};

const CARD_STAGGER: RevealStyle = RevealStyle::Stagger { step_ms: 150 };
const PARALLAX_RANGE_PX: f64 = 10.0;

fn keeps(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_whitespace() || "áéíóúÁÉÍÓÚñÑ".contains(c)
}

fn upper_first(word: &str) -> String {
    word.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}

/// "Adrián S." -> "AS", "Juan Carlos Pérez" -> "JP", "" -> "?"
pub fn initials(name: &str) -> String {
    let clean: String = name.chars().filter(|c| keeps(*c)).collect();
    let words: Vec<&str> = clean.split_whitespace().collect();
    match words.as_slice() {
        [] => "?".to_string(),
        [only] => upper_first(only),
        [first, .., last] => format!("{}{}", upper_first(first), upper_first(last)),
    }
}

pub fn hue_shift(index: usize) -> usize {
    (index * 15) % 60
}

/// Quote icon offset for a pointer at `(x, y)` over a card's `rect`
/// (left, top, width, height), in pixels.
pub fn parallax_offset(rect: (f64, f64, f64, f64), x: f64, y: f64) -> (f64, f64) {
    let (left, top, width, height) = rect;
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let rel_x = (x - left) / width - 0.5;
    let rel_y = (y - top) / height - 0.5;
    (rel_x * PARALLAX_RANGE_PX, rel_y * PARALLAX_RANGE_PX)
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub testimonial: Testimonial,
    pub index: usize,
    pub visible: bool,
    pub parallax: bool,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let offset = use_state(|| None::<(f64, f64)>);

    let on_move = {
        let offset = offset.clone();
        let parallax = props.parallax;
        Callback::from(move |e: MouseEvent| {
            if !parallax {
                return;
            }
            let Some(card) = e.current_target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let r = card.get_bounding_client_rect();
            offset.set(Some(parallax_offset(
                (r.left(), r.top(), r.width(), r.height()),
                f64::from(e.client_x()),
                f64::from(e.client_y()),
            )));
        })
    };

    let on_leave = {
        let offset = offset.clone();
        Callback::from(move |_: MouseEvent| offset.set(None))
    };

    let quote_style = offset
        .map(|(x, y)| format!("transform: translate({}px, {}px) scale(1.1) rotate(-10deg);", x, y))
        .unwrap_or_default();
    let t = &props.testimonial;

    html! {
        <article
            class={classes!(
                "testimonial__card",
                if props.visible { "testimonial__card--visible" } else { "testimonial__card--hidden" },
            )}
            style={format!("--card-index: {};", props.index)}
            onmousemove={on_move}
            onmouseleave={on_leave}
        >
            <span class="testimonial__quote-icon" aria-hidden="true" style={quote_style}>{"“"}</span>
            <p class="testimonial__text">{t.quote}</p>
            <div class="testimonial__author">
                <div
                    class="testimonial__avatar testimonial__avatar--initials"
                    style={format!("--avatar-hue-shift: {}deg;", hue_shift(props.index))}
                >
                    <span class="testimonial__initials">{initials(t.name)}</span>
                </div>
                <div>
                    <h3 class="testimonial__name">{t.name}</h3>
                    <span class="testimonial__role">{t.role}</span>
                </div>
            </div>
        </article>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let node = use_node_ref();
    let reduced_motion = use_reduced_motion();
    let revealed = use_reveal(node.clone(), WatchOptions::with_margin(0.15, "0px 0px -50px 0px"));
    // Cards [0, shown) are visible.
    let shown = use_state(|| if reduced_motion { TESTIMONIALS.len() } else { 0 });
    let timers = use_mut_ref(Vec::<Timeout>::new);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |revealed: &bool| {
                if *revealed && !reduced_motion {
                    let mut timers = timers.borrow_mut();
                    for index in 0..TESTIMONIALS.len() {
                        let shown = shown.clone();
                        timers.push(Timeout::new(CARD_STAGGER.delay(index), move || {
                            shown.set(index + 1)
                        }));
                    }
                }
                || ()
            },
            revealed,
        );
    }

    html! {
        <section class="testimonials section" id="testimonios" ref={node}>
            <div class="container">
                <h2 class="section__title">{"Lo que dicen nuestros clientes"}</h2>
                <div class="testimonials__grid">
                    { for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| html! {
                        <TestimonialCard
                            key={testimonial.name}
                            testimonial={*testimonial}
                            {index}
                            visible={index < *shown}
                            parallax={!reduced_motion}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn initials_from_names() {
        assert_eq!(initials("Adrián S."), "AS");
        assert_eq!(initials("Juan Carlos"), "JC");
        assert_eq!(initials("Juan Carlos Pérez"), "JP");
        assert_eq!(initials("  lucía "), "L");
        assert_eq!(initials("ñandú"), "Ñ");
        assert_eq!(initials("123 !!"), "?");
        assert_eq!(initials(""), "?");
    }

    #[test]
    fn hue_shift_wraps_at_sixty() {
        assert_eq!(hue_shift(0), 0);
        assert_eq!(hue_shift(3), 45);
        assert_eq!(hue_shift(4), 0);
    }

    #[test]
    fn parallax_is_centered_and_bounded() {
        let rect = (100.0, 50.0, 200.0, 100.0);
        assert_eq!(parallax_offset(rect, 200.0, 100.0), (0.0, 0.0));
        assert_eq!(parallax_offset(rect, 300.0, 150.0), (5.0, 5.0));
        assert_eq!(parallax_offset(rect, 100.0, 50.0), (-5.0, -5.0));
        assert_eq!(parallax_offset((0.0, 0.0, 0.0, 0.0), 3.0, 3.0), (0.0, 0.0));
    }
}
