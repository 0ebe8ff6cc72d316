use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::TransitionEvent;
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::content::HERO_IMAGES;
use crate::overlay::next_index;

const SLIDE_INTERVAL_MS: u32 = 5_000;
// Lets the new layer paint at opacity 0 before the fade starts.
const FADE_START_MS: u32 = 50;
const FADE_FALLBACK_MS: u32 = 1_100;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Layer {
    key: u32,
    image: usize,
    shown: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroSlides {
    len: usize,
    current: usize,
    next_key: u32,
    layers: Vec<Layer>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroAction {
    Advance,
    Show(u32),
    /// Fade finished: drop every layer under the newest visible one.
    Prune,
}

impl HeroSlides {
    pub fn new(len: usize) -> Self {
        let layers = if len == 0 {
            Vec::new()
        } else {
            vec![Layer {
                key: 0,
                image: 0,
                shown: true,
            }]
        };
        Self {
            len,
            current: 0,
            next_key: 1,
            layers,
        }
    }

    pub fn rotates(&self) -> bool {
        self.len > 1
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Key of the newest layer if it hasn't started fading in yet.
    fn pending(&self) -> Option<u32> {
        self.layers.last().filter(|l| !l.shown).map(|l| l.key)
    }

    pub fn apply(&mut self, action: HeroAction) {
        match action {
            HeroAction::Advance => {
                if !self.rotates() {
                    return;
                }
                self.current = next_index(self.current, self.len);
                self.layers.push(Layer {
                    key: self.next_key,
                    image: self.current,
                    shown: false,
                });
                self.next_key = self.next_key.wrapping_add(1);
            }
            HeroAction::Show(key) => {
                if let Some(layer) = self.layers.iter_mut().find(|l| l.key == key) {
                    layer.shown = true;
                }
            }
            HeroAction::Prune => {
                if let Some(pos) = self.layers.iter().rposition(|l| l.shown) {
                    self.layers.drain(..pos);
                }
            }
        }
    }
}

impl Reducible for HeroSlides {
    type Action = HeroAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let slides = use_reducer(|| HeroSlides::new(HERO_IMAGES.len()));
    let timers = use_mut_ref(Vec::<Timeout>::new);

    {
        let slides = slides.clone();
        let millis = if slides.rotates() { SLIDE_INTERVAL_MS } else { 0 };
        use_interval(move || slides.dispatch(HeroAction::Advance), millis);
    }

    // Start the fade once the new layer is in the DOM, with a fallback prune
    // in case transitionend never arrives.
    {
        let dispatcher = slides.dispatcher();
        use_effect_with_deps(
            move |pending: &Option<u32>| {
                if let Some(key) = *pending {
                    debug!("hero fading in layer {}", key);
                    let show = {
                        let dispatcher = dispatcher.clone();
                        Timeout::new(FADE_START_MS, move || dispatcher.dispatch(HeroAction::Show(key)))
                    };
                    let prune = Timeout::new(FADE_START_MS + FADE_FALLBACK_MS, move || {
                        dispatcher.dispatch(HeroAction::Prune)
                    });
                    let mut timers = timers.borrow_mut();
                    timers.clear();
                    timers.push(show);
                    timers.push(prune);
                }
                || ()
            },
            slides.pending(),
        );
    }

    let on_faded = {
        let slides = slides.clone();
        Callback::from(move |_: TransitionEvent| slides.dispatch(HeroAction::Prune))
    };

    html! {
        <section class="hero" id="inicio">
            <div class="hero__slider" id="hero-slider">
                { for slides.layers.iter().map(|layer| html! {
                    <div
                        key={layer.key}
                        class="hero__slide"
                        style={format!(
                            "background-image: url('{}'); opacity: {}; transition: opacity 1s ease-in-out;",
                            HERO_IMAGES[layer.image],
                            if layer.shown { 1 } else { 0 },
                        )}
                        ontransitionend={on_faded.clone()}
                    />
                }) }
                <div class="hero__overlay"></div>
            </div>
            <div class="hero__content container">
                <h1 class="hero__title">{"Seguridad, higiene y ambiente para tu empresa"}</h1>
                <p class="hero__description">
                    {"Asesoramiento profesional para cumplir la normativa y cuidar a las personas."}
                </p>
                <a href="#contacto" class="button hero__cta">{"Solicitar asesoramiento"}</a>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn advance_layers_next_image_then_prunes_old() {
        let mut slides = HeroSlides::new(3);
        slides.apply(HeroAction::Advance);
        assert_eq!(slides.current(), 1);
        assert_eq!(slides.pending(), Some(1));
        assert_eq!(slides.layers.len(), 2);

        slides.apply(HeroAction::Show(1));
        assert_eq!(slides.pending(), None);
        slides.apply(HeroAction::Prune);
        assert_eq!(
            slides.layers,
            vec![Layer { key: 1, image: 1, shown: true }]
        );
    }

    #[test]
    fn prune_before_fade_keeps_both_layers() {
        let mut slides = HeroSlides::new(3);
        slides.apply(HeroAction::Advance);
        slides.apply(HeroAction::Prune);
        assert_eq!(slides.layers.len(), 2);
    }

    #[test]
    fn image_index_wraps() {
        let mut slides = HeroSlides::new(7);
        for _ in 0..7 {
            slides.apply(HeroAction::Advance);
        }
        assert_eq!(slides.current(), 0);
    }

    #[test]
    fn single_image_never_rotates() {
        let mut slides = HeroSlides::new(1);
        assert!(!slides.rotates());
        slides.apply(HeroAction::Advance);
        assert_eq!(slides.layers.len(), 1);

        let empty = HeroSlides::new(0);
        assert!(empty.layers.is_empty());
    }
}
