use gloo_timers::callback::Timeout;
use log::{error, warn};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::animation::{CounterAnimation, RevealStyle};
use crate::components::modal::ServiceModal;
use crate::content::{service_index, service_template, Item, Stat, SERVICES, STATS};
use crate::dom::{trigger_attribute, AnimationLoop};
use crate::error::UiError;
use crate::hooks::{use_overlay, use_reduced_motion, use_reveal, WatchOptions};
use crate::overlay::OverlayAction;

const CARD_STAGGER: RevealStyle = RevealStyle::Stagger { step_ms: 100 };
const CARD_ENTRANCE_MS: u32 = 600;

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub stat: Stat,
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), WatchOptions::threshold(0.5));
    let reduced_motion = use_reduced_motion();
    let value = use_state(|| 0u32);
    let frames = use_mut_ref(|| None::<AnimationLoop>);
    let target = props.stat.target;

    {
        let value = value.clone();
        use_effect_with_deps(
            move |revealed: &bool| {
                if *revealed {
                    if reduced_motion {
                        value.set(target);
                    } else {
                        let mut animation = CounterAnimation::new(target);
                        let started = AnimationLoop::start(move |_| {
                            let frame = animation.tick();
                            value.set(frame.value);
                            !frame.done
                        });
                        match started {
                            Ok(frame_loop) => *frames.borrow_mut() = Some(frame_loop),
                            Err(err) => warn!("counter animation unavailable: {}", err),
                        }
                    }
                }
                || ()
            },
            revealed,
        );
    }

    html! {
        <div class="services__counter">
            <span class="services__counter-number" ref={node} data-target={target.to_string()}>
                {value.to_string()}
            </span>
            <span class="services__counter-suffix">{props.stat.suffix}</span>
            <p class="services__counter-label">{props.stat.label}</p>
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardPhase {
    Hidden,
    Entering,
    Settled,
}

impl CardPhase {
    fn style(self) -> &'static str {
        match self {
            CardPhase::Hidden => {
                "opacity: 0; transform: translateY(50px); will-change: opacity, transform;"
            }
            CardPhase::Entering => {
                "opacity: 1; transform: translateY(0); will-change: opacity, transform; \
                 transition: opacity 0.6s ease-out, transform 0.6s cubic-bezier(0.25, 0.46, 0.45, 0.94);"
            }
            // inline transition cleared so the stylesheet's hover effects apply
            CardPhase::Settled => "opacity: 1; transform: translateY(0);",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub item: Item,
    pub index: usize,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), WatchOptions::threshold(0.1));
    let phase = use_state(|| CardPhase::Hidden);
    let timers = use_mut_ref(Vec::<Timeout>::new);
    let delay = CARD_STAGGER.delay(props.index);

    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |revealed: &bool| {
                if *revealed {
                    let enter = {
                        let phase = phase.clone();
                        Timeout::new(delay, move || phase.set(CardPhase::Entering))
                    };
                    let settle =
                        Timeout::new(delay + CARD_ENTRANCE_MS, move || phase.set(CardPhase::Settled));
                    timers.borrow_mut().extend([enter, settle]);
                }
                || ()
            },
            revealed,
        );
    }

    let item = &props.item;
    html! {
        <article class="services__card" ref={node} style={phase.style()}>
            if let Some(icon) = item.icon {
                <img class="services__icon" src={icon} alt="" aria-hidden="true" />
            }
            <h3 class="services__card-title">{item.title}</h3>
            <p class="services__card-description">{item.body}</p>
            <button class="services__button" data-id={item.id}>{"Ver más"}</button>
        </article>
    }
}

fn open_service(id: &str) -> Result<usize, UiError> {
    let index = service_index(id).ok_or_else(|| UiError::MissingTemplate(id.to_string()))?;
    service_template(id).ok_or_else(|| UiError::MissingTemplate(id.to_string()))?;
    Ok(index)
}

#[function_component(Services)]
pub fn services() -> Html {
    let modal_root = use_node_ref();
    let modal_close = use_node_ref();
    let modal = use_overlay(SERVICES.len(), modal_root.clone(), modal_close.clone(), false);

    // One listener on the grid for every card's button.
    let on_grid_click = {
        let modal = modal.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(id) = trigger_attribute(&e, ".services__button", "data-id") else {
                return;
            };
            match open_service(&id) {
                Ok(index) => modal.dispatch(OverlayAction::Open(index)),
                Err(err) => error!("{}", err),
            }
        })
    };

    let on_close = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.dispatch(OverlayAction::Close))
    };

    html! {
        <section class="services section" id="servicios">
            <div class="container">
                <h2 class="section__title">{"Nuestros servicios"}</h2>

                <div class="services__counters">
                    { for STATS.iter().map(|stat| html! { <Counter stat={*stat} /> }) }
                </div>

                <div class="services__grid" onclick={on_grid_click}>
                    { for SERVICES.iter().enumerate().map(|(index, item)| html! {
                        <ServiceCard key={item.id} item={*item} {index} />
                    }) }
                </div>
            </div>

            <ServiceModal
                open={modal.is_open()}
                service={modal.rendered()}
                root={modal_root}
                close_button={modal_close}
                {on_close}
            />
        </section>
    }
}
