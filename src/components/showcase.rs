use std::cell::RefCell;
use std::f64::consts::PI;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::js_sys::Math;
use web_sys::{CanvasRenderingContext2d, Element, Event, HtmlCanvasElement, HtmlElement, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::dom::AnimationLoop;
use crate::effects::{Ember, EmberField, Spotlight};
use crate::error::UiError;
use crate::hooks::{use_reduced_motion, use_reveal, use_visibility, WatchOptions};

const RESIZE_DEBOUNCE_MS: u32 = 200;
/// Brand, tagline top, tagline bottom, description, actions, marquee.
const REVEAL_DELAYS_MS: [u32; 6] = [0, 100, 200, 350, 500, 650];

fn random() -> f64 {
    Math::random()
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, UiError> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        .ok_or(UiError::MissingElement("2d canvas context"))
}

fn draw_ember(ctx: &CanvasRenderingContext2d, ember: &Ember) {
    if ember.opacity <= 0.0 {
        return;
    }
    ctx.save();

    if let Ok(glow) =
        ctx.create_radial_gradient(ember.x, ember.y, 0.0, ember.x, ember.y, ember.glow_size)
    {
        let _ = glow.add_color_stop(0.0, &ember.color.rgba(ember.opacity * 0.8));
        let _ = glow.add_color_stop(0.4, &ember.color.rgba(ember.opacity * 0.3));
        let _ = glow.add_color_stop(1.0, "rgba(0, 0, 0, 0)");
        ctx.set_fill_style_canvas_gradient(&glow);
        ctx.begin_path();
        let _ = ctx.arc(ember.x, ember.y, ember.glow_size, 0.0, PI * 2.0);
        ctx.fill();
    }

    ctx.set_fill_style_str(&format!("rgba(255, 255, 255, {})", ember.opacity * 0.9));
    ctx.begin_path();
    let _ = ctx.arc(ember.x, ember.y, ember.size * 0.5, 0.0, PI * 2.0);
    ctx.fill();

    ctx.restore();
}

/// Sizes the canvas to its container and seeds a fresh field for it.
fn reseed(bg: &NodeRef, canvas: &NodeRef, field: &RefCell<EmberField>) {
    let (Some(bg), Some(canvas)) = (bg.cast::<Element>(), canvas.cast::<HtmlCanvasElement>())
    else {
        return;
    };
    let rect = bg.get_bounding_client_rect();
    canvas.set_width(rect.width().max(0.0) as u32);
    canvas.set_height(rect.height().max(0.0) as u32);
    let mut rng = random;
    *field.borrow_mut() = EmberField::seeded(rect.width(), rect.height(), &mut rng);
    debug!("ember field seeded with {} particles", field.borrow().embers.len());
}

#[function_component(EmberCanvas)]
fn ember_canvas() -> Html {
    let bg = use_node_ref();
    let canvas = use_node_ref();
    let visible = use_visibility(bg.clone(), WatchOptions::threshold(0.1));
    let field = use_mut_ref(EmberField::default);
    let resize_timer = use_mut_ref(|| None::<Timeout>);

    {
        let (bg, canvas, field) = (bg.clone(), canvas.clone(), field.clone());
        use_effect_with_deps(
            move |_| {
                reseed(&bg, &canvas, &field);
                || ()
            },
            (),
        );
    }

    {
        let (bg, canvas, field) = (bg.clone(), canvas.clone(), field.clone());
        use_event_with_window("resize", move |_: Event| {
            let (bg, canvas, field) = (bg.clone(), canvas.clone(), field.clone());
            *resize_timer.borrow_mut() = Some(Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                reseed(&bg, &canvas, &field)
            }));
        });
    }

    // Paint only while on screen; dropping the loop stops it.
    {
        let canvas = canvas.clone();
        use_effect_with_deps(
            move |visible: &bool| {
                let frames = if *visible {
                    canvas
                        .cast::<HtmlCanvasElement>()
                        .ok_or(UiError::MissingElement("ember canvas"))
                        .and_then(|el| context_2d(&el).map(|ctx| (el, ctx)))
                        .and_then(|(el, ctx)| {
                            AnimationLoop::start(move |_| {
                                let mut field = field.borrow_mut();
                                ctx.clear_rect(0.0, 0.0, f64::from(el.width()), f64::from(el.height()));
                                let mut rng = random;
                                field.step(&mut rng);
                                for ember in &field.embers {
                                    draw_ember(&ctx, ember);
                                }
                                true
                            })
                        })
                        .map_err(|err| warn!("embers disabled: {}", err))
                        .ok()
                } else {
                    None
                };
                move || drop(frames)
            },
            visible,
        );
    }

    html! {
        <div class="safety-west__bg" ref={bg}>
            <canvas class="safety-west__canvas" aria-hidden="true" ref={canvas} />
        </div>
    }
}

fn spotlight_style(x: f64, y: f64) -> String {
    format!("--spotlight-x: {}px; --spotlight-y: {}px;", x, y)
}

#[function_component(Showcase)]
pub fn showcase() -> Html {
    let reduced_motion = use_reduced_motion();
    let header = use_node_ref();
    let light = use_node_ref();
    let revealed = use_reveal(header.clone(), WatchOptions::with_margin(0.2, "0px 0px -50px 0px"));
    let spotlight_active = use_state(|| false);
    let spotlight = use_mut_ref(Spotlight::default);
    let follow = use_mut_ref(|| None::<AnimationLoop>);

    let on_enter = {
        let (spotlight_active, spotlight, light, follow) =
            (spotlight_active.clone(), spotlight.clone(), light.clone(), follow.clone());
        Callback::from(move |_: MouseEvent| {
            spotlight_active.set(true);
            let (spotlight, light) = (spotlight.clone(), light.clone());
            let started = AnimationLoop::start(move |_| {
                let (x, y) = spotlight.borrow_mut().follow();
                if let Some(el) = light.cast::<HtmlElement>() {
                    let _ = el.set_attribute("style", &spotlight_style(x, y));
                }
                true
            });
            match started {
                Ok(frames) => *follow.borrow_mut() = Some(frames),
                Err(err) => warn!("spotlight disabled: {}", err),
            }
        })
    };

    let on_leave = {
        let (spotlight_active, follow) = (spotlight_active.clone(), follow.clone());
        Callback::from(move |_: MouseEvent| {
            spotlight_active.set(false);
            follow.borrow_mut().take();
        })
    };

    let on_move = {
        let spotlight = spotlight.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(section) = e.current_target().and_then(|t| t.dyn_into::<Element>().ok())
            else {
                return;
            };
            let rect = section.get_bounding_client_rect();
            spotlight.borrow_mut().aim(
                f64::from(e.client_x()) - rect.left(),
                f64::from(e.client_y()) - rect.top(),
            );
        })
    };

    let reveal = |index: usize| {
        (
            classes!("sw-reveal", revealed.then(|| "sw-reveal--visible")),
            format!("--reveal-delay: {}ms;", REVEAL_DELAYS_MS[index]),
        )
    };
    let [brand, top, bottom, description, actions, marquee] = [0, 1, 2, 3, 4, 5].map(reveal);

    html! {
        <section
            class="safety-west"
            id="safety-west"
            onmouseenter={(!reduced_motion).then_some(on_enter)}
            onmouseleave={(!reduced_motion).then_some(on_leave)}
            onmousemove={(!reduced_motion).then_some(on_move)}
        >
            if !reduced_motion {
                <EmberCanvas />
                <div
                    class={classes!("safety-west__spotlight", (*spotlight_active).then(|| "is-active"))}
                    aria-hidden="true"
                    ref={light}
                />
            }

            <div class="container safety-west__container">
                <header class="safety-west__header" ref={header}>
                    <h2 class={classes!("safety-west__brand", brand.0)} style={brand.1}>
                        {"Safety West"}
                    </h2>
                    <p class="safety-west__tagline">
                        <span class={classes!("sw-line", "sw-line--top", top.0)} style={top.1}>
                            {"Equipamiento de seguridad"}
                        </span>
                        <span class={classes!("sw-line", "sw-line--bottom", bottom.0)} style={bottom.1}>
                            {"para quienes no se detienen"}
                        </span>
                    </p>
                </header>

                <p class={classes!("safety-west__description", description.0)} style={description.1}>
                    {"Nuestra marca aliada de indumentaria y elementos de protección personal, \
                      certificados y pensados para el trabajo real."}
                </p>

                <div class={classes!("safety-west__actions", actions.0)} style={actions.1}>
                    <a href="#contacto" class="button">{"Quiero cotizar"}</a>
                </div>

                <div class={classes!("safety-west__marquee", marquee.0)} style={marquee.1} aria-hidden="true">
                    <span>{"EPP · Calzado · Indumentaria · Protección respiratoria · Altura ·"}</span>
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
    fn reveal_delays_follow_reading_order() {
        assert!(REVEAL_DELAYS_MS.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(REVEAL_DELAYS_MS[5], 650);
    }

    #[test]
    fn spotlight_writes_both_custom_properties() {
        assert_eq!(
            spotlight_style(12.5, 40.0),
            "--spotlight-x: 12.5px; --spotlight-y: 40px;"
        );
    }
}
