use log::{debug, error};
use web_sys::{Event, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::animation::RevealStyle;
use crate::content::{Item, PROJECTS};
use crate::dom::{closest_target, preload_image, trigger_attribute};
use crate::error::UiError;
use crate::gesture::{SwipeTracker, TouchPoint};
use crate::hooks::{use_overlay, use_reveal, WatchOptions};
use crate::overlay::{next_index, OverlayAction};

const CARD_DELAY: RevealStyle = RevealStyle::Stagger { step_ms: 100 };

/// `is-hidden` stays on; the reveal stacks `is-visible` on top of it.
fn card_classes(revealed: bool) -> Vec<&'static str> {
    let mut classes = vec!["project__card", "is-hidden"];
    if revealed {
        classes.push("is-visible");
    }
    classes
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub item: Item,
    pub index: usize,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), WatchOptions::threshold(0.1));
    let item = &props.item;

    html! {
        <article
            ref={node}
            class={classes!(card_classes(revealed))}
            style={format!("transition-delay: {}ms;", CARD_DELAY.delay(props.index))}
        >
            <img class="project__img" src={item.image.unwrap_or_default()} alt={item.title} loading="lazy" />
            <div class="project__data">
                <span class="project__category">{item.category.unwrap_or_default()}</span>
                <h3 class="project__title">{item.title}</h3>
                <button class="project__btn" data-index={props.index.to_string()}>
                    {"Ver proyecto"}
                </button>
            </div>
        </article>
    }
}

fn touch_point(e: &TouchEvent) -> Option<TouchPoint> {
    e.changed_touches().get(0).map(|t| TouchPoint {
        x: f64::from(t.screen_x()),
        y: f64::from(t.screen_y()),
    })
}

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub open: bool,
    pub project: Option<usize>,
    pub root: NodeRef,
    pub close_button: NodeRef,
    pub on_action: Callback<OverlayAction>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let loaded = use_state(|| false);
    let swipe = use_mut_ref(SwipeTracker::default);

    // Dim until the new image arrives; warm the cache for the next one.
    {
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |project: &Option<usize>| {
                loaded.set(false);
                if let Some(index) = *project {
                    let next = next_index(index, PROJECTS.len());
                    if let Some(src) = PROJECTS[next].image {
                        preload_image(src);
                    }
                }
                || ()
            },
            props.project,
        );
    }

    let on_load = {
        let loaded = loaded.clone();
        Callback::from(move |_: Event| loaded.set(true))
    };

    let on_click = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: MouseEvent| {
            if closest_target(&e, "[data-close]").is_some() {
                on_action.emit(OverlayAction::Close);
            }
        })
    };

    let nav = |action: OverlayAction| {
        let on_action = props.on_action.clone();
        Callback::from(move |e: MouseEvent| {
            // never counts as a backdrop click
            e.stop_propagation();
            on_action.emit(action);
        })
    };

    let on_touch_start = {
        let swipe = swipe.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(point) = touch_point(&e) {
                swipe.borrow_mut().begin(point);
            }
        })
    };

    let on_touch_end = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: TouchEvent| {
            let direction = touch_point(&e).and_then(|point| swipe.borrow_mut().end(point));
            if let Some(direction) = direction {
                debug!("lightbox swipe {:?}", direction);
                on_action.emit(direction.action());
            }
        })
    };

    let project = props.project.and_then(|i| PROJECTS.get(i));

    html! {
        <div
            class={classes!("lightbox", props.open.then(|| "is-open"))}
            id="project-lightbox"
            role="dialog"
            aria-modal="true"
            aria-hidden={(!props.open).to_string()}
            ref={props.root.clone()}
            onclick={on_click}
            ontouchstart={on_touch_start}
            ontouchend={on_touch_end}
        >
            <div class="lightbox__overlay" data-close="true"></div>
            <button
                class="lightbox__close"
                aria-label="Cerrar"
                data-close="true"
                ref={props.close_button.clone()}
            >
                {"✕"}
            </button>
            <button class="lightbox__nav lightbox__nav--prev" aria-label="Anterior" onclick={nav(OverlayAction::Prev)}>
                {"‹"}
            </button>

            if let Some(project) = project {
                <figure class="lightbox__content">
                    <img
                        class="lightbox__img"
                        src={project.image.unwrap_or_default()}
                        alt={project.title}
                        style={if *loaded { "opacity: 1;" } else { "opacity: 0.5;" }}
                        onload={on_load}
                    />
                    <figcaption class="lightbox__caption">
                        <span class="lightbox__category">{project.category.unwrap_or_default()}</span>
                        <h3 class="lightbox__title">{project.title}</h3>
                        <p class="lightbox__desc">{project.body}</p>
                    </figcaption>
                </figure>
            }

            <button class="lightbox__nav lightbox__nav--next" aria-label="Siguiente" onclick={nav(OverlayAction::Next)}>
                {"›"}
            </button>
        </div>
    }
}

fn parse_index(raw: &str) -> Result<usize, UiError> {
    let index = raw
        .parse::<usize>()
        .map_err(|_| UiError::InvalidTrigger(raw.to_string()))?;
    if index >= PROJECTS.len() {
        return Err(UiError::IndexOutOfRange {
            index,
            len: PROJECTS.len(),
        });
    }
    Ok(index)
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let root = use_node_ref();
    let close_button = use_node_ref();
    let lightbox = use_overlay(PROJECTS.len(), root.clone(), close_button.clone(), true);

    let on_grid_click = {
        let lightbox = lightbox.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(raw) = trigger_attribute(&e, ".project__btn", "data-index") else {
                return;
            };
            e.prevent_default();
            match parse_index(&raw) {
                Ok(index) => lightbox.dispatch(OverlayAction::Open(index)),
                Err(err) => error!("project trigger ignored: {}", err),
            }
        })
    };

    let on_action = {
        let lightbox = lightbox.clone();
        Callback::from(move |action: OverlayAction| lightbox.dispatch(action))
    };

    html! {
        <section class="projects section" id="proyectos">
            <div class="container">
                <h2 class="section__title">{"Proyectos destacados"}</h2>
                <div class="projects__grid" onclick={on_grid_click}>
                    { for PROJECTS.iter().enumerate().map(|(index, item)| html! {
                        <ProjectCard key={item.id} item={*item} {index} />
                    }) }
                </div>
            </div>

            <Lightbox
                open={lightbox.is_open()}
                project={lightbox.rendered()}
                {root}
                {close_button}
                {on_action}
            />
        </section>
    }
}
