use log::{debug, warn};
use web_sys::{Element, HtmlElement, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::animation::RevealTracker;
use crate::dom::{self, IntersectionWatch, ScrollLock, TransitionTeardown};
use crate::error::UiError;
use crate::gesture::route_key;
use crate::overlay::{OverlayAction, OverlayController};

/// Matches the overlays' CSS exit transition.
pub const OVERLAY_TRANSITION_MS: u32 = 300;
// Extra time before the fallback teardown kicks in.
const TEARDOWN_SLACK_MS: u32 = 100;

#[hook]
pub fn use_reduced_motion() -> bool {
    let reduced = use_state(dom::prefers_reduced_motion);
    *reduced
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatchOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl WatchOptions {
    pub const fn threshold(threshold: f64) -> Self {
        Self {
            threshold,
            root_margin: "0px",
        }
    }

    pub const fn with_margin(threshold: f64, root_margin: &'static str) -> Self {
        Self {
            threshold,
            root_margin,
        }
    }
}

fn watch(
    node: &NodeRef,
    options: WatchOptions,
    on_change: impl FnMut(bool) -> bool + 'static,
) -> Option<IntersectionWatch> {
    let Some(element) = node.cast::<Element>() else {
        warn!("{}", UiError::MissingElement("watched node"));
        return None;
    };
    IntersectionWatch::new(&element, options.threshold, options.root_margin, on_change)
        .map_err(|err| warn!("visibility watcher unavailable: {}", err))
        .ok()
}

/// True once `node` has crossed the visibility threshold. Never goes back
/// to false; the watcher unsubscribes after the first hit.
#[hook]
pub fn use_reveal(node: NodeRef, options: WatchOptions) -> bool {
    let revealed = use_state(|| false);
    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut tracker = RevealTracker::default();
                let watcher = watch(node, options, move |visible| {
                    if tracker.observe(visible) {
                        revealed.set(true);
                    }
                    !tracker.fired()
                });
                move || drop(watcher)
            },
            node,
        );
    }
    *revealed
}

/// Live visibility of `node`, for effects that pause off screen.
#[hook]
pub fn use_visibility(node: NodeRef, options: WatchOptions) -> bool {
    let visible = use_state(|| false);
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let watcher = watch(node, options, move |is_visible| {
                    visible.set(is_visible);
                    true
                });
                move || drop(watcher)
            },
            node,
        );
    }
    *visible
}

/// Overlay controller plus its page-level side effects: background scroll
/// lock and focus while open, Escape (and arrows when `navigable`) from the
/// keyboard, and content teardown once the exit transition ends.
#[hook]
pub fn use_overlay(
    len: usize,
    root: NodeRef,
    focus: NodeRef,
    navigable: bool,
) -> UseReducerHandle<OverlayController> {
    let controller = use_reducer(move || OverlayController::new(len));
    let scroll_lock = use_mut_ref(|| None::<ScrollLock>);
    let teardown = use_mut_ref(|| None::<TransitionTeardown>);
    let is_open = controller.is_open();

    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |is_open: &bool| {
                if *is_open {
                    teardown.borrow_mut().take();
                    match ScrollLock::acquire() {
                        Ok(lock) => *scroll_lock.borrow_mut() = Some(lock),
                        Err(err) => warn!("scroll lock unavailable: {}", err),
                    }
                    if let Some(el) = focus.cast::<HtmlElement>() {
                        let _ = el.focus();
                    }
                } else {
                    scroll_lock.borrow_mut().take();
                    if controller.rendered().is_some() {
                        match root.cast::<Element>() {
                            Some(el) => {
                                let dispatcher = controller.dispatcher();
                                *teardown.borrow_mut() = Some(TransitionTeardown::new(
                                    &el,
                                    OVERLAY_TRANSITION_MS + TEARDOWN_SLACK_MS,
                                    move || dispatcher.dispatch(OverlayAction::Teardown),
                                ));
                            }
                            None => controller.dispatch(OverlayAction::Teardown),
                        }
                    }
                }
                || ()
            },
            is_open,
        );
    }

    {
        let controller = controller.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if let Some(action) = route_key(&e.key(), controller.is_open(), navigable) {
                debug!("overlay key {} -> {:?}", e.key(), action);
                e.prevent_default();
                controller.dispatch(action);
            }
        });
    }

    controller
}
