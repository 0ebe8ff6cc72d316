use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::content::{service_template, SERVICES};
use crate::dom::closest_target;

#[derive(Properties, PartialEq)]
pub struct ServiceModalProps {
    pub open: bool,
    /// Service whose template is painted; survives close until teardown.
    pub service: Option<usize>,
    pub root: NodeRef,
    pub close_button: NodeRef,
    pub on_close: Callback<()>,
}

#[function_component(ServiceModal)]
pub fn service_modal(props: &ServiceModalProps) -> Html {
    let body = use_node_ref();

    // New content always starts at the top.
    {
        let body = body.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(el) = body.cast::<Element>() {
                    el.set_scroll_top(0);
                }
                || ()
            },
            props.service,
        );
    }

    // Anything marked data-close closes. The CTA also keeps its default so
    // the #contacto anchor still navigates.
    let on_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(target) = closest_target(&e, "[data-close]") else {
                return;
            };
            let is_cta = target.closest(".modal__cta").ok().flatten().is_some();
            if !is_cta {
                e.prevent_default();
            }
            on_close.emit(());
        })
    };

    let card = props.service.and_then(|i| SERVICES.get(i));
    let template = card.and_then(|c| service_template(c.id));

    html! {
        <div
            class={classes!("modal", props.open.then(|| "is-open"))}
            id="global-modal"
            role="dialog"
            aria-modal="true"
            aria-hidden={(!props.open).to_string()}
            ref={props.root.clone()}
            onclick={on_click}
        >
            <div class="modal__overlay" data-close="true"></div>
            <div class="modal__container">
                <header class="modal__header">
                    <div class="modal__icon-wrapper">
                        if let Some(icon) = card.and_then(|c| c.icon) {
                            <img class="services__icon" src={icon} alt="" aria-hidden="true" />
                        }
                    </div>
                    <h3 class="modal__title">{card.map(|c| c.title).unwrap_or_default()}</h3>
                    <button
                        class="modal__close"
                        aria-label="Cerrar"
                        data-close="true"
                        ref={props.close_button.clone()}
                    >
                        {"✕"}
                    </button>
                </header>

                <div class="modal__body" ref={body}>
                    <div id="modal-body-content">
                        if let Some(template) = template {
                            <p>{template.intro}</p>
                            <ul class="modal__list">
                                { for template.points.iter().map(|point| html! { <li>{*point}</li> }) }
                            </ul>
                        }
                    </div>
                </div>

                <footer class="modal__footer">
                    <a href="#contacto" class="button modal__cta" data-close="true">
                        {"Consultar por este servicio"}
                    </a>
                </footer>
            </div>
        </div>
    }
}
