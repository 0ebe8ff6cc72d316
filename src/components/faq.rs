use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::FAQ;
use crate::dom::trigger_attribute;

/// Exclusive accordion: at most one entry open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Closes everything, then opens `index` unless it was the open one.
    pub fn toggle(self, index: usize) -> Self {
        Self {
            open: (!self.is_open(index)).then_some(index),
        }
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let accordion = use_state(Accordion::default);

    let on_click = {
        let accordion = accordion.clone();
        Callback::from(move |e: MouseEvent| {
            let index = trigger_attribute(&e, ".faq__trigger", "data-index")
                .and_then(|raw| raw.parse::<usize>().ok());
            if let Some(index) = index {
                accordion.set(accordion.toggle(index));
            }
        })
    };

    html! {
        <section class="faq section" id="faq">
            <div class="container">
                <h2 class="section__title">{"Preguntas frecuentes"}</h2>
                <div class="faq__list" onclick={on_click}>
                    { for FAQ.iter().enumerate().map(|(index, entry)| {
                        let open = accordion.is_open(index);
                        html! {
                            <div class={classes!("faq__item", open.then(|| "is-active"))}>
                                <button
                                    class="faq__trigger"
                                    data-index={index.to_string()}
                                    aria-expanded={open.to_string()}
                                    aria-controls={format!("faq-content-{}", index)}
                                >
                                    <span class="faq__question">{entry.question}</span>
                                    <span class="faq__icon" aria-hidden="true">{"+"}</span>
                                </button>
                                <div class="faq__content" id={format!("faq-content-{}", index)}>
                                    <p class="faq__answer">{entry.answer}</p>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_closes_the_others() {
        let acc = Accordion::default().toggle(0);
        assert!(acc.is_open(0));

        let acc = acc.toggle(2);
        assert!(acc.is_open(2));
        assert!(!acc.is_open(0));
    }

    #[test]
    fn clicking_open_entry_closes_it() {
        let acc = Accordion::default().toggle(1).toggle(1);
        assert_eq!(acc, Accordion::default());
    }
}
