use web_sys::Event;
use yew::prelude::*;
use yew_hooks::use_event_with_window;
use yew_router::prelude::*;

use crate::components::carousel::{Testimonial, TestimonialCarousel};
use crate::components::counter::Counter;
use crate::components::reveal::Reveal;
use crate::dom;
use crate::Route;

struct Service {
    key: &'static str,
    title: &'static str,
    body: &'static str,
}

static SERVICES: [Service; 4] = [
    Service {
        key: "business",
        title: "Business Printing",
        body: "Cards, letterheads, and brochures on stocks that feel as good as they look.",
    },
    Service {
        key: "wedding",
        title: "Wedding Stationery",
        body: "Invitations, place cards, and menus with foil, letterpress, or both.",
    },
    Service {
        key: "packaging",
        title: "Custom Packaging",
        body: "Boxes, sleeves, and labels sized to your product and printed to brand.",
    },
    Service {
        key: "merchandise",
        title: "Merchandise",
        body: "Apparel, totes, and promo goods for launches, events, and teams.",
    },
];

static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Our new packaging arrived a week early and looked better than the mockups.",
        author: "Maya Chen",
        role: "Founder, Leaf & Loom",
    },
    Testimonial {
        quote: "They caught a bleed issue in our file before it cost us a reprint.",
        author: "Daniel Ortiz",
        role: "Marketing Lead, Northside Coffee",
    },
    Testimonial {
        quote: "The wedding invitations were perfect. Every guest asked who printed them.",
        author: "Priya & Sam",
        role: "Newlyweds",
    },
];

const FAQS: [(&str, &str); 4] = [
    ("How long does a typical order take?", "Most jobs ship within 5 to 7 business days after proof approval. Rush options are available."),
    ("Do you offer proofs?", "Every order gets a digital proof. Physical proofs are available for larger runs."),
    ("What file formats do you accept?", "Print-ready PDF is preferred. We also take AI, PSD, and high resolution PNG."),
    ("Is there a minimum order?", "Minimums depend on the product. Business cards start at 50, packaging at 100."),
];

const SCROLL_CUE_HIDE_AT: f64 = 100.0;

pub fn hides_scroll_cue(y: f64) -> bool {
    y > SCROLL_CUE_HIDE_AT
}

/// Accordion rule: one item open at a time, clicking the open one closes it.
pub fn toggle_faq(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let active_service = use_state(|| SERVICES[0].key);
    let open_faq = use_state(|| None::<usize>);
    let cue_hidden = use_state_eq(|| hides_scroll_cue(dom::scroll_y()));

    {
        let cue_hidden = cue_hidden.clone();
        use_event_with_window("scroll", move |_: Event| {
            cue_hidden.set(hides_scroll_cue(dom::scroll_y()));
        });
    }

    let service = SERVICES
        .iter()
        .find(|s| s.key == *active_service)
        .unwrap_or(&SERVICES[0]);

    html! {
        <div class="home-page">
            <section class="hero">
                <h1>{"Print that makes an impression"}</h1>
                <p>{"Business cards, packaging, wedding stationery, and merch, printed with care."}</p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Quote} classes="btn btn-primary">{"Get a Quote"}</Link<Route>>
                    <Link<Route> to={Route::Contact} classes="btn">{"Talk to Us"}</Link<Route>>
                </div>
                <div class={classes!("scroll-cue", cue_hidden.then_some("hidden"))}></div>
            </section>

            <Reveal class={classes!("highlights")}>
                <Counter target={12} suffix="+" label="Years in print" />
                <Counter target={4800} suffix="+" label="Orders delivered" />
                <Counter target={98} suffix="%" label="On-time shipping" />
            </Reveal>

            <section class="services">
                <div class="services-menu">
                    { for SERVICES.iter().map(|s| {
                        let key = s.key;
                        let active_service = active_service.clone();
                        let active = *active_service == key;
                        html! {
                            <button
                                class={classes!("service-menu-item", active.then_some("active"))}
                                data-service={key}
                                onclick={Callback::from(move |_: MouseEvent| active_service.set(key))}
                            >
                                {s.title}
                            </button>
                        }
                    }) }
                </div>
                <Reveal class={classes!("service-panel", "active")}>
                    <h3>{service.title}</h3>
                    <p>{service.body}</p>
                </Reveal>
            </section>

            <section class="testimonials">
                <h2>{"What clients say"}</h2>
                <TestimonialCarousel testimonials={&TESTIMONIALS[..]} />
            </section>

            <section class="faq">
                <h2>{"Frequently asked questions"}</h2>
                { for FAQS.iter().enumerate().map(|(index, (question, answer))| {
                    let open_faq = open_faq.clone();
                    let is_open = *open_faq == Some(index);
                    html! {
                        <div class={classes!("faq-item", is_open.then_some("active"))}>
                            <button class="faq-question"
                                onclick={Callback::from(move |_: MouseEvent| open_faq.set(toggle_faq(*open_faq, index)))}>
                                <span>{*question}</span>
                                <span class="toggle-icon">{if is_open { "−" } else { "+" }}</span>
                            </button>
                            <div class="faq-answer"><p>{*answer}</p></div>
                        </div>
                    }
                }) }
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accordion_keeps_at_most_one_item_open() {
        assert_eq!(toggle_faq(None, 2), Some(2));
        assert_eq!(toggle_faq(Some(2), 1), Some(1));
        assert_eq!(toggle_faq(Some(1), 1), None);
    }

    #[test]
    fn scroll_cue_hides_past_one_hundred_pixels() {
        assert!(!hides_scroll_cue(0.0));
        assert!(!hides_scroll_cue(100.0));
        assert!(hides_scroll_cue(100.5));
    }
}
