use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::TouchEvent;
use yew::prelude::*;

use crate::config;
use crate::dom;

const SWIPE_THRESHOLD: i32 = 50;

/// Index into a ring of slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

pub enum CarouselAction {
    Next,
    Prev,
    GoTo(usize),
    Swipe { start_x: i32, end_x: i32 },
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn apply(self, action: CarouselAction) -> Self {
        if self.len == 0 {
            return self;
        }
        let index = match action {
            CarouselAction::Next => (self.index + 1) % self.len,
            CarouselAction::Prev => (self.index + self.len - 1) % self.len,
            CarouselAction::GoTo(index) if index < self.len => index,
            CarouselAction::GoTo(_) => self.index,
            CarouselAction::Swipe { start_x, end_x } => {
                let diff = start_x - end_x;
                if diff.abs() <= SWIPE_THRESHOLD {
                    self.index
                } else if diff > 0 {
                    return self.apply(CarouselAction::Next);
                } else {
                    return self.apply(CarouselAction::Prev);
                }
            }
        };
        Self { index, ..self }
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).apply(action))
    }
}

#[derive(PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCarouselProps {
    pub testimonials: &'static [Testimonial],
}

#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel(props: &TestimonialCarouselProps) -> Html {
    let carousel = use_reducer(|| Carousel::new(props.testimonials.len()));
    let paused = use_state(|| false);
    // Bumped on manual navigation so autoplay restarts its countdown.
    let epoch = use_state(|| 0u32);
    let touch_start = use_mut_ref(|| 0i32);

    {
        let carousel = carousel.dispatcher();
        use_effect_with_deps(
            move |(paused, _epoch): &(bool, u32)| {
                let interval = (!*paused && !dom::prefers_reduced_motion()).then(|| {
                    Interval::new(config::CAROUSEL_AUTOPLAY_MS, move || {
                        carousel.dispatch(CarouselAction::Next);
                    })
                });
                move || drop(interval)
            },
            (*paused, *epoch),
        );
    }

    let navigate = {
        let carousel = carousel.dispatcher();
        let epoch = epoch.clone();
        move |action: CarouselAction| {
            carousel.dispatch(action);
            epoch.set((*epoch).wrapping_add(1));
        }
    };

    let on_prev = {
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| navigate(CarouselAction::Prev))
    };
    let on_next = {
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| navigate(CarouselAction::Next))
    };

    let on_touch_start = {
        let touch_start = touch_start.clone();
        let paused = paused.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.changed_touches().get(0) {
                *touch_start.borrow_mut() = touch.screen_x();
            }
            paused.set(true);
        })
    };
    let on_touch_end = {
        let navigate = navigate.clone();
        let paused = paused.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.changed_touches().get(0) {
                let start_x = *touch_start.borrow();
                navigate(CarouselAction::Swipe { start_x, end_x: touch.screen_x() });
            }
            paused.set(false);
        })
    };
    let on_enter = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(true))
    };
    let on_leave = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(false))
    };

    let offset = format!("transform: translateX(-{}%);", carousel.index() * 100);

    html! {
        <div class="testimonial-carousel" onmouseenter={on_enter} onmouseleave={on_leave}>
            <div class="testimonial-viewport">
                <div class="testimonial-track" style={offset}
                    ontouchstart={on_touch_start} ontouchend={on_touch_end}>
                    { for props.testimonials.iter().map(|t| html! {
                        <blockquote class="testimonial-card">
                            <p>{t.quote}</p>
                            <footer>
                                <strong>{t.author}</strong>
                                <span>{t.role}</span>
                            </footer>
                        </blockquote>
                    }) }
                </div>
            </div>
            <div class="carousel-controls">
                <button class="nav-prev" aria-label="Previous testimonial" onclick={on_prev}>{"‹"}</button>
                <div class="carousel-dots">
                    { for (0..props.testimonials.len()).map(|index| {
                        let navigate = navigate.clone();
                        html! {
                            <button
                                class={classes!("carousel-dot", (index == carousel.index()).then_some("active"))}
                                aria-label={format!("Go to testimonial {}", index + 1)}
                                onclick={Callback::from(move |_: MouseEvent| navigate(CarouselAction::GoTo(index)))}
                            />
                        }
                    }) }
                </div>
                <button class="nav-next" aria-label="Next testimonial" onclick={on_next}>{"›"}</button>
            </div>
        </div>
    }
}
