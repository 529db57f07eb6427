use std::rc::Rc;

use web_sys::{Event, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;
use yew_router::prelude::*;

use crate::dom;
use crate::Route;

const SCROLLED_AT: f64 = 50.0;
const AUTO_HIDE_AT: f64 = 100.0;

/// Header visibility as a function of scroll position and direction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeaderScroll {
    last: f64,
    pub scrolled: bool,
    pub hidden: bool,
}

impl HeaderScroll {
    pub fn on_scroll(self, y: f64) -> Self {
        let hidden = if y <= AUTO_HIDE_AT {
            false
        } else if y > self.last {
            true
        } else if y < self.last {
            false
        } else {
            self.hidden
        };
        Self {
            last: y,
            scrolled: y > SCROLLED_AT,
            hidden,
        }
    }
}

impl Reducible for HeaderScroll {
    type Action = f64;

    fn reduce(self: Rc<Self>, y: f64) -> Rc<Self> {
        Rc::new((*self).on_scroll(y))
    }
}

const LINKS: [(Route, &str); 5] = [
    (Route::Home, "Home"),
    (Route::About, "About"),
    (Route::Careers, "Careers"),
    (Route::Contact, "Contact"),
    (Route::Quote, "Get a Quote"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let scroll = use_reducer(HeaderScroll::default);
    let menu_open = use_state(|| false);
    let route = use_route::<Route>();

    {
        let scroll = scroll.dispatcher();
        use_event_with_window("scroll", move |_: Event| {
            scroll.dispatch(dom::scroll_y());
        });
    }

    let set_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |open: bool| {
            menu_open.set(open);
            dom::lock_body_scroll(open);
        })
    };

    {
        let set_menu = set_menu.clone();
        let open = *menu_open;
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" && open {
                set_menu.emit(false);
            }
        });
    }

    let toggle_menu = {
        let set_menu = set_menu.clone();
        let open = *menu_open;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            set_menu.emit(!open);
        })
    };
    let close_menu = set_menu.reform(|_: MouseEvent| false);

    html! {
        <header id="header" class={classes!("header", scroll.scrolled.then_some("scrolled"), scroll.hidden.then_some("hidden"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Printolution"}
                </Link<Route>>
                <button id="hamburger" class={classes!("hamburger", menu_open.then_some("active"))} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav id="nav" class={classes!("nav", menu_open.then_some("active"))}>
                    { for LINKS.iter().map(|(target, label)| {
                        let active = route.as_ref() == Some(target);
                        html! {
                            <div onclick={close_menu.clone()}>
                                <Link<Route> to={target.clone()} classes={classes!("nav-link", active.then_some("active"))}>
                                    {*label}
                                </Link<Route>>
                            </div>
                        }
                    }) }
                </nav>
            </div>
            <div class={classes!("nav-overlay", menu_open.then_some("active"))} onclick={close_menu}></div>
        </header>
    }
}
