use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod dom;
mod forms {
    pub mod cooldown;
    pub mod simple;
    pub mod status;
    pub mod storage;
    pub mod transport;
    pub mod validation;
}
mod quote {
    pub mod draft;
    pub mod estimate;
    pub mod steps;
    pub mod wizard;
}
mod components {
    pub mod carousel;
    pub mod counter;
    pub mod header;
    pub mod loader;
    pub mod reveal;
}
mod pages {
    pub mod about;
    pub mod careers;
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod quote;
}

use components::{header::Header, loader::PageLoader};
use pages::{
    about::About,
    careers::Careers,
    contact::Contact,
    home::Home,
    not_found::NotFound,
    quote::QuotePage,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/careers")]
    Careers,
    #[at("/contact")]
    Contact,
    #[at("/quote")]
    Quote,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Careers => {
            info!("Rendering Careers page");
            html! { <Careers /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Quote => {
            info!("Rendering Quote page");
            html! { <QuotePage /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <PageLoader />
            <Header />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <footer class="footer">
                <p>{"© Printolution. All rights reserved."}</p>
            </footer>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(err) = console_log::init_with_level(Level::Info) {
        gloo_console::error!("error initializing log:", err.to_string());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
