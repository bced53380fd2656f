use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod context;
mod error;
mod animation {
    pub mod reveal;
    pub mod carousel;
    pub mod filter;
    pub mod typewriter;
    pub mod count_up;
    pub mod tilt;
    pub mod contact;
    pub mod scroll;
}
mod platform {
    pub mod scheduler;
    pub mod viewport;
    pub mod dom;
    pub mod contact_client;
}
mod hooks {
    pub mod reveal;
    pub mod timed;
}
mod sections {
    pub mod shared;
    pub mod header;
    pub mod footer;
    pub mod hero;
    pub mod about;
    pub mod services;
    pub mod projects;
    pub mod testimonials;
    pub mod contact;
}
mod pages {
    pub mod portfolio;
    pub mod not_found;
}

use context::SiteProviders;
use pages::{not_found::NotFound, portfolio::Portfolio};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Portfolio page");
            html! { <Portfolio /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <SiteProviders>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </SiteProviders>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
