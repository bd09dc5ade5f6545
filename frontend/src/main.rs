use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod dom;
mod error;
mod hooks;
mod scroll;
mod theme;
mod components {
    pub mod lightbox;
    pub mod media;
    pub mod mobile_bottom_nav;
    pub mod nav;
    pub mod page_loader;
    pub mod quick_actions;
    pub mod scroll_progress;
    pub mod scroll_top;
    pub mod section_transition;
}
mod sections {
    pub mod booking;
    pub mod footer;
    pub mod gallery;
    pub mod hero;
    pub mod services;
    pub mod social;
    pub mod team;
    pub mod testimonials;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

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
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering 404 page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to the studio"}</Link<Route>>
                </div>
            }
        },
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!("error initializing log:", e.to_string());
    }

    info!("Starting {}", config::SALON_NAME);
    yew::Renderer::<App>::new().render();
}
