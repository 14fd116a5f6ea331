use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod motion;
mod playback;
mod clipboard;
mod components {
    pub mod booking;
    pub mod clips;
    pub mod copy_email;
    pub mod hero;
    pub mod nav;
    pub mod photos;
    pub mod quick_links;
    pub mod subscribe;
}
mod pages {
    pub mod press_kit;
}

use pages::press_kit::PressKit;

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
            info!("Rendering press kit");
            html! { <PressKit /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting to press kit");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting press kit");
    yew::Renderer::<App>::new().render();
}
