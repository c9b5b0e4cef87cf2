use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod gallery {
    pub mod content;
    pub mod environment;
    pub mod image_url;
    pub mod prefetch;
    pub mod view_state;
    pub mod visibility;
}
mod components {
    pub mod about;
    pub mod backdrop;
    pub mod contact;
    pub mod footer;
    pub mod gallery;
    pub mod header;
    pub mod hero;
    pub mod reveal;
    pub mod services;
}
mod pages {
    pub mod home;
}

use gallery::environment::ImageCapability;
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
            info!("Unknown path, redirecting to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    // Host never changes within a session, so detect exactly once.
    let capability = use_state(ImageCapability::detect);

    html! {
        <ContextProvider<ImageCapability> context={*capability}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<ImageCapability>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::BRAND.name);
    yew::Renderer::<App>::new().render();
}
