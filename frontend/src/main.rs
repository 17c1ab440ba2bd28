use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod navigation;
mod components {
    pub mod cards;
    pub mod feedback_button;
}
mod pages {
    pub mod destination;
    pub mod landing;
}

use pages::{destination::DestinationPage, landing::Landing};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/events")]
    Events,
    #[at("/academy")]
    Academy,
    #[at("/auditions")]
    Auditions,
    #[at("/careers")]
    Careers,
    #[at("/streaming")]
    Streaming,
    #[at("/auth")]
    Auth,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::About => html! {
            <DestinationPage
                title="About ChanceTv Studios"
                blurb="Our story, our mission and the people shaping the future of film."
            />
        },
        Route::Events => html! {
            <DestinationPage
                title="Upcoming Events"
                blurb="Premieres, workshops and special screenings."
            />
        },
        Route::Academy => html! {
            <DestinationPage
                title="Film Academy"
                blurb="Learn from industry professionals and start your journey in film."
            />
        },
        Route::Auditions => html! {
            <DestinationPage
                title="Auditions"
                blurb="Find your next role in upcoming productions."
            />
        },
        Route::Careers => html! {
            <DestinationPage
                title="Careers"
                blurb="Join our team and be part of creating amazing content."
            />
        },
        Route::Streaming => html! {
            <DestinationPage
                title="Streaming"
                blurb="Watch our latest productions."
            />
        },
        Route::Auth => html! {
            <DestinationPage
                title="Join Us"
                blurb="Create your ChanceTv Studios account."
            />
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <DestinationPage
                    title="Page not found"
                    blurb="The page you are looking for does not exist."
                />
            }
        }
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

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
