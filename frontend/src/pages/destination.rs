use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct DestinationProps {
    pub title: &'static str,
    pub blurb: &'static str,
}

/// Simple titled page for the views the landing page links out to.
#[function_component(DestinationPage)]
pub fn destination_page(props: &DestinationProps) -> Html {
    html! {
        <div
            class="destination-page"
            style="min-height: 60vh; padding: 8rem 1.5rem; text-align: center;"
        >
            <h1>{props.title}</h1>
            <p>{props.blurb}</p>
            <Link<Route> to={Route::Home} classes="forward-link">
                {"Back to ChanceTv Studios"}
            </Link<Route>>
        </div>
    }
}
