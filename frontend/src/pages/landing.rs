use log::{error, warn};
use web_sys::HtmlMediaElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cards::{
    achievement_stats, production_cards, service_cards, testimonial_cards,
};
use crate::components::feedback_button::FeedbackButton;
use crate::config::ACHIEVEMENTS_LANDMARK;
use crate::content::Catalog;
use crate::navigation::{use_navigation_feedback, Destination};
use crate::Route;

#[function_component(Landing)]
pub fn landing() -> Html {
    let feedback = use_navigation_feedback();
    let catalog = use_memo(
        |_| {
            Catalog::embedded().unwrap_or_else(|err| {
                error!("Failed to load landing content: {}", err);
                Catalog::default()
            })
        },
        (),
    );

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // The muted content attribute is only honoured at parse time, so set the
    // property before asking for playback or the browser blocks autoplay.
    let video_ref = use_node_ref();
    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(video) = video_ref.cast::<HtmlMediaElement>() {
                    video.set_muted(true);
                    if let Err(err) = video.play() {
                        warn!("Hero video did not start: {:?}", err);
                    }
                }
                || ()
            },
            (),
        );
    }

    let learn_more = {
        let navigate = feedback.navigate.clone();
        Callback::from(move |_: ()| navigate.emit(Destination::About))
    };
    let view_events = {
        let navigate = feedback.navigate.clone();
        Callback::from(move |_: ()| navigate.emit(Destination::Events))
    };
    let to_achievements = {
        let scroll_to = feedback.scroll_to.clone();
        Callback::from(move |_: MouseEvent| scroll_to.emit(ACHIEVEMENTS_LANDMARK))
    };

    html! {
        <div class="landing-page">
            <style>{LANDING_STYLES}</style>

            <section class="hero">
                {hero_video(video_ref)}
                <div class="hero-overlay"></div>

                <div class="hero-content">
                    <span class="hero-kicker">{"Welcome to the Future of Film"}</span>
                    <h1>
                        {"Where Stories "}
                        <span class="hero-highlight">{"Come to Life"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Join ChanceTv Studios in creating the next generation of entertainment. "}
                        {"From production to education, we're shaping the future of film."}
                    </p>

                    <div class="hero-cta-group">
                        <FeedbackButton
                            label="Learn More"
                            aria_label="Learn more about ChanceTv Studios"
                            tooltip="Discover our story and mission"
                            outcome={feedback.outcome.clone()}
                            onclick={learn_more}
                        />
                        <FeedbackButton
                            label="View Events"
                            aria_label="View upcoming events"
                            tooltip="Check out our upcoming events"
                            variant="hero-button-outline"
                            outcome={feedback.outcome.clone()}
                            onclick={view_events}
                        />
                    </div>

                    {
                        if let Some(message) = feedback.outcome.error_message() {
                            html! { <div class="hero-error" role="alert">{message}</div> }
                        } else {
                            html! {}
                        }
                    }

                    <button
                        class="scroll-hint"
                        onclick={to_achievements}
                        aria-label="Scroll to achievements"
                    >
                        <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d={ARROW_DOWN_PATH}
                            />
                        </svg>
                    </button>
                </div>
            </section>

            <section id={ACHIEVEMENTS_LANDMARK} class="achievements">
                <div class="achievements-grid">
                    { for achievement_stats(&catalog.achievements) }
                </div>
            </section>

            <section class="productions">
                <div class="section-heading">
                    <h2>{"Latest Productions"}</h2>
                    <p>
                        {"Discover our latest works that are pushing the boundaries "}
                        {"of storytelling and cinematography."}
                    </p>
                </div>
                <div class="productions-grid">
                    { for production_cards(&catalog.productions) }
                </div>
            </section>

            <section class="services">
                <div class="section-heading">
                    <h2>{"Our Services"}</h2>
                    <p>
                        {"Comprehensive solutions for every aspect of film production "}
                        {"and education."}
                    </p>
                </div>
                <div class="services-grid">
                    { for service_cards(&catalog.services) }
                </div>
            </section>

            <section class="testimonials">
                <div class="section-heading">
                    <h2>{"What People Say"}</h2>
                    <p>
                        {"Hear from our community of filmmakers, actors, "}
                        {"and industry professionals."}
                    </p>
                </div>
                <div class="testimonials-grid">
                    { for testimonial_cards(&catalog.testimonials) }
                </div>
            </section>

            <section class="closing-cta">
                <h2>{"Ready to Start Your Journey?"}</h2>
                <p>
                    {"Whether you're an aspiring filmmaker, actor, or industry professional, "}
                    {"ChanceTv Studios has a place for you."}
                </p>
                <Link<Route> to={Route::Auth} classes="closing-cta-button">
                    {"Join Us Today"}
                </Link<Route>>
            </section>
        </div>
    }
}

const ARROW_DOWN_PATH: &str = "M19 14l-7 7m0 0l-7-7m7 7V3";

fn hero_video(node_ref: NodeRef) -> Html {
    html! {
        <video
            ref={node_ref}
            class="hero-video"
            autoplay=true
            muted=true
            loop=true
            playsinline=true
        >
            <source src="/showreel.mp4" type="video/mp4" />
        </video>
    }
}

const LANDING_STYLES: &str = r#"
    .landing-page {
        min-height: 100vh;
        background: linear-gradient(to bottom, #f9fafb, #fff);
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    }
    .hero {
        position: relative;
        height: 92vh;
        background: #000;
        overflow: hidden;
        display: flex;
        align-items: center;
        justify-content: center;
        text-align: center;
    }
    .hero-video {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
        opacity: 0.4;
        transform: scale(1.05);
    }
    .hero-overlay {
        position: absolute;
        inset: 0;
        background: linear-gradient(to bottom, rgba(0,0,0,0.9), rgba(0,0,0,0.7));
    }
    .hero-content {
        position: relative;
        max-width: 64rem;
        padding: 2rem 1rem 6rem;
        border-radius: 1rem;
        background: rgba(0,0,0,0.2);
        backdrop-filter: blur(4px);
        border: 1px solid rgba(255,255,255,0.05);
        color: #fff;
    }
    .hero-kicker {
        display: block;
        margin-bottom: 1.5rem;
        color: #ef4444;
        font-size: 1.125rem;
        font-weight: 600;
        letter-spacing: 0.05em;
        text-transform: uppercase;
    }
    .hero h1 {
        font-size: clamp(3rem, 6vw, 4.5rem);
        margin-bottom: 2rem;
        line-height: 1.2;
    }
    .hero-highlight {
        background: linear-gradient(to right, #ef4444, #dc2626);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .hero-subtitle {
        font-size: 1.5rem;
        color: #d1d5db;
        margin: 0 auto 3rem;
        max-width: 48rem;
    }
    .hero-cta-group {
        display: flex;
        flex-wrap: wrap;
        gap: 1.5rem;
        justify-content: center;
    }
    .tooltip-wrapper {
        position: relative;
    }
    .tooltip {
        position: absolute;
        top: -3rem;
        left: 50%;
        transform: translateX(-50%);
        padding: 0.5rem 1rem;
        background: rgba(0,0,0,0.8);
        border-radius: 0.5rem;
        font-size: 0.875rem;
        white-space: nowrap;
        opacity: 0;
        pointer-events: none;
        transition: opacity 0.3s;
    }
    .tooltip-wrapper:hover .tooltip {
        opacity: 1;
    }
    .hero-button {
        min-width: 200px;
        padding: 1.25rem 3rem;
        border-radius: 0.5rem;
        font-size: 1.125rem;
        font-weight: 600;
        color: #fff;
        cursor: pointer;
        transition: transform 0.3s, box-shadow 0.3s;
    }
    .hero-button:hover:not(:disabled) {
        transform: translateY(-4px);
    }
    .hero-button:disabled {
        opacity: 0.5;
        cursor: not-allowed;
    }
    .hero-button-primary {
        border: none;
        background: linear-gradient(to right, #dc2626, #ef4444);
    }
    .hero-button-outline {
        border: 2px solid rgba(255,255,255,0.8);
        background: transparent;
    }
    .hero-button-label {
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .spinner, .check-mark {
        width: 1.25rem;
        height: 1.25rem;
        margin-right: 0.75rem;
    }
    .spinner {
        animation: spin 1s linear infinite;
    }
    .spinner-track {
        opacity: 0.25;
    }
    .spinner-head {
        opacity: 0.75;
    }
    @keyframes spin {
        from { transform: rotate(0deg); }
        to { transform: rotate(360deg); }
    }
    .hero-error {
        margin-top: 1rem;
        padding: 0.5rem 1rem;
        border-radius: 0.5rem;
        color: #f87171;
        background: rgba(69,10,10,0.5);
    }
    .scroll-hint {
        position: absolute;
        bottom: 2rem;
        left: 50%;
        transform: translateX(-50%);
        width: 2rem;
        height: 2rem;
        background: none;
        border: none;
        color: rgba(255,255,255,0.6);
        cursor: pointer;
    }
    .achievements {
        padding: 6rem 1.5rem;
        background: #000;
        color: #fff;
    }
    .achievements-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
        gap: 3rem;
        text-align: center;
    }
    .achievement-number {
        font-size: 3.75rem;
        font-weight: 700;
        color: #ef4444;
        margin-bottom: 1rem;
    }
    .achievement-label {
        color: #d1d5db;
        text-transform: uppercase;
        letter-spacing: 0.05em;
    }
    .productions, .services, .testimonials, .closing-cta {
        padding: 8rem 1.5rem;
    }
    .section-heading {
        max-width: 48rem;
        margin: 0 auto 5rem;
        text-align: center;
    }
    .section-heading h2 {
        font-size: 3rem;
        margin-bottom: 1.5rem;
    }
    .section-heading p {
        font-size: 1.25rem;
        color: #4b5563;
    }
    .productions-grid, .testimonials-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
        gap: 3rem;
    }
    .services-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
        gap: 2.5rem;
    }
    .production-card, .service-card {
        background: #fff;
        border-radius: 1rem;
        overflow: hidden;
        box-shadow: 0 10px 15px rgba(0,0,0,0.1);
        transition: transform 0.5s;
        text-decoration: none;
        color: inherit;
    }
    .production-card:hover, .service-card:hover, .testimonial-card:hover {
        transform: translateY(-8px);
    }
    .production-image {
        position: relative;
        height: 20rem;
    }
    .production-image img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .production-meta {
        position: absolute;
        bottom: 1.5rem;
        left: 1.5rem;
        display: flex;
        gap: 0.75rem;
        color: #fff;
        font-size: 0.875rem;
    }
    .production-genre {
        padding: 0.375rem 1rem;
        border-radius: 9999px;
        background: linear-gradient(to right, #dc2626, #ef4444);
    }
    .production-body, .service-card {
        padding: 2rem;
    }
    .service-card {
        display: block;
    }
    .service-icon {
        width: 2.5rem;
        height: 2.5rem;
        color: #dc2626;
        margin-bottom: 1.5rem;
    }
    .card-link {
        display: inline-flex;
        align-items: center;
        color: #dc2626;
        font-weight: 600;
        text-decoration: none;
    }
    .card-arrow {
        margin-left: 0.5rem;
    }
    .testimonials {
        background: #111827;
        color: #fff;
    }
    .testimonials .section-heading p {
        color: #d1d5db;
    }
    .testimonial-card {
        padding: 2rem;
        border-radius: 1rem;
        background: rgba(31,41,55,0.5);
        transition: transform 0.5s;
    }
    .testimonial-header {
        display: flex;
        align-items: center;
        margin-bottom: 1.5rem;
    }
    .testimonial-avatar {
        width: 4rem;
        height: 4rem;
        border-radius: 50%;
        object-fit: cover;
        margin-right: 1rem;
        box-shadow: 0 0 0 2px #ef4444;
    }
    .testimonial-role {
        color: #f87171;
    }
    .testimonial-quote {
        color: #d1d5db;
        font-style: italic;
        font-size: 1.125rem;
        line-height: 1.6;
    }
    .closing-cta {
        text-align: center;
        color: #fff;
        background: linear-gradient(135deg, #dc2626, #991b1b);
    }
    .closing-cta h2 {
        font-size: 3rem;
        margin-bottom: 2rem;
    }
    .closing-cta p {
        font-size: 1.5rem;
        max-width: 48rem;
        margin: 0 auto 3rem;
        color: rgba(255,255,255,0.9);
    }
    .closing-cta-button {
        display: inline-block;
        padding: 1.25rem 3rem;
        border-radius: 0.5rem;
        background: #fff;
        color: #dc2626;
        font-size: 1.25rem;
        font-weight: 600;
        text-decoration: none;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use yew::virtual_dom::VNode;

    #[test]
    fn hero_video_exposes_node_for_muting() {
        let node_ref = NodeRef::default();
        match hero_video(node_ref.clone()) {
            VNode::VTag(tag) => {
                assert_eq!(tag.tag(), "video");
                assert_eq!(tag.node_ref, node_ref);
                let attributes: Vec<_> = tag.attributes.iter().map(|(key, _)| key).collect();
                assert!(attributes.contains(&"autoplay"));
                assert!(attributes.contains(&"playsinline"));
            }
            _ => panic!("hero video should render a single <video> element"),
        }
    }
}
