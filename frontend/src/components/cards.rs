use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{Achievement, Production, Service, ServiceIcon, Testimonial};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct AchievementProps {
    pub achievement: Achievement,
}

#[function_component(AchievementStat)]
pub fn achievement_stat(props: &AchievementProps) -> Html {
    html! {
        <div class="achievement">
            <div class="achievement-number">{&props.achievement.number}</div>
            <div class="achievement-label">{&props.achievement.label}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductionProps {
    pub production: Production,
}

#[function_component(ProductionCard)]
pub fn production_card(props: &ProductionProps) -> Html {
    let production = &props.production;
    html! {
        <div class="production-card">
            <div class="production-image">
                <img src={production.image.clone()} alt={production.title.clone()} loading="lazy" />
                <div class="production-meta">
                    <span class="production-genre">{&production.genre}</span>
                    <span class="production-duration">{&production.duration}</span>
                </div>
            </div>
            <div class="production-body">
                <h3>{&production.title}</h3>
                <p>{&production.description}</p>
                <Link<Route> to={Route::Streaming} classes="card-link">
                    {"Watch Now"}<span class="card-arrow">{"→"}</span>
                </Link<Route>>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialProps {
    pub testimonial: Testimonial,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialProps) -> Html {
    let testimonial = &props.testimonial;
    html! {
        <div class="testimonial-card">
            <div class="testimonial-header">
                <img
                    class="testimonial-avatar"
                    src={testimonial.image.clone()}
                    alt={testimonial.name.clone()}
                    loading="lazy"
                />
                <div>
                    <h3>{&testimonial.name}</h3>
                    <p class="testimonial-role">{&testimonial.role}</p>
                </div>
            </div>
            <p class="testimonial-quote">{format!("\"{}\"", testimonial.quote)}</p>
        </div>
    }
}

const ACADEMY_ICON: &str = "M12 14l9-5-9-5-9 5 9 5z";
const AUDITIONS_ICON: &str = concat!(
    "M15.232 5.232l3.536 3.536m-2.036-5.036a2.5 2.5 0 113.536 3.536",
    "L6.5 21.036H3v-3.572L16.732 3.732z",
);
const EVENTS_ICON: &str = concat!(
    "M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5",
    "a2 2 0 00-2 2v12a2 2 0 002 2z",
);
const CAREERS_ICON: &str = concat!(
    "M21 13.255A23.931 23.931 0 0112 15c-3.183 0-6.22-.62-9-1.745",
    "M16 6V4a2 2 0 00-2-2h-4a2 2 0 00-2 2v2m4 6h.01",
    "M5 20h14a2 2 0 002-2V8a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z",
);

fn service_icon(icon: ServiceIcon) -> Html {
    let path = match icon {
        ServiceIcon::Academy => ACADEMY_ICON,
        ServiceIcon::Auditions => AUDITIONS_ICON,
        ServiceIcon::Events => EVENTS_ICON,
        ServiceIcon::Careers => CAREERS_ICON,
    };
    html! {
        <svg
            class="service-icon"
            fill="none"
            stroke="currentColor"
            viewBox="0 0 24 24"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={path} />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceProps {
    pub service: Service,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceProps) -> Html {
    let service = &props.service;
    // Unknown links fall through to the not-found page instead of a dead anchor
    let route = Route::recognize(&service.link).unwrap_or(Route::NotFound);
    html! {
        <Link<Route> to={route} classes="service-card">
            {service_icon(service.icon)}
            <h3>{&service.title}</h3>
            <p>{&service.description}</p>
            <span class="card-link">{"Learn More"}<span class="card-arrow">{"→"}</span></span>
        </Link<Route>>
    }
}

pub fn achievement_stats(achievements: &[Achievement]) -> Vec<Html> {
    achievements
        .iter()
        .map(|achievement| html! {
            <AchievementStat key={achievement.label.clone()} achievement={achievement.clone()} />
        })
        .collect()
}

pub fn production_cards(productions: &[Production]) -> Vec<Html> {
    productions
        .iter()
        .map(|production| html! {
            <ProductionCard key={production.id} production={production.clone()} />
        })
        .collect()
}

pub fn testimonial_cards(testimonials: &[Testimonial]) -> Vec<Html> {
    testimonials
        .iter()
        .map(|testimonial| html! {
            <TestimonialCard key={testimonial.id} testimonial={testimonial.clone()} />
        })
        .collect()
}

pub fn service_cards(services: &[Service]) -> Vec<Html> {
    services
        .iter()
        .map(|service| html! {
            <ServiceCard key={service.title.clone()} service={service.clone()} />
        })
        .collect()
}
