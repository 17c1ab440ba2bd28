use async_trait::async_trait;
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_router::prelude::*;

use super::controller::{FeedbackController, Navigate, ResetTimer, ViewTree};
use super::outcome::{Destination, NavigationError, NavigationOutcome};

/// Pushes routes onto the browser history through yew_router.
pub struct RouterNavigate {
    navigator: Option<Navigator>,
}

impl RouterNavigate {
    pub fn new(navigator: Option<Navigator>) -> Self {
        Self { navigator }
    }
}

#[async_trait(?Send)]
impl Navigate for RouterNavigate {
    async fn navigate(&self, destination: Destination) -> Result<(), NavigationError> {
        let navigator = self
            .navigator
            .as_ref()
            .ok_or(NavigationError::RouterUnavailable)?;
        navigator.push(&destination.route());
        Ok(())
    }
}

pub struct GlooTimer;

impl ResetTimer for GlooTimer {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, on_fire: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, on_fire)
    }
}

pub struct DocumentView;

impl ViewTree for DocumentView {
    fn scroll_into_view(&self, landmark: &str) -> bool {
        if let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(landmark))
        {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            return true;
        }
        false
    }
}

type WebController = FeedbackController<RouterNavigate, GlooTimer, DocumentView>;

#[derive(Clone, PartialEq)]
pub struct NavigationFeedbackHandle {
    pub outcome: NavigationOutcome,
    pub navigate: Callback<Destination>,
    pub scroll_to: Callback<&'static str>,
}

/// Owns one feedback controller per mounted view and re-renders on every
/// outcome change.
#[hook]
pub fn use_navigation_feedback() -> NavigationFeedbackHandle {
    let outcome = use_state(NavigationOutcome::default);
    let navigator = use_navigator();

    let controller: Rc<WebController> = {
        let setter = outcome.setter();
        let memo = use_memo(
            move |_| {
                FeedbackController::new(
                    RouterNavigate::new(navigator),
                    GlooTimer,
                    DocumentView,
                    move |next: &NavigationOutcome| setter.set(next.clone()),
                )
            },
            (),
        );
        (*memo).clone()
    };

    let navigate = {
        let controller = controller.clone();
        Callback::from(move |destination: Destination| {
            spawn_local(controller.clone().request_navigation(destination));
        })
    };

    let scroll_to = Callback::from(move |section_id: &'static str| {
        controller.scroll_to_anchor(section_id);
    });

    NavigationFeedbackHandle {
        outcome: (*outcome).clone(),
        navigate,
        scroll_to,
    }
}
