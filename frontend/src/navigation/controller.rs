use async_trait::async_trait;
use log::{debug, error, info};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::outcome::{Destination, NavigationError, NavigationFeedback, NavigationOutcome};
use crate::config::{FEEDBACK_RESET_DELAY, GENERIC_NAVIGATION_ERROR};

/// Moves the app to another view.
#[async_trait(?Send)]
pub trait Navigate {
    async fn navigate(&self, destination: Destination) -> Result<(), NavigationError>;
}

/// One-shot timer. Dropping the returned handle cancels the callback.
pub trait ResetTimer {
    type Handle;

    fn schedule(&self, delay: Duration, on_fire: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Landmark lookup in the rendered page.
pub trait ViewTree {
    /// Smoothly scrolls the landmark into view. Returns false if it does not exist.
    fn scroll_into_view(&self, landmark: &str) -> bool;
}

struct State<H> {
    feedback: NavigationFeedback,
    // Kept after firing; dropped when the next cycle begins.
    pending_reset: Option<H>,
}

/// Drives the spinner / check mark / error banner around a navigation.
///
/// The controller is the only owner of the outcome. Views observe it through
/// the listener passed to [`FeedbackController::new`], which is called after
/// every transition with no internal borrow held.
pub struct FeedbackController<N, T: ResetTimer, V> {
    navigator: N,
    timer: T,
    view: V,
    state: RefCell<State<T::Handle>>,
    listener: Box<dyn Fn(&NavigationOutcome)>,
}

impl<N, T, V> FeedbackController<N, T, V>
where
    N: Navigate + 'static,
    T: ResetTimer + 'static,
    V: ViewTree + 'static,
{
    pub fn new(
        navigator: N,
        timer: T,
        view: V,
        listener: impl Fn(&NavigationOutcome) + 'static,
    ) -> Rc<Self> {
        Rc::new(Self {
            navigator,
            timer,
            view,
            state: RefCell::new(State {
                feedback: NavigationFeedback::default(),
                pending_reset: None,
            }),
            listener: Box::new(listener),
        })
    }

    pub fn outcome(&self) -> NavigationOutcome {
        self.state.borrow().feedback.outcome().clone()
    }

    pub async fn request_navigation(self: Rc<Self>, destination: Destination) {
        let (cycle, stale_reset) = {
            let mut state = self.state.borrow_mut();
            match state.feedback.begin() {
                Some(cycle) => (cycle, state.pending_reset.take()),
                None => {
                    debug!("Ignoring navigation to {}: another one is still pending", destination);
                    return;
                }
            }
        };
        drop(stale_reset);
        self.notify();

        info!("Navigating to {} (cycle {})", destination, cycle);
        let result = self.navigator.navigate(destination).await.map_err(|err| {
            error!("Navigation error: {}", err);
            GENERIC_NAVIGATION_ERROR.to_string()
        });

        let settled = self.state.borrow_mut().feedback.settle(cycle, result);
        if settled {
            self.notify();
        }
        self.schedule_reset(cycle);
    }

    pub fn scroll_to_anchor(&self, section_id: &str) {
        if !self.view.scroll_into_view(section_id) {
            debug!("No landmark with id '{}', not scrolling", section_id);
        }
    }

    fn schedule_reset(self: &Rc<Self>, cycle: u64) {
        let weak: Weak<Self> = Rc::downgrade(self);
        let handle = self.timer.schedule(
            FEEDBACK_RESET_DELAY,
            Box::new(move || {
                if let Some(controller) = weak.upgrade() {
                    controller.reset(cycle);
                }
            }),
        );

        let mut state = self.state.borrow_mut();
        if state.feedback.cycle() == cycle {
            state.pending_reset = Some(handle);
        }
    }

    fn reset(&self, cycle: u64) {
        let reset = self.state.borrow_mut().feedback.reset(cycle);
        if reset {
            self.notify();
        }
    }

    fn notify(&self) {
        let outcome = self.outcome();
        (self.listener)(&outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tokio::task::{spawn_local, JoinHandle, LocalSet};
    use tokio::time::advance;

    struct ScriptedNavigator {
        delay: Duration,
        result: Result<(), NavigationError>,
        calls: Rc<RefCell<Vec<Destination>>>,
    }

    impl ScriptedNavigator {
        fn new(delay_ms: u64, result: Result<(), NavigationError>) -> Self {
            Self {
                delay: Duration::from_millis(delay_ms),
                result,
                calls: Rc::new(RefCell::new(Vec::new())),
            }
        }
    }

    #[async_trait(?Send)]
    impl Navigate for ScriptedNavigator {
        async fn navigate(&self, destination: Destination) -> Result<(), NavigationError> {
            self.calls.borrow_mut().push(destination);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            self.result.clone()
        }
    }

    struct AbortOnDrop(JoinHandle<()>);

    impl Drop for AbortOnDrop {
        fn drop(&mut self) {
            self.0.abort();
        }
    }

    struct TokioTimer;

    impl ResetTimer for TokioTimer {
        type Handle = AbortOnDrop;

        fn schedule(&self, delay: Duration, on_fire: Box<dyn FnOnce()>) -> AbortOnDrop {
            AbortOnDrop(spawn_local(async move {
                tokio::time::sleep(delay).await;
                on_fire();
            }))
        }
    }

    #[derive(Default)]
    struct FakeView {
        landmarks: HashSet<String>,
        scrolled: Rc<RefCell<Vec<String>>>,
    }

    impl ViewTree for FakeView {
        fn scroll_into_view(&self, landmark: &str) -> bool {
            if !self.landmarks.contains(landmark) {
                return false;
            }
            self.scrolled.borrow_mut().push(landmark.to_string());
            true
        }
    }

    type TestController = FeedbackController<ScriptedNavigator, TokioTimer, FakeView>;

    fn controller(
        navigator: ScriptedNavigator,
        view: FakeView,
    ) -> (Rc<TestController>, Rc<RefCell<Vec<NavigationOutcome>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let controller = FeedbackController::new(navigator, TokioTimer, view, move |outcome| {
            sink.borrow_mut().push(outcome.clone());
        });
        (controller, seen)
    }

    async fn let_tasks_run() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    async fn advance_ms(ms: u64) {
        advance(Duration::from_millis(ms)).await;
        let_tasks_run().await;
    }

    #[tokio::test(start_paused = true)]
    async fn about_succeeds_then_resets_after_delay() {
        LocalSet::new()
            .run_until(async {
                let (controller, seen) =
                    controller(ScriptedNavigator::new(50, Ok(())), FakeView::default());

                spawn_local(controller.clone().request_navigation(Destination::About));
                let_tasks_run().await;
                assert_eq!(controller.outcome(), NavigationOutcome::Pending);

                advance_ms(60).await;
                assert_eq!(controller.outcome(), NavigationOutcome::Succeeded);

                // Resolution happened at t=60, so the reset is due at t=3060.
                advance_ms(2990).await;
                assert_eq!(controller.outcome(), NavigationOutcome::Succeeded);

                advance_ms(20).await;
                assert_eq!(controller.outcome(), NavigationOutcome::Idle);

                assert_eq!(
                    *seen.borrow(),
                    vec![
                        NavigationOutcome::Pending,
                        NavigationOutcome::Succeeded,
                        NavigationOutcome::Idle,
                    ]
                );
                assert!(seen.borrow().iter().all(|o| o.error_message().is_none()));
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn events_failure_shows_generic_message() {
        LocalSet::new()
            .run_until(async {
                let cause = NavigationError::RouterUnavailable.to_string();
                let navigator = ScriptedNavigator::new(0, Err(NavigationError::RouterUnavailable));
                let calls = navigator.calls.clone();
                let (controller, seen) = controller(navigator, FakeView::default());

                spawn_local(controller.clone().request_navigation(Destination::Events));
                let_tasks_run().await;

                assert_eq!(
                    controller.outcome(),
                    NavigationOutcome::Failed(GENERIC_NAVIGATION_ERROR.to_string())
                );
                assert_eq!(*calls.borrow(), vec![Destination::Events]);
                assert!(seen
                    .borrow()
                    .iter()
                    .filter_map(|o| o.error_message())
                    .all(|message| message != cause));

                advance_ms(2999).await;
                assert!(controller.outcome().error_message().is_some());

                advance_ms(2).await;
                assert_eq!(controller.outcome(), NavigationOutcome::Idle);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn second_request_while_pending_is_ignored() {
        LocalSet::new()
            .run_until(async {
                let navigator = ScriptedNavigator::new(100, Ok(()));
                let calls = navigator.calls.clone();
                let (controller, seen) = controller(navigator, FakeView::default());

                spawn_local(controller.clone().request_navigation(Destination::About));
                spawn_local(controller.clone().request_navigation(Destination::Events));
                let_tasks_run().await;

                assert_eq!(*calls.borrow(), vec![Destination::About]);
                assert_eq!(*seen.borrow(), vec![NavigationOutcome::Pending]);

                advance_ms(100).await;
                assert_eq!(controller.outcome(), NavigationOutcome::Succeeded);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn stale_reset_does_not_clobber_newer_cycle() {
        LocalSet::new()
            .run_until(async {
                let (controller, _seen) =
                    controller(ScriptedNavigator::new(0, Ok(())), FakeView::default());

                // First cycle resolves at t=0, its reset would be due at t=3000.
                spawn_local(controller.clone().request_navigation(Destination::About));
                let_tasks_run().await;
                assert_eq!(controller.outcome(), NavigationOutcome::Succeeded);

                advance_ms(2000).await;
                spawn_local(controller.clone().request_navigation(Destination::Events));
                let_tasks_run().await;

                // Second cycle resolved at t=2000, so its own reset is due at t=5000.
                advance_ms(1500).await;
                assert_eq!(controller.outcome(), NavigationOutcome::Succeeded);

                advance_ms(1600).await;
                assert_eq!(controller.outcome(), NavigationOutcome::Idle);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn new_cycle_can_start_while_previous_result_is_shown() {
        LocalSet::new()
            .run_until(async {
                let navigator = ScriptedNavigator::new(0, Ok(()));
                let calls = navigator.calls.clone();
                let (controller, seen) = controller(navigator, FakeView::default());

                spawn_local(controller.clone().request_navigation(Destination::About));
                let_tasks_run().await;
                spawn_local(controller.clone().request_navigation(Destination::Events));
                let_tasks_run().await;

                assert_eq!(*calls.borrow(), vec![Destination::About, Destination::Events]);
                assert_eq!(
                    *seen.borrow(),
                    vec![
                        NavigationOutcome::Pending,
                        NavigationOutcome::Succeeded,
                        NavigationOutcome::Pending,
                        NavigationOutcome::Succeeded,
                    ]
                );
            })
            .await;
    }

    #[test]
    fn scroll_to_known_landmark() {
        let view = FakeView {
            landmarks: HashSet::from(["achievements".to_string()]),
            ..FakeView::default()
        };
        let scrolled = view.scrolled.clone();
        let (controller, seen) = controller(ScriptedNavigator::new(0, Ok(())), view);

        controller.scroll_to_anchor("achievements");

        assert_eq!(*scrolled.borrow(), vec!["achievements".to_string()]);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn scroll_to_unknown_landmark_is_a_silent_no_op() {
        let view = FakeView::default();
        let scrolled = view.scrolled.clone();
        let (controller, seen) = controller(ScriptedNavigator::new(0, Ok(())), view);

        controller.scroll_to_anchor("does-not-exist");

        assert!(scrolled.borrow().is_empty());
        assert!(seen.borrow().is_empty());
        assert_eq!(controller.outcome(), NavigationOutcome::Idle);
    }
}
