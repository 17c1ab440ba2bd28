use yew::prelude::*;

use crate::navigation::NavigationOutcome;

const SPINNER_PATH: &str = concat!(
    "M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291",
    "A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z",
);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indicator {
    Spinner,
    Check,
    Nothing,
}

pub fn indicator_for(outcome: &NavigationOutcome) -> Indicator {
    match outcome {
        NavigationOutcome::Pending => Indicator::Spinner,
        NavigationOutcome::Succeeded => Indicator::Check,
        NavigationOutcome::Idle | NavigationOutcome::Failed(_) => Indicator::Nothing,
    }
}

#[derive(Properties, PartialEq)]
pub struct FeedbackButtonProps {
    pub label: &'static str,
    pub aria_label: &'static str,
    pub tooltip: &'static str,
    #[prop_or("hero-button-primary")]
    pub variant: &'static str,
    pub outcome: NavigationOutcome,
    pub onclick: Callback<()>,
}

#[function_component(FeedbackButton)]
pub fn feedback_button(props: &FeedbackButtonProps) -> Html {
    let onclick = {
        let onclick = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            onclick.emit(());
        })
    };

    let indicator = match indicator_for(&props.outcome) {
        Indicator::Spinner => html! {
            <svg class="spinner" viewBox="0 0 24 24">
                <circle
                    class="spinner-track"
                    cx="12"
                    cy="12"
                    r="10"
                    stroke="currentColor"
                    stroke-width="4"
                    fill="none"
                />
                <path class="spinner-head" fill="currentColor" d={SPINNER_PATH} />
            </svg>
        },
        Indicator::Check => html! {
            <svg class="check-mark" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                <path
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-width="2"
                    d="M5 13l4 4L19 7"
                />
            </svg>
        },
        Indicator::Nothing => html! {},
    };

    html! {
        <div class="tooltip-wrapper">
            <button
                class={classes!("hero-button", props.variant)}
                onclick={onclick}
                disabled={props.outcome.is_pending()}
                aria-label={props.aria_label}
            >
                <span class="hero-button-label">
                    {indicator}
                    {props.label}
                </span>
            </button>
            <div class="tooltip">{props.tooltip}</div>
        </div>
    }
}
