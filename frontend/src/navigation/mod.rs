pub mod controller;
pub mod outcome;
pub mod web;

pub use outcome::{Destination, NavigationOutcome};
pub use web::use_navigation_feedback;
