use log::Level;
use std::time::Duration;

/// How long a success check mark or error banner stays up before the
/// hero buttons fall back to idle.
pub const FEEDBACK_RESET_DELAY: Duration = Duration::from_millis(3000);

/// Shown for every failed navigation. The underlying cause only goes to the log.
pub const GENERIC_NAVIGATION_ERROR: &str = "Failed to navigate. Please try again.";

pub const ACHIEVEMENTS_LANDMARK: &str = "achievements";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
