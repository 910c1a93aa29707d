use std::time::Duration;

use typed_builder::TypedBuilder;

/// Pacing and polling intervals for the execution scheduler.
///
/// None of these model hardware timing. `run_delay` and `debug_delay` only
/// throttle the loop so a human can follow it; the poll intervals bound how
/// long a pause or step wait sleeps before re-checking its flag when no
/// control signal arrives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TypedBuilder)]
pub struct RunConfig {
    /// Delay applied before each instruction in normal (non-debug) mode.
    #[builder(default = Duration::from_millis(80))]
    pub run_delay: Duration,
    /// Delay applied after each debug step, once the snapshot is printed.
    #[builder(default = Duration::from_millis(500))]
    pub debug_delay: Duration,
    #[builder(default = Duration::from_millis(400))]
    pub pause_poll: Duration,
    #[builder(default = Duration::from_millis(150))]
    pub step_poll: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl RunConfig {
    /// Configuration without pacing delays. Poll intervals are kept short so
    /// waits still re-check their flags regularly.
    pub fn unthrottled() -> Self {
        Self::builder()
            .run_delay(Duration::ZERO)
            .debug_delay(Duration::ZERO)
            .pause_poll(Duration::from_millis(5))
            .step_poll(Duration::from_millis(5))
            .build()
    }
}
