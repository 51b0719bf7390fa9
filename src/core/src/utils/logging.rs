use log::{debug, info};
use std::time::Instant;

const SLOW_OPERATION_MS: u128 = 100;

pub struct TimeEstimation;

impl TimeEstimation {
    /// Runs `action` and returns its result with the elapsed milliseconds.
    pub fn estimate<T, F: FnOnce() -> T>(action: F) -> (T, u128) {
        let now = Instant::now();

        let result = action();

        (result, now.elapsed().as_millis())
    }
}

pub struct Logging;

impl Logging {
    pub fn estimate_result<T, F: FnOnce() -> T>(action: F, message: &str) -> T {
        let (result, duration_ms) = TimeEstimation::estimate(action);

        if duration_ms > SLOW_OPERATION_MS {
            info!("{}, {} ms", message, duration_ms);
        } else {
            debug!("{}, {} ms", message, duration_ms);
        }

        result
    }
}
