pub mod app;
pub mod collision;
pub mod components;
pub mod config;
pub mod game;
pub mod input;
pub mod systems;
pub mod ui;

#[cfg(test)]
mod tests;

use bevy_ecs::prelude::Resource;
use std::time::{Duration, Instant};

/// Fixed-timestep accumulator for gravity.
#[derive(Resource, Debug, Clone)]
pub struct GravityClock {
    last_step: Instant,
    step_rate: Duration,
}

impl GravityClock {
    #[must_use]
    pub fn new(now: Instant, step_rate: Duration) -> Self {
        Self {
            last_step: now,
            step_rate,
        }
    }

    /// Consumes one whole interval if it has elapsed by `now`.
    ///
    /// Call in a loop to catch up; there is no cap on the number of steps.
    pub fn take_step(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_step) >= self.step_rate {
            self.last_step += self.step_rate;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn last_step(&self) -> Instant {
        self.last_step
    }

    #[must_use]
    pub fn step_rate(&self) -> Duration {
        self.step_rate
    }
}
