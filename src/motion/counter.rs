use std::time::Duration;

use super::schedule::{Animation, Scheduler, Step};

pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);
pub const COUNTER_STEPS: u32 = 60;
pub const PROGRESS_DELAY: Duration = Duration::from_millis(200);

/// Counts a statistic up from zero to its target in fixed increments.
#[derive(Debug, Clone)]
pub struct StatCounter {
    target: f64,
    increment: f64,
    current: f64,
    done: bool,
}

impl StatCounter {
    pub fn new(target: f64) -> Self {
        let target = if target.is_finite() { target } else { 0.0 };
        Self {
            target,
            increment: target / f64::from(COUNTER_STEPS),
            current: 0.0,
            done: false,
        }
    }

    /// Delay between steps; also the lead-in before the first one.
    pub fn interval() -> Duration {
        COUNTER_DURATION / COUNTER_STEPS
    }

    pub fn is_finished(&self) -> bool {
        self.done
    }

    pub fn display(&self) -> String {
        format_stat(self.current, self.target)
    }
}

/// Whole-number targets display floor-rounded values, everything else two
/// decimal places.
pub fn format_stat(value: f64, target: f64) -> String {
    if target.fract() == 0.0 {
        format!("{}", value.floor() as i64)
    } else {
        format!("{value:.2}")
    }
}

impl Animation for StatCounter {
    type Frame = String;

    fn tick(&mut self) -> Step<String> {
        if !self.done {
            self.current += self.increment;
            if self.current >= self.target {
                self.current = self.target;
                self.done = true;
            }
        }
        Step {
            frame: self.display(),
            next: (!self.done).then(Self::interval),
        }
    }
}

/// A progress indicator animated by a single CSS width transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressFill {
    percent: f64,
}

impl ProgressFill {
    pub fn new(percent: f64) -> Self {
        Self {
            percent: percent.clamp(0.0, 100.0),
        }
    }

    pub fn width(&self) -> String {
        format!("{}%", self.percent)
    }

    /// Applies the target width once [`PROGRESS_DELAY`] has elapsed.
    pub fn start<S: Scheduler>(self, scheduler: &S, apply: impl FnOnce(String) + 'static) {
        scheduler.schedule(PROGRESS_DELAY, Box::new(move || apply(self.width())));
    }
}
