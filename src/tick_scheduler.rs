//! Main loop pacing
//!
//! Portable tick pacing without async/await or platform specific timers.
//! The caller is responsible for sleeping between ticks.

use embassy_time::{Duration, Instant};

use crate::output::FrameSink;
use crate::policy::OutputPolicy;

/// Result of a tick.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Runs an output policy at its cadence and writes every frame to the sinks.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = TickScheduler::new(policy, sinks);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     Timer::at(result.next_deadline).await;
/// }
/// ```
pub struct TickScheduler<P: OutputPolicy, S: FrameSink> {
    policy: P,
    sinks: S,
    next_tick: Instant,
}

impl<P: OutputPolicy, S: FrameSink> TickScheduler<P, S> {
    pub const fn new(policy: P, sinks: S) -> Self {
        Self {
            policy,
            sinks,
            next_tick: Instant::from_millis(0),
        }
    }

    /// Evaluate the policy, write the frame and return timing information.
    ///
    /// If the loop has fallen more than two periods behind, the schedule
    /// restarts at `now` instead of catching up with a burst of ticks.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        let period = self.policy.tick_period();
        let max_drift = Duration::from_millis(period.as_millis() * 2);
        if now > self.next_tick + max_drift {
            self.next_tick = now;
        }

        let frame = self.policy.evaluate(now);
        self.sinks.apply(&frame);

        self.next_tick += period;

        let sleep_duration = self
            .next_tick
            .checked_duration_since(now)
            .unwrap_or(Duration::from_millis(0));

        TickResult {
            next_deadline: self.next_tick,
            sleep_duration,
        }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    pub fn sinks(&self) -> &S {
        &self.sinks
    }

    pub fn sinks_mut(&mut self) -> &mut S {
        &mut self.sinks
    }
}
