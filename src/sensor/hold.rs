//! Sensor failure policy
//!
//! A failed read reuses the last valid sample for a bounded number of ticks.
//! Past that bound, or before any valid sample exists, the pipeline has to
//! drive its outputs to the fail-safe state.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::SensorError;
use crate::sample::Sample;

/// Outcome of one sensor read after the hold policy was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    /// The read succeeded
    Fresh(Sample),
    /// The read failed; the last valid sample is reused
    Held { sample: Sample, misses: u8 },
    /// No usable sample
    FailSafe(SensorError),
}

impl Reading {
    /// Sample to drive the outputs with, if any
    pub const fn sample(&self) -> Option<Sample> {
        match self {
            Self::Fresh(sample) | Self::Held { sample, .. } => Some(*sample),
            Self::FailSafe(_) => None,
        }
    }
}

/// Tracks the last valid sample and the number of consecutive misses
#[derive(Debug, Clone)]
pub struct SampleHold {
    last: Option<Sample>,
    misses: u8,
    limit: u8,
    fail_safe: bool,
}

impl SampleHold {
    /// `limit` is the number of consecutive failures that may reuse
    /// the last valid sample
    pub const fn new(limit: u8) -> Self {
        Self {
            last: None,
            misses: 0,
            limit,
            fail_safe: false,
        }
    }

    /// Consecutive failed reads so far
    pub const fn misses(&self) -> u8 {
        self.misses
    }

    /// Whether the last update left the outputs in the fail-safe state
    pub const fn is_fail_safe(&self) -> bool {
        self.fail_safe
    }

    /// Apply the policy to the result of a read
    pub fn update(&mut self, result: Result<Sample, SensorError>) -> Reading {
        match result {
            Ok(sample) => {
                #[cfg(feature = "esp32-log")]
                if self.fail_safe {
                    println!("[SampleHold.update] sensors recovered, leaving fail-safe");
                }
                self.last = Some(sample);
                self.misses = 0;
                self.fail_safe = false;
                Reading::Fresh(sample)
            }
            Err(error) => {
                self.misses = self.misses.saturating_add(1);
                match self.last {
                    Some(sample) if self.misses <= self.limit => {
                        #[cfg(feature = "esp32-log")]
                        println!(
                            "[SampleHold.update] {}, holding last sample ({}/{})",
                            error, self.misses, self.limit
                        );
                        Reading::Held {
                            sample,
                            misses: self.misses,
                        }
                    }
                    _ => {
                        #[cfg(feature = "esp32-log")]
                        println!("[SampleHold.update] {}, fail-safe", error);
                        self.fail_safe = true;
                        Reading::FailSafe(error)
                    }
                }
            }
        }
    }
}
