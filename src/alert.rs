//! Buzzer alert policy
//!
//! The alert fires in darkness or when red is the dominant color. It is
//! re-evaluated from the raw sample on every tick, without hysteresis.

use crate::config::{BUZZER_ALERT_DUTY, BUZZER_SILENT_DUTY};
use crate::sample::Sample;

/// Whether the sample should sound the buzzer
pub const fn is_alert(sample: &Sample) -> bool {
    sample.lux < 1 || sample.color.is_red_dominant()
}

/// Buzzer compare level for an alert state
pub const fn buzzer_duty(alert: bool) -> u16 {
    if alert {
        BUZZER_ALERT_DUTY
    } else {
        BUZZER_SILENT_DUTY
    }
}
