//! L4 Atomic Layer: Time calculation utilities for scroll animations

use std::time::Duration;

/// Animation progress in [0.0, 1.0] after `elapsed` of `duration`
#[inline]
pub fn progress_after(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Linear interpolation between two scroll offsets
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
