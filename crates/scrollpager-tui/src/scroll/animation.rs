//! L3 Molecular Layer: Scroll animation controller
//!
//! Executes the engine's scroll requests, animating between offsets with the
//! configured easing. A new request always supersedes the one in flight.

use std::time::{Duration, Instant};

use scrollpager_core::geometry::{Axis, Point};
use scrollpager_core::{ScrollBehavior, ScrollRequest};

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{lerp, progress_after};

/// Active scroll animation state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    /// Animation start time
    start: Instant,
    /// Starting scroll offset
    from: Point,
    /// Target scroll offset
    to: Point,
    /// Animation duration
    duration: Duration,
    /// Easing function
    easing: EasingType,
}

/// Scroll animation controller
///
/// Call `apply()` with a request from the paging engine, then `update()`
/// each frame to get the current interpolated scroll offset.
#[derive(Debug, Clone, Default)]
pub struct ScrollAnimator {
    /// Current active animation (if any)
    animation: Option<ActiveAnimation>,
    /// Configuration
    config: ScrollConfig,
    /// Current scroll offset (always up-to-date)
    current: Point,
}

impl ScrollAnimator {
    /// Create a new scroll animator with configuration
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            current: Point::ZERO,
        }
    }

    /// Check if an animation is currently active
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Final offset once the running animation completes
    pub fn target(&self) -> Point {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current)
    }

    /// Current interpolated offset
    #[inline]
    pub fn current(&self) -> Point {
        self.current
    }

    /// Set the offset immediately (no animation)
    pub fn set_offset(&mut self, offset: Point) {
        self.animation = None;
        self.current = offset;
    }

    /// Carry out a scroll request from the paging engine.
    ///
    /// `max` is the largest reachable offset on each axis.
    pub fn apply(&mut self, request: &ScrollRequest, max: Point) {
        match *request {
            ScrollRequest::None => {}
            ScrollRequest::To {
                axis,
                offset,
                behavior,
            } => self.scroll_to(axis, offset, behavior, max),
            ScrollRequest::By {
                axis,
                delta,
                behavior,
            } => {
                let base = self.target().along(axis);
                self.scroll_to(axis, base + delta, behavior, max);
            }
        }
    }

    /// Scroll one axis to an absolute offset
    pub fn scroll_to(&mut self, axis: Axis, offset: f64, behavior: ScrollBehavior, max: Point) {
        let offset = offset.clamp(0.0, max.along(axis).max(0.0));
        let target = self.target().with(axis, offset);

        if behavior == ScrollBehavior::Instant || !self.config.is_smooth() {
            self.set_offset(target);
            return;
        }

        if target == self.current {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: Instant::now(),
            from: self.current,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Advance the animation and return the current offset
    pub fn update(&mut self) -> Point {
        self.update_at(Instant::now())
    }

    /// Advance the animation to `now`
    pub fn update_at(&mut self, now: Instant) -> Point {
        if let Some(anim) = &self.animation {
            let t = progress_after(now.saturating_duration_since(anim.start), anim.duration);
            if t >= 1.0 {
                self.current = anim.to;
                self.animation = None;
            } else {
                let eased = anim.easing.apply(t);
                self.current = Point::new(
                    lerp(anim.from.x, anim.to.x, eased),
                    lerp(anim.from.y, anim.to.y, eased),
                );
            }
        }

        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: Point = Point { x: 900.0, y: 0.0 };

    fn smooth() -> ScrollAnimator {
        ScrollAnimator::new(ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: 100,
            easing: EasingType::Linear,
            ..Default::default()
        })
    }

    fn to(offset: f64, behavior: ScrollBehavior) -> ScrollRequest {
        ScrollRequest::To {
            axis: Axis::X,
            offset,
            behavior,
        }
    }

    #[test]
    fn test_instant_request_jumps() {
        let mut animator = smooth();
        animator.apply(&to(300.0, ScrollBehavior::Instant), MAX);
        assert_eq!(animator.current().x, 300.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_jumps_when_smooth_disabled() {
        let mut animator = ScrollAnimator::new(ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        });
        animator.apply(&to(300.0, ScrollBehavior::Smooth), MAX);
        assert_eq!(animator.current().x, 300.0);
    }

    #[test]
    fn test_smooth_request_animates_to_target() {
        let mut animator = smooth();
        let start = Instant::now();
        animator.apply(&to(300.0, ScrollBehavior::Smooth), MAX);
        assert!(animator.is_animating());
        assert_eq!(animator.target().x, 300.0);

        let done = animator.update_at(start + Duration::from_millis(500));
        assert_eq!(done.x, 300.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_relative_request_builds_on_target() {
        let mut animator = smooth();
        animator.apply(&to(300.0, ScrollBehavior::Smooth), MAX);
        animator.apply(
            &ScrollRequest::By {
                axis: Axis::X,
                delta: 255.0,
                behavior: ScrollBehavior::Smooth,
            },
            MAX,
        );
        assert_eq!(animator.target().x, 555.0);
    }

    #[test]
    fn test_new_request_supersedes_running_one() {
        let mut animator = smooth();
        animator.apply(&to(600.0, ScrollBehavior::Smooth), MAX);
        animator.apply(&to(300.0, ScrollBehavior::Smooth), MAX);
        assert_eq!(animator.target().x, 300.0);
    }

    #[test]
    fn test_targets_clamp_to_range() {
        let mut animator = smooth();
        animator.apply(&to(5000.0, ScrollBehavior::Instant), MAX);
        assert_eq!(animator.current().x, 900.0);
        animator.apply(&to(-40.0, ScrollBehavior::Instant), MAX);
        assert_eq!(animator.current().x, 0.0);
    }

    #[test]
    fn test_none_request_is_ignored() {
        let mut animator = smooth();
        animator.set_offset(Point::new(120.0, 0.0));
        animator.apply(&ScrollRequest::None, MAX);
        assert_eq!(animator.current().x, 120.0);
        assert!(!animator.is_animating());
    }
}
