//! Paging: how far one activation moves the container.
//!
//! With snapping active the destination is always a snap point: the
//! furthest one within a page, or the nearest one beyond it when a page
//! does not reach any. Without snapping the container moves by a fixed
//! fraction of the viewport.

use serde::Serialize;
use tracing::debug;

use crate::config::PagingConfig;
use crate::container::ContainerSnapshot;
use crate::direction::{resolve_direction, DirectionToken, Sign};
use crate::geometry::{read_geometry, Axis};
use crate::snap::{snap_active, snap_candidates};

/// How the host should carry out a scroll request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Scroll change requested by one activation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScrollRequest {
    /// Nothing to do
    None,
    /// Scroll to an absolute offset along `axis`
    To {
        axis: Axis,
        offset: f64,
        behavior: ScrollBehavior,
    },
    /// Scroll by a signed delta along `axis`
    By {
        axis: Axis,
        delta: f64,
        behavior: ScrollBehavior,
    },
}

impl ScrollRequest {
    pub fn is_none(&self) -> bool {
        matches!(self, ScrollRequest::None)
    }

    pub fn axis(&self) -> Option<Axis> {
        match self {
            ScrollRequest::None => None,
            ScrollRequest::To { axis, .. } | ScrollRequest::By { axis, .. } => Some(*axis),
        }
    }
}

/// Pick the destination among snap `candidates` when moving from `now`.
///
/// Candidates within `epsilon` of `now` (or behind it) are ignored. Returns
/// `now` when no candidate lies ahead.
pub fn next_snap_within_page(
    now: f64,
    page: f64,
    sign: Sign,
    candidates: &[f64],
    epsilon: f64,
) -> f64 {
    let forward = sign.is_positive();

    let mut ahead: Vec<f64> = candidates
        .iter()
        .copied()
        .filter(|p| p.is_finite())
        .filter(|&p| if forward { p > now + epsilon } else { p < now - epsilon })
        .collect();
    ahead.sort_by(f64::total_cmp);

    let (Some(&first), Some(&last)) = (ahead.first(), ahead.last()) else {
        return now;
    };

    let limit = now + sign.as_f64() * page;
    let within = if forward {
        ahead.iter().rev().find(|&&p| p <= limit)
    } else {
        ahead.iter().find(|&&p| p >= limit)
    };

    match within {
        Some(&furthest) => furthest,
        // Next snap point is more than a page away: go to it anyway
        None if forward => first,
        None => last,
    }
}

/// Signed move used when snapping is off: `max(1, round(page * fraction))`
pub fn fallback_delta(page: f64, sign: Sign, fraction: f64) -> f64 {
    (page * fraction).round().max(1.0) * sign.as_f64()
}

/// Plan the scroll request for one activation in direction `token`.
///
/// Geometry is read from the given snapshot only; callers pass a fresh
/// snapshot per activation.
pub fn plan_page(
    container: Option<&ContainerSnapshot>,
    token: DirectionToken,
    config: &PagingConfig,
) -> ScrollRequest {
    let Some(container) = container else {
        return ScrollRequest::None;
    };

    let descriptor = resolve_direction(token, Some(&container.style));
    let axis = descriptor.axis;
    let geometry = read_geometry(container, axis);
    let page = geometry.page();
    let behavior = if config.smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Instant
    };

    let request = if snap_active(&container.style, axis) {
        let candidates = snap_candidates(container, axis, config);
        let offset = next_snap_within_page(
            geometry.offset,
            page,
            descriptor.sign,
            &candidates,
            config.epsilon(),
        );
        if offset == geometry.offset {
            ScrollRequest::None
        } else {
            ScrollRequest::To {
                axis,
                offset,
                behavior,
            }
        }
    } else {
        ScrollRequest::By {
            axis,
            delta: fallback_delta(page, descriptor.sign, config.fraction()),
            behavior,
        }
    };

    debug!(
        direction = %token,
        axis = %axis,
        sign = %descriptor.sign,
        now = geometry.offset,
        page,
        ?request,
        "Planned page"
    );

    request
}
