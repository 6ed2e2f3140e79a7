//! Boundary evaluation: can the container move any further in a direction?

use crate::container::ContainerSnapshot;
use crate::direction::{resolve_direction, DirectionToken, Sign};
use crate::geometry::{read_geometry, Axis};

/// Whether the container can scroll further along `axis` toward `sign`.
///
/// Backward: offset > 0. Forward: offset + viewport < total, so a container
/// scrolled exactly flush with its end cannot scroll further. Without a
/// container nothing can scroll.
pub fn can_scroll(container: Option<&ContainerSnapshot>, axis: Axis, sign: Sign) -> bool {
    let Some(container) = container else {
        return false;
    };

    let geometry = read_geometry(container, axis);
    match sign {
        Sign::Negative => geometry.offset > 0.0,
        Sign::Positive => geometry.offset + geometry.viewport < geometry.total,
    }
}

/// `can_scroll` for the axis and sign that `token` resolves to
pub fn can_scroll_toward(container: Option<&ContainerSnapshot>, token: DirectionToken) -> bool {
    let descriptor = resolve_direction(token, container.map(|c| &c.style));
    can_scroll(container, descriptor.axis, descriptor.sign)
}
