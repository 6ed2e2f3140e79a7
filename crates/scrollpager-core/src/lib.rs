pub mod boundary;
pub mod config;
pub mod container;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod paging;
pub mod snap;

pub use boundary::{can_scroll, can_scroll_toward};
pub use config::{AppConfig, EasingType, PagingConfig, ScrollConfig};
pub use container::{ChildSnapshot, ContainerSnapshot, ContainerStyle, TextDirection, WritingMode};
pub use direction::{resolve_direction, DirectionDescriptor, DirectionToken, Sign};
pub use error::{Error, Result};
pub use geometry::{read_geometry, Axis, AxisGeometry};
pub use paging::{plan_page, ScrollBehavior, ScrollRequest};
