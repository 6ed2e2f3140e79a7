//! Smooth scrolling for the terminal host
//!
//! Turns the paging engine's scroll requests into animated offsets.
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing functions (cubic, quintic, exponential)
//! - `timing` - Time calculation utilities (progress, interpolation)
//! - `config` - Configuration types and defaults (re-exported from scrollpager-core)
//!
//! ## L3 Molecular Layer
//! - `animation` - Animation controller combining atoms
//!
//! # Usage
//!
//! ```ignore
//! use scrollpager_tui::scroll::ScrollAnimator;
//!
//! let mut animator = ScrollAnimator::new(config.scroll.clone());
//! animator.apply(&request, max_offset);
//!
//! // In main loop, update each frame and get current offset
//! let offset = animator.update();
//! ```

// L4 Atomic Layer
pub mod config;
pub mod easing;
pub mod timing;

// L3 Molecular Layer
pub mod animation;

pub use animation::ScrollAnimator;
pub use config::{ScrollConfig, ScrollConfigExt};
pub use easing::{EasingType, EasingTypeExt};
