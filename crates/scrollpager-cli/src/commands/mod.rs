pub mod can_scroll;
pub mod candidates;
pub mod demo;
pub mod page;
pub mod resolve;

use std::path::Path;

use anyhow::{Context, Result};
use scrollpager_core::ContainerSnapshot;

/// Load a container snapshot, naming the file in the error
pub fn load_snapshot(path: &Path) -> Result<ContainerSnapshot> {
    ContainerSnapshot::load(path)
        .with_context(|| format!("Failed to load snapshot {}", path.display()))
}
