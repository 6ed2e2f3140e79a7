use std::path::Path;

use anyhow::{anyhow, Result};
use scrollpager_core::geometry::Axis;
use scrollpager_core::snap::{snap_active, snap_candidates};
use scrollpager_core::AppConfig;

use super::load_snapshot;

pub fn run(config: &AppConfig, axis: &str, snapshot: &Path, json: bool) -> Result<()> {
    let axis = Axis::parse(axis).ok_or_else(|| anyhow!("Unknown axis '{}', expected x or y", axis))?;
    let container = load_snapshot(snapshot)?;
    let active = snap_active(&container.style, axis);
    let mut candidates = snap_candidates(&container, axis, &config.paging);
    candidates.sort_by(f64::total_cmp);

    if json {
        println!(
            "{}",
            serde_json::json!({ "axis": axis, "active": active, "candidates": candidates })
        );
        return Ok(());
    }

    if !active {
        println!("Snapping is not active on the {} axis.", axis);
        return Ok(());
    }

    println!("Snap candidates on {} ({}):", axis, candidates.len());
    for candidate in &candidates {
        println!("  {}", candidate);
    }

    Ok(())
}
