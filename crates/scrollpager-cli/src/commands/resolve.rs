use std::path::Path;

use anyhow::Result;
use scrollpager_core::{resolve_direction, DirectionToken};

use super::load_snapshot;

pub fn run(direction: &str, snapshot: Option<&Path>, json: bool) -> Result<()> {
    let container = snapshot.map(load_snapshot).transpose()?;
    let token = DirectionToken::parse(direction);
    let descriptor = resolve_direction(token, container.as_ref().map(|c| &c.style));

    if json {
        println!("{}", serde_json::to_string_pretty(&descriptor)?);
    } else {
        println!("Direction: {}", token);
        println!("  Axis:  {}", descriptor.axis);
        println!("  Sign:  {}", descriptor.sign);
        println!("  Label: {}", descriptor.label);
    }

    Ok(())
}
