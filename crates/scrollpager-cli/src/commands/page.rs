use std::path::Path;

use anyhow::Result;
use scrollpager_core::{plan_page, AppConfig, DirectionToken, ScrollRequest};

use super::load_snapshot;

pub fn run(config: &AppConfig, direction: &str, snapshot: &Path, json: bool) -> Result<()> {
    let container = load_snapshot(snapshot)?;
    let token = DirectionToken::parse(direction);
    let request = plan_page(Some(&container), token, &config.paging);

    if json {
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    match request {
        ScrollRequest::None => println!("No movement ({})", token),
        ScrollRequest::To {
            axis,
            offset,
            behavior,
        } => println!("Scroll {} to {} ({:?})", axis, offset, behavior),
        ScrollRequest::By {
            axis,
            delta,
            behavior,
        } => println!("Scroll {} by {:+} ({:?})", axis, delta, behavior),
    }

    Ok(())
}
