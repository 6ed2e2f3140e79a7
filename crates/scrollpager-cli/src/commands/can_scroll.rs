use std::path::Path;

use anyhow::Result;
use scrollpager_core::{can_scroll_toward, DirectionToken};

use super::load_snapshot;

pub fn run(direction: &str, snapshot: &Path, json: bool) -> Result<()> {
    let container = load_snapshot(snapshot)?;
    let possible = can_scroll_toward(Some(&container), DirectionToken::parse(direction));

    if json {
        println!("{}", serde_json::json!({ "can_scroll": possible }));
    } else {
        println!("{}", possible);
    }

    Ok(())
}
