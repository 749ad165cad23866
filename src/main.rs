use std::env;
use std::fs;

use anyhow::Context;

use derm_prep::pipeline::{run, PrepConfig};

// Script-style configuration: an optional JSON file overrides the defaults,
// there are no flags to parse.
fn main() -> anyhow::Result<()> {
    let config = match env::args().nth(1) {
        Some(path) => {
            let raw =
                fs::read(&path).with_context(|| format!("failed to read config file {path}"))?;
            serde_json::from_slice::<PrepConfig>(&raw)
                .with_context(|| format!("invalid config file {path}"))?
        }
        None => PrepConfig::default(),
    };

    let config = config.build()?;
    run(&config)?;
    Ok(())
}
