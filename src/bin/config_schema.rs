// Copyright 2025 Cowboy AI, LLC.

//! Prints the JSON Schema of the demo configuration file

use anyhow::{Context, Result};
use refactor_kata::{Console, KataConfig, StdConsole};

fn main() -> Result<()> {
    let schema = KataConfig::json_schema().context("building configuration schema")?;
    let rendered = serde_json::to_string_pretty(&schema)?;
    StdConsole.line(&rendered);
    Ok(())
}
