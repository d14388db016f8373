//! Map format conversion command

use anyhow::{Context, Result};
use onix_map::{load_validated_map, save_map_config};
use std::fs;
use std::path::Path;

pub fn run(input: &str, output: &str) -> Result<()> {
    let map = load_validated_map(input).with_context(|| format!("reading {}", input))?;

    for warning in map.warnings() {
        println!("  [WARN ] {}", warning);
    }

    if let Some(parent) = Path::new(output).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    save_map_config(output, map.config()).with_context(|| format!("writing {}", output))?;
    println!("Converted {} -> {}", input, output);

    Ok(())
}
