//! Config command handlers

use crate::cli::ConfigInitArgs;
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};

const EXAMPLE_CONFIG: &str = include_str!("../../epp.example.toml");

/// Handle `epp config init` command
///
/// Writes the example configuration. Refuses to replace an existing file
/// unless `--force` is given.
pub fn handle_config_init(args: &ConfigInitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = if args.force {
        File::create(&args.output)?
    } else {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&args.output)
            .map_err(|e| -> Box<dyn std::error::Error> {
                if e.kind() == ErrorKind::AlreadyExists {
                    format!(
                        "File already exists: {}. Use --force to overwrite.",
                        args.output.display()
                    )
                    .into()
                } else {
                    e.into()
                }
            })?
    };
    file.write_all(EXAMPLE_CONFIG.as_bytes())?;

    println!("✓ Configuration file created: {}", args.output.display());
    println!("  Add your pods under [[pods]] before running `epp serve`.");

    Ok(())
}
