//! Rendering the same batch with every preset, and overriding a preset.
//!
//! Run with: cargo run --example presets

use minemizer::{to_string_with_options, EncodeOptions, Preset};
use serde::Serialize;
use std::error::Error;

#[derive(Debug, Serialize)]
struct Project {
    project: String,
    status: String,
    budget: u32,
}

fn main() -> Result<(), Box<dyn Error>> {
    let projects = vec![
        Project {
            project: "Phoenix".into(),
            status: "Active".into(),
            budget: 120_000,
        },
        Project {
            project: "Atlas".into(),
            status: "Paused".into(),
            budget: 45_000,
        },
    ];

    for preset in Preset::ALL {
        let encoded = to_string_with_options(&projects, EncodeOptions::from(preset))?;
        println!("{}:\n{}\n", preset, encoded);
    }

    // CSV layout with a pipe delimiter; spaces stay off
    let options = EncodeOptions::new()
        .with_preset(Preset::Csv)
        .with_delimiter("|");
    println!("csv + '|':\n{}", to_string_with_options(&projects, options)?);

    Ok(())
}
