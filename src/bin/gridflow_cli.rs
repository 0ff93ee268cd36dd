//! CLI tool for gridflow - computes grid layouts from JSON configs
//!
//! Usage:
//!   gridflow_cli <config.json>                  # Layout JSON to stdout
//!   gridflow_cli <config.json> --width 1280     # Explicit available width
//!   gridflow_cli <config.json> -o out.json      # Layout JSON to file

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use gridflow::{GridConfig, GridEngine};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: gridflow_cli <config.json> [--width <px>] [-o output.json]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let mut width: Option<f32> = None;
    let mut output_path: Option<&String> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--width" if i + 1 < args.len() => {
                match args[i + 1].parse::<f32>() {
                    Ok(w) => width = Some(w),
                    Err(e) => {
                        eprintln!("Error parsing --width {}: {}", args[i + 1], e);
                        std::process::exit(1);
                    }
                }
                i += 2;
            }
            "-o" if i + 1 < args.len() => {
                output_path = Some(&args[i + 1]);
                i += 2;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
    }

    // Read and parse config
    let config_json = match fs::read_to_string(input_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };
    let config: GridConfig = match serde_json::from_str(&config_json) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error parsing config: {}", e);
            std::process::exit(1);
        }
    };

    // Without an explicit width, lay out at the full configured column count
    let width =
        width.unwrap_or(config.number_of_columns as f32 * (config.item_width + config.gap));

    let engine = match GridEngine::new(config, width) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error building grid: {}", e);
            std::process::exit(1);
        }
    };

    let json = match serde_json::to_string_pretty(&engine.layout()) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
