// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Imports each file given on the command line, one after the other, and
//! prints the studio state as JSON after every import.
//!
//! With no arguments the showcase scene is printed instead.
//!
//! ```text
//! sandbox [--config studio.ron] <file>...
//! ```

use anyhow::{Context, Result};
use atelier_sdk::prelude::*;
use std::path::PathBuf;

struct Args {
    config: Option<PathBuf>,
    files: Vec<PathBuf>,
}

impl Args {
    fn parse() -> Result<Self> {
        let mut config = None;
        let mut files = Vec::new();
        let mut args = std::env::args_os().skip(1);
        while let Some(arg) = args.next() {
            if arg == "--config" {
                let path = args.next().context("--config expects a path")?;
                config = Some(PathBuf::from(path));
            } else {
                files.push(PathBuf::from(arg));
            }
        }
        Ok(Self { config, files })
    }
}

fn print_report(studio: &Studio) -> Result<()> {
    let json = serde_json::to_string_pretty(&studio.report())?;
    println!("{json}");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if init_logging().is_err() {
        eprintln!("a logger was already installed");
    }

    let args = Args::parse()?;
    let mut studio = match &args.config {
        Some(path) => Studio::from_config_file(path)?,
        None => Studio::new(StudioConfig::default())?,
    };

    if args.files.is_empty() {
        log::info!("No files given; showing the default scene.");
        studio.show_default_scene();
        return print_report(&studio);
    }

    for path in &args.files {
        match studio.import_and_settle(AssetSource::from_path(path)).await {
            Ok(analysis) => log::info!(
                "{}: {} ({:.0}% confidence), workflow '{}'",
                path.display(),
                analysis.domain,
                analysis.confidence * 100.0,
                analysis.recommended_workflow
            ),
            Err(err) => log::error!("{err:#}"),
        }
        print_report(&studio)?;
    }
    Ok(())
}
