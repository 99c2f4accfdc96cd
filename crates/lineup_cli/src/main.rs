//! Lineup CLI
//!
//! Roster JSON → ordered roster / pitch coordinates, for checking what the
//! match center will draw without running the site.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lineup_core::{PitchTransform, SCHEMA_VERSION};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "lineup")]
#[command(about = "Order and place starting elevens on a pitch diagram", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a roster in backend order
    Order {
        /// Roster JSON file (player array or object with `players`)
        #[arg(long)]
        r#in: PathBuf,

        /// Write the response here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Place one team on the pitch
    Place {
        /// Roster JSON file (player array or object with `players`)
        #[arg(long)]
        r#in: PathBuf,

        /// Team attacks downward
        #[arg(long, default_value = "false")]
        invert_y: bool,

        /// Swap left and right lanes
        #[arg(long, default_value = "false")]
        mirror_x: bool,

        /// Write the response here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Place both teams on one match-center pitch
    Match {
        /// Home roster JSON file
        #[arg(long)]
        home: PathBuf,

        /// Away roster JSON file
        #[arg(long)]
        away: PathBuf,

        /// Home defends the top goal
        #[arg(long, default_value = "false")]
        flipped: bool,

        /// Write the response here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Order { r#in, out } => {
            let request = json!({
                "schema_version": SCHEMA_VERSION,
                "players": read_roster(&r#in)?,
            });
            let response = lineup_core::order_lineup_json(&request.to_string())?;
            emit(&response, out.as_deref())?;
        }

        Commands::Place { r#in, invert_y, mirror_x, out } => {
            let transform = if invert_y || mirror_x {
                PitchTransform::new(invert_y, mirror_x)
            } else {
                PitchTransform::from_env_or_default()
            };
            let request = json!({
                "schema_version": SCHEMA_VERSION,
                "players": read_roster(&r#in)?,
                "invert_y": transform.invert_y,
                "mirror_x": transform.mirror_x,
            });
            let response = lineup_core::place_lineup_json(&request.to_string())?;
            emit(&response, out.as_deref())?;
        }

        Commands::Match { home, away, flipped, out } => {
            let request = json!({
                "schema_version": SCHEMA_VERSION,
                "home": { "players": read_roster(&home)? },
                "away": { "players": read_roster(&away)? },
                "flipped": flipped,
            });
            let response = lineup_core::place_match_json(&request.to_string())?;
            emit(&response, out.as_deref())?;
        }
    }

    Ok(())
}

/// Reads a roster file: either a bare player array or `{"players": [...]}`.
fn read_roster(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file: {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse roster JSON: {}", path.display()))?;

    match value {
        Value::Array(_) => Ok(value),
        Value::Object(mut map) => match map.remove("players") {
            Some(players @ Value::Array(_)) => Ok(players),
            _ => anyhow::bail!("{}: expected a `players` array", path.display()),
        },
        _ => anyhow::bail!("{}: expected a player array or an object with `players`", path.display()),
    }
}

fn emit(response: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            let value: Value = serde_json::from_str(response)?;
            let pretty = serde_json::to_string_pretty(&value)?;
            fs::write(path, pretty)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            println!("✅ Layout written to: {}", path.display());
        }
        None => println!("{}", response),
    }
    Ok(())
}
