mod commands;
mod config;
mod replay;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::config::{ConfigError, SceneConfig};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("projection rejected: {0}")]
    Projection(#[from] optics::scene::ProjectionError),
    #[error("replay line {line}: {source}")]
    Replay {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[derive(Parser, Debug)]
#[command(name = "pinhole", about = "Pinhole camera projection tool")]
struct Cli {
    /// Pretty-print JSON output.
    #[arg(long, global = true, env = "PINHOLE_PRETTY")]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project one point through the pinhole.
    Project {
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Rays, projected flag and screen image for a source origin.
    Trace {
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        /// Fail if any anchor sits at or past the pinhole.
        #[arg(long)]
        strict: bool,
    },
    /// Draw the scene as SVG.
    Render {
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        /// Write to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Magnification as the source walks toward the pinhole.
    Sweep {
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        #[arg(long, allow_hyphen_values = true)]
        from: f64,
        #[arg(long, allow_hyphen_values = true)]
        to: f64,
        #[arg(long, default_value_t = 10)]
        steps: u32,
    },
    /// Replay a JSON-lines pointer script.
    Drag {
        #[arg(long)]
        path: PathBuf,
    },
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let scene = SceneConfig::from_env()?.scene;

    match cli.command {
        Command::Project { x, y } => print_json(&commands::project(&scene, x, y), cli.pretty),
        Command::Trace { x, y, strict } => print_json(&commands::trace(&scene, x, y, strict)?, cli.pretty),
        Command::Render { x, y, out } => {
            let svg = commands::render(&scene, x, y);
            match out {
                Some(path) => {
                    std::fs::write(&path, svg)?;
                    tracing::info!(path = %path.display(), "wrote svg");
                }
                None => println!("{svg}"),
            }
            Ok(())
        }
        Command::Sweep { y, from, to, steps } => {
            for row in commands::sweep(&scene, y, from, to, steps)? {
                print_json(&row, false)?;
            }
            Ok(())
        }
        Command::Drag { path } => {
            let events = replay::read_events(BufReader::new(File::open(&path)?))?;
            print_json(&commands::drag(&scene, &events), cli.pretty)
        }
    }
}

fn print_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    let rendered = if pretty { serde_json::to_string_pretty(value)? } else { serde_json::to_string(value)? };
    println!("{rendered}");
    Ok(())
}
