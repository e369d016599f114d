//! objmesh - Inspect Wavefront OBJ files
//!
//! Reads an OBJ file, loads it as a triangulated mesh and prints a summary
//! or the full mesh as JSON.

mod report;
mod settings;

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

use settings::{OutputFormat, Settings};

#[derive(Debug, Parser)]
#[command(name = "objmesh", version, about = "Load an OBJ file and describe the mesh")]
struct Cli {
    /// OBJ file to load
    file: PathBuf,

    /// Print the mesh as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Also print every parsed line record, comments included
    #[arg(long)]
    records: bool,

    /// Refuse files larger than this many bytes
    #[arg(long, value_name = "N")]
    max_bytes: Option<u64>,

    /// Raise log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Step the base level up once per `-v`
fn log_level(base: &str, verbose: u8) -> Level {
    const LEVELS: [Level; 5] = [
        Level::ERROR,
        Level::WARN,
        Level::INFO,
        Level::DEBUG,
        Level::TRACE,
    ];
    let base = base.parse::<Level>().unwrap_or(Level::INFO);
    let start = LEVELS.iter().position(|l| *l == base).unwrap_or(2);
    LEVELS[(start + verbose as usize).min(LEVELS.len() - 1)]
}

fn init_logging(level: Level) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set subscriber")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load();
    init_logging(log_level(&settings.log_level, cli.verbose))?;
    debug!("Settings: {:?}", settings);

    let max_bytes = cli.max_bytes.unwrap_or(settings.max_input_bytes);
    let size = fs::metadata(&cli.file)
        .with_context(|| format!("Failed to stat {}", cli.file.display()))?
        .len();
    if size > max_bytes {
        bail!(
            "{} is {} bytes, larger than the {} byte limit",
            cli.file.display(),
            size,
            max_bytes
        );
    }

    let name = cli.file.display().to_string();
    let bytes = fs::read(&cli.file)
        .with_context(|| format!("Failed to read {}", name))?;
    info!("Loading {} ({} bytes)", name, bytes.len());

    let records = objmesh_obj::parse_records(&bytes)
        .with_context(|| format!("Failed to parse {}", name))?;
    if cli.records {
        print!("{}", report::records(&records));
    }
    let mesh = objmesh_obj::assemble(&records);

    let output = if cli.json {
        OutputFormat::Json
    } else {
        settings.output
    };
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&mesh)?),
        OutputFormat::Summary => print!("{}", report::summary(&name, &mesh)),
    }

    Ok(())
}
