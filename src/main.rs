use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use chordsheet::{
    extract_chords_with_options, extract_title_with_options, render_highlighted, transpose_text,
    EngineConfig, Song,
};

/// Extract, title and transpose chord sheets from pasted song text
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// YAML engine configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the chord-only skeleton of a song
    Extract {
        /// Input file, or `-` for stdin
        input: PathBuf,
    },
    /// Print the detected song title
    Title { input: PathBuf },
    /// Shift every chord by a number of semitones
    Transpose {
        input: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        by: i32,
    },
    /// Mark up chords for display
    Highlight {
        input: PathBuf,
        /// Emit spans as JSON instead of `*chord*` markup
        #[arg(long)]
        json: bool,
    },
    /// Build a song from pasted text and print it as YAML
    Song {
        input: PathBuf,
        /// Override the detected title
        #[arg(long)]
        title: Option<String>,
        /// Transpose the extracted chords before printing
        #[arg(long, allow_hyphen_values = true)]
        transpose: Option<i32>,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "chordsheet=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("Error reading stdin")?;
        return Ok(source);
    }
    fs::read_to_string(path).with_context(|| format!("Error reading file '{}'", path.display()))
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    debug!(?config, "engine configuration");

    match args.command {
        Command::Extract { input } => {
            let source = read_input(&input)?;
            println!("{}", extract_chords_with_options(&source, &config));
        }
        Command::Title { input } => {
            let source = read_input(&input)?;
            println!("{}", extract_title_with_options(&source, &config));
        }
        Command::Transpose { input, by } => {
            let source = read_input(&input)?;
            println!("{}", transpose_text(&source, by));
        }
        Command::Highlight { input, json } => {
            let source = read_input(&input)?;
            let lines = render_highlighted(&source);
            if json {
                println!("{}", serde_json::to_string_pretty(&lines)?);
            } else {
                for spans in &lines {
                    let marked: String = spans
                        .iter()
                        .map(|span| {
                            if span.is_chord {
                                format!("*{}*", span.text)
                            } else {
                                span.text.to_string()
                            }
                        })
                        .collect();
                    println!("{}", marked);
                }
            }
        }
        Command::Song {
            input,
            title,
            transpose,
        } => {
            let source = read_input(&input)?;
            let mut song = Song::from_source_with_options(&source, &config);
            if let Some(title) = title {
                song = song.with_title(title);
            }
            if let Some(semitones) = transpose {
                song.transpose(semitones);
            }
            song.validate()?;
            print!("{}", serde_yaml::to_string(&song)?);
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
