//! xorpng CLI - XOR two PNG images or generate random noise PNGs.

use std::ffi::OsString;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::builder::OsStringValueParser;
use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use xorpng::{config, image, noise, xor, Config, Error, Mode};

const EXAMPLES: &str = "\
Examples:
  XOR two images:
    xorpng -i1 image1.png -i2 image2.png > result.png
  Generate multiple random noise images:
    xorpng -g 480 -n 5";

/// XOR two PNG images pixel by pixel, or generate random noise images.
#[derive(Parser, Debug)]
#[command(name = "xorpng")]
#[command(version, about, long_about = None, after_help = EXAMPLES)]
#[command(override_usage = "xorpng [-i1 <first.png> -i2 <second.png>] [-g size -n count] > output.png")]
struct Args {
    /// Path to first PNG image.
    #[arg(long = "i1", value_name = "FIRST", value_parser = OsStringValueParser::new())]
    first: Option<OsString>,

    /// Path to second PNG image.
    #[arg(long = "i2", value_name = "SECOND", value_parser = OsStringValueParser::new())]
    second: Option<OsString>,

    /// Generate random noise images with the specified size.
    #[arg(short = 'g', long = "size", alias = "g", default_value_t = 0, value_name = "SIZE")]
    size: u32,

    /// Number of random images to generate.
    #[arg(short = 'n', long = "count", alias = "n", default_value_t = 1, value_name = "COUNT")]
    count: u32,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            first: args.first.map(PathBuf::from).unwrap_or_default(),
            second: args.second.map(PathBuf::from).unwrap_or_default(),
            size: args.size,
            count: args.count,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse_from(config::normalize_args(std::env::args_os()));

    // Logs go to stderr; stdout carries PNG data or generated paths.
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("xorpng={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let mode = match Config::from(args).mode() {
        Ok(mode) => mode,
        Err(Error::Usage) => {
            if let Err(err) = Args::command().write_help(&mut io::stderr()) {
                tracing::warn!("Failed to print usage: {err}");
            }
            return ExitCode::FAILURE;
        }
        Err(err) => {
            tracing::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = run(mode) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(mode: Mode) -> Result<()> {
    match mode {
        Mode::Generate { size, count } => generate(size, count),
        Mode::Xor { first, second } => combine(&first, &second),
    }
}

fn generate(size: u32, count: u32) -> Result<()> {
    let dir = std::env::current_dir().context("Failed to resolve current directory")?;

    let pb = if count > 1 {
        let pb = ProgressBar::new(u64::from(count));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} Generating [{bar:40.cyan/blue}] {pos}/{len}")
                .expect("valid template")
                .progress_chars("#>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    noise::save_noise_batch(size, count, &dir, |path| {
        pb.suspend(|| println!("Generated: {}", path.display()));
        pb.inc(1);
    })
    .context("Failed to generate noise images")?;

    pb.finish_and_clear();
    Ok(())
}

fn combine(first: &Path, second: &Path) -> Result<()> {
    let stdout = io::stdout();
    image::ensure_not_terminal(stdout.is_terminal())?;

    let mut out = BufWriter::new(stdout.lock());
    xor::xor_files(first, second, &mut out).context("Failed to XOR images")?;
    out.flush().context("Failed to flush output")?;

    Ok(())
}
