//! Command-line interface implementation

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use encoderize::{Encoding, batch, load_config};

/// Draw text as binary, Morse, semaphore, braille, barcode and other SVG encodings
#[derive(Parser)]
#[command(name = "encoderize")]
#[command(about = "Draw text as binary, Morse, semaphore, braille, barcode and other SVG encodings")]
#[command(version)]
pub struct Cli {
    /// Text to encode. Prompted for on stdin when omitted.
    pub text: Option<String>,

    /// Config file. Defaults to the nearest encoderize.toml, if any.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory in which output_<text>/ is created (overrides the config file)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

/// Ask for one line of text on stdin.
fn prompt(message: &str) -> anyhow::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{message}")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read text from stdin")?;
    Ok(line)
}

fn generate(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(out_dir) = cli.out_dir {
        config.output.root = out_dir;
    }

    let text = match cli.text {
        Some(text) => text,
        None => prompt("Enter text to encode: ")?,
    };
    let text = text.trim();
    tracing::info!("encoding {text:?} into {}", config.output.root.display());

    println!("Generating SVGs...");
    let report = batch::render_all_with(text, &config, |theme| {
        println!("Generating {theme} mode SVGs...");
    })?;
    tracing::info!("{} files in {}", report.files.len(), report.base.display());

    println!(
        "All SVGs generated in light & dark folders. {} SVGs generated for {text}",
        Encoding::ALL.len()
    );
    Ok(())
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match generate(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
