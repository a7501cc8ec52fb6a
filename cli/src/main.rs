//! cleanfile CLI - text file sanitization tool
//!
//! Removes invisible, control and non-ASCII characters, normalizes line
//! endings and optionally strips Markdown or HTML markup.

mod files;
mod report;

use clap::{ArgAction, Parser, ValueEnum};
use cleanfile::{clean, CleaningOptions, LineEnding, StripFormat};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;

/// Sanitize text files for clean, portable output
#[derive(Parser, Debug)]
#[command(
    name = "cleanfile",
    version,
    about = "Remove invisible and unwanted characters from text files",
    long_about = "cleanfile - text file sanitization tool.\n\n\
                  Removes zero-width, control and non-ASCII characters, converts\n\
                  line endings to a target OS and can strip Markdown or HTML.\n\n\
                  Usage:\n  \
                  cleanfile <file>                  Write <file>_cleaned next to the input\n  \
                  cleanfile <file> -o <output>      Write to a specific path\n  \
                  cleanfile <file> --strip markdown Strip Markdown formatting"
)]
struct Cli {
    /// Input file path
    input: PathBuf,

    /// Output file path (default: <name>_cleaned.<ext>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Remove non-ASCII characters
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    ascii: bool,

    /// Remove control characters (except newlines and tabs)
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    control: bool,

    /// Remove zero-width characters
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    zerowidth: bool,

    /// Remove a leading byte order mark
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    bom: bool,

    /// Normalize whitespace
    #[arg(long)]
    normalize: bool,

    /// Preserve newlines when normalizing
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    preserve_newlines: bool,

    /// Target OS for line endings
    #[arg(long, value_enum, default_value = "auto", ignore_case = true)]
    os: TargetOs,

    /// Strip formatting from the document
    #[arg(long, value_enum, ignore_case = true)]
    strip: Option<StripMode>,

    /// Create a backup of the original file (<input>.bak)
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    backup: bool,

    /// Show a detailed list of removed characters
    #[arg(long)]
    details: bool,

    /// Log per-line removals
    #[arg(short, long)]
    verbose: bool,

    /// Print statistics as JSON instead of the report
    #[arg(long)]
    json: bool,
}

/// Target line-ending convention
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum TargetOs {
    /// Platform default
    Auto,
    /// CRLF
    #[value(aliases = ["win", "dos", "crlf"])]
    Windows,
    /// LF
    #[value(aliases = ["linux", "mac", "macos", "darwin", "lf"])]
    Unix,
    /// CR
    #[value(aliases = ["macos9", "classic", "cr"])]
    Mac9,
}

impl From<TargetOs> for LineEnding {
    fn from(os: TargetOs) -> Self {
        match os {
            TargetOs::Auto => LineEnding::native(),
            TargetOs::Windows => LineEnding::Windows,
            TargetOs::Unix => LineEnding::Unix,
            TargetOs::Mac9 => LineEnding::Mac9,
        }
    }
}

/// Markup to strip
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum StripMode {
    /// Markdown syntax
    #[value(alias = "md")]
    Markdown,
    /// HTML tags and entities
    #[value(alias = "htm")]
    Html,
}

impl From<StripMode> for StripFormat {
    fn from(mode: StripMode) -> Self {
        match mode {
            StripMode::Markdown => StripFormat::Markdown,
            StripMode::Html => StripFormat::Html,
        }
    }
}

impl Cli {
    fn cleaning_options(&self) -> CleaningOptions {
        let mut options = CleaningOptions {
            remove_non_ascii: self.ascii,
            remove_control_chars: self.control,
            remove_zero_width: self.zerowidth,
            remove_bom: self.bom,
            normalize_whitespace: self.normalize,
            preserve_newlines: self.preserve_newlines,
            line_ending: self.os.into(),
            strip_format: None,
        };
        if let Some(mode) = self.strip {
            options = options.with_strip_format(mode.into());
        }
        options
    }
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "cleanfile=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.is_file() {
        return Err(format!("input file not found: {}", cli.input.display()).into());
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| files::default_output_path(&cli.input));

    if files::is_same_path(&cli.input, &output)? {
        return Err("output path must differ from the input path".into());
    }

    let options = cli.cleaning_options();
    log::debug!("options: {:?}", options);

    let pb = create_spinner("Cleaning file...");
    let result = cleanfile::read_text(&cli.input).and_then(|text| clean(&text, &options));
    pb.finish_and_clear();
    let cleaned = result?;

    if cli.backup {
        match files::create_backup(&cli.input) {
            Ok(path) => {
                if !cli.json {
                    println!("{} Backup created: {}", "✓".green().bold(), path.display());
                }
            }
            Err(e) => eprintln!(
                "{}: could not create backup: {}",
                "Warning".yellow().bold(),
                e
            ),
        }
    }

    fs::write(&output, &cleaned.text)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&cleaned.stats)?);
    } else {
        print!(
            "{}",
            report::render(
                &cli.input,
                &output,
                &cleaned.stats,
                options.line_ending,
                cli.details,
            )?
        );
    }

    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
