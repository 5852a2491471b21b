//! CLI interface for the resume interviewer

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-interviewer")]
#[command(about = "Conversational resume builder")]
#[command(long_about = "Build a resume by answering a short interview, optionally seeded from an existing PDF, then export it as Markdown, JSON, HTML or PDF")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive interview
    Interview {
        /// Existing resume to seed the interview with (PDF, TXT, MD)
        #[arg(short, long)]
        resume: Option<PathBuf>,

        /// Seed for question and pushback selection
        #[arg(long)]
        seed: Option<u64>,

        /// Reply immediately instead of pausing to "think"
        #[arg(long)]
        no_delay: bool,

        /// Save the finished resume to this file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Output format: console, json, markdown, html, pdf
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show what would be extracted from an existing resume
    Parse {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Output format: console, json, markdown, html, pdf
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Render resume data saved as JSON
    Export {
        /// Resume data file produced by a JSON export
        #[arg(short, long)]
        data: PathBuf,

        /// Output format; inferred from the save path when omitted
        #[arg(short, long)]
        output: Option<String>,

        /// Destination file
        #[arg(short, long)]
        save: PathBuf,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" | "text" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        "pdf" => Ok(OutputFormat::Pdf),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html, pdf",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

/// A line typed during the interview that is not an answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Preview,
    Restart,
    Reset,
    Export(Option<PathBuf>),
    Quit,
    Help,
    Unknown(String),
}

impl SlashCommand {
    /// `None` when the line is an ordinary answer
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let rest = line.strip_prefix('/')?;
        let mut parts = rest.splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or("").to_lowercase();
        let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

        Some(match name.as_str() {
            "preview" | "p" => SlashCommand::Preview,
            "restart" => SlashCommand::Restart,
            "reset" => SlashCommand::Reset,
            "export" | "save" => SlashCommand::Export(arg.map(PathBuf::from)),
            "quit" | "exit" | "q" => SlashCommand::Quit,
            "help" | "?" => SlashCommand::Help,
            _ => SlashCommand::Unknown(name),
        })
    }
}
