//! Resume interviewer: conversational resume builder

use clap::Parser;
use colored::Colorize;
use log::{error, info, warn};
use resume_interviewer::cli::{self, Cli, Commands, ConfigAction, SlashCommand};
use resume_interviewer::config::{Config, OutputFormat};
use resume_interviewer::input::InputManager;
use resume_interviewer::interview::{plan_opening, InterviewEngine, Response, SeedSource};
use resume_interviewer::model::ResumeData;
use resume_interviewer::output::formatter::{format_for_path, save_to_file, suggest_filename};
use resume_interviewer::output::{ExportGenerator, ThinkingDelay};
use resume_interviewer::processing::parse_resume_text;
use resume_interviewer::{InterviewError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Interview {
            resume,
            seed,
            no_delay,
            save,
            output,
        } => {
            let format = resolve_format(output.as_deref(), save.as_deref(), config.output.format)?;

            let mut interview_config = config.interview.clone();
            if seed.is_some() {
                interview_config.seed = seed;
            }

            let (seed_data, source) = match &resume {
                Some(path) => {
                    println!("📄 Reading resume: {}", path.display());
                    load_seed(path, &config).await?
                }
                None => (ResumeData::default(), SeedSource::Scratch),
            };

            let opening = plan_opening(&seed_data, source);
            let mut engine = InterviewEngine::start(interview_config, seed_data, opening);
            let delay = if no_delay {
                ThinkingDelay::disabled()
            } else {
                ThinkingDelay::from_config(&config.pacing)
            };

            run_interview(&mut engine, &delay, &config, save.as_deref(), format).await?;
        }

        Commands::Parse { resume, output, save } => {
            let format = resolve_format(output.as_deref(), save.as_deref(), config.output.format)?;

            println!("📄 Resume: {}", resume.display());
            let (seed_data, source) = load_seed(&resume, &config).await?;
            if source == SeedSource::Unreadable {
                println!("⚠️  No readable text could be extracted");
            }

            match save {
                Some(path) => {
                    export_resume(&seed_data, &path, format)?;
                    println!("✅ Saved to {}", path.display());
                }
                None => print_resume(&seed_data, format, &config)?,
            }
        }

        Commands::Export { data, output, save } => {
            let format = resolve_format(output.as_deref(), Some(save.as_path()), config.output.format)?;

            info!("Loading resume data from {}", data.display());
            let content = tokio::fs::read_to_string(&data).await?;
            let resume: ResumeData = serde_json::from_str(&content)?;

            export_resume(&resume, &save, format)?;
            println!("✅ Exported {:?} to {}", format, save.display());
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Config File: {}", Config::config_path().display());
                println!("\nInterview:");
                println!("  Max Questions: {}", config.interview.max_questions);
                println!("  Min Achievements: {}", config.interview.min_achievements);
                println!("  Vagueness Policy: {:?}", config.interview.vagueness);
                println!("  Max Answer Length: {} chars", config.interview.max_answer_chars);
                match config.interview.seed {
                    Some(seed) => println!("  Seed: {}", seed),
                    None => println!("  Seed: random"),
                }
                println!("\nPacing:");
                println!("  Enabled: {}", config.pacing.enabled);
                println!(
                    "  Delay: {}-{}ms",
                    config.pacing.min_delay_ms, config.pacing.max_delay_ms
                );
                println!("\nInput:");
                println!(
                    "  Max Upload: {:.1} MB",
                    config.input.max_upload_bytes as f64 / (1024.0 * 1024.0)
                );
                println!("  Min Readable Ratio: {:.0}%", config.input.min_clean_ratio * 100.0);
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Colors: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save()?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Path) => {
                println!("{}", Config::config_path().display());
            }
        },
    }

    Ok(())
}

/// Extract and parse a resume file into seed data
async fn load_seed(path: &Path, config: &Config) -> Result<(ResumeData, SeedSource)> {
    cli::validate_file_extension(path, &["pdf", "txt", "md"])
        .map_err(|e| InterviewError::InvalidUpload(format!("Resume file: {}", e)))?;

    let mut input_manager = InputManager::from_config(&config.input);
    let text = input_manager.extract_text(path).await?;

    if text.is_empty() {
        warn!("No usable text in {}, starting from scratch", path.display());
        return Ok((ResumeData::default(), SeedSource::Unreadable));
    }

    info!("Extracted {} characters from resume", text.len());
    Ok((parse_resume_text(&text), SeedSource::Extracted))
}

async fn run_interview(
    engine: &mut InterviewEngine,
    delay: &ThinkingDelay,
    config: &Config,
    save: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    println!("🚀 Resume interview");
    println!("💡 Commands: /preview, /restart, /reset, /export FILE, /quit\n");
    if let Some(prompt) = engine.current_prompt() {
        println!("🤖 {}\n", prompt);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut saved = false;

    loop {
        print!("{} ", "you>".cyan().bold());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        if let Some(command) = SlashCommand::parse(&line) {
            match command {
                SlashCommand::Preview => print_resume(engine.resume(), OutputFormat::Console, config)?,
                SlashCommand::Restart => {
                    engine.reset_interview();
                    announce_prompt(engine);
                }
                SlashCommand::Reset => {
                    engine.reset_all();
                    saved = false;
                    announce_prompt(engine);
                }
                SlashCommand::Export(path) => {
                    let path = match path.or_else(|| save.map(Path::to_path_buf)) {
                        Some(path) => path,
                        None => PathBuf::from(suggest_filename(format, &engine.resume().contact.name, false)),
                    };
                    let export_format = format_for_path(&path).unwrap_or(format);
                    match export_resume(engine.resume(), &path, export_format) {
                        Ok(()) => println!("✅ Saved to {}\n", path.display()),
                        Err(e) => println!("❌ Export failed: {}\n", e),
                    }
                }
                SlashCommand::Quit => break,
                SlashCommand::Help => {
                    println!("💡 Commands: /preview, /restart, /reset, /export FILE, /quit\n");
                }
                SlashCommand::Unknown(name) => {
                    println!("⚠️  Unknown command '/{}'. Try /help\n", name);
                }
            }
            continue;
        }

        if line.trim().is_empty() {
            continue;
        }

        delay.wait().await;
        let response = engine.respond(&line);
        print_reply(&response);

        if response.is_complete {
            if let Some(path) = save {
                export_resume(engine.resume(), path, format)?;
                saved = true;
                println!("✅ Resume saved to {}", path.display());
            }
            println!("💡 Use /preview to review it, /export FILE to save a copy, or /quit to leave.\n");
        }
    }

    if let Some(path) = save {
        if !saved && engine.resume().has_content() {
            export_resume(engine.resume(), path, format)?;
            println!("✅ Resume saved to {}", path.display());
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

fn announce_prompt(engine: &InterviewEngine) {
    if let Some(prompt) = engine.current_prompt() {
        println!("\n🤖 {}\n", prompt);
    }
}

fn print_reply(response: &Response) {
    println!("\n🤖 {}", response.content);
    if let Some(hint) = &response.hint {
        println!("💡 {}", hint.dimmed());
    }
    println!();
}

fn print_resume(resume: &ResumeData, format: OutputFormat, config: &Config) -> Result<()> {
    if format == OutputFormat::Pdf {
        return Err(InterviewError::InvalidInput(
            "PDF output needs a destination; pass --save FILE".to_string(),
        ));
    }
    let generator = ExportGenerator::with_options(config.output.color_output, true, true);
    println!("{}", generator.generate_text(resume, format)?);
    Ok(())
}

fn export_resume(resume: &ResumeData, path: &Path, format: OutputFormat) -> Result<()> {
    // No ANSI colors in files
    let generator = ExportGenerator::with_options(false, true, true);
    let content = generator.generate(resume, format)?;
    save_to_file(&content, path)?;
    info!("Wrote {:?} export to {}", format, path.display());
    Ok(())
}

/// Explicit `--output`, then the save path's extension, then the configured default
fn resolve_format(output: Option<&str>, save: Option<&Path>, default: OutputFormat) -> Result<OutputFormat> {
    if let Some(output) = output {
        return cli::parse_output_format(output).map_err(InterviewError::InvalidInput);
    }
    Ok(save.and_then(format_for_path).unwrap_or(default))
}
