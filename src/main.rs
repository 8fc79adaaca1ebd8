//! Career coach: résumé skill extraction, job role matching and cover letters

use career_coach::cli::{self, Cli, Commands, ConfigAction};
use career_coach::config::{Config, OutputFormat};
use career_coach::error::{CareerCoachError, Result};
use career_coach::input::manager::{collect_pdfs, source_name, InputManager};
use career_coach::output::cover_letter::{save_cover_letter, CoverLetterRequest};
use career_coach::output::formatter::{report_destination, save_report_to_file, ReportGenerator};
use career_coach::output::recorder::{ResultRecorder, ResultRow};
use career_coach::output::report::ResumeReport;
use career_coach::processing::analyzer::AnalysisEngine;
use career_coach::processing::catalog::{RoleCatalog, Skill};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config, cli.verbose).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(
    command: Commands,
    config: Config,
    config_path: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            catalog,
            results,
            top,
            output,
            save,
            no_record,
        } => {
            cli::validate_file_extension(&resume, &["pdf", "txt"])
                .map_err(|e| CareerCoachError::InvalidInput(format!("Resume file: {}", e)))?;

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(CareerCoachError::InvalidInput)?,
                None => config.output.format.clone(),
            };

            // The catalog must be valid before any résumé is read
            let catalog = load_catalog(&config, catalog.as_deref())?;
            let engine = AnalysisEngine::new(&catalog, top.unwrap_or(config.output.top_matches))?;

            info!("Analyzing {}", resume.display());
            let mut input_manager = InputManager::new();
            let text = input_manager.extract_text(&resume).await?;
            let report = engine.analyze(&source_name(&resume), &text);

            let generator = ReportGenerator::with_options(
                config.output.color_output && save.is_none(),
                config.output.show_recommendations,
                true,
                true,
            );
            let rendered = generator.generate_report(&report, &output_format)?;

            match &save {
                Some(save) => {
                    let path = report_destination(save, &output_format, &report.record.source_name);
                    save_report_to_file(&rendered, &path)?;
                    println!("💾 Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }

            if config.results.enabled && !no_record {
                let recorder = ResultRecorder::new(results.unwrap_or_else(|| config.results.path.clone()));
                record_report(&recorder, &report)?;
                println!("✅ Your resume analysis has been saved to {}", recorder.path().display());
            }
        }

        Commands::Batch {
            dir,
            catalog,
            results,
            top,
            no_record,
        } => {
            let catalog = load_catalog(&config, catalog.as_deref())?;
            let engine = AnalysisEngine::new(&catalog, top.unwrap_or(config.output.top_matches))?;
            let recorder = (config.results.enabled && !no_record)
                .then(|| ResultRecorder::new(results.unwrap_or_else(|| config.results.path.clone())));

            let resumes = collect_pdfs(&dir)?;
            if resumes.is_empty() {
                println!("⚠️  No PDF resumes found in {}", dir.display());
                return Ok(());
            }

            println!("📂 Processing {} resume(s) from {}", resumes.len(), dir.display());

            let progress = if verbose {
                ProgressBar::hidden()
            } else {
                ProgressBar::new(resumes.len() as u64)
            };
            progress.set_style(
                ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );

            let generator = ReportGenerator::with_options(
                config.output.color_output,
                config.output.show_recommendations,
                true,
                false,
            );
            let mut input_manager = InputManager::new().with_cache(false);
            let mut processed = 0usize;
            let mut failed = 0usize;
            let mut record_failures = 0usize;

            for path in &resumes {
                let name = source_name(path);
                progress.set_message(name.clone());

                let text = match input_manager.extract_text(path).await {
                    Ok(text) => text,
                    Err(e) => {
                        warn!("Skipping {}: {}", name, e);
                        progress.suspend(|| println!("❌ {}: {}", name, e));
                        failed += 1;
                        progress.inc(1);
                        continue;
                    }
                };

                let report = engine.analyze(&name, &text);
                let rendered = generator.generate_report(&report, &OutputFormat::Console)?;
                progress.suspend(|| println!("{}", rendered));

                if let Some(recorder) = &recorder {
                    if let Err(e) = record_report(recorder, &report) {
                        progress.suspend(|| println!("❌ {}", e));
                        record_failures += 1;
                    }
                }

                processed += 1;
                progress.inc(1);
            }
            progress.finish_and_clear();

            println!("✅ Processed {} resume(s), {} failed", processed, failed);
            if let Some(recorder) = &recorder {
                if record_failures > 0 {
                    return Err(CareerCoachError::Record(format!(
                        "{} result(s) could not be written to {}",
                        record_failures,
                        recorder.path().display()
                    )));
                }
                println!("✅ All resume results saved to: {}", recorder.path().display());
            }
        }

        Commands::CoverLetter {
            company,
            name,
            role,
            skills,
            out,
            print,
        } => {
            let request = CoverLetterRequest {
                company,
                name,
                role,
                skills,
            };
            let letter = request.render()?;

            if print {
                println!("{}\n", letter);
            }

            let path = out.unwrap_or_else(|| config.cover_letter.output_path.clone());
            save_cover_letter(&letter, &path)?;
            println!("⬇  Cover letter saved to {}", path.display());
            println!("✏️  This is a sample cover letter. Edit it before sending.");
        }

        Commands::Roles { catalog, skills } => {
            let catalog = load_catalog(&config, catalog.as_deref())?;

            println!("📚 {} job roles, {} known skills\n", catalog.len(), catalog.vocabulary().len());
            for role in catalog.roles() {
                println!("  • {} ({} skills)", role.name, role.required_skills.len());
                if skills {
                    let list: Vec<&str> = role.required_skills.iter().map(Skill::as_str).collect();
                    println!("    {}", list.join(", "));
                }
            }
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration\n");
                    println!("Role Catalog: {} (delimiter {:?})", config.catalog.path.display(), config.catalog.delimiter);
                    println!(
                        "Results Table: {} ({})",
                        config.results.path.display(),
                        if config.results.enabled { "enabled" } else { "disabled" }
                    );
                    println!("Output Format: {:?}", config.output.format);
                    println!("Top Matches: {}", config.output.top_matches);
                    println!("Recommendations: {}", config.output.show_recommendations);
                    println!("Cover Letter: {}", config.cover_letter.output_path.display());
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(&path)?;
                    println!("✅ Configuration reset successfully!");
                }
            }
        }
    }

    Ok(())
}

fn load_catalog(config: &Config, override_path: Option<&Path>) -> Result<RoleCatalog> {
    let path = override_path.unwrap_or(config.catalog.path.as_path());
    RoleCatalog::from_path(path, config.catalog_delimiter())
}

/// Append the report's top match; the report has already been shown
fn record_report(recorder: &ResultRecorder, report: &ResumeReport) -> Result<()> {
    match ResultRow::from_report(report) {
        Some(row) => recorder.append(row),
        None => {
            warn!("No role ranked for {}, nothing recorded", report.source_name());
            Ok(())
        }
    }
}
