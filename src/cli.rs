//! CLI interface for the career coach

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "career-coach")]
#[command(about = "Match resumes against job roles and generate cover letters")]
#[command(long_about = "Extract contact details and skills from PDF resumes, rank job roles by skill overlap, suggest courses for missing skills and generate templated cover letters")]
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
    /// Analyze a single resume
    Analyze {
        /// Path to resume file (PDF or TXT)
        #[arg(short, long)]
        resume: PathBuf,

        /// Role catalog CSV (overrides config)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Results table CSV (overrides config)
        #[arg(long)]
        results: Option<PathBuf>,

        /// Number of role matches to show
        #[arg(short, long)]
        top: Option<usize>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to a file, or into a folder under a name derived from the resume
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Do not append the result to the results table
        #[arg(long)]
        no_record: bool,
    },

    /// Analyze every PDF resume in a folder
    Batch {
        /// Folder containing PDF resumes
        #[arg(short, long)]
        dir: PathBuf,

        /// Role catalog CSV (overrides config)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Results table CSV (overrides config)
        #[arg(long)]
        results: Option<PathBuf>,

        /// Number of role matches to show per resume
        #[arg(short, long)]
        top: Option<usize>,

        /// Do not append results to the results table
        #[arg(long)]
        no_record: bool,
    },

    /// Generate a cover letter
    CoverLetter {
        /// Company name
        #[arg(long)]
        company: Option<String>,

        /// Your name
        #[arg(long)]
        name: Option<String>,

        /// Target role
        #[arg(long)]
        role: Option<String>,

        /// Top skills (comma-separated)
        #[arg(long)]
        skills: Option<String>,

        /// Where to write the letter (overrides config)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Print the letter instead of only saving it
        #[arg(short, long)]
        print: bool,
    },

    /// List the job roles in the catalog
    Roles {
        /// Role catalog CSV (overrides config)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Show the required skills of each role
        #[arg(short, long)]
        skills: bool,
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

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("md").unwrap(), OutputFormat::Markdown);
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("cv.PDF"), &["pdf", "txt"]).is_ok());
        assert!(validate_file_extension(Path::new("cv.docx"), &["pdf", "txt"]).is_err());
        assert!(validate_file_extension(Path::new("cv"), &["pdf"]).is_err());
    }

    #[test]
    fn test_cli_parses_analyze() {
        let cli = Cli::parse_from(["career-coach", "analyze", "--resume", "cv.pdf", "--top", "3", "--no-record"]);
        match cli.command {
            Commands::Analyze { resume, top, no_record, .. } => {
                assert_eq!(resume, PathBuf::from("cv.pdf"));
                assert_eq!(top, Some(3));
                assert!(no_record);
            }
            _ => panic!("expected analyze"),
        }
    }
}
