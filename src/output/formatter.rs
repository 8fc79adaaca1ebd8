//! Output formatters for résumé reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{ResumeReport, RoleInsight};
use crate::processing::catalog::Skill;
use colored::{Color, Colorize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Trait for formatting résumé reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ResumeReport) -> Result<String>;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    show_recommendations: bool,
}

/// JSON formatter for structured output
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports
pub struct MarkdownFormatter {
    include_metadata: bool,
    show_recommendations: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn join_or(skills: &BTreeSet<Skill>, empty: &str) -> String {
    if skills.is_empty() {
        empty.to_string()
    } else {
        skills.iter().map(Skill::as_str).collect::<Vec<_>>().join(", ")
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, show_recommendations: bool) -> Self {
        Self {
            use_colors,
            show_recommendations,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, percent: f64) -> String {
        let (badge, color) = match percent {
            p if p >= 80.0 => ("STRONG", Color::Green),
            p if p >= 60.0 => ("GOOD", Color::BrightGreen),
            p if p >= 40.0 => ("PARTIAL", Color::Yellow),
            _ => ("WEAK", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_role(&self, rank: usize, insight: &RoleInsight) -> String {
        let result = &insight.result;
        let mut output = String::new();

        output.push_str(&format!(
            "{}. 🎯 Suggested Role: {}\n",
            rank,
            self.colorize(&result.role_name, Color::Cyan)
        ));
        output.push_str(&format!(
            "   ✅ Match %: {}% {}\n",
            result.match_percent,
            self.format_score_badge(result.match_percent)
        ));
        output.push_str(&format!(
            "   ✔️  Matched Skills: {}\n",
            self.colorize(&join_or(&result.matched_skills, "-"), Color::Green)
        ));
        output.push_str(&format!(
            "   ❌ Missing Skills: {}\n",
            self.colorize(&join_or(&result.missing_skills, "-"), Color::Red)
        ));

        if self.show_recommendations {
            output.push_str("   🎓 Learning Recommendations:\n");
            for line in insight.recommendations.lines() {
                output.push_str(&format!("      {}\n", line));
            }
        }

        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ResumeReport) -> Result<String> {
        let mut output = String::new();
        let record = &report.record;

        output.push_str(&self.format_header(&format!("📄 Resume: {}", record.source_name), 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));

        output.push_str(&self.format_header("Resume Insights", 2));
        output.push_str(&format!("📧 Email: {}\n", record.email));
        output.push_str(&format!("📱 Phone: {}\n", record.phone));
        output.push_str(&format!(
            "💼 Skills: {}\n",
            join_or(&record.extracted_skills, "None found")
        ));

        output.push_str(&self.format_header("Top Role Matches", 2));
        for (i, insight) in report.top_roles.iter().enumerate() {
            output.push_str(&self.format_role(i + 1, insight));
            output.push('\n');
        }

        output.push_str(&format!(
            "{} Matched against {} roles ({} known skills)\n",
            self.colorize("ℹ️", Color::Blue),
            report.metadata.catalog_roles,
            report.metadata.vocabulary_size
        ));

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ResumeReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool, show_recommendations: bool) -> Self {
        Self {
            include_metadata,
            show_recommendations,
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ResumeReport) -> Result<String> {
        let record = &report.record;
        let mut output = String::new();

        output.push_str(&format!("# Resume Analysis: {}\n\n", record.source_name));

        output.push_str("## Resume Insights\n\n");
        output.push_str(&format!("- **Email:** {}\n", record.email));
        output.push_str(&format!("- **Phone:** {}\n", record.phone));
        output.push_str(&format!(
            "- **Skills:** {}\n\n",
            join_or(&record.extracted_skills, "None found")
        ));

        output.push_str("## Top Role Matches\n\n");
        for insight in &report.top_roles {
            let result = &insight.result;
            output.push_str(&format!("### {} ({}%)\n\n", result.role_name, result.match_percent));
            output.push_str(&format!(
                "- **Matched Skills:** {}\n",
                join_or(&result.matched_skills, "-")
            ));
            output.push_str(&format!(
                "- **Missing Skills:** {}\n\n",
                join_or(&result.missing_skills, "-")
            ));

            if self.show_recommendations {
                output.push_str("**Learning Recommendations**\n\n");
                output.push_str(&insight.recommendations);
                output.push_str("\n\n");
            }
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated {} by career-coach v{} against {} roles ({} skills).*\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.version,
                report.metadata.catalog_roles,
                report.metadata.vocabulary_size
            ));
        }

        Ok(output)
    }
}

impl ReportGenerator {
    pub fn with_options(
        use_colors: bool,
        show_recommendations: bool,
        pretty_json: bool,
        include_metadata: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, show_recommendations),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata, show_recommendations),
        }
    }

    pub fn generate_report(&self, report: &ResumeReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    match format {
        OutputFormat::Console => format!("{}_analysis.txt", base_name),
        OutputFormat::Json => format!("{}_analysis.json", base_name),
        OutputFormat::Markdown => format!("{}_analysis.md", base_name),
    }
}

/// Where `--save` writes a report; a directory gets a name derived from the résumé
pub fn report_destination(save: &Path, format: &OutputFormat, resume_name: &str) -> PathBuf {
    if save.is_dir() {
        save.join(suggest_filename(format, resume_name))
    } else {
        save.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::report::ReportMetadata;
    use crate::processing::catalog::parse_skill_list;
    use crate::processing::extractor::{ResumeRecord, NOT_FOUND};
    use crate::processing::matcher::MatchResult;
    use crate::processing::recommendations::recommend;

    fn report() -> ResumeReport {
        let missing = parse_skill_list("tableau");
        ResumeReport {
            record: ResumeRecord {
                source_name: "asha.pdf".to_string(),
                email: "asha@example.com".to_string(),
                phone: NOT_FOUND.to_string(),
                extracted_skills: parse_skill_list("python;sql"),
            },
            top_roles: vec![RoleInsight {
                recommendations: recommend(&missing),
                result: MatchResult {
                    role_name: "Data Analyst".to_string(),
                    match_percent: 66.67,
                    matched_skills: parse_skill_list("python;sql"),
                    missing_skills: missing,
                },
            }],
            metadata: ReportMetadata::new(4, 12, 3),
        }
    }

    #[test]
    fn test_console_without_colors() {
        let output = ConsoleFormatter::new(false, true).format_report(&report()).unwrap();
        assert!(output.contains("📧 Email: asha@example.com"));
        assert!(output.contains("📱 Phone: Not found"));
        assert!(output.contains("💼 Skills: python, sql"));
        assert!(output.contains("Suggested Role: Data Analyst"));
        assert!(output.contains("Match %: 66.67% [GOOD]"));
        assert!(output.contains("Learn Tableau"));
    }

    #[test]
    fn test_console_hides_recommendations() {
        let output = ConsoleFormatter::new(false, false).format_report(&report()).unwrap();
        assert!(!output.contains("Learn Tableau"));
    }

    #[test]
    fn test_json_round_trip() {
        let json = JsonFormatter::new(false).format_report(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["record"]["email"], "asha@example.com");
        assert_eq!(value["top_roles"][0]["result"]["match_percent"], 66.67);
        assert_eq!(value["top_roles"][0]["result"]["missing_skills"][0], "tableau");
    }

    #[test]
    fn test_markdown() {
        let output = MarkdownFormatter::new(true, true).format_report(&report()).unwrap();
        assert!(output.starts_with("# Resume Analysis: asha.pdf"));
        assert!(output.contains("### Data Analyst (66.67%)"));
        assert!(output.contains("career-coach v"));
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::with_options(false, true, true, false);
        let json = generator.generate_report(&report(), &OutputFormat::Json).unwrap();
        assert!(json.trim_start().starts_with('{'));
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(suggest_filename(&OutputFormat::Json, "cv/asha.pdf"), "asha_analysis.json");
        assert_eq!(suggest_filename(&OutputFormat::Markdown, "asha.pdf"), "asha_analysis.md");
    }

    #[test]
    fn test_report_destination() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            report_destination(dir.path(), &OutputFormat::Json, "asha.pdf"),
            dir.path().join("asha_analysis.json")
        );

        let file = dir.path().join("report.md");
        assert_eq!(report_destination(&file, &OutputFormat::Markdown, "asha.pdf"), file);
    }
}
