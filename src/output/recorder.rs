//! Append-only results table (one CSV row per processed résumé)

use crate::error::{CareerCoachError, Result};
use crate::output::report::ResumeReport;
use crate::processing::catalog::Skill;
use crate::processing::extractor::ResumeRecord;
use crate::processing::matcher::MatchResult;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub const RESULT_COLUMNS: [&str; 7] = [
    "Resume",
    "Email",
    "Phone",
    "Top Role",
    "Match %",
    "Matched Skills",
    "Missing Skills",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    #[serde(rename = "Resume")]
    pub resume: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Top Role")]
    pub top_role: String,
    #[serde(rename = "Match %")]
    pub match_percent: f64,
    #[serde(rename = "Matched Skills")]
    pub matched_skills: String,
    #[serde(rename = "Missing Skills")]
    pub missing_skills: String,
}

impl ResultRow {
    pub fn new(record: &ResumeRecord, top: &MatchResult) -> Self {
        Self {
            resume: record.source_name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            top_role: top.role_name.clone(),
            match_percent: top.match_percent,
            matched_skills: join_skills(&top.matched_skills),
            missing_skills: join_skills(&top.missing_skills),
        }
    }

    /// Row for a report, `None` if no role was ranked
    pub fn from_report(report: &ResumeReport) -> Option<Self> {
        report.top_match().map(|top| Self::new(&report.record, top))
    }
}

fn join_skills(skills: &BTreeSet<Skill>) -> String {
    skills.iter().map(Skill::as_str).collect::<Vec<_>>().join(", ")
}

/// Persists result rows by rewriting the whole table on every append.
///
/// Concurrent writers can lose rows; the tool processes one résumé at a time.
pub struct ResultRecorder {
    path: PathBuf,
}

impl ResultRecorder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every existing row; a missing or empty file has none
    pub fn read_rows(&self) -> Result<Vec<ResultRow>> {
        if !self.path.exists() || std::fs::metadata(&self.path)?.len() == 0 {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let headers = reader.headers()?.clone();
        if !headers.iter().eq(RESULT_COLUMNS.iter().copied()) {
            return Err(CareerCoachError::Record(format!(
                "'{}' has unexpected columns: {}",
                self.path.display(),
                headers.iter().collect::<Vec<_>>().join(", ")
            )));
        }

        let rows = reader
            .deserialize()
            .collect::<std::result::Result<Vec<ResultRow>, csv::Error>>()?;
        Ok(rows)
    }

    /// Append one row, creating the table with a header when absent
    pub fn append(&self, row: ResultRow) -> Result<()> {
        let mut rows = self.read_rows()?;
        rows.push(row);
        debug!("Writing {} result row(s) to {}", rows.len(), self.path.display());
        self.write_rows(&rows)?;
        if let Some(last) = rows.last() {
            info!("Recorded result for {}", last.resume);
        }
        Ok(())
    }

    fn write_rows(&self, rows: &[ResultRow]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
            }
        }

        let mut writer = csv::Writer::from_path(&self.path).map_err(|e| self.write_error(e))?;
        for row in rows {
            writer.serialize(row).map_err(|e| self.write_error(e))?;
        }
        writer.flush().map_err(|e| self.write_error(e))?;
        Ok(())
    }

    fn write_error(&self, err: impl std::fmt::Display) -> CareerCoachError {
        CareerCoachError::Record(format!(
            "Cannot write to '{}': {}. Please close it if it's open and try again.",
            self.path.display(),
            err
        ))
    }
}
