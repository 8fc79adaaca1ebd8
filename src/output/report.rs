//! Report structures produced by the analysis engine

use crate::processing::extractor::ResumeRecord;
use crate::processing::matcher::MatchResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything shown to the user for one résumé
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeReport {
    /// Contact details and skills found in the résumé
    pub record: ResumeRecord,

    /// Best-ranked roles, truncated to the display count
    pub top_roles: Vec<RoleInsight>,

    pub metadata: ReportMetadata,
}

/// A ranked role together with its learning suggestions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleInsight {
    pub result: MatchResult,
    pub recommendations: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub catalog_roles: usize,
    pub vocabulary_size: usize,
    pub processing_time_ms: u64,
    pub version: String,
}

impl ReportMetadata {
    pub fn new(catalog_roles: usize, vocabulary_size: usize, processing_time_ms: u64) -> Self {
        Self {
            generated_at: Utc::now(),
            catalog_roles,
            vocabulary_size,
            processing_time_ms,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl ResumeReport {
    pub fn top_match(&self) -> Option<&MatchResult> {
        self.top_roles.first().map(|insight| &insight.result)
    }

    pub fn source_name(&self) -> &str {
        &self.record.source_name
    }
}
