//! Analysis engine: extraction, role ranking and recommendations for one résumé

use crate::error::Result;
use crate::output::report::{ReportMetadata, ResumeReport, RoleInsight};
use crate::processing::catalog::RoleCatalog;
use crate::processing::extractor::ResumeExtractor;
use crate::processing::matcher::RoleMatcher;
use crate::processing::recommendations::recommend;
use log::{debug, info};
use std::time::Instant;

pub struct AnalysisEngine<'a> {
    catalog: &'a RoleCatalog,
    extractor: ResumeExtractor,
    matcher: RoleMatcher<'a>,
    top_n: usize,
}

impl<'a> AnalysisEngine<'a> {
    pub fn new(catalog: &'a RoleCatalog, top_n: usize) -> Result<Self> {
        Ok(Self {
            catalog,
            extractor: ResumeExtractor::new(catalog)?,
            matcher: RoleMatcher::new(catalog),
            top_n: top_n.max(1),
        })
    }

    /// Analyze lower-cased résumé text
    pub fn analyze(&self, source_name: &str, text: &str) -> ResumeReport {
        let start = Instant::now();

        let record = self.extractor.extract(source_name, text);
        debug!(
            "{}: email={}, phone={}, {} skills",
            source_name,
            record.email,
            record.phone,
            record.extracted_skills.len()
        );

        let ranked = self.matcher.rank(&record.extracted_skills);
        let top_roles: Vec<RoleInsight> = ranked
            .into_iter()
            .take(self.top_n)
            .map(|result| RoleInsight {
                recommendations: recommend(&result.missing_skills),
                result,
            })
            .collect();

        if let Some(best) = top_roles.first() {
            info!(
                "{}: best match {} ({:.2}%)",
                source_name, best.result.role_name, best.result.match_percent
            );
        }

        ResumeReport {
            record,
            top_roles,
            metadata: ReportMetadata::new(
                self.catalog.len(),
                self.catalog.vocabulary().len(),
                start.elapsed().as_millis() as u64,
            ),
        }
    }
}
