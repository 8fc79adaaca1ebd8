//! Job role catalog loading and the skill vocabulary

use crate::error::{CareerCoachError, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::io::Read;
use std::path::Path;

pub const ROLE_COLUMN: &str = "Job Role";
pub const SKILLS_COLUMN: &str = "Required Skills";

/// Separator between skills inside the "Required Skills" field
const SKILL_SEPARATOR: char = ';';

/// A normalized skill token: trimmed and lower-cased, never empty
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Skill(String);

impl Skill {
    /// Normalize a raw token, returning `None` for blank input
    pub fn normalize(raw: &str) -> Option<Self> {
        let token = raw.trim().to_lowercase();
        if token.is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Skill {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Split a `;`-separated skills field into a normalized set
pub fn parse_skill_list(field: &str) -> BTreeSet<Skill> {
    field.split(SKILL_SEPARATOR).filter_map(Skill::normalize).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRole {
    pub name: String,
    pub required_skills: BTreeSet<Skill>,
}

impl JobRole {
    pub fn new(name: impl Into<String>, required_skills: BTreeSet<Skill>) -> Self {
        Self {
            name: name.into(),
            required_skills,
        }
    }
}

/// Immutable set of job roles plus the vocabulary of every skill they require.
///
/// Built once at startup and handed to the extractor and matcher.
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    roles: Vec<JobRole>,
    vocabulary: BTreeSet<Skill>,
}

impl RoleCatalog {
    /// Build a catalog from already-parsed roles. Roles without required
    /// skills are dropped.
    pub fn new(roles: Vec<JobRole>) -> Self {
        let roles: Vec<JobRole> = roles
            .into_iter()
            .filter(|role| !role.required_skills.is_empty())
            .collect();

        let vocabulary = roles
            .iter()
            .flat_map(|role| role.required_skills.iter().cloned())
            .collect();

        Self { roles, vocabulary }
    }

    /// Load a catalog file; a missing or unreadable file is an `Io` error
    pub fn from_path(path: &Path, delimiter: u8) -> Result<Self> {
        info!("Loading role catalog from {}", path.display());
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, delimiter)
    }

    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(csv::Trim::Headers)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let role_idx = Self::column_index(&headers, ROLE_COLUMN)?;
        let skills_idx = Self::column_index(&headers, SKILLS_COLUMN)?;

        let mut roles = Vec::new();
        let mut skipped = 0usize;

        for record in csv_reader.records() {
            let record = record?;
            let name = record.get(role_idx).unwrap_or_default().trim().to_string();
            let required_skills = record
                .get(skills_idx)
                .map(parse_skill_list)
                .unwrap_or_default();

            if required_skills.is_empty() {
                debug!("Skipping role '{}' with no required skills", name);
                skipped += 1;
                continue;
            }

            roles.push(JobRole::new(name, required_skills));
        }

        if skipped > 0 {
            warn!("Skipped {} catalog row(s) with blank required skills", skipped);
        }

        if roles.is_empty() {
            return Err(CareerCoachError::Configuration(
                "Role catalog contains no roles with required skills".to_string(),
            ));
        }

        let catalog = Self::new(roles);
        info!(
            "Loaded {} roles with a vocabulary of {} skills",
            catalog.len(),
            catalog.vocabulary.len()
        );
        Ok(catalog)
    }

    fn column_index(headers: &csv::StringRecord, column: &str) -> Result<usize> {
        headers.iter().position(|h| h == column).ok_or_else(|| {
            CareerCoachError::Configuration(format!(
                "'{}' column not found in role catalog (found: {}). Check the delimiter and the header name.",
                column,
                headers.iter().collect::<Vec<_>>().join(" | ")
            ))
        })
    }

    pub fn roles(&self) -> &[JobRole] {
        &self.roles
    }

    pub fn vocabulary(&self) -> &BTreeSet<Skill> {
        &self.vocabulary
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Case-insensitive lookup by role name
    pub fn find(&self, name: &str) -> Option<&JobRole> {
        let wanted = name.trim().to_lowercase();
        self.roles.iter().find(|role| role.name.to_lowercase() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = "\
Job Role,Required Skills
Data Analyst,Python; SQL ;Excel
Web Developer,html;css;javascript
Placeholder,
Backend Engineer,python;sql;docker
";

    fn skill(s: &str) -> Skill {
        Skill::normalize(s).unwrap()
    }

    #[test]
    fn test_skill_normalization() {
        assert_eq!(skill("  Python ").as_str(), "python");
        assert!(Skill::normalize("   ").is_none());
        assert_eq!(
            parse_skill_list("a;;B; c ;"),
            [skill("a"), skill("b"), skill("c")].into_iter().collect()
        );
    }

    #[test]
    fn test_load_catalog_skips_blank_rows() {
        let catalog = RoleCatalog::from_reader(CATALOG.as_bytes(), b',').unwrap();

        let names: Vec<&str> = catalog.roles().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Data Analyst", "Web Developer", "Backend Engineer"]);

        let analyst = catalog.find("data analyst").unwrap();
        assert!(analyst.required_skills.contains(&skill("sql")));
        assert!(analyst.required_skills.contains(&skill("excel")));
    }

    #[test]
    fn test_vocabulary_is_deduplicated() {
        let catalog = RoleCatalog::from_reader(CATALOG.as_bytes(), b',').unwrap();
        let vocab: Vec<&str> = catalog.vocabulary().iter().map(Skill::as_str).collect();
        assert_eq!(
            vocab,
            vec!["css", "docker", "excel", "html", "javascript", "python", "sql"]
        );
    }

    #[test]
    fn test_headers_are_trimmed() {
        let data = " Job Role , Required Skills \nTester,selenium\n";
        let catalog = RoleCatalog::from_reader(data.as_bytes(), b',').unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_missing_column_is_configuration_error() {
        let data = "Job Role,Skills\nTester,selenium\n";
        let result = RoleCatalog::from_reader(data.as_bytes(), b',');
        match result {
            Err(CareerCoachError::Configuration(msg)) => assert!(msg.contains("Required Skills")),
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_catalog_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = RoleCatalog::from_path(&dir.path().join("roles.csv"), b',');
        assert!(matches!(result, Err(CareerCoachError::Io(_))));
    }

    #[test]
    fn test_tab_delimited_catalog() {
        let data = "Job Role\tRequired Skills\nAnalyst\tsql;excel\n";
        assert!(RoleCatalog::from_reader(data.as_bytes(), b',').is_err());

        let catalog = RoleCatalog::from_reader(data.as_bytes(), b'\t').unwrap();
        assert_eq!(catalog.vocabulary().len(), 2);
    }

    #[test]
    fn test_catalog_without_usable_roles() {
        let data = "Job Role,Required Skills\nEmpty, ; \n";
        assert!(matches!(
            RoleCatalog::from_reader(data.as_bytes(), b','),
            Err(CareerCoachError::Configuration(_))
        ));
    }

    #[test]
    fn test_new_drops_roles_without_skills() {
        let catalog = RoleCatalog::new(vec![
            JobRole::new("Empty", BTreeSet::new()),
            JobRole::new("Analyst", parse_skill_list("sql")),
        ]);
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
    }
}
