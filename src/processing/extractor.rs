//! Contact and skill extraction from résumé text

use crate::error::{CareerCoachError, Result};
use crate::processing::catalog::{RoleCatalog, Skill};
use log::debug;
use regex::{Regex, RegexSet, RegexSetBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Placeholder for an email or phone number that could not be found
pub const NOT_FOUND: &str = "Not found";

const EMAIL_PATTERN: &str = r"\b\S+@\S+\b";
const PHONE_PATTERN: &str = r"(\+91)?[\s\-]?[6-9]\d{9}";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub source_name: String,
    pub email: String,
    pub phone: String,
    pub extracted_skills: BTreeSet<Skill>,
}

/// Single-pass whole-word scanner over a skill vocabulary
pub struct SkillScanner {
    skills: Vec<Skill>,
    patterns: RegexSet,
}

impl SkillScanner {
    pub fn new<'a, I>(vocabulary: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Skill>,
    {
        let skills: Vec<Skill> = vocabulary.into_iter().cloned().collect();
        let patterns = RegexSetBuilder::new(
            skills
                .iter()
                .map(|skill| format!(r"\b{}\b", regex::escape(skill.as_str()))),
        )
        .case_insensitive(true)
        .build()
        .map_err(|e| CareerCoachError::Processing(format!("Failed to build skill scanner: {}", e)))?;

        Ok(Self { skills, patterns })
    }

    /// Every vocabulary skill that occurs in `text` as a whole word
    pub fn scan(&self, text: &str) -> BTreeSet<Skill> {
        self.patterns
            .matches(text)
            .into_iter()
            .map(|idx| self.skills[idx].clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

/// Extracts a [`ResumeRecord`] from lower-cased résumé text
pub struct ResumeExtractor {
    email_regex: Regex,
    phone_regex: Regex,
    scanner: SkillScanner,
}

impl ResumeExtractor {
    pub fn new(catalog: &RoleCatalog) -> Result<Self> {
        Self::with_vocabulary(catalog.vocabulary())
    }

    pub fn with_vocabulary<'a, I>(vocabulary: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Skill>,
    {
        let scanner = SkillScanner::new(vocabulary)?;
        debug!("Skill scanner built over {} skills", scanner.len());

        Ok(Self {
            email_regex: Regex::new(EMAIL_PATTERN).expect("Invalid email regex"),
            phone_regex: Regex::new(PHONE_PATTERN).expect("Invalid phone regex"),
            scanner,
        })
    }

    pub fn extract(&self, source_name: &str, text: &str) -> ResumeRecord {
        ResumeRecord {
            source_name: source_name.to_string(),
            email: self.extract_email(text),
            phone: self.extract_phone(text),
            extracted_skills: self.extract_skills(text),
        }
    }

    /// First `something@something` token, or [`NOT_FOUND`]
    pub fn extract_email(&self, text: &str) -> String {
        self.email_regex
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| NOT_FOUND.to_string())
    }

    /// First Indian mobile number (optional +91 prefix), or [`NOT_FOUND`]
    pub fn extract_phone(&self, text: &str) -> String {
        self.phone_regex
            .find(text)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_else(|| NOT_FOUND.to_string())
    }

    pub fn extract_skills(&self, text: &str) -> BTreeSet<Skill> {
        self.scanner.scan(text)
    }
}

/// Free-standing skill extraction against an arbitrary vocabulary
pub fn extract_skills<'a, I>(text: &str, vocabulary: I) -> Result<BTreeSet<Skill>>
where
    I: IntoIterator<Item = &'a Skill>,
{
    Ok(SkillScanner::new(vocabulary)?.scan(text))
}
