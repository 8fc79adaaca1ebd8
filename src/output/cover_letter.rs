//! Templated cover letters

use crate::error::Result;
use askama::Template;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// User-supplied fields; anything absent renders as an empty string
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoverLetterRequest {
    pub company: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub skills: Option<String>,
}

#[derive(Template)]
#[template(source = r#"Dear Hiring Manager at {{ company }},

I am writing to express my keen interest in the position of {{ role }} at your esteemed organization. With a solid foundation in {{ skills }}, I bring a unique blend of technical skills and passion to every opportunity.

Throughout my academic and project experiences, I have demonstrated the ability to quickly adapt, collaborate effectively in teams, and apply problem-solving skills to real-world challenges.

Thank you for considering my application. I look forward to the opportunity to contribute to {{ company }} and grow together.

Sincerely,
{{ name }}"#, ext = "txt")]
struct CoverLetterTemplate<'a> {
    company: &'a str,
    name: &'a str,
    role: &'a str,
    skills: &'a str,
}

impl CoverLetterRequest {
    pub fn render(&self) -> Result<String> {
        let template = CoverLetterTemplate {
            company: field(&self.company),
            name: field(&self.name),
            role: field(&self.role),
            skills: field(&self.skills),
        };
        Ok(template.render()?)
    }
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().map(str::trim).unwrap_or_default()
}

pub fn save_cover_letter(letter: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, letter)?;
    info!("Cover letter written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CoverLetterRequest {
        CoverLetterRequest {
            company: Some("Acme Corp".to_string()),
            name: Some("Priya Sharma".to_string()),
            role: Some("Data Analyst".to_string()),
            skills: Some("Python, SQL, Teamwork".to_string()),
        }
    }

    #[test]
    fn test_render_substitutes_all_fields() {
        let letter = request().render().unwrap();

        assert!(letter.starts_with("Dear Hiring Manager at Acme Corp,"));
        assert!(letter.contains("position of Data Analyst"));
        assert!(letter.contains("foundation in Python, SQL, Teamwork"));
        assert!(letter.contains("contribute to Acme Corp and grow together"));
        assert!(letter.trim_end().ends_with("Priya Sharma"));
    }

    #[test]
    fn test_absent_fields_render_empty() {
        let letter = CoverLetterRequest::default().render().unwrap();
        assert!(letter.starts_with("Dear Hiring Manager at ,"));
        assert!(letter.contains("position of  at"));
    }

    #[test]
    fn test_no_html_escaping() {
        let mut req = request();
        req.company = Some("Smith & Sons <UK>".to_string());
        let letter = req.render().unwrap();
        assert!(letter.contains("Smith & Sons <UK>"));
    }

    #[test]
    fn test_save_cover_letter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("letters").join("cover_letter.txt");
        save_cover_letter("hello", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
    }
}
