//! Routes résumé files to the right extractor and caches their text

use crate::error::{CareerCoachError, Result};
use crate::input::text_extractor::{PdfExtractor, PlainTextExtractor, TextExtractor};
use anyhow::Context;
use log::{debug, info};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Résumé formats the coach can read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    PlainText,
}

impl ResumeFormat {
    /// Format implied by the file extension (case-insensitive)
    pub fn detect(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                CareerCoachError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Ok(ResumeFormat::Pdf),
            "txt" => Ok(ResumeFormat::PlainText),
            other => Err(CareerCoachError::UnsupportedFormat(format!(
                ".{} résumés are not supported ({})",
                other,
                path.display()
            ))),
        }
    }
}

pub struct InputManager {
    cache: HashMap<PathBuf, String>,
    use_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            use_cache: true,
        }
    }

    /// Batch runs read each file once, so they turn the cache off
    pub fn with_cache(mut self, enable: bool) -> Self {
        self.use_cache = enable;
        self
    }

    /// Lower-cased text of a résumé file
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        if let Some(text) = self.cached(path) {
            debug!("Cache hit for {}", path.display());
            return Ok(text.to_string());
        }

        if !path.is_file() {
            return Err(CareerCoachError::InvalidInput(format!(
                "Resume not found: {}",
                path.display()
            )));
        }

        let format = ResumeFormat::detect(path)?;
        info!("Reading {:?} resume {}", format, path.display());
        let text = match format {
            ResumeFormat::Pdf => PdfExtractor.extract(path).await?,
            ResumeFormat::PlainText => PlainTextExtractor.extract(path).await?,
        };

        if self.use_cache {
            self.cache.insert(path.to_path_buf(), text.clone());
        }
        Ok(text)
    }

    fn cached(&self, path: &Path) -> Option<&str> {
        if !self.use_cache {
            return None;
        }
        self.cache.get(path).map(String::as_str)
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

/// File name used to identify a résumé in reports and the results table
pub fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// PDF files directly inside `dir`, sorted by name
pub fn collect_pdfs(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read resume folder {}", dir.display()))?;

    let mut pdfs = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to list {}", dir.display()))?
            .path();
        if path.is_file() && matches!(ResumeFormat::detect(&path), Ok(ResumeFormat::Pdf)) {
            pdfs.push(path);
        }
    }

    pdfs.sort();
    Ok(pdfs)
}
