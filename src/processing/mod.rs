//! Résumé processing: role catalog, extraction, matching and recommendations

pub mod catalog;
pub mod extractor;
pub mod matcher;
pub mod recommendations;
pub mod analyzer;
