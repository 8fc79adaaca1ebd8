//! Résumé input: format detection and text extraction

pub mod manager;
pub mod text_extractor;
