//! Reports, formatters, the results table and cover letters

pub mod report;
pub mod formatter;
pub mod recorder;
pub mod cover_letter;
