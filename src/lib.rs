//! Career coach library: résumé skill extraction, job role matching and cover letters

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use error::{CareerCoachError, Result};
pub use config::Config;
