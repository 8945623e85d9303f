pub mod config;
pub mod diagnostics;
pub mod report;
pub mod scoring;
