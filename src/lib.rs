// DMR ID exporter library
// Re-export modules for use in main.rs

pub mod cli;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod reference;
pub mod registry;
pub mod selection;
pub mod touchup;
