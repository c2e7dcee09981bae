//! Application wiring
//!
//! # Module Structure
//!
//! - `config`: raw configuration types
//! - `loader`: layered loading (embedded defaults, files, environment)
//! - `validation`: startup checks producing typed component settings
//! - `run`: normal and dry-run entry points

mod config;
mod loader;
mod run;
mod validation;

pub use run::run;
