//! Configuration for the xo-sauce regenerator.
//!
//! Settings live in an optional `sauce.toml`. Every table and key has a
//! default, so an empty file (or no file at all) yields a usable [`Config`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;
mod validate;

pub use config::{Config, ExtractConfig, FormatterConfig, GeneratorConfig, OutputConfig};
pub use error::{Error, Result, SourceContext};
pub use file::{DEFAULT_CONFIG_FILE, SauceToml};
