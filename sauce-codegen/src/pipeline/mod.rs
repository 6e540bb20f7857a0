//! Regeneration pipeline.
//!
//! A [`Pipeline`] runs the phases of one regeneration over a run-scoped
//! [`RunContext`]:
//!
//! - Explicit phase boundaries (generate → extract → render → write)
//! - Collaborators injected as trait objects, so tests swap in fakes
//! - Non-fatal findings collected as [`Diagnostic`]s
//!
//! # Example
//!
//! ```ignore
//! use xosauce_codegen::pipeline::{Pipeline, RunOptions};
//!
//! let pipeline = Pipeline::from_config(&config);
//! let ctx = pipeline.run(config, RunOptions::new(dsn, out_dir))?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{diag}");
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::{ExtractedUnit, RunContext, RunOptions};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
