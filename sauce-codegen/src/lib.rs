//! Rendering and deterministic writing for the xo-sauce regenerator.
//!
//! Takes the descriptors extracted from generated source units and turns
//! them into wrapper files, each built from many segments.
//!
//! # Module Organization
//!
//! - [`format`] - Pure token formatting over field lists
//! - [`template`] - Named templates and their helpers ([`TemplateSet`])
//! - [`multiplexer`] - Run-scoped registry of open output files
//! - [`writer`] - Sorted, whitespace-aware segment writing
//! - [`collaborator`] - External generator and formatter
//! - [`pipeline`] - Phases of one regeneration run
//! - [`testing`] - Fake collaborators (feature-gated)

mod error;

pub mod collaborator;
pub mod format;
pub mod multiplexer;
pub mod pipeline;
pub mod segment;
pub mod template;
pub mod writer;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use collaborator::{ExternalFormatter, ExternalGenerator, SourceFormatter, SourceGenerator};
pub use error::RunError;
pub use format::{format_nil_equivalent, format_param_list, format_return_list, format_type};
pub use multiplexer::FileMultiplexer;
pub use pipeline::{Pipeline, RunContext, RunOptions};
pub use segment::Segment;
pub use template::{HeaderContext, TemplateSet};
pub use writer::{WriteSummary, write_all};
