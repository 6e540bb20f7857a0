//! Structural descriptor extraction.
//!
//! Turns one already-generated source unit into record and function
//! descriptors. Extraction is keyed by the dialect of the generated source
//! through [`StructuralExtractor`]; [`GoExtractor`] is the implementation
//! for the Go sources `xo` emits.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod extractor;
mod go;
mod unit;

pub use error::{Error, Result};
pub use extractor::{Extracted, ShapeRole, ShapeWarning, StructuralExtractor, UnitDescriptors};
pub use go::{DEFAULT_MARKER_TYPES, GoExtractor};
pub use unit::SourceUnit;
