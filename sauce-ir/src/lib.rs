//! Structural descriptor types for the xo-sauce regenerator.
//!
//! Descriptors are the structural facts reconstructed from source that an
//! external generator already emitted. They are independent of that
//! generator's internal model and are the only input the templates see.
//!
//! # Architecture
//!
//! ```text
//! generated source → sauce-extract (descriptors) → sauce-codegen (segments) → files
//! ```

mod descriptor;

pub use descriptor::{FieldDescriptor, FunctionDescriptor, NIL, RecordDescriptor};
