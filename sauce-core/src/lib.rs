//! Core utilities and types for the xo-sauce regenerator.
//!
//! This crate provides fundamental types shared by the extractor, the
//! renderer and the writer: the two-tier output split, the output file
//! layout and the naming helpers.

mod kind;
mod layout;
mod utils;

// Output tiers and template identities
pub use kind::{EditableKind, TemplateKind};
// File layout
pub use layout::OutputLayout;
// String utilities
pub use utils::{first_word_len, to_lower_camel, unit_stem};
