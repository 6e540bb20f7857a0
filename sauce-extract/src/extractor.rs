//! Dialect-independent extraction contract.

use std::path::Path;

use xosauce_ir::{FunctionDescriptor, RecordDescriptor};

use crate::{Result, SourceUnit};

/// Extracts descriptors from one source unit of a given dialect.
///
/// Implementations must not leak their parser library through this
/// contract: a unit goes in, descriptors and shape warnings come out, or
/// the unit is rejected with a fatal [`crate::Error`].
pub trait StructuralExtractor: Send + Sync {
    /// Dialect identifier (e.g., "go")
    fn dialect(&self) -> &'static str;

    /// File extension of units in this dialect, without the dot.
    fn file_extension(&self) -> &'static str;

    /// Whether a file in the generator output is a unit of this dialect.
    fn accepts(&self, path: &Path) -> bool {
        path.extension().and_then(|e| e.to_str()) == Some(self.file_extension())
    }

    /// Extract every record and function descriptor of `unit`.
    fn extract(&self, unit: &SourceUnit) -> Result<UnitDescriptors>;
}

/// A value produced alongside non-fatal shape diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted<T> {
    pub value: T,
    pub warnings: Vec<ShapeWarning>,
}

impl<T> Extracted<T> {
    pub fn new(value: T, warnings: Vec<ShapeWarning>) -> Self {
        Self { value, warnings }
    }

    /// Drop the warnings.
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Everything extracted from one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitDescriptors {
    /// Declared package of the unit.
    pub package: String,
    pub records: Vec<RecordDescriptor>,
    pub functions: Vec<FunctionDescriptor>,
    pub warnings: Vec<ShapeWarning>,
}

/// Where an unrecognized type shape was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeRole {
    Param,
    Result,
}

impl std::fmt::Display for ShapeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeRole::Param => write!(f, "parameter"),
            ShapeRole::Result => write!(f, "result"),
        }
    }
}

/// A type expression the extractor could not map onto a descriptor.
///
/// The offending parameter or result is left out of the descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeWarning {
    /// Unit file name.
    pub file: String,
    /// 1-based line of the type expression.
    pub line: usize,
    /// Function the shape belongs to.
    pub function: String,
    pub role: ShapeRole,
    /// Verbatim source of the type expression.
    pub shape: String,
}

impl std::fmt::Display for ShapeWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}: ignored {} of unrecognized shape `{}`",
            self.file, self.line, self.function, self.role, self.shape
        )
    }
}
