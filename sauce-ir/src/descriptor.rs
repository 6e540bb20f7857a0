//! Record, function and field descriptors.

use serde::{Deserialize, Serialize};

/// Nil-equivalent sentinel for pointer and slice kinds.
pub const NIL: &str = "nil";

/// A typed field: a record member, a function parameter or a result.
///
/// If `is_array` or `is_ptr` is set, `nil_type` is non-empty. The
/// constructors below are the only way the extractor builds nilable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name, possibly empty.
    #[serde(default)]
    pub name: String,
    /// Base type expression, possibly package-qualified (`pkg.Type`).
    #[serde(rename = "type", default)]
    pub ty: String,
    /// Sentinel used when the field's value is nilable.
    #[serde(default)]
    pub nil_type: String,
    #[serde(default)]
    pub is_array: bool,
    #[serde(default)]
    pub is_ptr: bool,
}

impl FieldDescriptor {
    /// A plain named field of type `ty`.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            ..Self::default()
        }
    }

    /// An unnamed `*ty`.
    pub fn pointer(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            nil_type: NIL.to_string(),
            is_ptr: true,
            ..Self::default()
        }
    }

    /// An unnamed `[]*ty` (or `[]ty` when `elem_is_ptr` is false).
    pub fn slice(ty: impl Into<String>, elem_is_ptr: bool) -> Self {
        Self {
            ty: ty.into(),
            nil_type: NIL.to_string(),
            is_array: true,
            is_ptr: elem_is_ptr,
            ..Self::default()
        }
    }

    /// Set the field name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns true if the field's zero value is `nil_type`.
    pub fn is_nilable(&self) -> bool {
        self.is_array || self.is_ptr
    }
}

/// One top-level record-shaped declaration found in a source unit.
///
/// The extractor only establishes identity; `fields` is left for later
/// enrichment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDescriptor {
    pub package: String,
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl RecordDescriptor {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
            fields: Vec::new(),
        }
    }
}

/// One top-level function with no bound receiver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDescriptor {
    pub package: String,
    pub name: String,
    #[serde(default)]
    pub params: Vec<FieldDescriptor>,
    /// The last result whose shape was recognized, if any.
    #[serde(rename = "return", default)]
    pub ret: Option<FieldDescriptor>,
}

impl FunctionDescriptor {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
            params: Vec::new(),
            ret: None,
        }
    }

    /// Append a parameter.
    pub fn param(mut self, field: FieldDescriptor) -> Self {
        self.params.push(field);
        self
    }

    /// Set the recognized return.
    pub fn returns(mut self, field: FieldDescriptor) -> Self {
        self.ret = Some(field);
        self
    }
}
