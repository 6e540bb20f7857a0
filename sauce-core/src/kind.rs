//! Output tiers and template identities.

use serde::Serialize;

/// Which tier of the two-tier layout a segment belongs to.
///
/// The derived ordering is part of the writer's sort key: editable
/// segments are committed before generated ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EditableKind {
    /// Hand-editable wrapper file. Truncated and rewritten on every run.
    Editable,
    /// Fully machine-owned body file.
    Generated,
}

impl EditableKind {
    /// Name of the header template injected when a file of this kind is created.
    pub fn header_template(&self) -> &'static str {
        match self {
            EditableKind::Editable => "xosauce_package_editable",
            EditableKind::Generated => "xosauce_package_generated",
        }
    }

    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            EditableKind::Editable => "editable",
            EditableKind::Generated => "generated",
        }
    }
}

impl std::fmt::Display for EditableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named per-descriptor templates.
///
/// The order here alters the output order within a shared file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    /// Renders one record descriptor.
    Struct,
    /// Renders one function descriptor.
    Func,
}

impl TemplateKind {
    /// Registered template name.
    pub fn name(&self) -> &'static str {
        match self {
            TemplateKind::Struct => "xosauce_struct",
            TemplateKind::Func => "xosauce_func",
        }
    }

    /// The tier a segment rendered by this template is written to.
    pub fn editable_kind(&self) -> EditableKind {
        match self {
            TemplateKind::Struct => EditableKind::Editable,
            TemplateKind::Func => EditableKind::Generated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editable_sorts_before_generated() {
        let mut kinds = vec![EditableKind::Generated, EditableKind::Editable];
        kinds.sort();
        assert_eq!(kinds, vec![EditableKind::Editable, EditableKind::Generated]);
    }

    #[test]
    fn test_header_templates_are_distinct() {
        assert_ne!(
            EditableKind::Editable.header_template(),
            EditableKind::Generated.header_template()
        );
    }

    #[test]
    fn test_template_kind_tiers() {
        assert_eq!(TemplateKind::Struct.editable_kind(), EditableKind::Editable);
        assert_eq!(TemplateKind::Func.editable_kind(), EditableKind::Generated);
        assert_eq!(TemplateKind::Func.name(), "xosauce_func");
    }
}
