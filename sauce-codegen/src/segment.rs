//! Rendered segments.

use xosauce_core::{EditableKind, TemplateKind};

/// One rendered unit of output, destined for the file of `(name, kind)`.
///
/// Field order is the sort key: `(kind, name)` selects and orders files,
/// the remaining fields order segments that share a file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Segment {
    pub kind: EditableKind,
    /// Logical entity name, the stem of the target file.
    pub name: String,
    pub template: TemplateKind,
    /// Name of the descriptor this segment was rendered from.
    pub descriptor: String,
    pub content: String,
}

impl Segment {
    /// Segment rendered from `template`, tagged with the template's kind.
    pub fn new(
        name: impl Into<String>,
        template: TemplateKind,
        descriptor: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            kind: template.editable_kind(),
            name: name.into(),
            template,
            descriptor: descriptor.into(),
            content: content.into(),
        }
    }

    /// Whether the rendered content is whitespace only.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_follows_template() {
        let seg = Segment::new("user", TemplateKind::Struct, "User", "type User struct{}");
        assert_eq!(seg.kind, EditableKind::Editable);
        let seg = Segment::new("user", TemplateKind::Func, "GetUser", "func GetUser() {}");
        assert_eq!(seg.kind, EditableKind::Generated);
    }

    #[test]
    fn test_blank() {
        assert!(Segment::new("a", TemplateKind::Func, "F", " \n\t\n").is_blank());
        assert!(!Segment::new("a", TemplateKind::Func, "F", "\nx\n").is_blank());
    }

    #[test]
    fn test_order_is_kind_then_name() {
        let mut segs = vec![
            Segment::new("b", TemplateKind::Func, "F", "1"),
            Segment::new("b", TemplateKind::Struct, "B", "2"),
            Segment::new("a", TemplateKind::Func, "G", "3"),
            Segment::new("a", TemplateKind::Struct, "A", "4"),
        ];
        segs.sort();
        let order: Vec<_> = segs.iter().map(|s| s.content.as_str()).collect();
        assert_eq!(order, ["4", "2", "3", "1"]);
    }
}
