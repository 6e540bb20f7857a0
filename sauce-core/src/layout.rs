use std::path::{Path, PathBuf};

use crate::EditableKind;

/// Maps a segment's logical name and tier onto a physical file.
///
/// Physical filename is `lowercase(name) + suffix(kind)`, always directly
/// under a single output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    dir: PathBuf,
    editable_suffix: String,
    generated_suffix: String,
}

impl OutputLayout {
    /// Create a layout rooted at `dir` with the given suffix table.
    pub fn new(
        dir: impl Into<PathBuf>,
        editable_suffix: impl Into<String>,
        generated_suffix: impl Into<String>,
    ) -> Self {
        Self {
            dir: dir.into(),
            editable_suffix: editable_suffix.into(),
            generated_suffix: generated_suffix.into(),
        }
    }

    /// Layout with the conventional Go suffixes (`.go` / `.generated.go`).
    pub fn go(dir: impl Into<PathBuf>) -> Self {
        Self::new(dir, ".go", ".generated.go")
    }

    /// Get the output directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Filename suffix for a tier
    pub fn suffix(&self, kind: EditableKind) -> &str {
        match kind {
            EditableKind::Editable => &self.editable_suffix,
            EditableKind::Generated => &self.generated_suffix,
        }
    }

    /// Physical file name for a logical name.
    pub fn file_name(&self, name: &str, kind: EditableKind) -> String {
        format!("{}{}", name.to_lowercase(), self.suffix(kind))
    }

    /// Full target path for a logical name.
    pub fn path(&self, name: &str, kind: EditableKind) -> PathBuf {
        self.dir.join(self.file_name(name, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_lowercases_and_suffixes() {
        let layout = OutputLayout::go("/out");
        assert_eq!(layout.file_name("User", EditableKind::Editable), "user.go");
        assert_eq!(
            layout.file_name("AuthorBook", EditableKind::Generated),
            "authorbook.generated.go"
        );
    }

    #[test]
    fn test_path_joins_output_dir() {
        let layout = OutputLayout::new("/out/models", ".go", ".gen.go");
        assert_eq!(
            layout.path("user", EditableKind::Generated),
            PathBuf::from("/out/models/user.gen.go")
        );
    }

    #[test]
    fn test_tiers_never_collide() {
        let layout = OutputLayout::go("out");
        assert_ne!(
            layout.path("user", EditableKind::Editable),
            layout.path("user", EditableKind::Generated)
        );
    }
}
