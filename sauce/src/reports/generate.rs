//! Generate command report data structures.

use std::path::PathBuf;

use xosauce_core::EditableKind;

use super::output::{Output, Report};

/// Report data from one regeneration run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Package of the wrapper files.
    pub package: String,
    /// Directory the generator wrote into.
    pub generator_dir: PathBuf,
    /// Number of source units read from it.
    pub units: usize,
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
    /// Generator output deleted by an exclusion pattern.
    pub pruned: Vec<PathBuf>,
    /// Files written, or the preview.
    pub result: GenerationResult,
}

#[derive(Debug)]
pub enum GenerationResult {
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Editable file names.
    pub editable: Vec<String>,
    /// Generated file names.
    pub generated: Vec<String>,
    /// Segments appended.
    pub segments: usize,
    /// Blank segments dropped.
    pub skipped: usize,
    /// Whether the formatter ran.
    pub formatted: bool,
}

#[derive(Debug)]
pub struct PreviewResult {
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode, without its header.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub kind: EditableKind,
    pub segments: usize,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Package", &self.package);
        out.key_value(
            "Generator output",
            &format!("{} ({} units)", self.generator_dir.display(), self.units),
        );
        self.render_pruned(out);

        for (label, files) in [
            ("Editable", &written.editable),
            ("Generated", &written.generated),
        ] {
            if files.is_empty() {
                continue;
            }
            out.newline();
            out.section(&format!("{} ({})", label, files.len()));
            for file in files {
                out.added_item(&format!("{}/{}", written.output_dir.display(), file));
            }
        }

        out.newline();
        out.key_value(
            "Segments",
            &format!("{} written, {} empty", written.segments, written.skipped),
        );
        if !written.formatted {
            out.key_value("Formatter", "not run");
        }
    }

    fn render_pruned(&self, out: &mut dyn Output) {
        if self.pruned.is_empty() {
            return;
        }
        out.newline();
        out.section("Removed generator output");
        for path in &self.pruned {
            out.removed_item(&path.display().to_string());
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&format!("{} ({}, {} segments)", file.path, file.kind, file.segments));
            out.preformatted(file.content.trim_end());
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be written to package {}",
            preview.files.len(),
            self.package
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            package: "models".to_string(),
            generator_dir: PathBuf::from("/work/models/xo"),
            units: 2,
            warnings: vec!["GetUsers: ignored parameter of unrecognized shape `...int`".to_string()],
            pruned: vec![PathBuf::from("/work/models/xo/xo_db.xo.go")],
            result,
        }
    }

    #[test]
    fn test_render_written() {
        let report = report(GenerationResult::Written(WrittenResult {
            output_dir: PathBuf::from("/work/models"),
            editable: vec!["user.go".to_string()],
            generated: vec!["user.generated.go".to_string()],
            segments: 3,
            skipped: 1,
            formatted: true,
        }));
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "warning: GetUsers: ignored parameter of unrecognized shape `...int`",
                "Package: models",
                "Generator output: /work/models/xo (2 units)",
                "",
                "Removed generator output:",
                "  - /work/models/xo/xo_db.xo.go",
                "",
                "Editable (1):",
                "  + /work/models/user.go",
                "",
                "Generated (1):",
                "  + /work/models/user.generated.go",
                "",
                "Segments: 3 written, 1 empty",
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let report = report(GenerationResult::Preview(PreviewResult {
            files: vec![PreviewFile {
                path: "user.go".to_string(),
                kind: EditableKind::Editable,
                segments: 1,
                content: "type User struct{}\n\n".to_string(),
            }],
        }));
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines[1], "── user.go (editable, 1 segments) ──");
        assert_eq!(out.lines[2], "type User struct{}");
        assert_eq!(
            out.lines.last().map(String::as_str),
            Some("1 files would be written to package models")
        );
    }
}
