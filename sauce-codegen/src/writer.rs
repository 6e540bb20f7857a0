//! Deterministic writer.
//!
//! Output is a pure function of the segment set: segments are sorted
//! before any file is touched, so input order never shows in the result.

use std::path::PathBuf;

use eyre::Result;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info};
use xosauce_core::EditableKind;

use crate::{FileMultiplexer, Segment, SourceFormatter};

/// What one write pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WriteSummary {
    /// Files opened during the run, sorted.
    pub files: Vec<PathBuf>,
    /// Segments appended to a file.
    pub written: usize,
    /// Whitespace-only segments that were dropped.
    pub skipped: usize,
    /// Editable files opened, sorted.
    pub editable: Vec<PathBuf>,
    /// Generated files opened, sorted.
    pub generated: Vec<PathBuf>,
    /// Whether the formatter ran.
    pub formatted: bool,
}

impl WriteSummary {
    /// Files of one tier opened during the run.
    pub fn opened(&self, kind: EditableKind) -> &[PathBuf] {
        match kind {
            EditableKind::Editable => &self.editable,
            EditableKind::Generated => &self.generated,
        }
    }
}

/// Write every non-blank segment, close all files, then format them.
///
/// Segments are sorted by `(kind, name)` and appended in that order, each
/// to the file of its `(name, kind)`. Blank segments never create a file.
/// The formatter sees exactly the files opened by this call.
pub fn write_all(
    mut segments: Vec<Segment>,
    mut mux: FileMultiplexer<'_>,
    formatter: Option<&dyn SourceFormatter>,
) -> Result<WriteSummary> {
    segments.sort();

    let mut summary = WriteSummary::default();
    for segment in &segments {
        if segment.is_blank() {
            debug!(name = %segment.name, descriptor = %segment.descriptor, "skipping blank segment");
            summary.skipped += 1;
            continue;
        }
        let created = !mux.is_open(&mux.layout().path(&segment.name, segment.kind));
        let path = mux.append(&segment.name, segment.kind, &segment.content)?;
        if created {
            match segment.kind {
                EditableKind::Editable => summary.editable.push(path),
                EditableKind::Generated => summary.generated.push(path),
            }
        }
        summary.written += 1;
    }

    let mut files = mux.close_all()?;
    files.sort();
    summary.editable.sort();
    summary.generated.sort();
    info!(
        files = files.len(),
        segments = summary.written,
        skipped = summary.skipped,
        "wrote output files"
    );

    if let Some(formatter) = formatter {
        if !files.is_empty() {
            formatter.format(&files)?;
            summary.formatted = true;
        }
    }

    summary.files = files;
    Ok(summary)
}

/// Segments grouped by target file name, in write order.
///
/// Used for previews; blank segments are left out.
pub fn plan<'s>(
    segments: &'s [Segment],
    layout: &xosauce_core::OutputLayout,
) -> Vec<(String, EditableKind, Vec<&'s Segment>)> {
    let mut sorted: Vec<&Segment> = segments.iter().filter(|s| !s.is_blank()).collect();
    sorted.sort();

    // Keyed by target path: names differing only in case share a file.
    let mut groups: IndexMap<PathBuf, (String, EditableKind, Vec<&Segment>)> = IndexMap::new();
    for segment in sorted {
        groups
            .entry(layout.path(&segment.name, segment.kind))
            .or_insert_with(|| {
                (
                    layout.file_name(&segment.name, segment.kind),
                    segment.kind,
                    Vec::new(),
                )
            })
            .2
            .push(segment);
    }
    groups.into_values().collect()
}
