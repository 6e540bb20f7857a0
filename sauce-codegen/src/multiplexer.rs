//! Run-scoped registry of open output files.
//!
//! Many segments share one physical file. The first acquisition of a path
//! creates (or truncates) it and writes the header of its tier; later
//! acquisitions return the same handle so bodies append after the header.

use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use eyre::Result;
use indexmap::IndexMap;
use tracing::debug;
use xosauce_core::{EditableKind, OutputLayout};

use crate::{HeaderContext, RunError, TemplateSet};

/// Open handles keyed by resolved target path.
///
/// Dropping the multiplexer without [`FileMultiplexer::close_all`] still
/// closes every file, but flush errors are lost.
pub struct FileMultiplexer<'a> {
    layout: OutputLayout,
    templates: &'a TemplateSet,
    header: &'a HeaderContext,
    files: IndexMap<PathBuf, BufWriter<File>>,
}

impl<'a> FileMultiplexer<'a> {
    pub fn new(layout: OutputLayout, templates: &'a TemplateSet, header: &'a HeaderContext) -> Self {
        Self {
            layout,
            templates,
            header,
            files: IndexMap::new(),
        }
    }

    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    /// Number of files opened so far.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Whether `path` has been opened during this run.
    pub fn is_open(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    /// Handle for the file of `(name, kind)`.
    pub fn acquire_for(&mut self, name: &str, kind: EditableKind) -> Result<&mut BufWriter<File>> {
        let path = self.layout.path(name, kind);
        self.acquire(path, kind)
    }

    /// Handle for `path`, opening it and writing the `kind` header on first use.
    pub fn acquire(&mut self, path: PathBuf, kind: EditableKind) -> Result<&mut BufWriter<File>> {
        use indexmap::map::Entry;

        match self.files.entry(path) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let path = entry.key();
                if path.is_dir() {
                    return Err(RunError::PathIsDirectory { path: path.clone() }.into());
                }

                let file = OpenOptions::new()
                    .read(true)
                    .write(true)
                    .create(true)
                    .truncate(true)
                    .open(path)
                    .map_err(|e| RunError::io("failed to open", path.clone(), e))?;
                let mut writer = BufWriter::new(file);

                let header = self.templates.render_header(kind, self.header)?;
                writer
                    .write_all(header.as_bytes())
                    .map_err(|e| RunError::io("failed to write", path.clone(), e))?;
                debug!(path = %path.display(), %kind, "opened output file");

                Ok(entry.insert(writer))
            }
        }
    }

    /// Append `content` to the file of `(name, kind)`.
    pub fn append(&mut self, name: &str, kind: EditableKind, content: &str) -> Result<PathBuf> {
        let path = self.layout.path(name, kind);
        let writer = self.acquire(path.clone(), kind)?;
        writer
            .write_all(content.as_bytes())
            .map_err(|e| RunError::io("failed to write", path.clone(), e))?;
        Ok(path)
    }

    /// Flush and close every handle exactly once.
    ///
    /// All handles are closed even when one fails; the first failure is
    /// returned. On success, returns the paths that were opened, in the
    /// order they were first acquired.
    pub fn close_all(self) -> Result<Vec<PathBuf>> {
        let mut first_err = None;
        let mut paths = Vec::with_capacity(self.files.len());

        for (path, writer) in self.files {
            let closed = writer
                .into_inner()
                .map_err(|e| e.into_error())
                .and_then(|file| file.sync_all());
            if let Err(e) = closed {
                first_err.get_or_insert_with(|| RunError::io("failed to close", path.clone(), e));
            }
            paths.push(path);
        }

        match first_err {
            Some(err) => Err(err.into()),
            None => Ok(paths),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn header() -> HeaderContext {
        HeaderContext {
            package: "models".to_string(),
            generator_package: "xo".to_string(),
            ..HeaderContext::default()
        }
    }

    #[test]
    fn test_acquire_writes_header_once() {
        let temp = TempDir::new().unwrap();
        let templates = TemplateSet::builtin().unwrap();
        let header = header();
        let mut mux = FileMultiplexer::new(OutputLayout::go(temp.path()), &templates, &header);

        mux.append("User", EditableKind::Generated, "// one\n").unwrap();
        mux.append("User", EditableKind::Generated, "// two\n").unwrap();
        assert_eq!(mux.len(), 1);

        let paths = mux.close_all().unwrap();
        assert_eq!(paths, [temp.path().join("user.generated.go")]);

        let content = std::fs::read_to_string(&paths[0]).unwrap();
        assert_eq!(content.matches("DO NOT EDIT").count(), 1);
        assert!(content.ends_with("package models\n\n// one\n// two\n"));
    }

    #[test]
    fn test_existing_content_is_truncated() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("user.go");
        std::fs::write(&target, "// hand edits\n".repeat(100)).unwrap();

        let templates = TemplateSet::builtin().unwrap();
        let header = header();
        let mut mux = FileMultiplexer::new(OutputLayout::go(temp.path()), &templates, &header);
        mux.append("User", EditableKind::Editable, "type User struct{}\n")
            .unwrap();
        mux.close_all().unwrap();

        let content = std::fs::read_to_string(&target).unwrap();
        assert!(!content.contains("hand edits"));
        assert!(content.starts_with("// Package models"));
    }

    #[test]
    fn test_directory_target_fails() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("user.go")).unwrap();

        let templates = TemplateSet::builtin().unwrap();
        let header = header();
        let mut mux = FileMultiplexer::new(OutputLayout::go(temp.path()), &templates, &header);

        let err = mux
            .acquire_for("User", EditableKind::Editable)
            .err()
            .unwrap();
        assert!(matches!(
            err.downcast_ref::<RunError>(),
            Some(RunError::PathIsDirectory { .. })
        ));
        assert!(mux.is_empty());
    }

    #[test]
    fn test_kinds_map_to_distinct_files() {
        let temp = TempDir::new().unwrap();
        let templates = TemplateSet::builtin().unwrap();
        let header = header();
        let mut mux = FileMultiplexer::new(OutputLayout::go(temp.path()), &templates, &header);

        let a = mux.append("User", EditableKind::Editable, "a\n").unwrap();
        let b = mux.append("User", EditableKind::Generated, "b\n").unwrap();
        assert_ne!(a, b);
        assert!(mux.is_open(&a) && mux.is_open(&b));
        assert_eq!(mux.close_all().unwrap(), [a, b]);
    }
}
