//! Test utilities for the run pipeline.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use eyre::{Result, eyre};

use crate::{SourceFormatter, SourceGenerator};

/// Generator that writes fixed files instead of running a program.
#[derive(Debug, Clone, Default)]
pub struct FixtureGenerator {
    files: Vec<(String, String)>,
    failure: Option<String>,
}

impl FixtureGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file the generator "emits".
    pub fn file(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.push((name.into(), content.into()));
        self
    }

    /// A generator that always fails with `output`.
    pub fn failing(output: impl Into<String>) -> Self {
        Self {
            files: Vec::new(),
            failure: Some(output.into()),
        }
    }
}

impl SourceGenerator for FixtureGenerator {
    fn generate(
        &self,
        _data_source: &str,
        out_dir: &Path,
        _template_dir: Option<&Path>,
    ) -> Result<()> {
        if let Some(output) = &self.failure {
            return Err(eyre!("generator failed:\n{output}"));
        }
        std::fs::create_dir_all(out_dir)?;
        for (name, content) in &self.files {
            std::fs::write(out_dir.join(name), content)?;
        }
        Ok(())
    }
}

/// Formatter that records every call and touches nothing.
#[derive(Debug, Default)]
pub struct RecordingFormatter {
    calls: Mutex<Vec<Vec<PathBuf>>>,
    failure: Option<String>,
}

impl RecordingFormatter {
    /// A formatter that records the call, then fails with `output`.
    pub fn failing(output: impl Into<String>) -> Self {
        Self {
            calls: Mutex::default(),
            failure: Some(output.into()),
        }
    }

    /// Path lists passed to each call, in call order.
    pub fn calls(&self) -> Vec<Vec<PathBuf>> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl SourceFormatter for RecordingFormatter {
    fn format(&self, paths: &[PathBuf]) -> Result<()> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(paths.to_vec());
        }
        match &self.failure {
            Some(output) => Err(eyre!("formatter failed:\n{output}")),
            None => Ok(()),
        }
    }
}

/// A temporary output directory named like a Go package.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn output_dir(package: &str) -> Result<(tempfile::TempDir, PathBuf)> {
    let temp_dir = tempfile::TempDir::new()?;
    let out = temp_dir.path().join(package);
    std::fs::create_dir(&out)?;
    Ok((temp_dir, out))
}

/// Read every file directly under `dir`, sorted by name.
pub fn read_tree(dir: &Path) -> Result<Vec<(String, String)>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            let name = entry.file_name().to_string_lossy().into_owned();
            files.push((name, std::fs::read_to_string(entry.path())?));
        }
    }
    files.sort();
    Ok(files)
}

/// Assert that two strings are equal, with a line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}
