//! Generate operation - one regeneration run.

use std::path::{Path, PathBuf};

use eyre::{Context, Result, bail};
use xosauce_codegen::{
    Pipeline, RunContext, RunOptions,
    writer,
};
use xosauce_config::Config;
use xosauce_core::EditableKind;

use crate::reports::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult,
};

/// Paths as given on the command line.
pub struct GenerateOptions<'a> {
    pub data_source: &'a str,
    pub out: Option<&'a Path>,
    pub template_path: Option<&'a Path>,
    pub dry_run: bool,
}

/// Check the command line paths and turn them into run options.
///
/// The output directory defaults to the working directory and must exist.
/// It is made absolute so its name can serve as the package name.
pub fn resolve(opts: GenerateOptions<'_>) -> Result<RunOptions> {
    let out = match opts.out {
        None => std::env::current_dir().wrap_err("Failed to get current directory")?,
        Some(out) => {
            let meta = std::fs::metadata(out)
                .wrap_err_with(|| format!("output path '{}' does not exist", out.display()))?;
            if !meta.is_dir() {
                bail!("output path '{}' is not a directory", out.display());
            }
            std::path::absolute(out)
                .wrap_err_with(|| format!("failed to resolve '{}'", out.display()))?
        }
    };

    let mut options = RunOptions::new(opts.data_source, out).dry_run(opts.dry_run);

    if let Some(dir) = opts.template_path {
        let meta = std::fs::metadata(dir)
            .wrap_err_with(|| format!("template path '{}' must exist", dir.display()))?;
        if !meta.is_dir() {
            bail!("template path '{}' is not a directory", dir.display());
        }
        options = options.template_dir(dir);
    }

    Ok(options)
}

/// Execute the generate operation.
///
/// Runs the configured generator, extracts descriptors from its output and
/// writes the wrapper files, or previews them on a dry run.
pub fn generate(config: Config, options: RunOptions) -> Result<GenerateReport> {
    let pipeline = Pipeline::from_config(&config);
    let ctx = pipeline.run(config, options)?;
    Ok(report(&ctx))
}

fn report(ctx: &RunContext) -> GenerateReport {
    let warnings = ctx
        .warnings()
        .map(|diag| match &diag.location {
            Some(loc) => format!("{}\n  --> {}", diag.message, loc),
            None => diag.message.clone(),
        })
        .collect();

    let result = match &ctx.summary {
        Some(summary) => GenerationResult::Written(WrittenResult {
            output_dir: ctx.options.out_dir.clone(),
            editable: file_names(summary.opened(EditableKind::Editable)),
            generated: file_names(summary.opened(EditableKind::Generated)),
            segments: summary.written,
            skipped: summary.skipped,
            formatted: summary.formatted,
        }),
        None => {
            let layout = ctx.layout();
            let files = writer::plan(&ctx.segments, &layout)
                .into_iter()
                .map(|(path, kind, segments)| PreviewFile {
                    path,
                    kind,
                    segments: segments.len(),
                    content: segments
                        .iter()
                        .map(|s| s.content.as_str())
                        .collect::<Vec<_>>()
                        .join(""),
                })
                .collect();
            GenerationResult::Preview(PreviewResult { files })
        }
    };

    GenerateReport {
        package: ctx.header.package.clone(),
        generator_dir: ctx.generator_dir().to_path_buf(),
        units: ctx.units.len(),
        warnings,
        pruned: ctx.pruned.clone(),
        result,
    }
}

fn file_names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect()
}
