//! Semantic checks run after deserialization.

use std::path::{Component, Path};

use miette::SourceSpan;

use crate::{Config, Result, error::SourceContext};

pub(crate) fn validate(config: &Config, ctx: &SourceContext) -> Result<()> {
    require_non_empty(ctx, "generator", "program", &config.generator.program)?;
    require_non_empty(ctx, "generator", "subdir", &config.generator.subdir)?;
    require_non_empty(ctx, "formatter", "program", &config.formatter.program)?;
    require_non_empty(
        ctx,
        "output",
        "editable_suffix",
        &config.output.editable_suffix,
    )?;
    require_non_empty(
        ctx,
        "output",
        "generated_suffix",
        &config.output.generated_suffix,
    )?;

    // `.` and `..` alias or escape the output directory.
    let nested = Path::new(&config.generator.subdir)
        .components()
        .all(|c| matches!(c, Component::Normal(_)));
    if !nested {
        return Err(ctx.validation_error(
            "generator.subdir must be a plain relative path below the output path",
            find_key_span(ctx.src(), "subdir"),
        ));
    }

    if config.output.editable_suffix == config.output.generated_suffix {
        return Err(ctx.validation_error(
            "output.editable_suffix and output.generated_suffix must differ",
            find_key_span(ctx.src(), "generated_suffix"),
        ));
    }

    if let Some(pattern) = config.extract.exclude.iter().find(|p| p.is_empty()) {
        return Err(ctx.validation_error(
            format!("extract.exclude contains an empty pattern {pattern:?}, which would prune every file"),
            find_key_span(ctx.src(), "exclude"),
        ));
    }

    Ok(())
}

fn require_non_empty(ctx: &SourceContext, table: &str, key: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ctx.validation_error(
            format!("{table}.{key} must not be empty"),
            find_key_span(ctx.src(), key),
        ));
    }
    Ok(())
}

/// Locate `key = ...` in the raw source for error labels.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();
        let is_key = trimmed
            .strip_prefix(key)
            .is_some_and(|rest| rest.trim_start().starts_with('='));
        if is_key {
            return Some(SourceSpan::from((offset + indent, key.len())));
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::Error;

    #[test]
    fn test_identical_suffixes_rejected() {
        let src = "[output]\neditable_suffix = \".go\"\ngenerated_suffix = \".go\"\n";
        let err = Config::from_str(src).unwrap_err();
        match *err {
            Error::Validation { span, message, .. } => {
                assert!(message.contains("must differ"));
                let span = span.expect("span should be found");
                assert_eq!(&src[span.offset()..span.offset() + span.len()], "generated_suffix");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_program_rejected() {
        let err = Config::from_str("[formatter]\nprogram = \"\"\n").unwrap_err();
        assert!(err.to_string().contains("formatter.program must not be empty"));
    }

    #[test]
    fn test_absolute_subdir_rejected() {
        let err = Config::from_str("[generator]\nsubdir = \"/tmp/xo\"\n").unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_subdir_must_stay_below_output() {
        for subdir in [".", "./", "..", "a/..", "../xo", "./xo"] {
            let src = format!("[generator]\nsubdir = \"{subdir}\"\n");
            let err = Config::from_str(&src).unwrap_err();
            match *err {
                Error::Validation { span, message, .. } => {
                    assert!(message.contains("generator.subdir"), "{subdir}: {message}");
                    let span = span.expect("span should be found");
                    assert_eq!(&src[span.offset()..span.offset() + span.len()], "subdir");
                }
                other => panic!("{subdir}: expected validation error, got {other:?}"),
            }
        }

        for subdir in ["xo", "gen/xo"] {
            let src = format!("[generator]\nsubdir = \"{subdir}\"\n");
            assert!(Config::from_str(&src).is_ok(), "{subdir} should be accepted");
        }
    }

    #[test]
    fn test_empty_exclude_pattern_rejected() {
        let err = Config::from_str("[extract]\nexclude = [\"\"]\n").unwrap_err();
        assert!(err.to_string().contains("extract.exclude"));
    }

    #[test]
    fn test_find_key_span_skips_prefix_matches() {
        let src = "subdirs = 1\n  subdir = \"xo\"\n";
        let span = find_key_span(src, "subdir").unwrap();
        assert_eq!(span.offset(), 14);
        assert_eq!(span.len(), 6);
    }
}
