//! Fatal run errors.
//!
//! Pipeline functions return [`eyre::Result`]; every fatal condition they
//! raise themselves is a [`RunError`] and can be recovered with
//! `report.downcast_ref::<RunError>()`.

use std::{path::PathBuf, process::ExitStatus};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    /// An external collaborator exited unsuccessfully.
    #[error("`{program}` failed ({status}):\n{output}")]
    Process {
        program: String,
        status: ExitStatus,
        /// Combined stdout and stderr, verbatim.
        output: String,
    },

    #[error("failed to run `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' is a directory")]
    PathIsDirectory { path: PathBuf },

    #[error("{action} '{path}'")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(Box<xosauce_extract::Error>),

    #[error("failed to render template '{name}'")]
    Template {
        name: String,
        #[source]
        source: Box<handlebars::RenderError>,
    },

    #[error("invalid template '{name}'")]
    TemplateSyntax {
        name: String,
        #[source]
        source: Box<handlebars::TemplateError>,
    },
}

impl RunError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// The extractor diagnostic, when the run failed on a source unit.
    pub fn as_parse(&self) -> Option<&xosauce_extract::Error> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<Box<xosauce_extract::Error>> for RunError {
    fn from(err: Box<xosauce_extract::Error>) -> Self {
        Self::Parse(err)
    }
}
