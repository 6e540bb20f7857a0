use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for extraction (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to parse '{file}'")]
    #[diagnostic(
        code(sauce::parse_error),
        help("the generator emitted a unit that is not valid {dialect} source; re-run it and retry")
    )]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
        file: String,
        dialect: &'static str,
        message: String,
    },

    #[error("failed to load the {dialect} grammar")]
    #[diagnostic(code(sauce::grammar))]
    Grammar {
        dialect: &'static str,
        #[source]
        source: tree_sitter::LanguageError,
    },

    #[error("parser produced no syntax tree for '{file}'")]
    #[diagnostic(code(sauce::no_tree))]
    NoTree { file: String },
}

impl Error {
    /// Create a parse error pointing at `span` inside `src`.
    pub fn parse(
        file: impl Into<String>,
        src: &str,
        span: impl Into<SourceSpan>,
        dialect: &'static str,
        message: impl Into<String>,
    ) -> Box<Self> {
        let file = file.into();
        Box::new(Error::Parse {
            src: NamedSource::new(&file, src.to_string()),
            span: span.into(),
            file,
            dialect,
            message: message.into(),
        })
    }

    /// Returns true if this is a syntax error in the unit itself.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }
}
