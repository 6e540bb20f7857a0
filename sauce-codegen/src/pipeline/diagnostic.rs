//! Diagnostics collected during a run.
//!
//! Fatal conditions abort the run as errors; everything a run survives is
//! recorded here and reported once it finishes.

use serde::Serialize;
use xosauce_extract::ShapeWarning;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    /// Something the operator should look at.
    Warning,
    /// Informational message about the run.
    Info,
}

impl Severity {
    /// Returns true if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message from a pipeline phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// The phase that produced this diagnostic.
    pub phase: String,
    pub message: String,
    /// Optional location (e.g., "user.xo.go:12").
    pub location: Option<String>,
}

impl Diagnostic {
    /// Create a new warning diagnostic.
    pub fn warning(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            phase: phase.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Create a new info diagnostic.
    pub fn info(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            phase: phase.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Warning for a parameter or result the extractor left out.
    pub fn from_shape(phase: impl Into<String>, warning: &ShapeWarning) -> Self {
        Self::warning(
            phase,
            format!(
                "{}: ignored {} of unrecognized shape `{}`",
                warning.function, warning.role, warning.shape
            ),
        )
        .at(format!("{}:{}", warning.file, warning.line))
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use xosauce_extract::ShapeRole;

    use super::*;

    #[test]
    fn test_diagnostic_with_location() {
        let diag = Diagnostic::info("write", "formatter disabled").at("sauce.toml");
        assert!(!diag.severity.is_warning());
        assert_eq!(diag.location.as_deref(), Some("sauce.toml"));
        assert_eq!(diag.to_string(), "info: formatter disabled (at sauce.toml)");
    }

    #[test]
    fn test_from_shape() {
        let warning = ShapeWarning {
            file: "user.xo.go".to_string(),
            line: 12,
            function: "UsersByIDs".to_string(),
            role: ShapeRole::Param,
            shape: "...int".to_string(),
        };
        let diag = Diagnostic::from_shape("extract", &warning);
        assert!(diag.severity.is_warning());
        assert_eq!(diag.phase, "extract");
        assert_eq!(
            diag.to_string(),
            "warning: UsersByIDs: ignored parameter of unrecognized shape `...int` (at user.xo.go:12)"
        );
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Info.to_string(), "info");
    }
}
