//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Descriptor loading and validation errors.
///
/// All of them are build-time and deterministic: the fix is a source edit.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Malformed(ConfigDiagnostics),

    #[error(
        "duplicate slug `{slug}` at `{}` (already used at `{}`)",
        .second.as_str(),
        .first.as_str()
    )]
    DuplicateSlug {
        slug: String,
        first: FieldPath,
        second: FieldPath,
    },

    #[error("dangling reference at `{}`: {kind} `{target}` not found", .field.as_str())]
    DanglingReference {
        field: FieldPath,
        kind: ReferenceKind,
        target: String,
    },
}

/// Error taxonomy, independent of the carried details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    MalformedConfig,
    DuplicateSlug,
    DanglingReference,
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(..) => ErrorKind::Io,
            Self::Toml(_) | Self::Malformed(_) => ErrorKind::MalformedConfig,
            Self::DuplicateSlug { .. } => ErrorKind::DuplicateSlug,
            Self::DanglingReference { .. } => ErrorKind::DanglingReference,
        }
    }
}

/// What a dangling reference pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// A content page slug.
    Page,
    /// An autogenerate directory with no pages under it.
    Directory,
    /// A logo, favicon or stylesheet file.
    Asset,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Page => "page",
            Self::Directory => "content directory",
            Self::Asset => "asset",
        })
    }
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    /// Config field path (e.g., "nav[0].items[1].slug")
    pub field: FieldPath,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets
        writeln!(
            f,
            "{}{}{}",
            "[".dimmed(),
            self.field.as_str().cyan(),
            "]".dimmed()
        )?;
        // Error message with red bullet
        write!(f, "{} {}", "→".red(), self.message)?;
        // Hint in yellow
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    /// Collected warnings (non-fatal authoring issues).
    warnings: Vec<(FieldPath, String)>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(field, message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(field, message).with_hint(hint));
    }

    /// Add a warning (collected for batch display).
    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push((field, message.into()));
    }

    /// Append everything collected in `other`.
    pub fn extend(&mut self, other: ConfigDiagnostics) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Print collected warnings in a grouped format.
    pub fn print_warnings(&self) {
        if self.warnings.is_empty() {
            return;
        }
        crate::log!("warning"; "descriptor has {} issue(s) worth a look:", self.warnings.len());
        for (field, message) in &self.warnings {
            eprintln!("- [{}] {}", field.as_str(), message);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[(FieldPath, String)] {
        &self.warnings
    }

}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "malformed config:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind as IoErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("docsite.toml"),
            Error::new(IoErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("docsite.toml"));

        let dup = ConfigError::DuplicateSlug {
            slug: "features/tasks".into(),
            first: FieldPath::new("nav[0].items[0].slug"),
            second: FieldPath::new("nav[1].items[2].slug"),
        };
        let display = format!("{dup}");
        assert!(display.contains("features/tasks"));
        assert!(display.contains("nav[1].items[2].slug"));
        assert_eq!(dup.kind(), ErrorKind::DuplicateSlug);

        let dangling = ConfigError::DanglingReference {
            field: FieldPath::new("site.logo"),
            kind: ReferenceKind::Asset,
            target: "src/assets/logo.svg".into(),
        };
        assert!(format!("{dangling}").contains("asset `src/assets/logo.svg` not found"));
        assert_eq!(dangling.kind(), ErrorKind::DanglingReference);
    }

    #[test]
    fn test_diagnostics_extend() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn(FieldPath::new("nav[0]"), "duplicate label");
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);

        let mut other = ConfigDiagnostics::new();
        other.warn(FieldPath::new("unknown"), "unknown field, ignored");
        other.error_with_hint(FieldPath::new("site.url"), "invalid URL", "use https://...");
        diag.extend(other);

        assert!(diag.has_errors());
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.warnings().len(), 2);
        assert_eq!(diag.errors()[0].hint.as_deref(), Some("use https://..."));
    }
}
