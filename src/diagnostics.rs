use std::fmt;

/// How serious a reported message is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational note.
    Info,
    /// Something suspicious that does not stop the pipeline.
    Warning,
    /// A failure; the current stage must not hand its result onwards.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => f.write_str("Info"),
            Self::Warning => f.write_str("Warning"),
            Self::Error => f.write_str("Error"),
        }
    }
}

/// A single reported message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity of the message.
    pub severity: Severity,
    /// Human-readable text.
    pub message:  String,
    /// Source line, when known.
    pub line:     Option<usize>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]: {}", self.severity, self.message)?;
        if let Some(line) = self.line {
            write!(f, " on line {line}")?;
        }
        Ok(())
    }
}

/// Errors that know which source line they came from.
///
/// Every stage error implements this so it can be recorded into
/// [`Diagnostics`] without losing its location.
pub trait Located: std::error::Error {
    /// Source line of the failure, if one applies.
    fn line(&self) -> Option<usize>;
}

/// Accumulates the messages of one pipeline run.
///
/// Each stage receives the accumulator explicitly, reports into it and the
/// driver inspects [`Diagnostics::has_error`] between stages to decide whether
/// to continue.
///
/// # Example
/// ```
/// use bsl::diagnostics::{Diagnostics, Severity};
///
/// let mut diagnostics = Diagnostics::new();
/// diagnostics.warning("unused value", Some(3));
/// assert!(!diagnostics.has_error());
///
/// diagnostics.error("Undefined variable \"x\"", Some(4));
/// assert!(diagnostics.has_error());
/// assert_eq!(diagnostics.iter().last().unwrap().to_string(),
///            "[Error]: Undefined variable \"x\" on line 4");
///
/// diagnostics.clear();
/// assert!(diagnostics.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Appends a message.
    pub fn report(&mut self, severity: Severity, message: impl Into<String>, line: Option<usize>) {
        let message = message.into();
        match severity {
            Severity::Error => tracing::debug!(?line, %message, "error reported"),
            Severity::Warning => tracing::debug!(?line, %message, "warning reported"),
            Severity::Info => tracing::trace!(?line, %message, "info reported"),
        }
        self.entries.push(Diagnostic { severity,
                                       message,
                                       line });
    }

    pub fn error(&mut self, message: impl Into<String>, line: Option<usize>) {
        self.report(Severity::Error, message, line);
    }

    pub fn warning(&mut self, message: impl Into<String>, line: Option<usize>) {
        self.report(Severity::Warning, message, line);
    }

    pub fn info(&mut self, message: impl Into<String>, line: Option<usize>) {
        self.report(Severity::Info, message, line);
    }

    /// Records a stage error at `Error` severity.
    pub fn record<E: Located + ?Sized>(&mut self, error: &E) {
        self.error(error.to_string(), error.line());
    }

    /// Whether any `Error` has been reported since the last [`clear`](Self::clear).
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.severity == Severity::Error)
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.severity == Severity::Error)
            .count()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every accumulated message.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Returns only the `Error` entries.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(|entry| entry.severity == Severity::Error)
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}
