//! Warn-or-fail policy applied when a variable is missing from the input.

/// How a missing variable is escalated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// A substitute was computed; resolution continues.
    Warn,
    /// No substitute is possible; resolution stops.
    #[default]
    Error,
}

/// Outcome of resolving one variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved,
    Warned(String),
    Failed(String),
}

/// A warning recorded while resolving a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The variable (or `Period`) the warning is about.
    pub variable: String,
    pub message: String,
}

/// Escalates a missing `variable`.
///
/// `replacement` describes the source a substitute was (or could be) computed from.
/// Without a replacement the severity is always [`Severity::Error`]. Failure messages
/// name the variable and, when a replacement is known, hint at it.
///
/// # Examples
///
/// ```
/// use meteo_forcing::{warn_var, Resolution, Severity};
///
/// let warned = warn_var("RAD", Some("PAR"), Severity::Warn);
/// assert_eq!(
///     warned,
///     Resolution::Warned("RAD missing from input meteo. Computed from PAR".to_string())
/// );
/// assert!(matches!(warn_var("Tmin", None, Severity::Warn), Resolution::Failed(_)));
/// ```
pub fn warn_var(variable: &str, replacement: Option<&str>, severity: Severity) -> Resolution {
    match (replacement, severity) {
        (Some(source), Severity::Warn) => Resolution::Warned(format!(
            "{variable} missing from input meteo. Computed from {source}"
        )),
        (Some(source), Severity::Error) => Resolution::Failed(format!(
            "{variable} missing from input meteo, cannot proceed unless provided. \
             Hint: {variable} can be computed alternatively using {source} if provided"
        )),
        (None, _) => Resolution::Failed(format!(
            "{variable} missing from input meteo, cannot proceed unless provided"
        )),
    }
}
