//! Structured errors for tool callers
//!
//! The analysis engine itself never fails: degenerate input comes back as
//! data. These errors only describe problems at the tool boundary, such as
//! a missing argument or a malformed relation symbol.

use crate::ParseRelationError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable error codes
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const UNKNOWN_TOOL: &str = "UNKNOWN_TOOL";
    pub const ARG_MISSING: &str = "ARG_MISSING";
    pub const ARG_TYPE: &str = "ARG_TYPE";
    pub const INVALID_PARAM: &str = "INVALID_PARAM";
    pub const DOMAIN_ERROR: &str = "DOMAIN_ERROR";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const INTERNAL: &str = "INTERNAL";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Call completed with a degraded result
    Warning,
    /// Call failed
    Error,
    /// The host cannot continue
    Fatal,
}

/// Tool, argument and notes attached while an error travels outward
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub notes: Vec<String>,
}

/// Error returned across the tool boundary.
///
/// `code` is one of [`codes`]; `message` is for people. Both serialize as
/// part of a tool result, so hosts can show or branch on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("[{code}] {message}{}", suggestion_suffix(.suggestion))]
pub struct EngineError {
    pub code: String,
    pub message: String,

    /// How the caller might fix the call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ErrorContext>,

    pub severity: Severity,
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(" (suggestion: {})", s))
        .unwrap_or_default()
}

impl EngineError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            context: None,
            severity: Severity::Error,
        }
    }

    fn context_mut(&mut self) -> &mut ErrorContext {
        self.context.get_or_insert_with(ErrorContext::default)
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Record the tool being called
    pub fn in_tool(mut self, tool: impl Into<String>) -> Self {
        self.context_mut().tool = Some(tool.into());
        self
    }

    /// Record the offending argument
    pub fn for_arg(mut self, arg: impl Into<String>) -> Self {
        self.context_mut().arg = Some(arg.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.context_mut().notes.push(note.into());
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    // ---- constructors for the common cases ----

    pub fn parse_error(details: impl Into<String>) -> Self {
        Self::new(codes::PARSE_ERROR, format!("could not parse: {}", details.into()))
    }

    pub fn unknown_tool(name: &str) -> Self {
        Self::new(codes::UNKNOWN_TOOL, format!("no tool called '{}'", name))
            .with_suggestion("Call list_tools to see what is available")
    }

    pub fn arg_missing(tool: &str, arg: &str) -> Self {
        Self::new(codes::ARG_MISSING, format!("{} needs argument '{}'", tool, arg))
            .with_suggestion(format!("See help('{}') for the argument list", tool))
            .in_tool(tool)
            .for_arg(arg)
    }

    pub fn arg_type(tool: &str, arg: &str, expected: &str, got: &str) -> Self {
        let message = format!("{}: '{}' should be {}, not {}", tool, arg, expected, got);
        Self::new(codes::ARG_TYPE, message).in_tool(tool).for_arg(arg)
    }

    pub fn invalid_param(details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_PARAM, details)
    }

    pub fn domain_error(details: impl Into<String>) -> Self {
        Self::new(codes::DOMAIN_ERROR, details)
    }

    /// Help requested for a tool that does not exist
    pub fn not_found(name: &str) -> Self {
        Self::new(codes::NOT_FOUND, format!("no help for '{}': unknown tool", name))
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(codes::INTERNAL, details)
            .with_suggestion("Unexpected engine state; please report it with the arguments used")
            .with_severity(Severity::Fatal)
    }
}

impl From<ParseRelationError> for EngineError {
    fn from(err: ParseRelationError) -> Self {
        Self::parse_error(err.to_string()).with_suggestion("Use one of: >, >=, <, <=")
    }
}

/// Bad argument shapes are the caller's fault; anything else is ours
impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() {
            Self::invalid_param(err.to_string())
        } else {
            Self::internal(err.to_string())
        }
    }
}
