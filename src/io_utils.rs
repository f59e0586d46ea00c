use std::fmt;
use std::io;
use std::path::Path;

use crate::error::SearchDataError;

/// User-facing CLI error carrying an actionable message.
#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with a suggestion.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        UnexpectedEof => "File appears truncated.",
        WriteZero => "Disk may be full. Free up space and try again.",
        _ => "Check permissions or free up disk space.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

/// Simple CLI error from a string.
pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Invalid file extension error.
pub fn extension_error(path: &Path) -> CliError {
    CliError {
        msg: format!(
            "Invalid file extension for '{}'. Expected .js. Search fragments are JavaScript files.",
            path.display()
        ),
        source: None,
    }
}

/// Convert a library error into a CLI error with a hint.
pub fn fragment_cli_error(context: &str, err: SearchDataError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for a library error variant.
pub fn cli_hint(err: &SearchDataError) -> String {
    use SearchDataError::*;
    match err {
        Syntax { .. } => format!("{err}. The fragment is malformed or truncated."),
        EmptyKey { .. } | KeyNotLowercase(_) | DuplicateKey(_) | OutOfOrder { .. } | NoTargets(_) => {
            format!("{err}. Regenerate the index from a clean documentation build.")
        }
        InvalidUrl { .. } => format!("{err}. Check the generator's tag file configuration."),
        Io(msg) => msg.clone(),
    }
}
