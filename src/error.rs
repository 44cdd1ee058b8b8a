// ABOUTME: Host-level error types — parse and I/O failures, not in-language errors

use thiserror::Error;

/// Errors that never enter the value graph. In-language failures are
/// `Value::Err` and flow through ordinary evaluation; this type is reserved
/// for the reader's unrecoverable failures and for the host-level I/O the
/// REPL/script runner performs around the evaluator.
#[derive(Error, Debug, Clone)]
pub enum ReplError {
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("unbalanced '{0}'")]
    Unbalanced(char),

    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),

    #[error("cannot read script file {path}: {message}")]
    Io { path: String, message: String },
}
