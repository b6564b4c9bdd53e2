//! Error types for the extension.

use thiserror::Error;

/// Errors that can occur while handing a document to Inkcut.
#[derive(Debug, Error)]
pub enum ExtensionError {
    /// Nothing was selected in the editor.
    #[error("no nodes were selected")]
    EmptySelection,

    /// The selection contains an element the cutter application cannot
    /// process.
    #[error("node {id} is an unsupported {kind} element")]
    UnsupportedContent {
        /// Node id.
        id: String,
        /// Element kind (local tag name).
        kind: String,
    },

    /// A `--node` argument could not be parsed.
    #[error("invalid node argument: {0:?}")]
    InvalidNodeArg(String),

    /// I/O error reading the document or writing to the child process.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// The external application could not be started.
    #[error("failed to start {program}: {source}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The launch command line is empty.
    #[error("launch command is empty")]
    EmptyCommand,
}

impl ExtensionError {
    /// Message shown to the person using the editor.
    pub fn user_message(&self) -> String {
        match self {
            ExtensionError::EmptySelection => "There were no paths selected.".to_string(),
            ExtensionError::UnsupportedContent { kind, .. } if kind == "text" => {
                "A text node was found in the selection, please convert all text \
                 objects to paths and try again."
                    .to_string()
            }
            ExtensionError::UnsupportedContent { kind, .. } => format!(
                "A {} node was found in the selection, please convert it to a path \
                 and try again.",
                kind
            ),
            ExtensionError::Spawn { program, .. } => format!(
                "Could not start {}. Make sure Inkcut is installed and on your PATH.",
                program
            ),
            other => other.to_string(),
        }
    }
}

/// Result type alias for extension operations.
pub type ExtensionResult<T> = Result<T, ExtensionError>;
