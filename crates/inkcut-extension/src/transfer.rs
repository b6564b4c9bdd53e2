//! Handing the serialized document to the external application.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::error::{ExtensionError, ExtensionResult};
use crate::launcher::Launcher;
use crate::selection::Selection;

/// Destination for a document payload.
pub trait DocumentSink {
    /// Start `argv` and deliver `payload` as its complete input.
    fn send(&mut self, argv: &[String], payload: &[u8]) -> ExtensionResult<()>;
}

/// Spawns the program and writes the payload to its stdin.
///
/// Output of the child is discarded. The payload is written in one blocking
/// write, stdin is closed to mark end of input, and the child is left
/// running.
#[derive(Debug, Default)]
pub struct ProcessSink;

impl DocumentSink for ProcessSink {
    fn send(&mut self, argv: &[String], payload: &[u8]) -> ExtensionResult<()> {
        let (program, args) = argv.split_first().ok_or(ExtensionError::EmptyCommand)?;

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ExtensionError::Spawn {
                program: program.clone(),
                source,
            })?;
        debug!(pid = child.id(), "started {}", program);

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(payload)?;
            // Dropping stdin closes the pipe.
        }
        Ok(())
    }
}

/// Validates the selection and forwards the document to Inkcut.
pub struct Extension<S: DocumentSink> {
    launcher: Launcher,
    sink: S,
}

impl Extension<ProcessSink> {
    /// Create an extension that starts a real process.
    pub fn new(launcher: Launcher) -> Self {
        Self::with_sink(launcher, ProcessSink)
    }
}

impl<S: DocumentSink> Extension<S> {
    /// Create an extension with a custom sink.
    pub fn with_sink(launcher: Launcher, sink: S) -> Self {
        Extension { launcher, sink }
    }

    /// Launcher in use.
    pub fn launcher(&self) -> &Launcher {
        &self.launcher
    }

    /// The sink, e.g. to inspect what a test double received.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Validate `selection`, then send `document` to Inkcut.
    ///
    /// Nothing is sent when validation fails.
    pub fn run(&mut self, selection: &Selection, document: &[u8]) -> ExtensionResult<()> {
        selection.validate()?;

        let argv = self.launcher.command_line(selection);
        info!(
            nodes = selection.len(),
            bytes = document.len(),
            "sending document: {}",
            argv.join(" ")
        );
        self.sink.send(&argv, document)
    }
}
