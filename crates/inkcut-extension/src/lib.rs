//! # inkcut-extension
//!
//! Editor extension that sends the current document to Inkcut for cutting.
//!
//! The editor serializes the document and reports the selected nodes. The
//! extension checks the selection, then starts Inkcut with
//! `open - --nodes <ids...>` and writes the document to its stdin:
//!
//! 1. An empty selection is refused.
//! 2. Text elements are refused until they are converted to paths.
//! 3. Inkcut is started either as an installed program or from a
//!    development checkout, chosen by [`Launcher`] at construction.
//!
//! The binary also encodes YAML command jobs with the
//! [`inkcut_protocol`] encoders, see [`encode_job`].
//!
//! ```no_run
//! use inkcut_extension::{Extension, Launcher, Selection};
//!
//! let selection = Selection::parse(["path12=path", "path14=path"])?;
//! let mut extension = Extension::new(Launcher::default());
//! extension.run(&selection, b"<svg>...</svg>")?;
//! # Ok::<(), inkcut_extension::ExtensionError>(())
//! ```

mod config;
mod error;
mod job;
mod launcher;
mod selection;
mod transfer;

pub use config::ExtensionConfig;
pub use error::{ExtensionError, ExtensionResult};
pub use job::{encode_job, parse_job};
pub use launcher::{
    expand_home, Launcher, DEFAULT_PROGRAM, DEFAULT_SOURCE_PYTHON, DEFAULT_SOURCE_SCRIPT,
};
pub use selection::{SelectedNode, Selection, UNSUPPORTED_KINDS};
pub use transfer::{DocumentSink, Extension, ProcessSink};
