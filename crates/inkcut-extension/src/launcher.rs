//! How the external Inkcut application is started.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::selection::Selection;

/// Program name of an installed Inkcut.
pub const DEFAULT_PROGRAM: &str = "inkcut";

/// Interpreter of a development checkout.
pub const DEFAULT_SOURCE_PYTHON: &str = "~/inkcut/venv/bin/python";

/// Entry script of a development checkout.
pub const DEFAULT_SOURCE_SCRIPT: &str = "~/inkcut/main.py";

/// Which Inkcut to run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Launcher {
    /// An installed `inkcut` command.
    Installed {
        /// Program name or path.
        #[serde(default = "default_program")]
        program: String,
    },

    /// A development checkout run through its own interpreter.
    Source {
        /// Interpreter path.
        #[serde(default = "default_python")]
        python: String,
        /// Entry script path.
        #[serde(default = "default_script")]
        script: String,
    },
}

fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

fn default_python() -> String {
    DEFAULT_SOURCE_PYTHON.to_string()
}

fn default_script() -> String {
    DEFAULT_SOURCE_SCRIPT.to_string()
}

impl Default for Launcher {
    fn default() -> Self {
        Launcher::Installed {
            program: default_program(),
        }
    }
}

impl Launcher {
    /// Development checkout with the default paths.
    pub fn source() -> Self {
        Launcher::Source {
            python: default_python(),
            script: default_script(),
        }
    }

    /// Program and leading arguments, with `~/` expanded.
    pub fn program_args(&self) -> Vec<String> {
        match self {
            Launcher::Installed { program } => vec![expand_home(program)],
            Launcher::Source { python, script } => vec![expand_home(python), expand_home(script)],
        }
    }

    /// Full command line that opens the document from stdin with the given
    /// nodes selected.
    pub fn command_line(&self, selection: &Selection) -> Vec<String> {
        let mut argv = self.program_args();
        argv.extend(["open", "-", "--nodes"].map(String::from));
        argv.extend(selection.ids().map(String::from));
        argv
    }
}

/// Expand a leading `~/` to the user's home directory.
///
/// Paths are returned unchanged when `HOME` is not set.
pub fn expand_home(path: &str) -> String {
    match (path.strip_prefix("~/"), std::env::var_os("HOME")) {
        (Some(rest), Some(home)) => PathBuf::from(home).join(rest).to_string_lossy().into_owned(),
        _ => path.to_string(),
    }
}
