//! `inkcut-extension` command line entry point.

use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use inkcut_extension::{
    encode_job, Extension, ExtensionConfig, ExtensionResult, Launcher, Selection,
};
use inkcut_protocol::ProtocolKind;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "inkcut-extension", version, about = "Send editor documents to Inkcut")]
struct Cli {
    /// YAML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the selected nodes of a document in Inkcut.
    Send {
        /// Selected node as ID=TAG (or just ID). Repeat for each node.
        #[arg(long = "node", value_name = "ID=TAG")]
        nodes: Vec<String>,

        /// Run Inkcut from a development checkout instead of the installed
        /// command.
        #[arg(long, conflicts_with = "program")]
        source: bool,

        /// Installed Inkcut program to run.
        #[arg(long)]
        program: Option<String>,

        /// Serialized document; `-` reads stdin.
        #[arg(default_value = "-")]
        document: String,
    },

    /// Encode a YAML command job and write it to stdout.
    Encode {
        /// Device protocol (overrides the config file).
        #[arg(long)]
        protocol: Option<ProtocolKind>,

        /// Job file; `-` reads stdin.
        #[arg(default_value = "-")]
        job: String,
    },
}

fn read_input(path: &str) -> ExtensionResult<Vec<u8>> {
    if path == "-" {
        let mut data = Vec::new();
        std::io::stdin().read_to_end(&mut data)?;
        Ok(data)
    } else {
        Ok(std::fs::read(path)?)
    }
}

fn run(cli: Cli) -> ExtensionResult<()> {
    let config = match &cli.config {
        Some(path) => ExtensionConfig::load(path)?,
        None => ExtensionConfig::default(),
    };

    match cli.command {
        Commands::Send {
            nodes,
            source,
            program,
            document,
        } => {
            let launcher = if source {
                Launcher::source()
            } else if let Some(program) = program {
                Launcher::Installed { program }
            } else {
                config.launcher
            };

            // Check the selection before reading a possibly large document.
            let selection = Selection::parse(&nodes)?;
            selection.validate()?;

            let document = read_input(&document)?;
            Extension::new(launcher).run(&selection, &document)
        }
        Commands::Encode { protocol, job } => {
            let protocol = protocol.unwrap_or(config.protocol);
            let text = String::from_utf8_lossy(&read_input(&job)?).into_owned();
            let encoded = encode_job(&text, protocol)?;

            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&encoded)?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = ?err, "extension failed");
            eprintln!("{}", err.user_message());
            ExitCode::FAILURE
        }
    }
}
