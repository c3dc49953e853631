//! CLI Tooling
//!
//! Command-line interface over one deskfs session. Each invocation opens the
//! session snapshot, runs a command against it, and leaves the store holding the
//! result.

use crate::config::{ConfigLoader, DeskfsConfig};
use crate::error::{ApiError, StorageError};
use crate::explorer::format::{format_section_heading, render_file_info, render_listing, render_tree};
use crate::logging::LoggingConfig;
use crate::session::Session;
use crate::shell::ShellOutput;
use crate::snapshot::Snapshot;
use crate::store::{MemorySnapshotStore, SledSnapshotStore, SnapshotStore};
use crate::tooling::repl::Repl;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// deskfs - virtual desktop file system
#[derive(Parser)]
#[command(name = "deskfs")]
#[command(about = "In-memory virtual file system with persistent session snapshots")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Keep the session in memory only; nothing is read from or written to disk
    #[arg(long)]
    pub ephemeral: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load configuration from `--config` or the standard sources.
    pub fn load_config(&self) -> Result<DeskfsConfig, ApiError> {
        let config = match &self.config {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Ok(config)
    }

    /// Logging settings with `--log-level`, `--log-format` and `--log-output`
    /// applied over `base`. `--log-file` is passed to `init_logging` on its own
    /// so that it outranks `DESKFS_LOG_FILE`.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        config
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive terminal session
    Shell,
    /// Run shell command lines, one per argument
    Exec {
        #[arg(required = true)]
        lines: Vec<String>,
    },
    /// List a directory
    Ls {
        /// Directory to list (default: working directory)
        path: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show a directory tree
    Tree {
        path: Option<String>,
    },
    /// Show name, type, size and timestamps of an entry
    Info {
        path: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Export, import or reset the session snapshot
    Snapshot {
        #[command(subcommand)]
        command: SnapshotCommands,
    },
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum SnapshotCommands {
    /// Write the snapshot as JSON
    Export {
        /// Destination file (default: stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Replace the whole tree with a JSON snapshot
    Import {
        file: PathBuf,
    },
    /// Delete everything and start from an empty root
    Reset {
        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
}

/// CLI context for command execution
pub struct CliContext {
    session: Session,
    config: DeskfsConfig,
    store_path: Option<PathBuf>,
}

impl CliContext {
    /// Open the session described by `config`.
    ///
    /// `ephemeral` swaps the sled store for an in-memory one.
    pub fn new(config: DeskfsConfig, ephemeral: bool) -> Result<Self, ApiError> {
        let (store, store_path): (Arc<dyn SnapshotStore>, Option<PathBuf>) = if ephemeral {
            (Arc::new(MemorySnapshotStore::new()), None)
        } else {
            let path = config.storage.resolve_store_path()?;
            (Arc::new(SledSnapshotStore::open(&path)?), Some(path))
        };
        let session = Session::open(store, &config.storage.snapshot_key);
        info!(
            store = ?store_path,
            key = %config.storage.snapshot_key,
            "opened session"
        );
        Ok(Self {
            session,
            config,
            store_path,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Sled directory backing the session; None when ephemeral
    pub fn store_path(&self) -> Option<&Path> {
        self.store_path.as_deref()
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Shell => {
                Repl::new(self.session.shell(), self.session.handle()).run()?;
                Ok(String::new())
            }
            Commands::Exec { lines } => Ok(self.handle_exec(lines)),
            Commands::Ls { path, format } => self.handle_ls(path.as_deref(), format),
            Commands::Tree { path } => {
                let tree = self.session.handle().read().tree(path.as_deref().unwrap_or("."))?;
                Ok(render_tree(&tree))
            }
            Commands::Info { path, format } => self.handle_info(path, format),
            Commands::Snapshot { command } => match command {
                SnapshotCommands::Export { output } => self.handle_snapshot_export(output.as_deref()),
                SnapshotCommands::Import { file } => self.handle_snapshot_import(file),
                SnapshotCommands::Reset { force } => self.handle_snapshot_reset(*force),
            },
            Commands::Config { command } => match command {
                ConfigCommands::Show => self.config.to_toml_string(),
            },
        }
    }

    fn handle_exec(&self, lines: &[String]) -> String {
        let shell = self.session.shell();
        lines
            .iter()
            .filter_map(|line| match shell.execute(line) {
                ShellOutput::Text(text) => Some(text),
                ShellOutput::Clear | ShellOutput::Nothing => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn handle_ls(&self, path: Option<&str>, format: &str) -> Result<String, ApiError> {
        let fs = self.session.handle();
        let fs = fs.read();
        let path = path.unwrap_or(".");
        let entries = fs.ls(path)?;
        match format {
            "json" => Ok(serde_json::to_string_pretty(&entries).map_err(StorageError::from)?),
            "text" => Ok(format!(
                "{}\n{}",
                format_section_heading(&fs.absolute_path(path)?),
                render_listing(&entries)
            )),
            other => Err(invalid_format(other)),
        }
    }

    fn handle_info(&self, path: &str, format: &str) -> Result<String, ApiError> {
        let info = self.session.handle().read().get_file_info(path)?;
        match format {
            "json" => Ok(serde_json::to_string_pretty(&info).map_err(StorageError::from)?),
            "text" => Ok(render_file_info(&info)),
            other => Err(invalid_format(other)),
        }
    }

    fn handle_snapshot_export(&self, output: Option<&Path>) -> Result<String, ApiError> {
        let json = self.session.handle().read().snapshot().to_json_pretty()?;
        match output {
            Some(path) => {
                std::fs::write(path, json).map_err(StorageError::from)?;
                Ok(format!("Snapshot written to {}", path.display()))
            }
            None => Ok(json),
        }
    }

    fn handle_snapshot_import(&self, file: &Path) -> Result<String, ApiError> {
        let bytes = std::fs::read(file).map_err(StorageError::from)?;
        let snapshot = Snapshot::from_json_slice(&bytes)?;
        let fs = self.session.handle();
        let mut fs = fs.write();
        fs.restore(&snapshot)?;
        Ok(format!(
            "Imported {} entries from {}",
            fs.node_count() - 1,
            file.display()
        ))
    }

    fn handle_snapshot_reset(&self, force: bool) -> Result<String, ApiError> {
        if !force {
            use dialoguer::Confirm;
            let confirmed = Confirm::new()
                .with_prompt("Delete every file and directory?")
                .default(false)
                .interact()?;
            if !confirmed {
                return Ok("Reset cancelled".to_string());
            }
        }
        self.session.handle().write().reset()?;
        Ok("File system reset".to_string())
    }
}

fn invalid_format(format: &str) -> ApiError {
    ApiError::InvalidArgument(format!(
        "Invalid format: {} (must be 'text' or 'json')",
        format
    ))
}
