//! Configuration
//!
//! Layered, highest priority first:
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`~/.config/chore-board/config.toml`)
//! 4. Compiled defaults

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chore_core::repository::Row;
use chore_core::{SuggestedTaskId, TaskId, UserId};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },

    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),

    #[error("failed to read fixture {path}: {source}")]
    ReadFixture { path: PathBuf, source: std::io::Error },

    #[error("failed to parse fixture {path}: {source}")]
    ParseFixture { path: PathBuf, source: serde_json::Error },

    /// `rest` backend selected but no URL anywhere
    #[error("backend url is required for the rest backend (--backend-url or CHORE_BACKEND_URL)")]
    MissingBackendUrl,

    #[error("no acting user configured (--user-id, CHORE_USER_ID or [session] user_id)")]
    MissingUserId,

    #[error("unknown backend kind {0:?} (expected \"rest\" or \"memory\")")]
    UnknownBackend(String),

    #[error("backend client: {0}")]
    Client(#[from] chore_core::DomainError),
}

// ---------------------------------------------------------------------------
// TOML file structs (all fields Option for partial overrides)
// ---------------------------------------------------------------------------

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigFile {
    backend: BackendFileConfig,
    session: SessionFileConfig,
    logging: LoggingFileConfig,
}

/// `[backend]` section
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct BackendFileConfig {
    kind: Option<String>,
    url: Option<String>,
    api_key: Option<String>,
    timeout_secs: Option<u64>,
    cache_family: Option<bool>,
    fixture: Option<PathBuf>,
}

/// `[session]` section
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct SessionFileConfig {
    user_id: Option<i64>,
}

/// `[logging]` section
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct LoggingFileConfig {
    dir: Option<PathBuf>,
    level: Option<String>,
    max_files: Option<usize>,
}

// ---------------------------------------------------------------------------
// CLI arguments
// ---------------------------------------------------------------------------

#[derive(clap::Parser, Debug)]
#[command(name = "chore-board", version, about = "Household chore board")]
pub struct CliArgs {
    /// Path to config file (default: `~/.config/chore-board/config.toml`)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend kind: `rest` or `memory`
    #[arg(long, env = "CHORE_BACKEND", global = true)]
    pub backend: Option<String>,

    /// Project URL of the hosted table API
    #[arg(long, env = "CHORE_BACKEND_URL", global = true)]
    pub backend_url: Option<String>,

    #[arg(long, env = "CHORE_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Acting user
    #[arg(long, env = "CHORE_USER_ID", global = true)]
    pub user_id: Option<i64>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// JSON file seeding the memory backend (`{"users": [...], ...}`)
    #[arg(long, global = true)]
    pub fixture: Option<PathBuf>,

    /// Resolve the family on every call instead of caching it
    #[arg(long, global = true)]
    pub no_family_cache: bool,

    /// Log level filter (trace, debug, info, warn, error)
    #[arg(long, env = "CHORE_LOG", global = true)]
    pub log_level: Option<String>,

    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List tasks with one status (pending, in-progress, completed)
    List {
        #[arg(short, long, default_value = "pending")]
        status: String,
    },
    /// Add a task; missing fields are asked for step by step
    Add {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        priority: Option<String>,
    },
    /// Browse the suggestion catalog
    Suggestions,
    /// Add a suggested task to the to-do list
    Accept { id: SuggestedTaskId },
    /// Show one task
    Show { id: TaskId },
    /// Move a task to its next status
    Advance { id: TaskId },
    /// Overwrite a task's status ("Pending", "In progress", "Completed")
    SetStatus { id: TaskId, status: String },
    /// Cycle a task's priority low -> medium -> high -> low
    Priority { id: TaskId },
    /// Overwrite a task's priority
    SetPriority { id: TaskId, priority: String },
    /// Delete a task for good
    Delete { id: TaskId },
    /// Show the acting user
    Whoami,
}

// ---------------------------------------------------------------------------
// Resolved configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendSettings {
    Rest {
        url: String,
        api_key: String,
        timeout: Duration,
    },
    Memory {
        fixture: Option<PathBuf>,
    },
}

/// Fully resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub backend: BackendSettings,
    pub cache_family: bool,
    pub user_id: UserId,
    pub log_dir: PathBuf,
    pub log_level: String,
    pub max_log_files: usize,
}

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_LOG_FILES: usize = 7;

impl AppConfig {
    /// Load configuration by merging CLI args, env vars, and a TOML file.
    ///
    /// An explicit `--config` that does not exist is an error; a missing
    /// default file is treated as empty.
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        Self::resolve(cli, file)
    }

    fn resolve(cli: &CliArgs, file: ConfigFile) -> Result<Self, ConfigError> {
        let backend_file = file.backend;

        let kind = cli
            .backend
            .clone()
            .or(backend_file.kind)
            .unwrap_or_else(|| "rest".to_string());

        let backend = match kind.trim().to_ascii_lowercase().as_str() {
            "rest" => BackendSettings::Rest {
                url: cli
                    .backend_url
                    .clone()
                    .or(backend_file.url)
                    .filter(|url| !url.trim().is_empty())
                    .ok_or(ConfigError::MissingBackendUrl)?,
                api_key: cli.api_key.clone().or(backend_file.api_key).unwrap_or_default(),
                timeout: Duration::from_secs(
                    cli.timeout_secs
                        .or(backend_file.timeout_secs)
                        .unwrap_or(DEFAULT_TIMEOUT_SECS)
                        .max(1),
                ),
            },
            "memory" => BackendSettings::Memory {
                fixture: cli.fixture.clone().or(backend_file.fixture),
            },
            _ => return Err(ConfigError::UnknownBackend(kind)),
        };

        let cache_family = !cli.no_family_cache && backend_file.cache_family.unwrap_or(true);

        let user_id = cli
            .user_id
            .or(file.session.user_id)
            .map(UserId)
            .ok_or(ConfigError::MissingUserId)?;

        Ok(Self {
            backend,
            cache_family,
            user_id,
            log_dir: cli
                .log_dir
                .clone()
                .or(file.logging.dir)
                .unwrap_or_else(default_log_dir),
            log_level: cli
                .log_level
                .clone()
                .or(file.logging.level)
                .unwrap_or_else(|| "info".to_string()),
            max_log_files: file.logging.max_files.unwrap_or(DEFAULT_MAX_LOG_FILES),
        })
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("chore-board").join("config.toml"))
}

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("chore-board")
        .join("logs")
}

fn load_config_file(explicit: Option<&Path>) -> Result<ConfigFile, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(ConfigFile::default()),
        },
    };

    let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadFile {
        path: path.clone(),
        source,
    })?;
    Ok(toml::from_str(&text)?)
}

/// Read a memory backend fixture: table name -> rows
pub fn load_fixture(path: &Path) -> Result<HashMap<String, Vec<Row>>, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFixture {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::ParseFixture {
        path: path.to_path_buf(),
        source,
    })
}
