//! Logging and Diagnostics
//!
//! - Structured JSON logs in daily rolling files (tracing-appender)
//! - Human-readable stderr output; stdout is reserved for command results
//! - `log` facade events bridged into tracing
//! - miette report hook tuned to the detected terminal
//! - Background gzip of rolled log files

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use console::style;
use flate2::write::GzEncoder;
use flate2::Compression;
use miette::Diagnostic;
use supports_color::Stream;
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::ConfigError;
use crate::core::preprocess::PreprocessError;
use crate::ingestion::IngestionError;

/// Base name of the rolling log file
const LOG_FILE: &str = "hotel-enrich.log";

static TERMINAL_CAPS: OnceLock<TerminalCapabilities> = OnceLock::new();

fn get_terminal_caps() -> &'static TerminalCapabilities {
    TERMINAL_CAPS.get_or_init(TerminalCapabilities::detect)
}

// ============================================================================
// Terminal Capability Detection
// ============================================================================

/// Terminal color support levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorLevel {
    TrueColor,
    Ansi256,
    Ansi16,
    NoColor,
}

/// Detected capabilities of the diagnostic stream (stderr)
#[derive(Debug, Clone)]
pub struct TerminalCapabilities {
    pub color_level: ColorLevel,
    pub supports_unicode: bool,
    pub is_interactive: bool,
}

impl TerminalCapabilities {
    pub fn detect() -> Self {
        use is_terminal::IsTerminal;

        let color_level = match supports_color::on(Stream::Stderr) {
            Some(support) if support.has_16m => ColorLevel::TrueColor,
            Some(support) if support.has_256 => ColorLevel::Ansi256,
            Some(support) if support.has_basic => ColorLevel::Ansi16,
            _ => ColorLevel::NoColor,
        };

        let supports_unicode = std::env::var("TERM")
            .map(|t| !t.contains("dumb"))
            .unwrap_or(true)
            && std::env::var("LANG")
                .map(|l| l.contains("UTF-8") || l.contains("utf8"))
                .unwrap_or(true);

        Self {
            color_level,
            supports_unicode,
            is_interactive: io::stderr().is_terminal(),
        }
    }

    pub fn should_colorize(&self) -> bool {
        self.is_interactive && self.color_level != ColorLevel::NoColor
    }
}

// ============================================================================
// Logging Initialization
// ============================================================================

/// Initialize logging.
///
/// `level` is the filter used when `RUST_LOG` is unset. With `json_file`
/// set, JSON events also go to `<data_dir>/logs/hotel-enrich.log.YYYY-MM-DD`
/// and the returned guard must be held until exit so buffered lines flush.
pub fn init(level: &str, data_dir: &Path, json_file: bool) -> Option<WorkerGuard> {
    let log_dir = data_dir.join("logs");
    let (file_layer, guard) = if json_file {
        match fs::create_dir_all(&log_dir) {
            Ok(()) => {
                let appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE);
                let (non_blocking, guard) = tracing_appender::non_blocking(appender);
                let layer = tracing_subscriber::fmt::layer()
                    .with_writer(non_blocking)
                    .json()
                    .with_file(true)
                    .with_line_number(true)
                    .with_thread_ids(true)
                    .with_target(true)
                    .with_filter(env_filter(level));
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!("Failed to create logs directory {}: {}", log_dir.display(), e);
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(get_terminal_caps().should_colorize())
        .with_target(false)
        .compact()
        .with_filter(env_filter(level));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .init();

    // The subscriber's own init usually installs the bridge already
    if let Err(e) = tracing_log::LogTracer::init() {
        log::trace!("LogTracer not installed: {}", e);
    }

    init_miette();

    if guard.is_some() {
        let dir = log_dir.clone();
        std::thread::spawn(move || compress_old_logs(dir));
        log::debug!("Logging to {} (daily rolling)", log_dir.join(LOG_FILE).display());
    }

    guard
}

/// `RUST_LOG` if set, else `level`, else info.
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Rolled files from previous days that are not yet compressed.
fn should_compress(name: &str, today_suffix: &str) -> bool {
    name.strip_prefix(LOG_FILE)
        .and_then(|rest| rest.strip_prefix('.'))
        .map(|date| !date.is_empty() && date != today_suffix && !date.ends_with(".gz"))
        .unwrap_or(false)
}

fn compress_old_logs(log_dir: PathBuf) {
    let today_suffix = chrono::Local::now().format("%Y-%m-%d").to_string();

    let Ok(entries) = fs::read_dir(&log_dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !should_compress(name, &today_suffix) {
            continue;
        }
        match compress_file(&path) {
            Ok(()) => log::info!("Compressed old log: {:?}", path),
            Err(e) => log::warn!("Failed to compress old log {:?}: {}", path, e),
        }
    }
}

/// Gzip `path` to `path.gz` and remove the original.
fn compress_file(path: &Path) -> io::Result<()> {
    let mut gz_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No filename"))?
        .to_os_string();
    gz_name.push(".gz");
    let gz_path = path.with_file_name(gz_name);

    if gz_path.exists() {
        return Ok(());
    }

    let mut reader = io::BufReader::new(fs::File::open(path)?);
    let mut encoder = GzEncoder::new(fs::File::create(&gz_path)?, Compression::default());
    io::copy(&mut reader, &mut encoder)?;
    encoder.finish()?;

    fs::remove_file(path)
}

fn init_miette() {
    let caps = get_terminal_caps();

    // A hook may already be set (tests, embedding applications)
    let _ = miette::set_hook(Box::new(move |_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(caps.color_level == ColorLevel::TrueColor)
                .unicode(caps.supports_unicode)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .color(caps.should_colorize())
                .build(),
        )
    }));
}

// ============================================================================
// Diagnostic Error Types (miette integration)
// ============================================================================

/// Fatal command-line error
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code("HOTEL_ENRICH::ERROR"))]
pub struct CliError {
    message: String,

    #[help]
    help_text: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            help_text: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help_text = Some(help.into());
        self
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::new(e.to_string()).with_help("Fix the file or omit --config to use defaults")
    }
}

impl From<IngestionError> for CliError {
    fn from(e: IngestionError) -> Self {
        let help = match &e {
            IngestionError::UnknownProvider(_) => "Known providers: elong, agoda",
            IngestionError::Io { .. } => "Check the input path, or pass - to read stdin",
            _ => "Check the payload format",
        };
        Self::new(e.to_string()).with_help(help)
    }
}

impl From<PreprocessError> for CliError {
    fn from(e: PreprocessError) -> Self {
        Self::new(e.to_string()).with_help("Check the spelling rule file")
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("Failed to serialize output: {}", e))
    }
}

// ============================================================================
// Console Output Utilities
// ============================================================================

/// Status line on stderr
pub fn print_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), style(message).green());
}

pub fn print_warning(message: &str) {
    eprintln!("{} {}", style("!").yellow(), style(message).yellow().bold());
}
