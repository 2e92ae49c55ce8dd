//! Prompt logging for the vault password client.
//!
//! When `LOG_PATH` is set, the client appends one informational line per
//! invocation to a size-rotated file. The invoking workflow tails that file to
//! learn that the client is about to block on input, then answers over stdin.
//!
//! The logger is an explicit handle: built once at startup, handed to the
//! resolution routine, and scoped with a thread-default dispatcher. No global
//! logging state is installed or mutated.

use std::env;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::dispatcher::{self, Dispatch};

/// Environment variable naming the prompt-log file.
pub const LOG_PATH_ENV_VAR: &str = "LOG_PATH";

/// Rotation threshold for the prompt log.
const MAX_LOG_BYTES: u64 = 1024 * 1024;

/// Rotated files kept around (`<path>.1` .. `<path>.N`).
const LOG_BACKUPS: usize = 3;

/// Process-scoped handle for the prompt log.
///
/// Holds a [`Dispatch`] over the rotating file sink when `LOG_PATH` is set,
/// and nothing otherwise. The handle is cheap to pass by reference and keeps
/// the sink alive for the process lifetime.
pub struct PromptLog {
    dispatch: Option<Dispatch>,
}

impl PromptLog {
    /// Build the handle from `LOG_PATH`. An unset variable leaves logging
    /// disabled; a set but unopenable path is an error.
    pub fn from_env() -> Result<Self> {
        match env::var_os(LOG_PATH_ENV_VAR) {
            Some(path) => Self::attach(PathBuf::from(path)),
            None => Ok(Self::disabled()),
        }
    }

    /// A handle that drops every event.
    pub fn disabled() -> Self {
        Self { dispatch: None }
    }

    /// Attach a size-rotated file sink at `path`.
    pub fn attach(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let writer = RotatingFileWriter::open(&path, MAX_LOG_BYTES, LOG_BACKUPS)
            .with_context(|| format!("failed to open prompt log at {}", path.display()))?;
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .with_writer(Mutex::new(writer))
            .finish();
        Ok(Self {
            dispatch: Some(Dispatch::new(subscriber)),
        })
    }

    /// Whether a sink is attached.
    pub fn is_enabled(&self) -> bool {
        self.dispatch.is_some()
    }

    /// Run `f` with this handle as the default tracing dispatcher. Without an
    /// attached sink, `f` runs against the ambient default instead.
    pub fn scope<T>(&self, f: impl FnOnce() -> T) -> T {
        match &self.dispatch {
            Some(dispatch) => dispatcher::with_default(dispatch, f),
            None => f(),
        }
    }
}

/// Append-only file writer with size-based rotation.
///
/// Before a write that would push the active file past `max_bytes`, the file
/// is renamed to `<path>.1`, existing backups shift to `.2`, `.3`, and so on,
/// the oldest is discarded, and writing continues in a fresh file. A single
/// record larger than `max_bytes` goes whole into the active file rather than
/// rotating forever.
pub struct RotatingFileWriter {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    file: File,
    len: u64,
}

impl RotatingFileWriter {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl Into<PathBuf>, max_bytes: u64, backups: usize) -> io::Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let len = file.metadata()?.len();
        Ok(Self {
            path,
            max_bytes,
            backups,
            file,
            len,
        })
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(format!(".{}", index));
        PathBuf::from(name)
    }

    /// Shift backups up by one, move the active file to `.1`, and start a
    /// fresh file. With zero configured backups the active file is truncated
    /// in place.
    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        if self.backups > 0 {
            for index in (1..self.backups).rev() {
                let from = self.backup_path(index);
                if from.exists() {
                    fs::rename(&from, self.backup_path(index + 1))?;
                }
            }
            fs::rename(&self.path, self.backup_path(1))?;
        }
        self.file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        self.len = 0;
        Ok(())
    }
}

impl Write for RotatingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.len > 0 && self.len + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        let written = self.file.write(buf)?;
        self.len += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}
