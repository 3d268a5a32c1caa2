//! Log writer module
//!
//! Thread-safe log writing to files or stdout/stderr, with runtime
//! retargeting so a SIGHUP reload can move logs to new files.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

/// Global log writer instance
static LOG_WRITER: OnceLock<LogWriter> = OnceLock::new();

/// Log output target
enum LogTarget {
    /// Write to stdout
    Stdout,
    /// Write to stderr
    Stderr,
    /// Write to an append-mode file
    File(File),
}

impl LogTarget {
    fn from_path(path: Option<&str>, fallback_stderr: bool) -> io::Result<Self> {
        match path {
            Some(p) => Ok(Self::File(open_log_file(p)?)),
            None if fallback_stderr => Ok(Self::Stderr),
            None => Ok(Self::Stdout),
        }
    }

    fn write_line(&mut self, message: &str) {
        match self {
            Self::Stdout => println!("{message}"),
            Self::Stderr => eprintln!("{message}"),
            Self::File(file) => {
                let _ = writeln!(file, "{message}");
            }
        }
    }
}

/// Thread-safe log writer with separate access and error targets
pub struct LogWriter {
    access: Mutex<LogTarget>,
    error: Mutex<LogTarget>,
}

impl LogWriter {
    fn new(access_log_file: Option<&str>, error_log_file: Option<&str>) -> io::Result<Self> {
        Ok(Self {
            access: Mutex::new(LogTarget::from_path(access_log_file, false)?),
            error: Mutex::new(LogTarget::from_path(error_log_file, true)?),
        })
    }

    /// Write to the access/info log
    pub fn write_access(&self, message: &str) {
        if let Ok(mut target) = self.access.lock() {
            target.write_line(message);
        }
    }

    /// Write to the error log
    pub fn write_error(&self, message: &str) {
        if let Ok(mut target) = self.error.lock() {
            target.write_line(message);
        }
    }

    /// Retarget both logs (runtime reconfiguration on reload)
    pub fn retarget(
        &self,
        access_log_file: Option<&str>,
        error_log_file: Option<&str>,
    ) -> io::Result<()> {
        let new_access = LogTarget::from_path(access_log_file, false)?;
        let new_error = LogTarget::from_path(error_log_file, true)?;

        if let Ok(mut target) = self.access.lock() {
            *target = new_access;
        }
        if let Ok(mut target) = self.error.lock() {
            *target = new_error;
        }
        Ok(())
    }
}

/// Open or create a log file for appending
fn open_log_file(path: &str) -> io::Result<File> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}

/// Initialize the global log writer
///
/// Should be called once at application startup. Returns an error if a
/// configured log file cannot be opened.
pub fn init(access_log_file: Option<&str>, error_log_file: Option<&str>) -> io::Result<()> {
    let writer = LogWriter::new(access_log_file, error_log_file)?;
    LOG_WRITER.set(writer).map_err(|_| {
        io::Error::new(
            io::ErrorKind::AlreadyExists,
            "Log writer already initialized",
        )
    })
}

/// Get the global log writer, if initialized
pub fn get() -> Option<&'static LogWriter> {
    LOG_WRITER.get()
}
