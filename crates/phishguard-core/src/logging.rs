//! Logging init: file under the XDG state dir, falling back to stderr when
//! the log file cannot be opened.

use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Per-event writer handed out by `LogFile`. Falls back to stderr when the
/// file handle cannot be cloned.
enum LogSink {
    File(fs::File),
    Stderr,
}

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct LogFile(fs::File);

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.0.try_clone().map(LogSink::File).unwrap_or(LogSink::Stderr)
    }
}

fn open_log_file() -> io::Result<(fs::File, PathBuf)> {
    let state_home = xdg::BaseDirectories::with_prefix("phishguard")
        .map(|d| d.get_state_home())
        .map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?;
    fs::create_dir_all(&state_home)?;
    let path = state_home.join("phishguard.log");
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,phishguard=debug"))
}

/// Initialize structured logging to `~/.local/state/phishguard/phishguard.log`.
/// If the log file cannot be opened (e.g. state dir unwritable), logs go to
/// stderr instead; the process never fails to start because of logging.
pub fn init() {
    match open_log_file() {
        Ok((file, path)) => {
            let writer: BoxMakeWriter = BoxMakeWriter::new(LogFile(file));
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(writer)
                .with_ansi(false)
                .init();
            tracing::info!("phishguard logging initialized at {}", path.display());
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(io::stderr)
                .with_ansi(false)
                .init();
            tracing::warn!("log file unavailable ({e}); logging to stderr");
        }
    }
}
