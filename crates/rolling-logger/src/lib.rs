//! Rolling file logger with an in-memory circular buffer.
//!
//! Log lines go to `{app_name}.{YYYY-MM-DD}.log` in the log directory via
//! `tracing-appender`; a new file is started each day and only the newest
//! [`MAX_LOG_FILES`] are kept. The last [`BUFFER_CAPACITY`] lines are also
//! held in memory so the app can show them without touching the disk.
//! Records from the `log` facade are forwarded as well.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

pub const MAX_LOG_FILES: usize = 7;
pub const BUFFER_CAPACITY: usize = 500;

static BUFFER: OnceLock<LogBuffer> = OnceLock::new();
// keeps the background file writer alive for the whole process
static GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Bounded list of the most recent log lines
#[derive(Clone)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    fn push(&self, buf: &[u8]) {
        let Ok(mut lines) = self.lines.lock() else {
            return;
        };
        for line in String::from_utf8_lossy(buf).lines() {
            if line.trim().is_empty() {
                continue;
            }
            lines.push_back(line.trim_end().to_string());
            if lines.len() > self.capacity {
                lines.pop_front();
            }
        }
    }

    /// Buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }
}

/// `MakeWriter` that copies everything written through `inner` into a
/// [`LogBuffer`]
#[derive(Clone)]
pub struct BufferedWriter<W> {
    inner: W,
    buffer: LogBuffer,
}

impl<W> BufferedWriter<W> {
    pub fn new(inner: W, buffer: LogBuffer) -> Self {
        Self { inner, buffer }
    }
}

pub struct BufferedHandle<W> {
    inner: W,
    buffer: LogBuffer,
}

impl<W: Write> Write for BufferedHandle<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.buffer.push(&buf[..written]);
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<'a, W: MakeWriter<'a>> MakeWriter<'a> for BufferedWriter<W> {
    type Writer = BufferedHandle<W::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        BufferedHandle {
            inner: self.inner.make_writer(),
            buffer: self.buffer.clone(),
        }
    }
}

fn daily_appender(log_dir: &Path, app_name: &str) -> Result<RollingFileAppender, String> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(app_name)
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(log_dir)
        .map_err(|e| format!("Failed to create log appender: {}", e))
}

/// Install the global logger. Fails if a global subscriber is already set.
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), String> {
    std::fs::create_dir_all(&log_dir).map_err(|e| format!("Failed to create log dir: {}", e))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(daily_appender(&log_dir, app_name)?);
    let buffer = LogBuffer::new(BUFFER_CAPACITY);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(BufferedWriter::new(non_blocking, buffer.clone()))
        .finish();

    #[cfg(target_os = "android")]
    {
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Info)
                .with_tag(app_name),
        );
        tracing::subscriber::set_global_default(subscriber).map_err(|e| e.to_string())?;
    }
    #[cfg(not(target_os = "android"))]
    {
        use tracing_subscriber::util::SubscriberInitExt;
        subscriber.try_init().map_err(|e| e.to_string())?;
    }

    let _ = GUARD.set(guard);
    let _ = BUFFER.set(buffer);
    Ok(())
}

fn ensure_init() -> Result<(), String> {
    if BUFFER.get().is_none() {
        return Err("logger not initialized".to_string());
    }
    Ok(())
}

pub fn info(msg: &str) -> Result<(), String> {
    ensure_init()?;
    tracing::info!("{}", msg);
    Ok(())
}

pub fn warn(msg: &str) -> Result<(), String> {
    ensure_init()?;
    tracing::warn!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), String> {
    ensure_init()?;
    tracing::error!("{}", msg);
    Ok(())
}

/// Most recent log lines, empty before [`init_logger`]
pub fn recent_logs() -> Vec<String> {
    BUFFER.get().map(LogBuffer::recent).unwrap_or_default()
}
