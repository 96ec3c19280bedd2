//! Process-wide logging for the simulator.
//!
//! Records go to two sinks behind one global `EnvFilter`:
//!
//! - stdout, gated separately so the terminal UI and `--report` can silence it
//! - an optional log file, attached and detached at runtime
//!
//! The filter itself can be swapped at runtime with [`set_log_level`].

use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{
        Arc, Mutex, MutexGuard, OnceLock, PoisonError,
        atomic::{AtomicBool, Ordering},
    },
};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{Event, Level, Subscriber, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

const DIM: &str = "\x1b[2m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

fn level_color(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "\x1b[1;31m",
        Level::WARN => "\x1b[1;33m",
        Level::INFO => "\x1b[1;32m",
        Level::DEBUG => "\x1b[1;34m",
        Level::TRACE => "\x1b[1;35m",
    }
}

/// `2026-10-19T15:04:05.123+09:00  INFO baito_core::store: job added id=3`
struct SimulatorFormat;

impl<S, N> FormatEvent<S, N> for SimulatorFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");

        if writer.has_ansi_escapes() {
            let color = level_color(meta.level());
            write!(
                writer,
                "{DIM}{timestamp}{RESET} {color}{:>5}{RESET} {CYAN}{}:{RESET} ",
                meta.level(),
                meta.target()
            )?;
        } else {
            write!(writer, "{timestamp} {:>5} {}: ", meta.level(), meta.target())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Log file sink ---

type FileCell = Arc<Mutex<Option<File>>>;

/// Writer factory for the file sink. Writes are dropped while no file is
/// attached.
#[derive(Clone)]
struct LogFile(FileCell);

struct LogFileWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for LogFileWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        self.0.as_mut().map_or(Ok(buf.len()), |file| file.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.as_mut().map_or(Ok(()), |file| file.flush())
    }
}

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogFileWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LogFileWriter(lock_file(&self.0))
    }
}

/// A poisoned lock still guards a usable file handle.
fn lock_file(cell: &Mutex<Option<File>>) -> MutexGuard<'_, Option<File>> {
    cell.lock().unwrap_or_else(PoisonError::into_inner)
}

// --- Runtime control ---

type ReloadFn<T> = Box<dyn Fn(T) -> Result<()> + Send + Sync>;

/// Handles captured by [`init_logging`] for later reconfiguration.
struct LogControl {
    reload_level: ReloadFn<EnvFilter>,
    reload_stdout: ReloadFn<EnvFilter>,
    file: FileCell,
}

static CONTROL: OnceLock<LogControl> = OnceLock::new();
static STDOUT_ENABLED: AtomicBool = AtomicBool::new(true);

fn control() -> Result<&'static LogControl> {
    CONTROL.get().context("logging not yet initialized")
}

fn reloader<S>(
    handle: reload::Handle<EnvFilter, S>,
    what: &'static str,
) -> ReloadFn<EnvFilter>
where
    S: Subscriber + Send + Sync + 'static,
{
    Box::new(move |filter| {
        handle
            .reload(filter)
            .with_context(|| format!("{what} filter reload failed"))
    })
}

/// `RUST_LOG` when set, otherwise `default_filter`, otherwise `info`.
fn make_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Parses a bare level (`"debug"`) or a full directive
/// (`"info,baito_core=trace"`).
fn parse_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive).with_context(|| format!("invalid log level '{directive}'"))
}

/// Replaces the global log filter.
pub fn set_log_level(directive: &str) -> Result<()> {
    let filter = parse_filter(directive)?;
    (control()?.reload_level)(filter)
}

/// Turns stdout output on or off. File logging is unaffected.
pub fn set_stdout_enabled(enabled: bool) -> Result<()> {
    // The global filter still caps what "trace" lets through.
    let gate = EnvFilter::new(if enabled { "trace" } else { "off" });
    (control()?.reload_stdout)(gate)?;
    STDOUT_ENABLED.store(enabled, Ordering::Relaxed);
    Ok(())
}

/// Whether records currently reach stdout.
pub fn stdout_enabled() -> bool {
    STDOUT_ENABLED.load(Ordering::Relaxed)
}

/// Hands stdout over to the report or the terminal UI.
///
/// Stdout is silenced first, so nothing logged while the filter is replaced
/// or the file is attached reaches it. `level` replaces the global filter
/// when given; `log_file` is attached when given.
pub fn apply_settings(
    level: Option<&str>,
    log_file: Option<&Path>,
) -> Result<()> {
    set_stdout_enabled(false)?;
    if let Some(level) = level {
        set_log_level(level)?;
    }
    if let Some(path) = log_file {
        enable_file_logging(path)?;
    }
    Ok(())
}

/// Appends records to `path`, replacing any file already attached. The
/// parent directory must exist.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))?;

    *lock_file(&control()?.file) = Some(file);
    info!(path = %path.display(), stdout = stdout_enabled(), "file logging enabled");
    Ok(())
}

/// Detaches the log file, flushing nothing further to it.
pub fn disable_file_logging() {
    if let Some(control) = CONTROL.get() {
        *lock_file(&control.file) = None;
    }
}

/// Installs the global subscriber. Later calls are ignored.
///
/// Stdout is colored only when attached to a terminal.
pub fn init_logging(default_filter: &str) {
    let file: FileCell = Arc::new(Mutex::new(None));

    let (level_layer, level_handle) = reload::Layer::new(make_filter(default_filter));
    let (stdout_gate, stdout_handle) = reload::Layer::new(EnvFilter::new("trace"));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(SimulatorFormat)
        .with_ansi(io::stdout().is_terminal())
        .with_filter(stdout_gate);

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(SimulatorFormat)
        .with_ansi(false)
        .with_writer(LogFile(Arc::clone(&file)));

    let installed = tracing_subscriber::registry()
        .with(level_layer)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .is_ok();

    if installed {
        let _ = CONTROL.set(LogControl {
            reload_level: reloader(level_handle, "log level"),
            reload_stdout: reloader(stdout_handle, "stdout"),
            file,
        });
    }
}
