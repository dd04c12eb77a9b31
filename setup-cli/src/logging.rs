use anyhow::Result;
use chrono::Local;
use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};
use tracing::{Event, Level, Subscriber};
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

// --- Formatter ---

struct LocalFmt;

impl<S, N> FormatEvent<S, N> for LocalFmt
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
        let ansi = writer.has_ansi_escapes();

        let stamp = Local::now().format("%H:%M:%S%.3f");
        if ansi {
            write!(writer, "\x1b[2m{stamp}\x1b[0m ")?;
        } else {
            write!(writer, "{stamp} ")?;
        }

        let color = match *meta.level() {
            Level::ERROR => "1;31",
            Level::WARN => "1;33",
            Level::INFO => "1;32",
            Level::DEBUG => "1;34",
            Level::TRACE => "1;35",
        };
        if ansi {
            write!(writer, "\x1b[{color}m{:>5}\x1b[0m ", meta.level())?;
        } else {
            write!(writer, "{:>5} ", meta.level())?;
        }

        if let Some(module) = meta.module_path() {
            let module = module.rsplit("::").next().unwrap_or(module);
            if ansi {
                write!(writer, "\x1b[36m{module}\x1b[0m ")?;
            } else {
                write!(writer, "{module} ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Late-bound file writer ---

/// A MakeWriter that can be pointed at a file after initialization.
/// While no file is set, all writes are discarded.
#[derive(Clone)]
struct FileSlot(Arc<Mutex<Option<File>>>);

struct SlotWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for SlotWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match &mut *self.0 {
            Some(f) => f.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut *self.0 {
            Some(f) => f.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for FileSlot {
    type Writer = SlotWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        SlotWriter(self.0.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

// --- Statics ---

type SetStrFn = Box<dyn Fn(&str) -> Result<()> + Send + Sync>;
type SetBoolFn = Box<dyn Fn(bool) -> Result<()> + Send + Sync>;

static SET_LOG_LEVEL: OnceLock<SetStrFn> = OnceLock::new();
static SET_STDERR_ENABLED: OnceLock<SetBoolFn> = OnceLock::new();
static FILE_SLOT: OnceLock<Arc<Mutex<Option<File>>>> = OnceLock::new();

/// `RUST_LOG` wins over the configured level.
fn make_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

fn store_level_handle<S>(handle: reload::Handle<EnvFilter, S>)
where
    S: Subscriber + Send + Sync + 'static,
{
    let _ = SET_LOG_LEVEL.set(Box::new(move |level_str: &str| {
        let filter = EnvFilter::try_new(level_str)
            .map_err(|e| anyhow::anyhow!("invalid log level '{level_str}': {e}"))?;
        handle
            .reload(filter)
            .map_err(|e| anyhow::anyhow!("filter reload failed: {e}"))
    }));
}

fn store_stderr_handle<S>(handle: reload::Handle<EnvFilter, S>)
where
    S: Subscriber + Send + Sync + 'static,
{
    let _ = SET_STDERR_ENABLED.set(Box::new(move |enabled: bool| {
        // The global level filter stays the ceiling.
        let filter = if enabled {
            EnvFilter::new("trace")
        } else {
            EnvFilter::new("off")
        };
        handle
            .reload(filter)
            .map_err(|e| anyhow::anyhow!("stderr reload failed: {e}"))
    }));
}

// --- Public API ---

/// Changes the active log filter at runtime.
/// Accepts a bare level ("error", "warn", "info", "debug", "trace")
/// or any full EnvFilter directive.
pub fn set_log_level(level: &str) -> Result<()> {
    match SET_LOG_LEVEL.get() {
        Some(f) => f(level),
        None => anyhow::bail!("logging not yet initialized"),
    }
}

/// Shows or hides log output on stderr without affecting file logging.
pub fn set_stderr_enabled(enabled: bool) -> Result<()> {
    match SET_STDERR_ENABLED.get() {
        Some(f) => f(enabled),
        None => anyhow::bail!("logging not yet initialized"),
    }
}

/// Starts appending log output to `path`, replacing any open log file.
/// The directory must already exist.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| anyhow::anyhow!("cannot open log file '{}': {e}", path.display()))?;

    match FILE_SLOT.get() {
        Some(slot) => {
            *slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(file);
            Ok(())
        }
        None => anyhow::bail!("logging not yet initialized"),
    }
}

/// Initializes logging. Call once at startup, before the configuration is
/// read; [`set_log_level`] applies the configured level afterwards.
///
/// - Stderr: colored when attached to a terminal, plain when piped.
///   Stdout is left to command output.
/// - File: inactive until [`enable_file_logging`] is called.
/// - Level: `default_level`, or the RUST_LOG env var when set.
pub fn init_logging(default_level: &str) {
    let file_inner: Arc<Mutex<Option<File>>> = Arc::new(Mutex::new(None));
    let _ = FILE_SLOT.set(file_inner.clone());

    let (stderr_gate, stderr_handle) = reload::Layer::new(EnvFilter::new("trace"));
    let (level_filter, level_handle) = reload::Layer::new(make_filter(default_level));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_filter(stderr_gate);

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt)
        .with_ansi(false)
        .with_writer(FileSlot(file_inner));

    if tracing_subscriber::registry()
        .with(level_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .is_ok()
    {
        store_level_handle(level_handle);
        store_stderr_handle(stderr_handle);
    }
}

/// True when `RUST_LOG` is set and should win over configured levels.
pub fn env_overrides_level() -> bool {
    std::env::var_os(EnvFilter::DEFAULT_ENV).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_applies_without_rust_log() {
        if env_overrides_level() {
            return;
        }
        assert_eq!(make_filter("debug").to_string(), "debug");
    }
}
