//! Log line formatter that stamps every event with the simulation frame.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use time::macros::format_description;
use time::{format_description::FormatItem, OffsetDateTime};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Frames simulated so far by the driving loop.
static FRAME_COUNTER: AtomicU64 = AtomicU64::new(0);

const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second].[subsecond digits:3]");

const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Formats events as `time frame LEVEL target: fields`.
///
/// The frame number lets log lines be lined up against a replay of the same seed.
pub struct FrameFormatter;

impl<S, N> FormatEvent<S, N> for FrameFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();
        let timestamp = OffsetDateTime::now_utc().format(TIMESTAMP_FORMAT).map_err(|_| fmt::Error)?;

        if ansi {
            write!(writer, "{DIM}{timestamp} #{:06}{RESET} ", frame_count())?;
            write!(writer, "{}{:>5}{RESET} ", level_color(meta.level()), meta.level())?;
            write!(writer, "{DIM}{}:{RESET} ", meta.target())?;
        } else {
            write!(writer, "{timestamp} #{:06} {:>5} {}: ", frame_count(), meta.level(), meta.target())?;
        }

        if let Some(scope) = ctx.event_scope() {
            for span in scope.from_root() {
                write!(writer, "{}: ", span.name())?;
            }
        }

        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn level_color(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "\x1b[35m",
        Level::DEBUG => "\x1b[34m",
        Level::INFO => "\x1b[32m",
        Level::WARN => "\x1b[33m",
        _ => "\x1b[31m",
    }
}

/// Advances the frame counter; called once per simulated frame by the loop.
pub fn increment_frame() {
    FRAME_COUNTER.fetch_add(1, Ordering::Relaxed);
}

pub fn frame_count() -> u64 {
    FRAME_COUNTER.load(Ordering::Relaxed)
}
