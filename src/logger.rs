use log::{Level, LevelFilter, Metadata, Record};
use spin::Once;

use crate::libs::error::LoggerError;
use crate::libs::print::{print_fmt, Print, LINE_TERMINATOR};
use crate::libs::stream_logger::instance;

#[allow(dead_code)]
mod build_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

struct SimpleLogger;

static CLOCK: Once<fn() -> u64> = Once::new();

/// Registers the millisecond clock used to timestamp log records.
///
/// Only the first registration takes effect. Without a clock records carry no
/// timestamp.
pub fn set_clock(now_ms: fn() -> u64) {
    CLOCK.call_once(|| now_ms);
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "[E]",
        Level::Warn => "[W]",
        Level::Info => "[I]",
        Level::Debug => "[D]",
        Level::Trace => "[T]",
    }
}

/// `[ssss.mmm][L][module] message\r\n`
fn write_record(out: &mut dyn Print, record: &Record, now_ms: Option<u64>) -> usize {
    let mut n = 0;
    if let Some(ms) = now_ms {
        n += print_fmt(out, format_args!("[{:04}.{:03}]", ms / 1000, ms % 1000));
    }
    n += out.print_str(level_tag(record.level()));
    if let Some(m) = record.module_path() {
        n += print_fmt(out, format_args!("[{}]", m));
    }
    n += print_fmt(out, format_args!(" {}", record.args()));
    n + out.print_str(LINE_TERMINATOR)
}

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = CLOCK.get().map(|clock| clock());
            // One lock for the whole record.
            instance().write_with(|out| write_record(out, record, now));
        }
    }

    fn flush(&self) {
        instance().flush();
    }
}

static LOGGER: SimpleLogger = SimpleLogger;

pub fn init(max_level: LevelFilter) -> Result<(), LoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(max_level);
    Ok(())
}

pub fn print_banner() {
    println!(
        "{} {} ({}, {}) built {} on {}",
        build_info::PKG_NAME,
        build_info::PKG_VERSION,
        build_info::TARGET,
        build_info::PROFILE,
        env!("BUILD_TIME"),
        env!("BUILD_HOST"),
    );
}
