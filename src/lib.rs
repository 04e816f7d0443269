//! A process-wide logger that forwards print calls to one character stream,
//! the board serial port unless redirected.
//!
//! ```ignore
//! use stream_logger::{instance, Base, Value};
//!
//! instance().print("temp ");
//! instance().println(Value::from(21.456).precision(1));
//! instance().println(Value::from(0xc0de_u16).radix(Base::HEX));
//! ```
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[macro_use]
extern crate log;
#[cfg(any(test, feature = "alloc"))]
extern crate alloc;
#[macro_use]
extern crate derive_more;
#[macro_use]
extern crate static_assertions;

#[macro_use]
mod macros;

#[cfg(not(any(test, feature = "std")))]
mod board;
mod drivers;
mod logger;

pub mod libs;

pub use drivers::uart::Serial;
pub use libs::error::LoggerError;
pub use libs::print::{Print, PrintExt, Printable, LINE_TERMINATOR};
pub use libs::stream_logger::{instance, is_initialized, StreamLogger};
pub use libs::value::{Base, Value};
pub use logger::set_clock;

/// Routes the `log` facade through the global logger, brings up the serial
/// port and prints the boot banner.
pub fn init(max_level: log::LevelFilter) -> Result<(), LoggerError> {
    logger::init(max_level)?;
    drivers::uart::init();
    logger::print_banner();
    debug!("log level {}", max_level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::uart::take_output;
    use crate::libs::test_util::serial_lock;

    #[test]
    fn init_installs_log_bridge_once() {
        let _guard = serial_lock();
        instance().reset_stream();
        take_output();

        assert_eq!(init(log::LevelFilter::Info), Ok(()));
        let banner = take_output();
        assert!(banner.starts_with(b"stream_logger 0.2.0 ("));
        assert!(banner.ends_with(b"\r\n"));

        assert_eq!(
            init(log::LevelFilter::Trace),
            Err(LoggerError::AlreadyInstalled)
        );
        assert!(take_output().is_empty());

        warn!("disk {} degraded", 3);
        debug!("filtered out");
        assert_eq!(take_output(), b"[W][stream_logger::tests] disk 3 degraded\r\n");
    }
}
