//! The process-wide output channel.
//!
//! [`instance`] hands out the one global [`StreamLogger`], built on first use
//! with the board serial port as its sink. Any code can then print without
//! carrying a stream around, and [`StreamLogger::set_stream`] redirects all of
//! it to another sink.
//!
//! Every print call is a passthrough: the bytes and the returned count are
//! exactly what the active sink produces and reports. Nothing is buffered,
//! retried or checked.
//!
//! The sink sits behind a spinlock, so a redirect never lands in the middle of
//! a single call. Calls from different contexts are not ordered in any way.
//!
//! The lock is held while the sink runs, and it does not mask interrupts.
//! Printing through the same logger while it is held spins forever. That
//! covers a [`Printable`](crate::libs::print::Printable) printing from inside
//! `print_to`, a sink whose `write` or `flush` logs through the `log` facade
//! once [`init`](crate::init) routed it here, and an interrupt handler that
//! prints while the interrupted context is in the middle of a call. Interrupt
//! handlers should print to a logger of their own.

use core::fmt;

use spin::{Mutex, Once};

use crate::drivers::uart::Serial;
use crate::libs::print::{print_fmt, print_value, println_value, Print, LINE_TERMINATOR};
use crate::libs::value::Value;

/// Where output currently goes.
enum Target<'a> {
    Serial(Serial),
    /// Borrowed from the caller, never dropped or closed here.
    Borrowed(&'a mut (dyn Print + Send + 'a)),
}

impl Target<'_> {
    fn as_print(&mut self) -> &mut dyn Print {
        match self {
            Target::Serial(serial) => serial,
            Target::Borrowed(stream) => &mut **stream,
        }
    }
}

pub struct StreamLogger<'a> {
    target: Mutex<Target<'a>>,
}

assert_impl_all!(StreamLogger<'static>: Send, Sync);

impl<'a> StreamLogger<'a> {
    /// A logger writing to the board serial port.
    pub const fn new() -> Self {
        StreamLogger {
            target: Mutex::new(Target::Serial(Serial)),
        }
    }

    /// A logger writing to `stream`.
    pub fn with_stream(stream: &'a mut (dyn Print + Send + 'a)) -> Self {
        StreamLogger {
            target: Mutex::new(Target::Borrowed(stream)),
        }
    }

    /// Redirects all further output to `stream`.
    ///
    /// The previous sink is released untouched; nothing is flushed or copied
    /// over.
    pub fn set_stream(&self, stream: &'a mut (dyn Print + Send + 'a)) {
        *self.target.lock() = Target::Borrowed(stream);
    }

    /// Goes back to the board serial port.
    pub fn reset_stream(&self) {
        *self.target.lock() = Target::Serial(Serial);
    }

    /// Runs `f` against the active sink while holding it, so a redirect cannot
    /// split what `f` writes. `f` must not print through this logger.
    pub fn write_with<R>(&self, f: impl FnOnce(&mut dyn Print) -> R) -> R {
        let mut target = self.target.lock();
        f(target.as_print())
    }

    pub fn print<'v>(&self, value: impl Into<Value<'v>>) -> usize {
        let value = value.into();
        self.write_with(|out| print_value(out, value))
    }

    /// Prints `value` followed by the line terminator.
    pub fn println<'v>(&self, value: impl Into<Value<'v>>) -> usize {
        let value = value.into();
        self.write_with(|out| println_value(out, value))
    }

    /// Prints the line terminator alone.
    pub fn newline(&self) -> usize {
        self.write_with(|out| out.print_str(LINE_TERMINATOR))
    }

    pub fn print_fmt(&self, args: fmt::Arguments<'_>) -> usize {
        self.write_with(|out| print_fmt(out, args))
    }

    pub fn println_fmt(&self, args: fmt::Arguments<'_>) -> usize {
        self.write_with(|out| print_fmt(out, args) + out.print_str(LINE_TERMINATOR))
    }

    pub fn flush(&self) {
        self.write_with(|out| out.flush())
    }
}

impl Default for StreamLogger<'_> {
    fn default() -> Self {
        Self::new()
    }
}

static INSTANCE: Once<StreamLogger<'static>> = Once::new();

/// The global logger, created with the serial sink on first call.
pub fn instance() -> &'static StreamLogger<'static> {
    INSTANCE.call_once(StreamLogger::new)
}

/// Whether [`instance`] has been called yet.
pub fn is_initialized() -> bool {
    INSTANCE.is_completed()
}
