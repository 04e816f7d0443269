//! Board serial port, the logger's default sink.
//!
//! Every backend exports the same api: `init`, `putc` and `flush`.

use crate::libs::print::Print;

#[allow(dead_code)]
mod lsr;

cfg_if::cfg_if! {
    if #[cfg(any(test, feature = "std"))] {
        mod host;
        pub use host::*;
    } else if #[cfg(all(target_arch = "aarch64", feature = "qemu"))] {
        mod pl011;
        pub use pl011::*;
    } else if #[cfg(all(target_arch = "riscv64", feature = "qemu"))] {
        mod ns16550;
        pub use ns16550::*;
    } else if #[cfg(all(target_arch = "x86_64", feature = "qemu"))] {
        mod uart_16550;
        pub use uart_16550::*;
    } else {
        mod disconnected;
        pub use disconnected::*;
    }
}

/// The board UART as a [`Print`] sink.
///
/// Bytes go out unmodified, no `\n` to `\r\n` translation happens here.
#[derive(Clone, Copy, Debug, Default)]
pub struct Serial;

impl Print for Serial {
    fn write(&mut self, byte: u8) -> usize {
        usize::from(putc(byte))
    }

    fn flush(&mut self) {
        flush();
    }
}
