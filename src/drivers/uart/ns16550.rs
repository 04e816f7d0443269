use tock_registers::interfaces::{Readable, Writeable};
use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::register_structs;

use super::lsr;
use crate::board::NS16550_MMIO_BASE;

register_structs! {
    Ns16550Regs {
        (0x00 => rhr_thr: ReadWrite<u8>),
        (0x01 => ier: ReadWrite<u8>),
        (0x02 => isr_fcr: ReadWrite<u8>),
        (0x03 => lcr: ReadWrite<u8>),
        (0x04 => mcr: ReadWrite<u8>),
        (0x05 => lsr: ReadOnly<u8>),
        (0x06 => @END),
    }
}

struct Ns16550Mmio8 {
    base: usize,
}

impl Ns16550Mmio8 {
    const fn new(base: usize) -> Self {
        Ns16550Mmio8 { base }
    }

    fn regs(&self) -> &Ns16550Regs {
        // The base is the board's UART window, mapped for the whole runtime.
        unsafe { &*(self.base as *const Ns16550Regs) }
    }
}

static NS16550_MMIO: Ns16550Mmio8 = Ns16550Mmio8::new(NS16550_MMIO_BASE);

pub fn init() {
    let uart = NS16550_MMIO.regs();
    uart.ier.set(0x00);
    // 8 data bits, no parity, one stop bit.
    uart.lcr.set(0x03);
    // Enable and clear both FIFOs.
    uart.isr_fcr.set(0x07);
    uart.mcr.set(0x03);
}

pub fn putc(c: u8) -> bool {
    let uart = NS16550_MMIO.regs();
    while !lsr::can_send(uart.lsr.get()) {
        core::hint::spin_loop();
    }
    uart.rhr_thr.set(c);
    true
}

pub fn flush() {
    let uart = NS16550_MMIO.regs();
    while !lsr::is_idle(uart.lsr.get()) {
        core::hint::spin_loop();
    }
}
