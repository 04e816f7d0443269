use tock_registers::interfaces::{Readable, Writeable};
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::board::{PL011_CLOCK_HZ, PL011_MMIO_BASE, UART_BAUD_RATE};

register_bitfields! {
    u32,

    FR [
        /// Transmit FIFO full.
        TXFF OFFSET(5) NUMBITS(1) [],
        BUSY OFFSET(3) NUMBITS(1) []
    ],

    LCR_H [
        WLEN OFFSET(5) NUMBITS(2) [
            EightBit = 0b11
        ],
        FEN OFFSET(4) NUMBITS(1) [
            FifosEnabled = 1
        ]
    ],

    CR [
        RXE OFFSET(9) NUMBITS(1) [],
        TXE OFFSET(8) NUMBITS(1) [],
        UARTEN OFFSET(0) NUMBITS(1) []
    ]
}

register_structs! {
    Pl011Regs {
        (0x00 => dr: ReadWrite<u32>),
        (0x04 => _reserved0),
        (0x18 => fr: ReadOnly<u32, FR::Register>),
        (0x1c => _reserved1),
        (0x24 => ibrd: WriteOnly<u32>),
        (0x28 => fbrd: WriteOnly<u32>),
        (0x2c => lcr_h: WriteOnly<u32, LCR_H::Register>),
        (0x30 => cr: WriteOnly<u32, CR::Register>),
        (0x34 => @END),
    }
}

struct Pl011Mmio {
    base: usize,
}

impl Pl011Mmio {
    const fn new(base: usize) -> Self {
        Pl011Mmio { base }
    }

    fn regs(&self) -> &Pl011Regs {
        // The base is the board's PL011 window, mapped for the whole runtime.
        unsafe { &*(self.base as *const Pl011Regs) }
    }
}

static PL011_MMIO: Pl011Mmio = Pl011Mmio::new(PL011_MMIO_BASE);

pub fn init() {
    let uart = PL011_MMIO.regs();
    uart.cr.set(0);
    // Baud divisor in 1/64ths.
    let div = PL011_CLOCK_HZ * 4 / UART_BAUD_RATE;
    uart.ibrd.set(div >> 6);
    uart.fbrd.set(div & 0x3f);
    uart.lcr_h.write(LCR_H::WLEN::EightBit + LCR_H::FEN::FifosEnabled);
    uart.cr.write(CR::UARTEN::SET + CR::TXE::SET + CR::RXE::SET);
}

pub fn putc(c: u8) -> bool {
    let uart = PL011_MMIO.regs();
    while uart.fr.is_set(FR::TXFF) {
        core::hint::spin_loop();
    }
    uart.dr.set(c as u32);
    true
}

pub fn flush() {
    let uart = PL011_MMIO.regs();
    while uart.fr.is_set(FR::BUSY) {
        core::hint::spin_loop();
    }
}
