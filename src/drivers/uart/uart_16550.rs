use x86_64::instructions::port::Port;

use super::lsr;
use crate::board::SERIAL_IO_PORT;

const DATA: u16 = SERIAL_IO_PORT;
const INT_EN: u16 = SERIAL_IO_PORT + 1;
const FIFO_CTRL: u16 = SERIAL_IO_PORT + 2;
const LINE_CTRL: u16 = SERIAL_IO_PORT + 3;
const MODEM_CTRL: u16 = SERIAL_IO_PORT + 4;
const LINE_STS: u16 = SERIAL_IO_PORT + 5;

fn outb(port: u16, value: u8) {
    unsafe { Port::<u8>::new(port).write(value) }
}

fn inb(port: u16) -> u8 {
    unsafe { Port::<u8>::new(port).read() }
}

pub fn init() {
    outb(INT_EN, 0x00);
    // DLAB on, divisor 1 for 115200 baud.
    outb(LINE_CTRL, 0x80);
    outb(DATA, 0x01);
    outb(INT_EN, 0x00);
    // 8N1, DLAB off.
    outb(LINE_CTRL, 0x03);
    outb(FIFO_CTRL, 0xC7);
    outb(MODEM_CTRL, 0x0B);
}

pub fn putc(c: u8) -> bool {
    while !lsr::can_send(inb(LINE_STS)) {
        core::hint::spin_loop();
    }
    outb(DATA, c);
    true
}

pub fn flush() {
    while !lsr::is_idle(inb(LINE_STS)) {
        core::hint::spin_loop();
    }
}
