/// PL011 on the qemu `virt` machine.
pub const PL011_MMIO_BASE: usize = 0x0900_0000;

/// UARTCLK of the qemu PL011.
pub const PL011_CLOCK_HZ: u32 = 24_000_000;

pub const UART_BAUD_RATE: u32 = 115_200;
