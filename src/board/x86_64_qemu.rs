/// COM1.
pub const SERIAL_IO_PORT: u16 = 0x3F8;
