/// The ns16550a of the qemu `virt` machine, byte-wide registers.
pub const NS16550_MMIO_BASE: usize = 0x1000_0000;
