//! Line status register bits shared by the 16550-style backends.

use bit_field::BitField;

/// Transmit holding register empty, a byte can be written.
pub const THR_EMPTY: u8 = 5;
/// Transmitter idle, everything written has left the shift register.
pub const TX_IDLE: u8 = 6;

pub fn can_send(lsr: u8) -> bool {
    lsr.get_bit(THR_EMPTY)
}

pub fn is_idle(lsr: u8) -> bool {
    lsr.get_bit(TX_IDLE)
}
