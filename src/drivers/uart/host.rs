// Hosted builds. Unit tests capture the output so it can be inspected.

#[cfg(test)]
use alloc::vec::Vec;
#[cfg(test)]
use spin::Mutex;

#[cfg(test)]
static CAPTURE: Mutex<Vec<u8>> = Mutex::new(Vec::new());

pub fn init() {}

#[cfg(not(test))]
pub fn putc(c: u8) -> bool {
    use std::io::Write;
    std::io::stdout().write_all(&[c]).is_ok()
}

#[cfg(test)]
pub fn putc(c: u8) -> bool {
    CAPTURE.lock().push(c);
    true
}

pub fn flush() {
    #[cfg(not(test))]
    {
        use std::io::Write;
        let _ = std::io::stdout().flush();
    }
}

/// Drains everything written to the serial port so far.
#[cfg(test)]
pub fn take_output() -> Vec<u8> {
    core::mem::take(&mut *CAPTURE.lock())
}
