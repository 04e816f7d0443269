use core::ffi::CStr;

use crate::libs::print::Printable;

/// Decimal places a float prints with unless told otherwise.
pub const DEFAULT_PRECISION: u8 = 2;

/// Numeric radix for integer rendering.
///
/// `0` writes the integer's low byte unformatted. Radixes outside `2..=36`
/// fall back to decimal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Base(u8);

impl Base {
    pub const RAW: Base = Base(0);
    pub const BIN: Base = Base(2);
    pub const OCT: Base = Base(8);
    pub const DEC: Base = Base(10);
    pub const HEX: Base = Base(16);

    pub const fn new(radix: u8) -> Self {
        Base(radix)
    }

    /// The radix digits are produced in, or `None` for raw byte output.
    pub const fn radix(self) -> Option<u32> {
        match self.0 {
            0 => None,
            2..=36 => Some(self.0 as u32),
            _ => Some(10),
        }
    }
}

impl Default for Base {
    fn default() -> Self {
        Base::DEC
    }
}

/// Everything the logger knows how to print.
#[derive(Clone, Copy)]
pub enum Value<'a> {
    Str(&'a str),
    /// NUL-terminated bytes, printed up to the terminator.
    CStr(&'a CStr),
    Char(char),
    Signed(i32, Base),
    Unsigned(u32, Base),
    /// A float and its number of decimal places.
    Float(f64, u8),
    Printable(&'a dyn Printable),
}

impl<'a> Value<'a> {
    pub fn printable(p: &'a dyn Printable) -> Self {
        Value::Printable(p)
    }

    /// Sets the radix of an integer value. Other values are returned as is.
    pub fn radix(self, base: Base) -> Self {
        match self {
            Value::Signed(n, _) => Value::Signed(n, base),
            Value::Unsigned(n, _) => Value::Unsigned(n, base),
            v => v,
        }
    }

    /// Sets the decimal places of a float value. Other values are returned as is.
    pub fn precision(self, digits: u8) -> Self {
        match self {
            Value::Float(x, _) => Value::Float(x, digits),
            v => v,
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Str(s)
    }
}

#[cfg(any(test, feature = "alloc"))]
impl<'a> From<&'a alloc::string::String> for Value<'a> {
    fn from(s: &'a alloc::string::String) -> Self {
        Value::Str(s.as_str())
    }
}

impl<'a> From<&'a CStr> for Value<'a> {
    fn from(s: &'a CStr) -> Self {
        Value::CStr(s)
    }
}

impl From<char> for Value<'_> {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $wide:ty, $($t:ty),+) => {
        $(
            impl From<$t> for Value<'_> {
                fn from(n: $t) -> Self {
                    Value::$variant(<$wide>::from(n), Base::DEC)
                }
            }
        )+
    };
}

impl_from_int!(Signed, i32, i8, i16, i32);
impl_from_int!(Unsigned, u32, u8, u16, u32);

impl From<f32> for Value<'_> {
    fn from(x: f32) -> Self {
        Value::Float(f64::from(x), DEFAULT_PRECISION)
    }
}

impl From<f64> for Value<'_> {
    fn from(x: f64) -> Self {
        Value::Float(x, DEFAULT_PRECISION)
    }
}

impl<'a, P: Printable> From<&'a P> for Value<'a> {
    fn from(p: &'a P) -> Self {
        Value::Printable(p)
    }
}
