//! The sink capability and the rendering of every printable value.

use core::fmt;

use crate::libs::value::{Base, Value};

/// Line terminator appended by every `println` flavour.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Largest magnitude a float may have before it prints as `ovf`.
const FLOAT_LIMIT: f64 = 4294967040.0;

/// A writable character stream, e.g. a UART.
///
/// Only [`Print::write`] is required; everything else is rendered on top of it.
/// Every operation returns the number of bytes the stream accepted.
pub trait Print {
    /// Writes a single byte, returning 1 if it was accepted and 0 otherwise.
    fn write(&mut self, byte: u8) -> usize;

    /// Writes `buf`, stopping at the first byte the stream refuses.
    fn write_bytes(&mut self, buf: &[u8]) -> usize {
        let mut n = 0;
        for &b in buf {
            if self.write(b) == 0 {
                break;
            }
            n += 1;
        }
        n
    }

    fn flush(&mut self) {}

    fn print_str(&mut self, s: &str) -> usize {
        self.write_bytes(s.as_bytes())
    }

    fn print_char(&mut self, c: char) -> usize {
        let mut buf = [0u8; 4];
        self.write_bytes(c.encode_utf8(&mut buf).as_bytes())
    }

    fn print_unsigned(&mut self, n: u32, base: Base) -> usize {
        match base.radix() {
            None => self.write(n as u8),
            Some(radix) => print_number(self, n, radix),
        }
    }

    /// Negative values carry a sign in decimal only; other radixes print the
    /// 32-bit two's complement.
    fn print_signed(&mut self, n: i32, base: Base) -> usize {
        match base.radix() {
            None => self.write(n as u8),
            Some(10) if n < 0 => {
                let sign = self.write(b'-');
                sign + print_number(self, n.unsigned_abs(), 10)
            }
            Some(radix) => print_number(self, n as u32, radix),
        }
    }

    fn print_float(&mut self, x: f64, digits: u8) -> usize {
        if x.is_nan() {
            return self.print_str("nan");
        }
        if x.is_infinite() {
            return self.print_str("inf");
        }
        if !(-FLOAT_LIMIT..=FLOAT_LIMIT).contains(&x) {
            return self.print_str("ovf");
        }

        let mut n = 0;
        let mut x = x;
        if x < 0.0 {
            n += self.write(b'-');
            x = -x;
        }

        let mut rounding = 0.5;
        for _ in 0..digits {
            rounding /= 10.0;
        }
        x += rounding;

        let int_part = x as u32;
        let mut remainder = x - int_part as f64;
        n += print_number(self, int_part, 10);

        if digits > 0 {
            n += self.write(b'.');
        }
        for _ in 0..digits {
            remainder *= 10.0;
            let digit = remainder as u32;
            n += print_number(self, digit, 10);
            remainder -= digit as f64;
        }
        n
    }
}

mod sealed {
    pub trait Sealed {}

    impl<P: super::Print> Sealed for P {}
}

/// [`Value`] printing on a concrete stream.
///
/// Implemented for every [`Print`] and not implementable elsewhere, so a
/// stream prints a value exactly as the logger would through [`print_value`].
pub trait PrintExt: Print + Sized + sealed::Sealed {
    /// Renders `value` onto this stream.
    fn print<'v>(&mut self, value: impl Into<Value<'v>>) -> usize {
        print_value(self, value.into())
    }

    /// Renders `value` followed by [`LINE_TERMINATOR`].
    fn println<'v>(&mut self, value: impl Into<Value<'v>>) -> usize {
        println_value(self, value.into())
    }
}

impl<P: Print> PrintExt for P {}

/// A value that knows how to render itself onto any stream.
pub trait Printable {
    fn print_to(&self, out: &mut dyn Print) -> usize;
}

impl<P: Print + ?Sized> Print for &mut P {
    fn write(&mut self, byte: u8) -> usize {
        (**self).write(byte)
    }

    fn write_bytes(&mut self, buf: &[u8]) -> usize {
        (**self).write_bytes(buf)
    }

    fn flush(&mut self) {
        (**self).flush()
    }
}

#[cfg(any(test, feature = "alloc"))]
impl Print for alloc::vec::Vec<u8> {
    fn write(&mut self, byte: u8) -> usize {
        self.push(byte);
        1
    }

    fn write_bytes(&mut self, buf: &[u8]) -> usize {
        self.extend_from_slice(buf);
        buf.len()
    }
}

/// Renders `value` onto `out`. Every print entry point of the crate ends up here.
pub fn print_value(out: &mut dyn Print, value: Value<'_>) -> usize {
    match value {
        Value::Str(s) => out.print_str(s),
        Value::CStr(s) => out.write_bytes(s.to_bytes()),
        Value::Char(c) => out.print_char(c),
        Value::Signed(n, base) => out.print_signed(n, base),
        Value::Unsigned(n, base) => out.print_unsigned(n, base),
        Value::Float(x, digits) => out.print_float(x, digits),
        Value::Printable(p) => p.print_to(out),
    }
}

pub fn println_value(out: &mut dyn Print, value: Value<'_>) -> usize {
    let n = print_value(out, value);
    n + out.print_str(LINE_TERMINATOR)
}

/// Formats `args` onto `out` and returns the number of bytes accepted.
pub fn print_fmt(out: &mut dyn Print, args: fmt::Arguments<'_>) -> usize {
    let mut counter = Counter { out, written: 0 };
    // Counter never fails, a short write only lowers the count.
    let _ = fmt::write(&mut counter, args);
    counter.written
}

struct Counter<'a> {
    out: &'a mut dyn Print,
    written: usize,
}

impl fmt::Write for Counter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.written += self.out.print_str(s);
        Ok(())
    }
}

fn print_number<P: Print + ?Sized>(out: &mut P, mut n: u32, radix: u32) -> usize {
    // 32 binary digits at most.
    let mut buf = [0u8; 32];
    let mut pos = buf.len();
    loop {
        let digit = (n % radix) as u8;
        n /= radix;
        pos -= 1;
        buf[pos] = if digit < 10 {
            b'0' + digit
        } else {
            b'A' + digit - 10
        };
        if n == 0 {
            break;
        }
    }
    out.write_bytes(&buf[pos..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::ffi::CStr;

    fn render(value: Value<'_>) -> (Vec<u8>, usize) {
        let mut out = Vec::new();
        let n = print_value(&mut out, value);
        (out, n)
    }

    /// Accepts a fixed number of bytes, then drops everything.
    struct Tiny {
        room: usize,
        seen: Vec<u8>,
    }

    impl Print for Tiny {
        fn write(&mut self, byte: u8) -> usize {
            if self.room == 0 {
                return 0;
            }
            self.room -= 1;
            self.seen.push(byte);
            1
        }
    }

    #[test]
    fn hex_is_upper_case() {
        assert_eq!(render(Value::from(42).radix(Base::HEX)), (b"2A".to_vec(), 2));
        assert_eq!(
            render(Value::from(0xbeef_u16).radix(Base::HEX)),
            (b"BEEF".to_vec(), 4)
        );
    }

    #[test]
    fn integers_default_to_decimal() {
        assert_eq!(render(Value::from(0u8)), (b"0".to_vec(), 1));
        assert_eq!(render(Value::from(u32::MAX)), (b"4294967295".to_vec(), 10));
        assert_eq!(render(Value::from(i32::MIN)), (b"-2147483648".to_vec(), 11));
        assert_eq!(render(Value::from(-7i8)), (b"-7".to_vec(), 2));
    }

    #[test]
    fn other_radixes() {
        assert_eq!(render(Value::from(5u8).radix(Base::BIN)).0, b"101");
        assert_eq!(render(Value::from(8u8).radix(Base::OCT)).0, b"10");
        assert_eq!(render(Value::from(35u8).radix(Base::new(36))).0, b"Z");
    }

    #[test]
    fn negative_non_decimal_is_twos_complement() {
        assert_eq!(render(Value::from(-1).radix(Base::HEX)).0, b"FFFFFFFF");
        assert_eq!(render(Value::from(-2i16).radix(Base::HEX)).0, b"FFFFFFFE");
    }

    #[test]
    fn radix_zero_writes_raw_byte() {
        assert_eq!(render(Value::from(0x141u32).radix(Base::RAW)), (vec![0x41], 1));
        assert_eq!(render(Value::from(-1).radix(Base::RAW)), (vec![0xff], 1));
    }

    #[test]
    fn out_of_range_radix_falls_back_to_decimal() {
        assert_eq!(render(Value::from(42).radix(Base::new(1))).0, b"42");
        assert_eq!(render(Value::from(42).radix(Base::new(37))).0, b"42");
    }

    #[test]
    fn floats() {
        assert_eq!(render(Value::from(3.14159)), (b"3.14".to_vec(), 4));
        assert_eq!(render(Value::from(3.14159).precision(3)).0, b"3.142");
        assert_eq!(render(Value::from(-1.25).precision(1)).0, b"-1.3");
        assert_eq!(render(Value::from(2.5f32).precision(0)).0, b"3");
        assert_eq!(render(Value::from(0.0)).0, b"0.00");
    }

    #[test]
    fn float_special_values() {
        assert_eq!(render(Value::from(f64::NAN)).0, b"nan");
        assert_eq!(render(Value::from(f64::NEG_INFINITY)).0, b"inf");
        assert_eq!(render(Value::from(5e9)).0, b"ovf");
        assert_eq!(render(Value::from(-5e9)).0, b"ovf");
    }

    #[test]
    fn text_kinds() {
        assert_eq!(render(Value::from("hello")), (b"hello".to_vec(), 5));
        let c = CStr::from_bytes_with_nul(b"abc\0").unwrap();
        assert_eq!(render(Value::from(c)), (b"abc".to_vec(), 3));
        assert_eq!(render(Value::from('x')), (b"x".to_vec(), 1));
        assert_eq!(render(Value::from('é')), ("é".as_bytes().to_vec(), 2));
        let s = alloc::string::String::from("owned");
        assert_eq!(render(Value::from(&s)).0, b"owned");
    }

    #[test]
    fn printable_renders_itself() {
        struct Point(i32, i32);
        impl Printable for Point {
            fn print_to(&self, out: &mut dyn Print) -> usize {
                out.print_char('(')
                    + out.print_signed(self.0, Base::DEC)
                    + out.print_char(',')
                    + out.print_signed(self.1, Base::DEC)
                    + out.print_char(')')
            }
        }
        let p = Point(3, -4);
        assert_eq!(render(Value::printable(&p)), (b"(3,-4)".to_vec(), 6));
    }

    #[test]
    fn println_appends_terminator() {
        let mut out = Vec::new();
        assert_eq!(out.println("ok"), 4);
        assert_eq!(out, b"ok\r\n");
    }

    #[test]
    fn ext_methods_match_print_value_through_references() {
        let mut direct = Vec::new();
        print_value(&mut direct, Value::from(-5i8).radix(Base::HEX));

        let mut out = Vec::new();
        let mut by_ref = &mut out;
        let sink = &mut by_ref;
        assert_eq!(sink.print(Value::from(-5i8).radix(Base::HEX)), 8);
        assert_eq!(sink.println('z'), 3);
        assert_eq!(out, [direct.as_slice(), b"z\r\n"].concat());
    }

    #[test]
    fn short_sink_reports_accepted_count() {
        let mut sink = Tiny { room: 3, seen: Vec::new() };
        assert_eq!(sink.print("hello"), 3);
        assert_eq!(sink.seen, b"hel");
        assert_eq!(sink.println(7), 0);
    }

    #[test]
    fn fmt_arguments_are_counted() {
        let mut out = Vec::new();
        let n = print_fmt(&mut out, format_args!("{}-{:02}", "a", 7));
        assert_eq!((out.as_slice(), n), (&b"a-07"[..], 4));
    }
}
