/// Prints to the global logger, returning the number of bytes written.
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => ($crate::instance().print_fmt(format_args!($($arg)*)));
}

#[macro_export]
macro_rules! println {
    () => ($crate::instance().newline());
    ($($arg:tt)*) => ({
        $crate::instance().println_fmt(format_args!($($arg)*))
    })
}
