/// Errors from bringing up the logger.
///
/// Printing itself never fails at this layer: a sink that drops bytes simply
/// reports a shorter count.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum LoggerError {
    /// Another `log` implementation was installed first.
    #[display(fmt = "a logger is already installed")]
    AlreadyInstalled,
}

impl From<log::SetLoggerError> for LoggerError {
    fn from(_: log::SetLoggerError) -> Self {
        LoggerError::AlreadyInstalled
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LoggerError {}
