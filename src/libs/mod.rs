pub mod error;
pub mod print;
pub mod stream_logger;
pub mod value;

#[cfg(test)]
pub(crate) mod test_util;
