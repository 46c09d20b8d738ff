use std::io;
use thiserror::Error as ThisError;

/// Error type for everything that can go wrong while a session talks to
/// its input and output streams.
///
/// Bad user input is never an error: unknown lines are ignored and the
/// end of input ends the session normally. What remains is I/O failure,
/// which includes stdin delivering bytes that are not valid UTF-8.
#[derive(ThisError, Debug)]
pub enum CoinFlipError {
    #[error("failed to read a line of input")]
    Read(#[source] io::Error),
    #[error("failed to write to output")]
    Write(#[source] io::Error),
}

pub type Error = CoinFlipError;
