pub mod coin_flip;
pub mod error;
pub mod messages;
pub mod session;

pub use coin_flip::{coin_flip, coin_flip_with, Side};
pub use error::{CoinFlipError, Error};
pub use session::{Command, Outcome, Session};
