use std::fmt;

use rand::Rng;

/// Face of the coin that lands up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Heads,
    Tails,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Heads => "Heads",
            Side::Tails => "Tails",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flip a fair coin using the thread-local generator.
pub fn coin_flip() -> Side {
    coin_flip_with(&mut rand::thread_rng())
}

/// Flip a fair coin using `rng`.
pub fn coin_flip_with<R: Rng + ?Sized>(rng: &mut R) -> Side {
    let is_heads: bool = rng.gen();
    if is_heads {
        Side::Heads
    } else {
        Side::Tails
    }
}
