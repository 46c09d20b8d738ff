/// Printed once when a session starts.
pub const BANNER: &str = "Coin Flipping Game\n\
Press Enter to flip the coin. Type 'exit' to quit.";

pub const FLIPPING: &str = "Flipping the coin...";

pub const RESULT_PREFIX: &str = "The coin shows: ";

/// Printed after every flip.
pub const AGAIN: &str = "Press Enter to flip again or type 'exit' to quit.";

pub const GAME_OVER: &str = "Game over!";

pub const EXIT_WORD: &str = "exit";
