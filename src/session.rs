use std::io::{BufRead, Write};

use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::{debug, info, instrument};

use crate::coin_flip::{coin_flip_with, Side};
use crate::error::{CoinFlipError, Error};
use crate::messages::{AGAIN, BANNER, EXIT_WORD, FLIPPING, GAME_OVER, RESULT_PREFIX};

/// What a single line of input asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Empty line.
    Flip,
    /// "exit" in any letter case.
    Exit,
    /// Anything else. Produces no output.
    Ignore,
}

impl Command {
    /// Classify a line whose terminator has already been removed.
    ///
    /// Only the whole line is compared against the exit word, so
    /// surrounding spaces turn "exit" into an ignored line.
    pub fn parse(line: &str) -> Command {
        if line.is_empty() {
            Command::Flip
        } else if line.to_lowercase() == EXIT_WORD {
            Command::Exit
        } else {
            Command::Ignore
        }
    }
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user typed "exit" and "Game over!" was printed.
    Exited,
    /// Input ran out before any "exit".
    EndOfInput,
}

/// One run of the interactive loop over a line reader and a writer.
pub struct Session<R, W, G = ThreadRng> {
    input: R,
    output: W,
    rng: G,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Session::with_rng(input, output, rand::thread_rng())
    }
}

impl<R: BufRead, W: Write, G: Rng> Session<R, W, G> {
    pub fn with_rng(input: R, output: W, rng: G) -> Self {
        Session { input, output, rng }
    }

    /// Print the banner, then flip on empty lines until "exit" or the
    /// end of input.
    #[instrument(skip_all)]
    pub fn run(&mut self) -> Result<Outcome, Error> {
        info!("session started");
        self.say(BANNER)?;

        let mut line = String::new();
        let outcome = loop {
            line.clear();
            let read = self.input.read_line(&mut line).map_err(CoinFlipError::Read)?;
            if read == 0 {
                break Outcome::EndOfInput;
            }

            let command = Command::parse(strip_terminator(&line));
            debug!(?command, "line received");
            match command {
                Command::Exit => {
                    self.say(GAME_OVER)?;
                    break Outcome::Exited;
                }
                Command::Flip => {
                    let side = self.flip()?;
                    debug!(%side, "coin landed");
                }
                Command::Ignore => {}
            }
        };

        info!(?outcome, "session ended");
        Ok(outcome)
    }

    /// Give back the reader and writer, e.g. to inspect what was printed.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn flip(&mut self) -> Result<Side, Error> {
        writeln!(self.output, "{FLIPPING}").map_err(CoinFlipError::Write)?;
        let side = coin_flip_with(&mut self.rng);
        writeln!(self.output, "{RESULT_PREFIX}{side}").map_err(CoinFlipError::Write)?;
        self.say(AGAIN)?;
        Ok(side)
    }

    fn say(&mut self, text: &str) -> Result<(), Error> {
        writeln!(self.output, "{text}").map_err(CoinFlipError::Write)?;
        self.output.flush().map_err(CoinFlipError::Write)
    }
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
