use anyhow::{bail, Result};
use board_clock_core::{input::parse_duration, Player};

/// A line typed into the terminal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    /// A player pressed their pad, handing the turn to the opponent.
    Pad(Player),
    TogglePause,
    Reset,
    Configure(u64),
    Show,
    Json,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let command = match words.next() {
            Some(command) => command,
            None => return Ok(None),
        };
        let command = match command {
            "top" | "t" => Command::Pad(Player::Top),
            "bottom" | "b" => Command::Pad(Player::Bottom),
            "pause" | "p" => Command::TogglePause,
            "reset" | "r" => Command::Reset,
            // The duration field accepts anything and coerces it.
            "set" | "s" => Command::Configure(parse_duration(words.next().unwrap_or(""))),
            "state" => Command::Show,
            "json" => Command::Json,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => bail!("Unknown command `{}`, type `help` for a list", other),
        };
        Ok(Some(command))
    }
}

pub const HELP: &str = "\
commands:
  top, t          the top player presses their pad, the bottom clock runs
  bottom, b       the bottom player presses their pad, the top clock runs
  pause, p        pause or resume
  reset, r        give both players the configured duration and pause
  set <ms>, s     configure the duration applied on the next reset
  state           show both clocks
  json            show the clock state as JSON
  quit, q         stop the clock";
