//! Typed console input: moves and cheat/utility commands.

use thiserror::Error;

use crate::core::{Difficulty, Move};

/// Help text listing every console command.
pub const HELP: &str = "\
Moves:    rock | paper | scissor
Speech:   say <phrase>       e.g. 'say I pick paper'
Commands:
  pumpkinpower       one-time +1 point
  trickortreat       secret bonus point
  bossbattle         summon the boss now
  storymode          fight the haunted bots in order
  goal <n>           set the score goal
  difficulty <name>  easy | medium | hard
  stats              show your move counts
  reset              start a new match
  help               this text
  quit               leave the game";

/// A console command other than a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    PumpkinPower,
    TrickOrTreat,
    BossBattle,
    StoryMode,
    Goal(u32),
    Difficulty(Difficulty),
    Stats,
    Reset,
    Help,
    Quit,
}

/// One parsed line of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Move(Move),
    /// Recognised speech, already normalised. `None` when no move was heard.
    Speech(Option<Move>),
    Command(Command),
}

/// Console parse failures. These never reach the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConsoleError {
    #[error("'{0}' is not recognized; type 'help' for commands")]
    UnknownCommand(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("bad argument for '{command}': {reason}")]
    BadArgument { command: &'static str, reason: String },
}

impl Input {
    /// Parse one line. Matching is case-insensitive; surrounding whitespace
    /// is ignored. Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Input>, ConsoleError> {
        let line = line.trim().to_lowercase();
        if let Some(phrase) = line.strip_prefix("say ") {
            return Ok(Some(Input::Speech(Move::from_utterance(phrase))));
        }
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let arg = words.next();

        if let Ok(mv) = head.parse::<Move>() {
            return Ok(Some(Input::Move(mv)));
        }

        let command = match head {
            "pumpkinpower" => Command::PumpkinPower,
            "trickortreat" => Command::TrickOrTreat,
            "bossbattle" => Command::BossBattle,
            "storymode" => Command::StoryMode,
            "stats" => Command::Stats,
            "reset" => Command::Reset,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "goal" => {
                let arg = arg.ok_or(ConsoleError::MissingArgument("goal"))?;
                let goal = arg.parse::<u32>().map_err(|e| ConsoleError::BadArgument {
                    command: "goal",
                    reason: e.to_string(),
                })?;
                Command::Goal(goal)
            }
            "difficulty" => {
                let arg = arg.ok_or(ConsoleError::MissingArgument("difficulty"))?;
                let difficulty = arg.parse::<Difficulty>().map_err(|e| ConsoleError::BadArgument {
                    command: "difficulty",
                    reason: e.to_string(),
                })?;
                Command::Difficulty(difficulty)
            }
            _ => return Err(ConsoleError::UnknownCommand(line.clone())),
        };
        Ok(Some(Input::Command(command)))
    }
}
