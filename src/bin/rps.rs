//! Terminal front-end for the round engine.
//!
//! Usage:
//!   cargo run --bin rps -- --goal 5 --difficulty hard
//!   cargo run --bin rps -- --seed 42 --story
//!
//! Reads one move or command per line from stdin. Every input goes through
//! `Session::handle_line`, so the engine only ever sees serialized calls.

use anyhow::Result;
use clap::Parser;
use rand::seq::SliceRandom;
use rust_rps::console::{Command, Input, SecretBuffer, HELP};
use rust_rps::core::DEFAULT_SCORE_GOAL;
use rust_rps::{
    Difficulty, GameRng, MatchConfig, MatchStatus, Move, Outcome, RoundEngine, RoundOutcome,
    StoryLadder, StoryMode, StoryProgress,
};
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

const TAUNTS: &[&str] = &[
    "I'm just warming up...",
    "Did you really think that would work?",
    "Big brain move... for me!",
    "I smell fear!",
    "Even ghosts play better than you!",
    "I'm not programmed to lose!",
];

const CHEERS: &[&str] = &["You win this round!", "You smashed the bot!", "Nice move!"];

#[derive(Parser, Debug)]
#[command(author, version, about = "Play rock-paper-scissors against an adaptive bot")]
struct Args {
    /// Seed for the bot's RNG. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Wins needed to take the match.
    #[arg(short, long, default_value_t = DEFAULT_SCORE_GOAL)]
    goal: u32,

    /// easy, medium or hard.
    #[arg(short, long, default_value = "easy")]
    difficulty: Difficulty,

    /// Disable the boss phase.
    #[arg(long)]
    no_boss: bool,

    /// Start directly in story mode.
    #[arg(long)]
    story: bool,

    /// Log every round.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn match_config(&self) -> MatchConfig {
        let config = MatchConfig::new()
            .with_score_goal(self.goal)
            .with_difficulty(self.difficulty);
        if self.no_boss {
            config.without_boss()
        } else {
            config
        }
    }
}

/// One interactive game: a classic match plus an optional story run.
struct Session {
    engine: RoundEngine,
    story: Option<StoryMode>,
    rng: GameRng,
    secret: SecretBuffer,
}

impl Session {
    fn new(config: MatchConfig, mut rng: GameRng) -> Result<Self> {
        let engine = RoundEngine::new(config, rng.fork())?;
        Ok(Self {
            engine,
            story: None,
            rng,
            secret: SecretBuffer::default(),
        })
    }

    fn active(&mut self) -> &mut RoundEngine {
        match self.story.as_mut() {
            Some(story) => story.engine_mut(),
            None => &mut self.engine,
        }
    }

    /// Handle one line. Returns `false` when the player quits.
    fn handle_line(&mut self, line: &str, out: &mut impl Write) -> Result<bool> {
        match Input::parse(line) {
            Ok(None) => {}
            Ok(Some(Input::Move(mv))) => self.play(mv, out)?,
            Ok(Some(Input::Speech(Some(mv)))) => {
                writeln!(out, "Heard: {mv}")?;
                self.play(mv, out)?;
            }
            Ok(Some(Input::Speech(None))) => {
                writeln!(out, "Couldn't understand. Say rock / paper / scissor.")?;
            }
            Ok(Some(Input::Command(command))) => return self.command(command, out),
            Err(e) => {
                if self.secret.push_str(line) {
                    self.secret_bonus(out)?;
                } else {
                    writeln!(out, "{e}")?;
                }
            }
        }
        Ok(true)
    }

    fn play(&mut self, mv: Move, out: &mut impl Write) -> Result<()> {
        if let Some(story) = self.story.as_mut() {
            let mut completed = false;
            match story.play_round(mv) {
                Ok(round) => {
                    report_round(&round.outcome, out)?;
                    match round.progress {
                        StoryProgress::Fighting => {}
                        StoryProgress::Advanced { .. } => {
                            if let Some(next) = story.opponent() {
                                writeln!(out, "Victory! Now facing {} ({})", next.name, next.difficulty)?;
                            }
                        }
                        StoryProgress::Defeated => {
                            writeln!(out, "You were defeated! Restarting story mode...")?;
                        }
                        StoryProgress::Completed => {
                            writeln!(out, "You defeated all haunted bots! Secret ending unlocked!")?;
                            completed = true;
                        }
                    }
                }
                Err(e) => writeln!(out, "{e}")?,
            }
            if completed {
                self.story = None;
            }
            return Ok(());
        }

        match self.engine.play_round(mv) {
            Ok(round) => {
                report_round(&round, out)?;
                if self.engine.state().boss_active() && round.status == MatchStatus::Ongoing {
                    writeln!(out, "Boss Bot is here! Reach {} to beat it.", self.engine.state().target_score())?;
                }
                if round.status.is_terminal() {
                    writeln!(out, "New game! Choose your move...")?;
                    self.engine.reset();
                }
            }
            Err(e) => writeln!(out, "{e}")?,
        }
        Ok(())
    }

    fn command(&mut self, command: Command, out: &mut impl Write) -> Result<bool> {
        match command {
            Command::PumpkinPower => match self.active().apply_bonus() {
                Ok(()) => writeln!(out, "Pumpkin Power activated! +1 point")?,
                Err(e) => writeln!(out, "No cheating twice! {e}")?,
            },
            Command::TrickOrTreat => self.secret_bonus(out)?,
            Command::BossBattle => match self.active().force_boss() {
                Ok(true) => writeln!(out, "Boss forced! Prepare...")?,
                Ok(false) => writeln!(out, "Boss already active!")?,
                Err(e) => writeln!(out, "{e}")?,
            },
            Command::StoryMode => {
                play_intro(out)?;
                let story = StoryMode::new(StoryLadder::default(), self.rng.fork())?;
                if let Some(first) = story.opponent() {
                    writeln!(out, "STORY MODE ACTIVATED! First opponent: {}", first.name)?;
                }
                self.story = Some(story);
            }
            Command::Goal(goal) => match self.active().set_score_goal(goal) {
                Ok(()) => writeln!(out, "First to {goal} wins!")?,
                Err(e) => writeln!(out, "{e}")?,
            },
            Command::Difficulty(difficulty) => {
                self.active().set_difficulty(difficulty);
                writeln!(out, "Difficulty set to {difficulty}")?;
            }
            Command::Stats => {
                let engine = self.active();
                let tracker = engine.state().tracker();
                let counts: Vec<String> = Move::ALL
                    .iter()
                    .map(|&m| format!("{m}: {}", tracker.count(m)))
                    .collect();
                writeln!(out, "Your moves: {}", counts.join(", "))?;
                writeln!(out, "Bot bias: {}%", engine.bias_percent())?;
            }
            Command::Reset => {
                self.active().reset();
                writeln!(out, "New game! Choose your move...")?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(false),
        }
        self.report_score(out)?;
        Ok(true)
    }

    fn secret_bonus(&mut self, out: &mut impl Write) -> Result<()> {
        match self.active().apply_secret_bonus() {
            Ok(()) => writeln!(out, "Trick or Treat! Pumpkin theme unlocked, +1 bonus point!")?,
            Err(e) => writeln!(out, "{e}")?,
        }
        Ok(())
    }

    fn report_score(&mut self, out: &mut impl Write) -> Result<()> {
        let engine = self.active();
        writeln!(out, "Score: You {} - Bot {}", engine.player_score(), engine.opponent_score())?;
        Ok(())
    }
}

fn report_round(round: &RoundOutcome, out: &mut impl Write) -> Result<()> {
    let mut rng = rand::thread_rng();
    writeln!(out, "You: {}  Bot: {}", round.player_move, round.opponent_move)?;
    let comment = match round.outcome {
        Outcome::Tie => "It's a tie, no points.",
        Outcome::PlayerWin => CHEERS.choose(&mut rng).copied().unwrap_or("You win!"),
        Outcome::OpponentWin => TAUNTS.choose(&mut rng).copied().unwrap_or("Bot wins!"),
    };
    writeln!(out, "{comment}")?;
    writeln!(out, "Score: You {} - Bot {}", round.player_score, round.opponent_score)?;
    match round.status {
        MatchStatus::Ongoing => {}
        MatchStatus::BossWeakened => writeln!(out, "You weakened the Boss, keep fighting!")?,
        MatchStatus::BossDefeated => writeln!(out, "You defeated the Boss Bot! Congratulations!")?,
        MatchStatus::PlayerVictory => writeln!(out, "You reached the goal! You defeated the bot.")?,
        MatchStatus::OpponentVictory => writeln!(out, "The bot reached the goal. Better luck next time.")?,
    }
    Ok(())
}

fn play_intro(out: &mut impl Write) -> Result<()> {
    writeln!(out, "~~~ Haunted Tournament ~~~")?;
    writeln!(out, "Three haunted bots stand between you and the secret ending.")?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    info!(seed = rng.seed(), goal = args.goal, difficulty = %args.difficulty, "starting game");

    let mut session = Session::new(args.match_config(), rng)?;
    let mut out = io::stdout().lock();
    writeln!(out, "Welcome to Rock, Paper, Scissors! Type 'help' for commands.")?;
    if args.story {
        session.command(Command::StoryMode, &mut out)?;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "failed to read input");
                break;
            }
        };
        if !session.handle_line(&line, &mut out)? {
            break;
        }
        out.flush()?;
    }

    info!("goodbye");
    Ok(())
}
