//! Round orchestration and the replay loop.
//!
//! The session alternates human and opponent turns on a [`Game`], hands
//! every board to the [`Console`] for display, and asks the console whether
//! to play again once a round ends.

use crate::board::Rows;
use crate::error::GameError;
use crate::game::{Game, GameState, Outcome, Turn};
use crate::location::Location;
use crate::opponent::{Chooser, OpponentEngine};
use crate::types::Side;
use derive_getters::Getters;
use tracing::{debug, info, instrument, warn};

/// Everything the core needs from the outside world.
///
/// Implementations own all terminal I/O: reading and re-prompting input,
/// drawing boards, and printing messages.
pub trait Console {
    /// Error raised by the console's own I/O. Core contract violations are
    /// converted into it.
    type Error: From<GameError>;

    /// Blocks until the human picks one of `available`.
    fn request_human_move(&mut self, available: &[Location]) -> Result<Location, Self::Error>;

    /// Shows the current board.
    fn render_board(&mut self, rows: &Rows) -> Result<(), Self::Error>;

    /// Reports how the round ended.
    fn announce_outcome(&mut self, outcome: Outcome) -> Result<(), Self::Error>;

    /// Blocks until the human answers yes (`true`) or no (`false`).
    fn request_replay_decision(&mut self) -> Result<bool, Self::Error>;

    /// Called before every opponent move. Consoles may pause here.
    fn opponent_thinking(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when a requested move was not among the available locations.
    fn reject_move(&mut self, _location: Location, _available: &[Location]) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Running totals across replays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters)]
pub struct Tally {
    /// Rounds completed.
    #[getter(copy)]
    games: u32,
    /// Rounds the human won.
    #[getter(copy)]
    human_wins: u32,
    /// Rounds the opponent won.
    #[getter(copy)]
    opponent_wins: u32,
    /// Rounds drawn.
    #[getter(copy)]
    draws: u32,
}

impl Tally {
    /// Adds one finished round.
    pub fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::Winner(Side::Player1) => self.human_wins += 1,
            Outcome::Winner(Side::Player2) => self.opponent_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "games: {}, x wins: {}, o wins: {}, draws: {}",
            self.games, self.human_wins, self.opponent_wins, self.draws
        )
    }
}

/// Drives rounds between a console-backed human and the opponent engine.
pub struct Session<K: Console, C: Chooser> {
    console: K,
    engine: OpponentEngine<C>,
    tally: Tally,
}

impl<K: Console, C: Chooser> Session<K, C> {
    /// Creates a session with an empty tally.
    pub fn new(console: K, engine: OpponentEngine<C>) -> Self {
        Self {
            console,
            engine,
            tally: Tally::default(),
        }
    }

    /// Returns the console.
    pub fn console(&self) -> &K {
        &self.console
    }

    /// Ends the session, handing back the console.
    pub fn into_console(self) -> K {
        self.console
    }

    /// Returns the totals so far.
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Plays rounds until the human declines a replay.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Tally, K::Error> {
        info!("Session started");
        loop {
            let outcome = self.play_round()?;
            self.tally.record(outcome);
            if !self.console.request_replay_decision()? {
                break;
            }
            debug!(games = self.tally.games, "Replay requested");
        }
        info!(tally = %self.tally, "Session finished");
        Ok(self.tally)
    }

    /// Plays one round on a fresh board and announces its outcome.
    #[instrument(skip(self))]
    pub fn play_round(&mut self) -> Result<Outcome, K::Error> {
        let mut game = Game::new();
        loop {
            self.console.render_board(&game.board().render())?;
            if let GameState::Ended(outcome) = game.state() {
                self.console.announce_outcome(outcome)?;
                return Ok(outcome);
            }
            game = match game.turn() {
                Turn::Human => {
                    let location = self.human_move(&game)?;
                    game.play(location)?
                }
                Turn::Opponent => {
                    self.console.opponent_thinking()?;
                    let (game, choice) = game.play_opponent(&mut self.engine)?;
                    debug!(location = %choice.location, decision = %choice.decision, "Opponent moved");
                    game
                }
            };
        }
    }

    /// Asks the console until it names an available location.
    fn human_move(&mut self, game: &Game) -> Result<Location, K::Error> {
        let available = game.available_positions();
        loop {
            let location = self.console.request_human_move(&available)?;
            if game.accepts(location) {
                return Ok(location);
            }
            warn!(%location, "Console returned an unavailable location");
            self.console.reject_move(location, &available)?;
        }
    }
}
