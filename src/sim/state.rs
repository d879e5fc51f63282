//! Game state and core simulation types
//!
//! `GameState` is the session: it lives for the whole process. The per-round
//! parts (phase, score, actor position, obstacles) are reset on restart, the
//! high score is not.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::obstacle::ObstacleStream;
use crate::audio::SoundEffect;
use crate::highscores::HighScore;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Idle before the first flap
    #[default]
    Waiting,
    /// Active gameplay
    Active,
    /// Crashed, waiting for restart input
    Over,
}

/// Something that happened during a tick, in the order it happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// First flap of a round
    RoundStarted,
    Flapped,
    /// Passed an obstacle pair; carries the new score
    Scored { score: u32 },
    /// Hit the floor or an obstacle
    Crashed,
    /// Back to `Waiting` after a restart
    RoundReset,
}

impl GameEvent {
    /// The sound this event asks the audio collaborator to play, if any
    pub fn sound(&self) -> Option<SoundEffect> {
        match self {
            GameEvent::Flapped => Some(SoundEffect::Flap),
            GameEvent::Scored { .. } => Some(SoundEffect::Score),
            GameEvent::Crashed => Some(SoundEffect::Crash),
            GameEvent::RoundStarted | GameEvent::RoundReset => None,
        }
    }
}

/// Per-round state. The phase only changes through the transition methods.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Round {
    phase: Phase,
    score: u32,
}

impl Round {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// Waiting -> Active. Returns false if not waiting.
    fn start(&mut self) -> bool {
        if self.phase != Phase::Waiting {
            return false;
        }
        self.phase = Phase::Active;
        true
    }

    /// Active -> Over. Returns false if not active, so repeat hits are no-ops.
    fn end(&mut self) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        self.phase = Phase::Over;
        true
    }

    /// Over -> Waiting with the score cleared. Returns false if not over.
    fn restart(&mut self) -> bool {
        if self.phase != Phase::Over {
            return false;
        }
        self.phase = Phase::Waiting;
        self.score = 0;
        true
    }

    fn add_point(&mut self) -> u32 {
        self.score += 1;
        self.score
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the gap RNG was created from
    pub seed: u64,
    rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub actor: Actor,
    pub obstacles: ObstacleStream,
    round: Round,
    high_score: HighScore,
    /// Events raised during the current tick
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            actor: Actor::default(),
            obstacles: ObstacleStream::new(),
            round: Round::default(),
            high_score: HighScore::new(),
            events: Vec::new(),
        }
    }

    /// Create a new session with a random seed
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn phase(&self) -> Phase {
        self.round.phase()
    }

    pub fn score(&self) -> u32 {
        self.round.score()
    }

    pub fn high_score(&self) -> u32 {
        self.high_score.best()
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Spawn an obstacle pair if this tick is on the spawn cadence
    pub(crate) fn spawn_due_obstacles(&mut self) -> Option<f32> {
        self.obstacles.try_spawn(self.time_ticks, &mut self.rng)
    }

    /// Start the round on the first flap
    pub(crate) fn begin_round(&mut self) {
        if self.round.start() {
            log::info!("Round started at tick {}", self.time_ticks);
            self.events.push(GameEvent::RoundStarted);
        }
    }

    /// End the round (floor contact or collision). Idempotent within a tick.
    pub(crate) fn end_round(&mut self) {
        if self.round.end() {
            self.actor.stop();
            log::info!(
                "Round over with score {} (best {})",
                self.round.score(),
                self.high_score.best()
            );
            self.events.push(GameEvent::Crashed);
        }
    }

    /// Restart after a crash: actor, score and obstacles reset, high score kept
    pub(crate) fn restart_round(&mut self) {
        if self.round.restart() {
            self.actor.reset();
            self.obstacles.reset();
            log::info!("Round reset (best {})", self.high_score.best());
            self.events.push(GameEvent::RoundReset);
        }
    }

    /// Apply the flap impulse
    pub(crate) fn flap(&mut self) {
        self.actor.flap();
        self.events.push(GameEvent::Flapped);
    }

    /// Award one point and raise the high score if beaten
    pub(crate) fn award_point(&mut self) {
        let score = self.round.add_point();
        if self.high_score.record(score) {
            log::debug!("New best score: {}", score);
        }
        self.events.push(GameEvent::Scored { score });
    }

    /// Take the events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
