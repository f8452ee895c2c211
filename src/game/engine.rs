//! Core session definition + constructors and small helpers.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::state::{Parity, RoundStatePublic, Stage};

/// The countdown starts here and steps down once per tick.
pub(crate) const COUNTDOWN_START: u8 = 3;
/// Seconds between countdown steps.
pub(crate) const COUNTDOWN_TICK_SECS: f64 = 1.0;
/// Pause between the countdown reaching 0 and the waiting spinner.
pub(crate) const WAIT_PAUSE_SECS: f64 = 0.5;
/// How long the waiting spinner shows before the number is revealed.
pub(crate) const REVEAL_DELAY_SECS: f64 = 0.5;

pub(crate) const NUMBER_MIN: u32 = 1;
pub(crate) const NUMBER_MAX: u32 = 100;

/// What the pending timer does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TimerFire {
    /// Step the countdown counter down by one.
    CountdownStep,
    /// Move from the finished countdown into the waiting stage.
    BeginWaiting,
    /// Generate the number and enter the result stage.
    Reveal,
}

/// The single scheduled firing the session may hold. Arming a new one
/// replaces the old one, which is what cancellation means here.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PendingTimer {
    pub(crate) due: f64,
    pub(crate) fire: TimerFire,
}

/// Per-stage payloads. Only fields that are meaningful in a stage exist in
/// its variant, and the committed choice travels inside the payloads, so
/// later input cannot rewrite it and half-updated field combinations cannot
/// be observed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum RoundPhase {
    Idle,
    Countdown { choice: Parity, remaining: u8 },
    Waiting { choice: Parity },
    Result { choice: Parity, number: u32, correct: bool },
}

/// One play session: the round state machine plus score bookkeeping.
#[derive(Clone, Debug)]
pub struct Game {
    pub(crate) phase: RoundPhase,
    pub(crate) timer: Option<PendingTimer>,
    pub score: u32,
    pub streak: u32,
    pub best_streak: u32,
    pub(crate) rng: SmallRng,
}

impl Game {
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_os_rng())
    }

    /// Deterministic session for tests and demos.
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        Self {
            phase: RoundPhase::Idle,
            timer: None,
            score: 0,
            streak: 0,
            best_streak: 0,
            rng,
        }
    }

    /// Commit a parity choice and start the countdown chain. Anywhere but
    /// `Idle` this is a no-op: the machine never errors on misordered input.
    pub fn choose(&mut self, choice: Parity, now: f64) {
        if self.phase != RoundPhase::Idle {
            tracing::debug!(?choice, stage = ?self.stage(), "choose ignored outside Idle");
            return;
        }
        tracing::info!(?choice, "round committed");
        self.phase = RoundPhase::Countdown {
            choice,
            remaining: COUNTDOWN_START,
        };
        self.arm(now + COUNTDOWN_TICK_SECS, TimerFire::CountdownStep);
    }

    /// Return to `Idle` for the next round. Score and streaks carry over.
    pub fn next_round(&mut self) {
        match self.phase {
            RoundPhase::Result { .. } => {
                self.phase = RoundPhase::Idle;
                self.timer = None;
            }
            _ => tracing::debug!(stage = ?self.stage(), "next_round ignored outside Result"),
        }
    }

    /// Wipe the whole session: stage, score, streaks, and any pending timer.
    pub fn reset(&mut self) {
        self.phase = RoundPhase::Idle;
        self.timer = None;
        self.score = 0;
        self.streak = 0;
        self.best_streak = 0;
    }

    pub fn stage(&self) -> Stage {
        match self.phase {
            RoundPhase::Idle => Stage::Idle,
            RoundPhase::Countdown { .. } => Stage::Countdown,
            RoundPhase::Waiting { .. } => Stage::Waiting,
            RoundPhase::Result { .. } => Stage::Result,
        }
    }

    /// Whether a timer chain is running; the UI keeps repainting while this
    /// holds so countdown steps land without user input.
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Snapshot of the session for the UI.
    pub fn public(&self) -> RoundStatePublic {
        let (choice, countdown, number, correct) = match self.phase {
            RoundPhase::Idle => (None, None, None, None),
            RoundPhase::Countdown { choice, remaining } => {
                (Some(choice), Some(remaining), None, None)
            }
            RoundPhase::Waiting { choice } => (Some(choice), None, None, None),
            RoundPhase::Result {
                choice,
                number,
                correct,
            } => (Some(choice), None, Some(number), Some(correct)),
        };
        RoundStatePublic {
            stage: self.stage(),
            score: self.score,
            streak: self.streak,
            best_streak: self.best_streak,
            choice,
            countdown,
            number,
            correct,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_idle_with_zeroed_counters() {
        let game = Game::new();
        let state = game.public();
        assert_eq!(state.stage, Stage::Idle);
        assert_eq!((state.score, state.streak, state.best_streak), (0, 0, 0));
        assert_eq!(
            (state.choice, state.countdown, state.number, state.correct),
            (None, None, None, None)
        );
        assert!(!game.is_running());
    }

    #[test]
    fn choose_is_ignored_outside_idle() {
        let mut game = Game::new_with_seed(1);
        game.choose(Parity::Odd, 0.0);
        let before = game.public();
        game.choose(Parity::Even, 0.5);
        assert_eq!(game.public(), before, "mid-countdown choose must not change state");

        game.tick(10.0);
        assert_eq!(game.stage(), Stage::Result);
        let before = game.public();
        game.choose(Parity::Even, 10.5);
        assert_eq!(game.public(), before, "choose in Result must not change state");
    }

    #[test]
    fn next_round_only_leaves_result() {
        let mut game = Game::new_with_seed(2);
        game.next_round();
        assert_eq!(game.stage(), Stage::Idle);

        game.choose(Parity::Even, 0.0);
        game.next_round();
        assert_eq!(game.stage(), Stage::Countdown, "next_round mid-countdown is a no-op");

        game.tick(10.0);
        let score = game.public().score;
        game.next_round();
        let state = game.public();
        assert_eq!(state.stage, Stage::Idle);
        assert_eq!(state.score, score, "next_round must not touch the score");
        assert_eq!(
            (state.choice, state.countdown, state.number, state.correct),
            (None, None, None, None)
        );
    }

    #[test]
    fn public_exposes_only_stage_relevant_fields() {
        let mut game = Game::new_with_seed(4);
        game.choose(Parity::Odd, 0.0);
        let state = game.public();
        assert_eq!(state.countdown, Some(COUNTDOWN_START));
        assert_eq!(state.choice, Some(Parity::Odd));
        assert_eq!((state.number, state.correct), (None, None));

        game.tick(3.5);
        let state = game.public();
        assert_eq!(state.stage, Stage::Waiting);
        assert_eq!((state.countdown, state.number, state.correct), (None, None, None));

        game.tick(4.0);
        let state = game.public();
        assert_eq!(state.stage, Stage::Result);
        assert!(state.number.is_some());
        assert!(state.correct.is_some());
    }
}
