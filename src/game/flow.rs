//! Timer-driven round flow: arming, ticking, and firing transitions.

use rand::Rng;

use super::engine::{
    Game, PendingTimer, RoundPhase, TimerFire, COUNTDOWN_TICK_SECS, NUMBER_MAX, NUMBER_MIN,
    REVEAL_DELAY_SECS, WAIT_PAUSE_SECS,
};
use super::state::Parity;

impl Game {
    /// Arm the pending timer. There is only one slot: arming replaces any
    /// previously armed firing, so a superseded chain can never resurrect a
    /// round.
    pub(crate) fn arm(&mut self, due: f64, fire: TimerFire) {
        self.timer = Some(PendingTimer { due, fire });
    }

    /// Advance the session to `now`, firing every due timer once, in order.
    /// A large jump in `now` walks the whole chain, so a round armed at t=0
    /// resolves after a single `tick(10.0)`.
    pub fn tick(&mut self, now: f64) {
        while let Some(timer) = self.timer.take_if(|t| t.due <= now) {
            self.fire(timer);
        }
    }

    /// Deadline of the pending timer, if any.
    pub fn next_fire_at(&self) -> Option<f64> {
        self.timer.map(|t| t.due)
    }

    // Follow-up timers are armed relative to the previous deadline, not the
    // observed frame time, so the chain keeps its cadence when frames
    // arrive late.
    fn fire(&mut self, timer: PendingTimer) {
        match (timer.fire, self.phase) {
            (TimerFire::CountdownStep, RoundPhase::Countdown { choice, remaining }) => {
                let remaining = remaining.saturating_sub(1);
                self.phase = RoundPhase::Countdown { choice, remaining };
                if remaining == 0 {
                    self.arm(timer.due + WAIT_PAUSE_SECS, TimerFire::BeginWaiting);
                } else {
                    self.arm(timer.due + COUNTDOWN_TICK_SECS, TimerFire::CountdownStep);
                }
            }
            (TimerFire::BeginWaiting, RoundPhase::Countdown { choice, .. }) => {
                self.phase = RoundPhase::Waiting { choice };
                self.arm(timer.due + REVEAL_DELAY_SECS, TimerFire::Reveal);
            }
            (TimerFire::Reveal, RoundPhase::Waiting { choice }) => {
                let number = self.rng.random_range(NUMBER_MIN..=NUMBER_MAX);
                let correct = Parity::of(number) == choice;
                self.score_round(correct);
                tracing::info!(number, ?choice, correct, score = self.score, "round resolved");
                self.phase = RoundPhase::Result {
                    choice,
                    number,
                    correct,
                };
            }
            // A firing that does not match the current stage is stale;
            // dropping it on the floor is the whole defense.
            (fire, _) => tracing::warn!(?fire, stage = ?self.stage(), "stale timer fire dropped"),
        }
    }

    fn score_round(&mut self, correct: bool) {
        if correct {
            self.score += 1;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
        } else {
            self.streak = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::game::engine::Game;
    use crate::game::state::{Parity, Stage};

    #[test]
    fn countdown_steps_follow_the_reveal_cadence() {
        let mut game = Game::new_with_seed(7);
        game.choose(Parity::Even, 0.0);
        assert_eq!(game.public().countdown, Some(3));

        game.tick(0.9);
        assert_eq!(game.public().countdown, Some(3));
        game.tick(1.0);
        assert_eq!(game.public().countdown, Some(2));
        game.tick(2.0);
        assert_eq!(game.public().countdown, Some(1));
        game.tick(3.0);
        assert_eq!(game.public().countdown, Some(0));
        assert_eq!(game.stage(), Stage::Countdown);

        game.tick(3.49);
        assert_eq!(game.stage(), Stage::Countdown);
        game.tick(3.5);
        assert_eq!(game.stage(), Stage::Waiting);
        assert_eq!(game.public().countdown, None);

        game.tick(3.99);
        assert_eq!(game.stage(), Stage::Waiting);
        game.tick(4.0);
        assert_eq!(game.stage(), Stage::Result);
    }

    #[test]
    fn outcome_matches_parity_of_generated_number() {
        for seed in 0..20 {
            let mut game = Game::new_with_seed(seed);
            game.choose(Parity::Even, 0.0);
            game.tick(10.0);
            let state = game.public();
            assert_eq!(state.stage, Stage::Result);
            let number = state.number.expect("result carries a number");
            assert!((1..=100).contains(&number));
            assert_eq!(state.correct, Some(number % 2 == 0));
            assert_eq!(state.choice, Some(Parity::Even));
        }
    }

    #[test]
    fn large_time_jump_resolves_exactly_once() {
        let mut game = Game::new_with_seed(1);
        game.choose(Parity::Odd, 0.0);
        game.tick(1000.0);
        let state = game.public();
        assert_eq!(state.stage, Stage::Result);
        assert!(state.score <= 1);
        assert_eq!(game.next_fire_at(), None, "no timer survives a resolved round");
    }

    #[test]
    fn second_choice_mid_countdown_leaves_one_resolution() {
        let mut game = Game::new_with_seed(3);
        game.choose(Parity::Odd, 0.0);
        game.tick(1.5);
        let before = game.public();
        game.choose(Parity::Even, 1.5);
        assert_eq!(game.public(), before);

        // The single round resolves on the original schedule, against the
        // originally committed choice.
        game.tick(4.0);
        let state = game.public();
        assert_eq!(state.stage, Stage::Result);
        assert_eq!(state.choice, Some(Parity::Odd));
        assert_eq!(game.next_fire_at(), None);
    }

    #[test]
    fn reset_mid_countdown_silences_the_old_chain() {
        let mut game = Game::new_with_seed(5);
        game.choose(Parity::Even, 0.0);
        game.tick(2.0);
        game.reset();
        game.tick(100.0);
        let state = game.public();
        assert_eq!(state.stage, Stage::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(game.next_fire_at(), None);
    }

    #[test]
    fn hundred_rounds_score_matches_correct_count() {
        let mut game = Game::new_with_seed(42);
        let mut now = 0.0;
        let mut correct_rounds = 0u32;
        let mut last_score = 0u32;
        let mut streak = 0u32;
        let mut best_seen = 0u32;
        for _ in 0..100 {
            game.choose(Parity::Odd, now);
            now += 10.0;
            game.tick(now);
            let state = game.public();
            assert_eq!(state.stage, Stage::Result);
            if state.correct.expect("result carries an outcome") {
                correct_rounds += 1;
                streak += 1;
            } else {
                streak = 0;
            }
            best_seen = best_seen.max(streak);
            assert_eq!(state.score, correct_rounds);
            assert!(state.score >= last_score, "score must never decrease");
            last_score = state.score;
            assert_eq!(state.streak, streak);
            assert_eq!(state.best_streak, best_seen);
            game.next_round();
        }
        assert_eq!(game.public().score, correct_rounds);
    }
}
