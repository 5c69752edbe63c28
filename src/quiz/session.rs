// One visit to the quiz screen: current question, feedback indicator and the
// tickets that keep delayed follow-ups from acting on a stale round.
use rand::Rng;

use super::{Question, Rules, generate};
use crate::GameConfig;
use crate::effects::{Effects, SoundCue};
use crate::progress::ProgressState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Wrong,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Picks are evaluated.
    Answering,
    /// A correct pick is showing; picks are ignored until `NextQuestion` fires.
    AwaitingNext,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    NextQuestion,
    ClearFeedback,
}

/// Delayed follow-up identity. Only acts if `session` and `ticket` still match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timer {
    pub session: u64,
    pub ticket: u64,
    pub kind: TimerKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FollowUp {
    pub delay_ms: u32,
    pub timer: Timer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickOutcome {
    Ignored,
    Correct { leveled_up: bool, follow_up: FollowUp },
    Wrong { follow_up: FollowUp },
}

impl PickOutcome {
    pub fn follow_up(&self) -> Option<FollowUp> {
        match *self {
            PickOutcome::Ignored => None,
            PickOutcome::Correct { follow_up, .. } | PickOutcome::Wrong { follow_up } => {
                Some(follow_up)
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct QuizSession {
    id: u64,
    ticket: u64,
    question: Question,
    feedback: Option<Feedback>,
    phase: Phase,
}

impl QuizSession {
    pub fn start<R: Rng + ?Sized>(id: u64, level: u32, rng: &mut R) -> Self {
        Self::with_question(id, generate(level, rng))
    }

    pub fn with_question(id: u64, question: Question) -> Self {
        Self { id, ticket: 0, question, feedback: None, phase: Phase::Answering }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Evaluate `value` against the current question, updating `progress` in place.
    /// The returned follow-up must be fired after its delay via [`QuizSession::fire`].
    pub fn pick(
        &mut self,
        value: u32,
        progress: &mut ProgressState,
        config: &GameConfig,
        effects: &mut dyn Effects,
    ) -> PickOutcome {
        if self.phase == Phase::AwaitingNext {
            log::debug!("pick {value} ignored while next question is pending");
            return PickOutcome::Ignored;
        }
        effects.play(SoundCue::Click);

        let ev = Rules::from(config).evaluate(value, &self.question, progress);
        *progress = ev.state;
        self.ticket += 1;

        if ev.correct {
            effects.play(SoundCue::Correct);
            if ev.leveled_up {
                effects.play(SoundCue::LevelUp);
                effects.celebrate();
            }
            self.feedback = Some(Feedback::Correct);
            self.phase = Phase::AwaitingNext;
            log::debug!("correct: {} (streak {})", value, progress.streak);
            PickOutcome::Correct {
                leveled_up: ev.leveled_up,
                follow_up: self.follow_up(TimerKind::NextQuestion, config.next_question_delay_ms),
            }
        } else {
            effects.play(SoundCue::Wrong);
            self.feedback = Some(Feedback::Wrong);
            log::debug!("wrong: picked {} for {}", value, self.question.prompt());
            PickOutcome::Wrong {
                follow_up: self.follow_up(TimerKind::ClearFeedback, config.feedback_clear_delay_ms),
            }
        }
    }

    /// Apply a delayed follow-up. Returns `false` (and changes nothing) when the
    /// timer belongs to another session or was superseded by a later pick.
    pub fn fire<R: Rng + ?Sized>(&mut self, timer: Timer, level: u32, rng: &mut R) -> bool {
        if timer.session != self.id || timer.ticket != self.ticket {
            return false;
        }
        match timer.kind {
            TimerKind::NextQuestion if self.phase == Phase::AwaitingNext => {
                self.question = generate(level, rng);
                self.feedback = None;
                self.phase = Phase::Answering;
                true
            }
            TimerKind::ClearFeedback if self.feedback == Some(Feedback::Wrong) => {
                self.feedback = None;
                true
            }
            _ => false,
        }
    }

    fn follow_up(&self, kind: TimerKind, delay_ms: u32) -> FollowUp {
        FollowUp {
            delay_ms,
            timer: Timer { session: self.id, ticket: self.ticket, kind },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::NoEffects;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fixed_session() -> QuizSession {
        QuizSession::with_question(
            1,
            Question { a: 3, b: 4, correct: 7, choices: [5, 7, 9, 8] },
        )
    }

    #[test]
    fn correct_pick_blocks_further_picks() {
        let cfg = GameConfig::default();
        let mut s = fixed_session();
        let mut p = ProgressState::default();
        let first = s.pick(7, &mut p, &cfg, &mut NoEffects);
        assert!(matches!(first, PickOutcome::Correct { leveled_up: false, .. }));
        assert_eq!(s.phase(), Phase::AwaitingNext);
        assert_eq!(s.pick(7, &mut p, &cfg, &mut NoEffects), PickOutcome::Ignored);
        assert_eq!(p, ProgressState { coins: 5, level: 1, streak: 1 });
    }

    #[test]
    fn next_question_timer_replaces_question() {
        let cfg = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(5);
        let mut s = fixed_session();
        let mut p = ProgressState::default();
        let follow = s.pick(7, &mut p, &cfg, &mut NoEffects).follow_up().unwrap();
        assert_eq!(follow.delay_ms, 550);
        assert_eq!(follow.timer.kind, TimerKind::NextQuestion);
        assert!(s.fire(follow.timer, p.level, &mut rng));
        assert_eq!(s.phase(), Phase::Answering);
        assert_eq!(s.feedback(), None);
        // Firing twice is a no-op.
        assert!(!s.fire(follow.timer, p.level, &mut rng));
    }

    #[test]
    fn wrong_pick_keeps_question() {
        let cfg = GameConfig::default();
        let mut s = fixed_session();
        let mut p = ProgressState { coins: 10, level: 2, streak: 3 };
        let follow = s.pick(9, &mut p, &cfg, &mut NoEffects).follow_up().unwrap();
        assert_eq!(follow.delay_ms, 700);
        assert_eq!(s.feedback(), Some(Feedback::Wrong));
        assert_eq!(s.question().correct, 7);
        assert_eq!(p, ProgressState { coins: 10, level: 2, streak: 0 });
    }

    #[test]
    fn stale_clear_does_not_hide_newer_feedback() {
        let cfg = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(9);
        let mut s = fixed_session();
        let mut p = ProgressState::default();
        let first = s.pick(5, &mut p, &cfg, &mut NoEffects).follow_up().unwrap();
        let second = s.pick(8, &mut p, &cfg, &mut NoEffects).follow_up().unwrap();
        assert!(!s.fire(first.timer, 1, &mut rng));
        assert_eq!(s.feedback(), Some(Feedback::Wrong));
        assert!(s.fire(second.timer, 1, &mut rng));
        assert_eq!(s.feedback(), None);
    }

    #[test]
    fn timer_from_other_session_is_ignored() {
        let cfg = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(2);
        let mut old = fixed_session();
        let mut p = ProgressState::default();
        let follow = old.pick(7, &mut p, &cfg, &mut NoEffects).follow_up().unwrap();

        let mut fresh = QuizSession::start(2, p.level, &mut rng);
        let before = fresh.question().clone();
        assert!(!fresh.fire(follow.timer, p.level, &mut rng));
        assert_eq!(fresh.question(), &before);
    }
}
