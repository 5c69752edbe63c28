//! Tap-the-answer addition quiz.
//!
//! - `generator`: question + distractor generation scaled by level
//! - `evaluate`: pure reward rules (coins, streak, level)
//! - `session`: per-visit round state, feedback indicator and delayed follow-ups

mod evaluate;
mod generator;
mod session;

pub use evaluate::{Evaluation, Rules, evaluate};
pub use generator::{CHOICE_COUNT, Question, generate, max_operand};
pub use session::{Feedback, FollowUp, Phase, PickOutcome, QuizSession, Timer, TimerKind};
