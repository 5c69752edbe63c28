// Pure scoring: pick + question + progress -> new progress.
use super::Question;
use crate::GameConfig;
use crate::progress::ProgressState;

/// Reward rules applied on each answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rules {
    pub coins_per_correct: u32,
    pub streak_per_level: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self::from(&GameConfig::default())
    }
}

impl From<&GameConfig> for Rules {
    fn from(cfg: &GameConfig) -> Self {
        Self {
            coins_per_correct: cfg.coins_per_correct,
            streak_per_level: cfg.streak_per_level,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub correct: bool,
    pub leveled_up: bool,
    pub state: ProgressState,
}

impl Rules {
    pub fn evaluate(&self, pick: u32, question: &Question, state: &ProgressState) -> Evaluation {
        let mut next = *state;
        if !question.is_correct(pick) {
            next.streak = 0;
            return Evaluation { correct: false, leveled_up: false, state: next };
        }
        next.coins = next.coins.saturating_add(self.coins_per_correct);
        next.streak = next.streak.saturating_add(1);
        let leveled_up = self.streak_per_level > 0 && next.streak % self.streak_per_level == 0;
        if leveled_up {
            next.level = next.level.saturating_add(1);
        }
        Evaluation { correct: true, leveled_up, state: next }
    }
}

/// Evaluate with the default rules (5 coins, level-up every 8 in a row).
pub fn evaluate(pick: u32, question: &Question, state: &ProgressState) -> Evaluation {
    Rules::default().evaluate(pick, question, state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(a: u32, b: u32) -> Question {
        let correct = a + b;
        Question { a, b, correct, choices: [correct, correct + 1, correct + 2, correct + 3] }
    }

    #[test]
    fn correct_pick_pays_and_extends_streak() {
        let q = question(3, 4);
        let ev = evaluate(7, &q, &ProgressState::default());
        assert!(ev.correct);
        assert!(!ev.leveled_up);
        assert_eq!(ev.state, ProgressState { coins: 5, level: 1, streak: 1 });
    }

    #[test]
    fn wrong_pick_only_resets_streak() {
        let q = question(3, 4);
        let before = ProgressState { coins: 40, level: 3, streak: 5 };
        let ev = evaluate(8, &q, &before);
        assert!(!ev.correct);
        assert_eq!(ev.state, ProgressState { coins: 40, level: 3, streak: 0 });
    }

    #[test]
    fn pick_outside_choices_is_wrong() {
        let q = question(2, 2);
        let ev = evaluate(999, &q, &ProgressState { coins: 0, level: 1, streak: 2 });
        assert!(!ev.correct);
        assert_eq!(ev.state.streak, 0);
    }

    #[test]
    fn eighth_in_a_row_levels_up() {
        let q = question(1, 1);
        let ev = evaluate(2, &q, &ProgressState { coins: 35, level: 1, streak: 7 });
        assert!(ev.leveled_up);
        assert_eq!(ev.state, ProgressState { coins: 40, level: 2, streak: 8 });
    }

    #[test]
    fn level_up_only_on_multiples() {
        let q = question(1, 1);
        let mut state = ProgressState::default();
        let mut level_ups = Vec::new();
        for _ in 0..24 {
            let ev = evaluate(2, &q, &state);
            if ev.leveled_up {
                level_ups.push(ev.state.streak);
            }
            state = ev.state;
        }
        assert_eq!(level_ups, vec![8, 16, 24]);
        assert_eq!(state.level, 4);
    }

    #[test]
    fn zero_streak_per_level_never_levels() {
        let rules = Rules { coins_per_correct: 1, streak_per_level: 0 };
        let q = question(1, 1);
        let ev = rules.evaluate(2, &q, &ProgressState { coins: 0, level: 1, streak: 0 });
        assert!(!ev.leveled_up);
        assert_eq!(ev.state.level, 1);
    }

    #[test]
    fn coins_saturate() {
        let q = question(1, 1);
        let ev = evaluate(2, &q, &ProgressState { coins: u32::MAX - 1, level: 1, streak: 0 });
        assert_eq!(ev.state.coins, u32::MAX);
    }
}
