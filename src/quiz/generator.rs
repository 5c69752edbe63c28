// Addition question generation scaled by level.
use rand::Rng;
use rand::seq::SliceRandom;

/// Smallest operand ceiling, even at level 0/1.
const MIN_OPERAND_CAP: u32 = 5;
/// `10 + 2*level`, capped at 50, then halved.
const BASE_RANGE: u32 = 10;
const RANGE_PER_LEVEL: u32 = 2;
const RANGE_CEILING: u32 = 50;

/// Distractors are drawn from `correct + [-SPREAD, SPREAD]`.
const DISTRACTOR_SPREAD: i64 = 6;
const DISTRACTOR_COUNT: usize = 3;
/// Random draws before falling back to the nearest unused values.
const MAX_DISTRACTOR_DRAWS: usize = 64;

pub const CHOICE_COUNT: usize = DISTRACTOR_COUNT + 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub a: u32,
    pub b: u32,
    pub correct: u32,
    /// Display order; contains `correct` exactly once.
    pub choices: [u32; CHOICE_COUNT],
}

impl Question {
    /// Build a question for fixed operands; distractors and order still come from `rng`.
    pub fn from_operands<R: Rng + ?Sized>(a: u32, b: u32, rng: &mut R) -> Self {
        let correct = a.saturating_add(b);
        let wrongs = distractors(correct, rng);
        let mut choices = [correct, wrongs[0], wrongs[1], wrongs[2]];
        choices.shuffle(rng);
        Self { a, b, correct, choices }
    }

    pub fn prompt(&self) -> String {
        format!("What is {} + {}?", self.a, self.b)
    }

    pub fn is_correct(&self, pick: u32) -> bool {
        pick == self.correct
    }
}

/// Upper bound (inclusive) for each operand at `level`.
pub fn max_operand(level: u32) -> u32 {
    let range = BASE_RANGE
        .saturating_add(level.saturating_mul(RANGE_PER_LEVEL))
        .min(RANGE_CEILING);
    (range / 2).max(MIN_OPERAND_CAP)
}

pub fn generate<R: Rng + ?Sized>(level: u32, rng: &mut R) -> Question {
    let max = max_operand(level);
    let a = rng.gen_range(1..=max);
    let b = rng.gen_range(1..=max);
    Question::from_operands(a, b, rng)
}

fn distractors<R: Rng + ?Sized>(correct: u32, rng: &mut R) -> [u32; DISTRACTOR_COUNT] {
    let mut found: Vec<u32> = Vec::with_capacity(DISTRACTOR_COUNT);
    let mut draws = 0;
    while found.len() < DISTRACTOR_COUNT && draws < MAX_DISTRACTOR_DRAWS {
        draws += 1;
        let offset = rng.gen_range(-DISTRACTOR_SPREAD..=DISTRACTOR_SPREAD);
        let candidate = (correct as i64 + offset).max(0) as u32;
        if candidate != correct && !found.contains(&candidate) {
            found.push(candidate);
        }
    }
    if found.len() < DISTRACTOR_COUNT {
        log::debug!(
            "distractor draws exhausted for {correct} with {} found; filling nearest",
            found.len()
        );
        fill_nearest(correct, &mut found);
    }
    [found[0], found[1], found[2]]
}

// correct+1, correct-1, correct+2, correct-2, ... skipping values already taken.
fn fill_nearest(correct: u32, found: &mut Vec<u32>) {
    let mut step = 1u32;
    while found.len() < DISTRACTOR_COUNT {
        let above = correct.saturating_add(step);
        if above != correct && !found.contains(&above) {
            found.push(above);
        }
        if found.len() < DISTRACTOR_COUNT {
            if let Some(below) = correct.checked_sub(step) {
                if !found.contains(&below) {
                    found.push(below);
                }
            }
        }
        step += 1;
    }
}
