//! Tunable game constants.
//!
//! Defaults reproduce the shipped game. With the `serde_json` feature the host page
//! can override any subset of fields through a `<script id="zm-config">` JSON blob.

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Coins awarded for each correct answer.
    pub coins_per_correct: u32,
    /// Consecutive correct answers needed per level-up. 0 disables levelling.
    pub streak_per_level: u32,
    /// Delay between a correct answer and the next question.
    pub next_question_delay_ms: u32,
    /// How long the wrong-answer indicator stays up.
    pub feedback_clear_delay_ms: u32,
    /// URL prefix for sound cue files (`{sound_base}/{cue}.mp3`).
    pub sound_base: String,
    pub sounds_enabled: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            coins_per_correct: 5,
            streak_per_level: 8,
            next_question_delay_ms: 550,
            feedback_clear_delay_ms: 700,
            sound_base: "/sounds".to_string(),
            sounds_enabled: true,
        }
    }
}

#[cfg(feature = "serde_json")]
impl GameConfig {
    /// Parse a (possibly partial) JSON object; absent fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, crate::GameError> {
        serde_json::from_str(raw).map_err(|e| crate::GameError::Config(e.to_string()))
    }
}
