//! Fire-and-forget presentation effects (sound cues, celebration burst).
//!
//! Game logic only talks to the [`Effects`] trait; implementations must never
//! fail loudly. The browser implementation lives in `web::effects`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    Click,
    Correct,
    Wrong,
    LevelUp,
}

impl SoundCue {
    /// File stem under the configured sound base.
    pub fn stem(self) -> &'static str {
        match self {
            SoundCue::Click => "click",
            SoundCue::Correct => "correct",
            SoundCue::Wrong => "wrong",
            SoundCue::LevelUp => "levelup",
        }
    }

    pub fn volume(self) -> f64 {
        match self {
            SoundCue::Click => 0.4,
            SoundCue::Correct | SoundCue::Wrong => 0.6,
            SoundCue::LevelUp => 0.7,
        }
    }
}

pub trait Effects {
    fn play(&mut self, cue: SoundCue);
    fn celebrate(&mut self);
}

/// Silent effects, for tests and headless embedding.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoEffects;

impl Effects for NoEffects {
    fn play(&mut self, _cue: SoundCue) {}
    fn celebrate(&mut self) {}
}
