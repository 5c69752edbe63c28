//! Top-level controller: owns progress, the current screen and the active quiz
//! session, and persists counters after every change.

use rand::Rng;

use crate::effects::Effects;
use crate::progress::{KeyValueStore, ProgressState};
use crate::quiz::{PickOutcome, QuizSession, Timer};
use crate::{GameConfig, WORLDS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Home,
    Quiz,
}

/// User intents raised by the rendered screens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Start,
    DailyChallenge,
    OpenWorld(String),
    Back,
    Pick(u32),
}

impl Action {
    /// Decode a `data-action` / `data-value` attribute pair.
    pub fn parse(kind: &str, value: Option<&str>) -> Option<Self> {
        match kind {
            "start" => Some(Action::Start),
            "daily" => Some(Action::DailyChallenge),
            "back" => Some(Action::Back),
            "world" => value.map(|id| Action::OpenWorld(id.to_string())),
            "pick" => value?.trim().parse().ok().map(Action::Pick),
            _ => None,
        }
    }
}

pub struct App<S, R> {
    store: S,
    rng: R,
    config: GameConfig,
    progress: ProgressState,
    screen: Screen,
    session: Option<QuizSession>,
    sessions_started: u64,
}

impl<S: KeyValueStore, R: Rng> App<S, R> {
    pub fn new(store: S, rng: R, config: GameConfig) -> Self {
        let progress = ProgressState::load(&store);
        log::info!(
            "progress loaded: coins={} level={} streak={}",
            progress.coins,
            progress.level,
            progress.streak
        );
        Self {
            store,
            rng,
            config,
            progress,
            screen: Screen::Home,
            session: None,
            sessions_started: 0,
        }
    }

    pub fn progress(&self) -> ProgressState {
        self.progress
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Enter the quiz with a fresh question at the current level.
    pub fn start_quiz(&mut self) {
        self.sessions_started += 1;
        let session = QuizSession::start(self.sessions_started, self.progress.level, &mut self.rng);
        self.session = Some(session);
        self.screen = Screen::Quiz;
        log::info!("screen: quiz (level {})", self.progress.level);
    }

    /// Open a world card. Only playable worlds start the quiz.
    pub fn open_world(&mut self, id: &str) -> bool {
        match WORLDS.iter().find(|w| w.id == id) {
            Some(world) if world.playable => {
                self.start_quiz();
                true
            }
            Some(_) => {
                log::debug!("world '{id}' is not playable yet");
                false
            }
            None => {
                log::debug!("unknown world '{id}'");
                false
            }
        }
    }

    pub fn back_home(&mut self) {
        self.session = None;
        self.screen = Screen::Home;
        log::info!("screen: home");
    }

    /// Evaluate a pick on the active question. Changed counters are written to the
    /// store before this returns, so the follow-up is always scheduled after persistence.
    pub fn pick(&mut self, value: u32, effects: &mut dyn Effects) -> PickOutcome {
        let Some(session) = self.session.as_mut() else {
            return PickOutcome::Ignored;
        };
        let before = self.progress;
        let outcome = session.pick(value, &mut self.progress, &self.config, effects);
        if let PickOutcome::Correct { leveled_up: true, .. } = outcome {
            log::info!("level up: {}", self.progress.level);
        }
        if let Err(err) = self.progress.save_changes(&before, &mut self.store) {
            log::warn!("failed to persist progress: {err}");
        }
        outcome
    }

    /// Deliver a delayed follow-up. Returns whether anything changed.
    pub fn fire(&mut self, timer: Timer) -> bool {
        match self.session.as_mut() {
            Some(session) => session.fire(timer, self.progress.level, &mut self.rng),
            None => false,
        }
    }

    /// Route a screen action. Anything other than a pick on the quiz screen yields
    /// `PickOutcome::Ignored`.
    pub fn dispatch(&mut self, action: Action, effects: &mut dyn Effects) -> PickOutcome {
        match (self.screen, action) {
            (Screen::Home, Action::Start | Action::DailyChallenge) => self.start_quiz(),
            (Screen::Home, Action::OpenWorld(id)) => {
                self.open_world(&id);
            }
            (Screen::Quiz, Action::Back) => self.back_home(),
            (Screen::Quiz, Action::Pick(value)) => return self.pick(value, effects),
            (screen, action) => log::debug!("{action:?} ignored on {screen:?}"),
        }
        PickOutcome::Ignored
    }
}
