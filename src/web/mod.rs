//! Browser shell: owns the single `App` instance, renders it into `#zm-root`,
//! routes clicks to it and turns follow-ups into `setTimeout` callbacks.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, MouseEvent, window};

use crate::error::describe;
use crate::quiz::FollowUp;
use crate::view::{render_home, render_quiz};
use crate::{Action, App, GameConfig, GameError, Screen};

pub mod effects;
pub mod storage;

use effects::BrowserEffects;
use storage::BrowserStore;

const ROOT_ID: &str = "zm-root";
#[cfg_attr(not(feature = "serde_json"), allow(dead_code))]
const CONFIG_ID: &str = "zm-config";

struct Game {
    app: App<BrowserStore, SmallRng>,
    effects: BrowserEffects,
    root: Element,
}

impl Game {
    fn render(&self) {
        let progress = self.app.progress();
        let html = match (self.app.screen(), self.app.session()) {
            (Screen::Quiz, Some(session)) => render_quiz(&progress, session),
            _ => render_home(&progress),
        };
        self.root.set_inner_html(&html);
    }
}

thread_local! {
    static GAME: std::cell::RefCell<Option<Game>> = const { std::cell::RefCell::new(None) };
}

pub(crate) fn start() -> Result<(), GameError> {
    if GAME.with(|g| g.borrow().is_some()) {
        log::warn!("start_game called twice; keeping the running game");
        return Ok(());
    }
    let win = window().ok_or(GameError::NoWindow)?;
    let doc = win.document().ok_or(GameError::NoDocument)?;
    let root = mount_root(&doc)?;

    let config = load_config(&doc);
    let effects = BrowserEffects::new(&config);
    let app = App::new(BrowserStore::open(&win), SmallRng::from_entropy(), config);
    let game = Game { app, effects, root: root.clone() };
    game.render();
    GAME.with(|g| g.replace(Some(game)));

    // One delegated listener; buttons are re-created on every render.
    let closure = Closure::wrap(Box::new(move |evt: MouseEvent| {
        let Some(action) = action_from_event(&evt) else {
            return;
        };
        let follow_up = GAME.with(|cell| {
            let mut slot = cell.borrow_mut();
            let game = slot.as_mut()?;
            let outcome = game.app.dispatch(action, &mut game.effects);
            game.render();
            outcome.follow_up()
        });
        if let Some(follow_up) = follow_up {
            schedule(follow_up);
        }
    }) as Box<dyn FnMut(_)>);
    root.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(GameError::dom)?;
    closure.forget();

    log::info!("game started");
    Ok(())
}

fn mount_root(doc: &Document) -> Result<Element, GameError> {
    if let Some(el) = doc.get_element_by_id(ROOT_ID) {
        return Ok(el);
    }
    let body = doc.body().ok_or(GameError::NoDocument)?;
    let el = doc.create_element("div").map_err(GameError::dom)?;
    el.set_id(ROOT_ID);
    if let Err(err) = el.set_attribute(
        "style",
        "min-height:100vh; background:linear-gradient(135deg,#bae6fd,#fbcfe8,#d9f99d);",
    ) {
        log::debug!("root styling skipped: {}", describe(&err));
    }
    body.append_child(&el).map_err(GameError::dom)?;
    Ok(el)
}

#[cfg(feature = "serde_json")]
fn load_config(doc: &Document) -> GameConfig {
    let Some(raw) = doc.get_element_by_id(CONFIG_ID).and_then(|el| el.text_content()) else {
        return GameConfig::default();
    };
    match GameConfig::from_json(&raw) {
        Ok(cfg) => {
            log::info!("config loaded from #{CONFIG_ID}");
            cfg
        }
        Err(err) => {
            log::warn!("{err}; using defaults");
            GameConfig::default()
        }
    }
}

#[cfg(not(feature = "serde_json"))]
fn load_config(_doc: &Document) -> GameConfig {
    GameConfig::default()
}

fn action_from_event(evt: &MouseEvent) -> Option<Action> {
    let target: Element = evt.target()?.dyn_into().ok()?;
    let hit = target.closest("[data-action]").ok()??;
    let kind = hit.get_attribute("data-action")?;
    Action::parse(&kind, hit.get_attribute("data-value").as_deref())
}

fn schedule(follow_up: FollowUp) {
    let Some(win) = window() else {
        return;
    };
    let callback = Closure::once_into_js(move || {
        GAME.with(|cell| {
            if let Some(game) = cell.borrow_mut().as_mut() {
                if game.app.fire(follow_up.timer) {
                    game.render();
                }
            }
        });
    });
    let delay = i32::try_from(follow_up.delay_ms).unwrap_or(i32::MAX);
    if let Err(err) =
        win.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
    {
        log::warn!("failed to schedule {:?}: {}", follow_up.timer.kind, describe(&err));
    }
}
