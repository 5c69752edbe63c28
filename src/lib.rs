//! ZotorMath core crate.
//!
//! Tap-the-answer addition quiz with coins, levels and streaks persisted in
//! `localStorage`. Game rules (`quiz`, `progress`, `app`) are plain Rust and run
//! natively under `cargo test`; the `web` module is the thin browser shell exposed
//! through `start_game()`.

use wasm_bindgen::prelude::*;

pub mod app;
mod config;
pub mod effects;
mod error;
mod logging;
pub mod progress;
pub mod quiz;
pub mod view;
pub mod web;

pub use app::{Action, App, Screen};
pub use config::GameConfig;
pub use error::GameError;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
}

// -----------------------------------------------------------------------------
// Worlds shown on the home screen. Only `addition` has a game behind it.
// -----------------------------------------------------------------------------

#[derive(Clone, Copy, Debug)]
pub struct World {
    pub id: &'static str,
    pub title: &'static str,
    pub ages: &'static str,
    pub emoji: &'static str,
    pub blurb: &'static str,
    pub playable: bool,
}

pub const WORLDS: &[World] = &[
    World {
        id: "addition",
        title: "Addition Town",
        ages: "Ages 5–7",
        emoji: "🏘️",
        blurb: "Build quick confidence with fun sums.",
        playable: true,
    },
    World {
        id: "multiplication",
        title: "Multiplication Galaxy",
        ages: "Ages 8–10",
        emoji: "🌌",
        blurb: "Blast the right answers and level up fast.",
        playable: false,
    },
    World {
        id: "fractions",
        title: "Fractions Harbor",
        ages: "Ages 9–12",
        emoji: "⛵",
        blurb: "Slice, match, and master fractions visually.",
        playable: false,
    },
    World {
        id: "algebra",
        title: "Algebra Space",
        ages: "Ages 13–15",
        emoji: "🪐",
        blurb: "Solve for x and power your space station.",
        playable: false,
    },
];

// -----------------------------------------------------------------------------
// Unified entrypoint
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::start().map_err(JsValue::from)
}
