// Browser sound cues and the optional confetti burst.
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlAudioElement, window};

use crate::GameConfig;
use crate::effects::{Effects, SoundCue};
use crate::error::describe;

pub struct BrowserEffects {
    sound_base: String,
    sounds_enabled: bool,
    /// Shared `play()` rejection handler; lives as long as the effects.
    on_rejected: Closure<dyn FnMut(JsValue)>,
}

impl BrowserEffects {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            sound_base: config.sound_base.trim_end_matches('/').to_string(),
            sounds_enabled: config.sounds_enabled,
            on_rejected: Closure::wrap(Box::new(|err: JsValue| {
                log::debug!("playback rejected: {}", describe(&err));
            }) as Box<dyn FnMut(JsValue)>),
        }
    }

    pub fn cue_url(&self, cue: SoundCue) -> String {
        format!("{}/{}.mp3", self.sound_base, cue.stem())
    }

    fn try_play(&self, cue: SoundCue) -> Result<(), JsValue> {
        let audio = HtmlAudioElement::new_with_src(&self.cue_url(cue))?;
        audio.set_volume(cue.volume());
        // Autoplay policy or a missing file rejects the promise; keep it out of the console.
        let _ = audio.play()?.catch(&self.on_rejected);
        Ok(())
    }
}

impl Effects for BrowserEffects {
    fn play(&mut self, cue: SoundCue) {
        if !self.sounds_enabled {
            return;
        }
        if let Err(err) = self.try_play(cue) {
            log::debug!("sound '{}' skipped: {}", cue.stem(), describe(&err));
        }
    }

    fn celebrate(&mut self) {
        if let Err(err) = confetti_burst() {
            log::debug!("confetti skipped: {}", describe(&err));
        }
    }
}

/// Call `window.confetti({ particleCount, spread })` when the page provides it.
fn confetti_burst() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let confetti = Reflect::get(&win, &JsValue::from_str("confetti"))?;
    let Some(fire) = confetti.dyn_ref::<Function>() else {
        return Ok(());
    };
    let opts = Object::new();
    Reflect::set(&opts, &JsValue::from_str("particleCount"), &JsValue::from_f64(120.0))?;
    Reflect::set(&opts, &JsValue::from_str("spread"), &JsValue::from_f64(70.0))?;
    fire.call1(&JsValue::NULL, &opts)?;
    Ok(())
}
