#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod data;
pub mod error;
pub mod scene;
pub mod session;

use std::fmt;

use config::VisualizerConfig;
use scene::{ExportTracker, SceneDiff, SceneSnapshot, Stage};
use session::{LOG_PREFIX, Session};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsError;
use wasm_bindgen::prelude::*;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "console_error_panic_hook", target_arch = "wasm32"))] {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            console_error_panic_hook::set_once();
            init_logger();
        }
    } else {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            // no-op fallback when panic hook is disabled
            init_logger();
        }
    }
}

#[cfg(all(feature = "console_logs", target_arch = "wasm32"))]
fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;

    if log::set_logger(&DEFAULT_LOGGER).is_ok() {
        let level = if cfg!(feature = "debug_logs") {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        log::set_max_level(level);
    }
}

#[cfg(not(all(feature = "console_logs", target_arch = "wasm32")))]
fn init_logger() {
    // no-op fallback outside the browser console
}

const INLINE_SOURCE: &str = "<inline CSV>";

/// Public entry point for the host: one instance per extension lifetime.
///
/// De constructor is de startup-hook, [`Visualizer::shutdown`] de teardown.
/// Daartussen houdt de host het CSV-pad bij via de `csv_path`-property en roept
/// [`Visualizer::load`] aan vanuit de laadknop.
#[wasm_bindgen]
pub struct Visualizer {
    session: Session,
    stage: Stage,
    tracker: ExportTracker,
}

#[wasm_bindgen]
impl Visualizer {
    #[wasm_bindgen(constructor)]
    pub fn new(install_root: &str) -> Visualizer {
        log::info!("{LOG_PREFIX} Startup: {install_root}");
        Self::with_config(VisualizerConfig::for_install_root(install_root))
    }

    /// Inhoud van het padveld.
    #[wasm_bindgen(getter)]
    pub fn csv_path(&self) -> String {
        self.session.csv_path().to_owned()
    }

    #[wasm_bindgen(setter)]
    pub fn set_csv_path(&mut self, path: &str) {
        self.session.set_csv_path(path);
    }

    #[wasm_bindgen]
    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }

    /// Vervang de sessieconfiguratie door een JS-object met (een deel van) de
    /// velden van [`VisualizerConfig`].
    #[wasm_bindgen]
    pub fn configure(&mut self, config: JsValue) -> Result<(), JsValue> {
        let config: VisualizerConfig = serde_wasm_bindgen::from_value(config).map_err(to_js_error)?;
        self.session.set_config(config).map_err(to_js_error)
    }

    /// Laadknop: lees het CSV-bestand uit het padveld en bouw de kubusrij.
    /// Fouten worden gelogd; de returnwaarde zegt of het gelukt is.
    #[wasm_bindgen]
    pub fn load(&mut self) -> bool {
        self.session.on_load(&mut self.stage)
    }

    /// Zoals [`Visualizer::load`], voor hosts zonder bestandssysteem die de
    /// CSV-inhoud zelf aanleveren.
    #[wasm_bindgen]
    pub fn load_text(&mut self, text: &str, source: Option<String>) -> bool {
        let source = source.as_deref().unwrap_or(INLINE_SOURCE);
        self.session.on_load_text(text, source, &mut self.stage)
    }

    #[wasm_bindgen]
    pub fn prim_count(&self) -> usize {
        self.stage.len()
    }

    /// Volledige inhoud van de stage.
    #[wasm_bindgen]
    pub fn get_scene(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.snapshot()).map_err(to_js_error)
    }

    /// Wijzigingen sinds de vorige aanroep in een "diff" formaat.
    #[wasm_bindgen]
    pub fn get_scene_diff(&mut self) -> Result<JsValue, JsValue> {
        let diff = self.scene_diff();
        serde_wasm_bindgen::to_value(&diff).map_err(to_js_error)
    }

    #[wasm_bindgen]
    pub fn shutdown(&mut self) {
        log::info!("{LOG_PREFIX} Shutdown");
        self.session.close();
        self.tracker.reset();
    }
}

impl Visualizer {
    #[must_use]
    pub fn with_config(config: VisualizerConfig) -> Self {
        Self {
            session: Session::new(config),
            stage: Stage::new(),
            tracker: ExportTracker::new(),
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    #[must_use]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    #[must_use]
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot::from(&self.stage)
    }

    pub fn scene_diff(&mut self) -> SceneDiff {
        self.tracker.diff(&self.stage)
    }
}

fn to_js_error<E: fmt::Display>(error: E) -> JsValue {
    js_error(&error.to_string())
}

fn js_error(message: &str) -> JsValue {
    #[cfg(target_arch = "wasm32")]
    {
        JsError::new(message).into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        JsValue::NULL
    }
}
