//! WASM bindings for browser hosts.
//!
//! The browser side keeps rendering, charting and scheduling; it drives a
//! [`WasmSession`] and reads plain JS objects back.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { WasmSession } from 'u_salesman';
//!
//! await init();
//! const session = new WasmSession({
//!     world: { city_count: 30, placement: 'CIRCULAR',
//!              bounds: { width: 800, height: 600, center_x: 400, center_y: 300, radius: 240 } },
//!     ga: { population_size: 100, crossover_rate: 0.75, mutation_rate: 0.1,
//!           elite_count: 2, elite_copies: 1 },
//! });
//! setInterval(() => {
//!     session.epoch();
//!     draw(session.cities(), session.state());
//! }, 0);
//! ```

// WASM-bindgen exports don't need #[must_use] - values returned to JS
#![allow(clippy::must_use_candidate)]

use crate::session::{Session, SessionConfig};
use wasm_bindgen::prelude::*;

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// A [`Session`] exported to JavaScript.
#[wasm_bindgen]
pub struct WasmSession {
    inner: Session,
}

#[wasm_bindgen]
impl WasmSession {
    /// Builds a session from a `SessionConfig`-shaped object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmSession, JsValue> {
        let config: SessionConfig = serde_wasm_bindgen::from_value(config).map_err(to_js_error)?;
        let inner = Session::new(&config).map_err(to_js_error)?;
        Ok(Self { inner })
    }

    /// Rebuilds world and engine from a new configuration.
    pub fn reinit(&mut self, config: JsValue) -> Result<(), JsValue> {
        let config: SessionConfig = serde_wasm_bindgen::from_value(config).map_err(to_js_error)?;
        self.inner.reinit(&config).map_err(to_js_error)
    }

    /// Advances one generation.
    pub fn epoch(&mut self) -> Result<(), JsValue> {
        self.inner.step().map(|_| ()).map_err(to_js_error)
    }

    /// Current engine snapshot as a JS object.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.read_state()).map_err(to_js_error)
    }

    /// Cities as `[{ id, x, y }, ...]`.
    pub fn cities(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.world().cities()).map_err(to_js_error)
    }

    /// Per-generation best/median/worst distances for plotting.
    pub fn history(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.history()).map_err(to_js_error)
    }

    /// Shortest tour length seen so far.
    #[wasm_bindgen(js_name = bestDistance)]
    pub fn best_distance(&self) -> f64 {
        self.inner.best_distance()
    }

    /// Generation in which the shortest tour was first seen.
    #[wasm_bindgen(js_name = bestDistanceGeneration)]
    pub fn best_distance_generation(&self) -> usize {
        self.inner.best_distance_generation()
    }

    /// Shortest tour as an array of city indices.
    #[wasm_bindgen(js_name = bestTour)]
    pub fn best_tour(&self) -> Vec<usize> {
        self.inner.best_tour().sequence().to_vec()
    }
}
