//! WebAssembly bindings for the Life engine.
//!
//! Provides a thin wrapper around [`Simulation`] for a browser canvas front end. The page
//! owns the canvas, the buttons and the `setInterval` timer; it forwards clicks here and
//! calls `tick` every `getInterval()` milliseconds.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{
    driver::{Simulation, TickOutcome},
    schema::{DriverConfig, EngineConfig, Seed},
};

/// Initialize WASM module with panic hook and logging.
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error messages in browser
    console_error_panic_hook::set_once();

    // Initialize WASM logger
    wasm_logger::init(wasm_logger::Config::default());
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// WebAssembly wrapper for a driven Life simulation.
#[wasm_bindgen]
pub struct WasmLife {
    simulation: Simulation,
}

#[wasm_bindgen]
impl WasmLife {
    /// Create a simulation from JSON configuration.
    ///
    /// # Arguments
    /// * `config_json` - JSON string containing EngineConfig (missing fields use defaults)
    /// * `driver_json` - JSON string containing DriverConfig (missing fields use defaults)
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str, driver_json: &str) -> Result<WasmLife, JsValue> {
        let config: EngineConfig = serde_json::from_str(config_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config JSON: {e}")))?;
        let driver: DriverConfig = serde_json::from_str(driver_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid driver JSON: {e}")))?;

        let simulation = Simulation::from_config(config, driver).map_err(js_err)?;

        Ok(WasmLife { simulation })
    }

    /// Replace the grid with a seed pattern. Stops the simulation.
    #[wasm_bindgen]
    pub fn seed(&mut self, seed_json: &str) -> Result<(), JsValue> {
        let seed: Seed = serde_json::from_str(seed_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid seed JSON: {e}")))?;

        self.simulation.reseed(&seed);

        Ok(())
    }

    /// Toggle the cell under a canvas pixel. Returns the cell's new state.
    #[wasm_bindgen]
    pub fn click(&mut self, x: f64, y: f64) -> Result<bool, JsValue> {
        self.simulation.click(x, y).map_err(js_err)
    }

    /// Toggle a cell by grid coordinate. Returns the cell's new state.
    #[wasm_bindgen(js_name = toggleCell)]
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<bool, JsValue> {
        self.simulation
            .engine_mut()
            .toggle_cell(row, col)
            .map_err(js_err)
    }

    /// Advance one generation regardless of play state.
    #[wasm_bindgen]
    pub fn step(&mut self) {
        self.simulation.engine_mut().step();
    }

    /// Timer callback. Returns false once the simulation has stopped.
    #[wasm_bindgen]
    pub fn tick(&mut self) -> bool {
        matches!(self.simulation.tick(), TickOutcome::Advanced(_))
    }

    #[wasm_bindgen]
    pub fn play(&mut self) {
        self.simulation.play();
    }

    #[wasm_bindgen]
    pub fn stop(&mut self) {
        self.simulation.stop();
    }

    /// Returns whether the simulation is now running.
    #[wasm_bindgen(js_name = togglePlay)]
    pub fn toggle_play(&mut self) -> bool {
        self.simulation.toggle_running()
    }

    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.simulation.clear();
    }

    /// Shorten the tick interval. Returns the new interval in milliseconds.
    #[wasm_bindgen]
    pub fn faster(&mut self) -> u32 {
        self.simulation.faster()
    }

    /// Lengthen the tick interval. Returns the new interval in milliseconds.
    #[wasm_bindgen]
    pub fn slower(&mut self) -> u32 {
        self.simulation.slower()
    }

    /// Row-major cells, 1 = alive, 0 = dead.
    #[wasm_bindgen(js_name = getCells)]
    pub fn get_cells(&self) -> js_sys::Uint8Array {
        let cells: Vec<u8> = self
            .simulation
            .engine()
            .grid()
            .as_slice()
            .iter()
            .map(|&alive| alive as u8)
            .collect();
        js_sys::Uint8Array::from(cells.as_slice())
    }

    /// Get current state (cells and counters) as a JS object.
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> Result<JsValue, JsValue> {
        let engine = self.simulation.engine();
        let snapshot = StateSnapshot {
            cells: engine.grid().as_slice(),
            width: engine.width(),
            height: engine.height(),
            generation: engine.generation(),
            running: self.simulation.is_running(),
        };

        serde_wasm_bindgen::to_value(&snapshot)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Get generation statistics as a JS object.
    #[wasm_bindgen(js_name = getStats)]
    pub fn get_stats(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.simulation.stats())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    #[wasm_bindgen(js_name = getGeneration)]
    pub fn get_generation(&self) -> u64 {
        self.simulation.engine().generation()
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.simulation.is_running()
    }

    #[wasm_bindgen(js_name = isQuiescent)]
    pub fn is_quiescent(&self) -> bool {
        self.simulation.engine().is_quiescent()
    }

    #[wasm_bindgen(js_name = getWidth)]
    pub fn get_width(&self) -> usize {
        self.simulation.engine().width()
    }

    #[wasm_bindgen(js_name = getHeight)]
    pub fn get_height(&self) -> usize {
        self.simulation.engine().height()
    }

    /// Tick interval in milliseconds.
    #[wasm_bindgen(js_name = getInterval)]
    pub fn get_interval(&self) -> u32 {
        self.simulation.interval_ms()
    }

    #[wasm_bindgen(js_name = ticksPerSecond)]
    pub fn ticks_per_second(&self) -> f64 {
        self.simulation.ticks_per_second()
    }
}

/// Serializable snapshot of simulation state.
#[derive(Serialize)]
struct StateSnapshot<'a> {
    cells: &'a [bool],
    width: usize,
    height: usize,
    generation: u64,
    running: bool,
}
