//! WebAssembly interface for running numtree kernels in the browser.
//!
//! Values cross the boundary as JSON text (`"[1, [2, 3]]"`), which is how
//! [`Value`] serializes, so JavaScript arrays of any nesting map directly
//! onto nested values.

use wasm_bindgen::prelude::*;

use crate::{Numerics, NumericsConfig, NumtreeError, Value};

fn to_js(e: NumtreeError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_value(json: &str) -> Result<Value, JsValue> {
    serde_json::from_str(json).map_err(|e| to_js(e.into()))
}

fn render_value(v: &Value) -> Result<String, JsValue> {
    serde_json::to_string(v).map_err(|e| to_js(e.into()))
}

/// WASM-friendly wrapper around a configured [`Numerics`] handle.
#[wasm_bindgen]
pub struct WasmNumerics {
    inner: Numerics,
}

#[wasm_bindgen]
impl WasmNumerics {
    /// Create a handle with default settings and an entropy-seeded generator.
    ///
    /// # Example (JavaScript)
    /// ```javascript
    /// const num = new WasmNumerics();
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        // Enable panic messages in browser console
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        Self {
            inner: Numerics::default(),
        }
    }

    /// Create a handle from a JSON config.
    ///
    /// # Example (JavaScript)
    /// ```javascript
    /// const num = WasmNumerics.from_config('{"seed": 42, "max_depth": 64}');
    /// ```
    pub fn from_config(json: &str) -> Result<WasmNumerics, JsValue> {
        let config = NumericsConfig::from_json(json).map_err(to_js)?;
        let inner = Numerics::new(config).map_err(to_js)?;
        Ok(Self { inner })
    }

    /// Apply a unary kernel by name.
    ///
    /// # Example (JavaScript)
    /// ```javascript
    /// num.unary("abs", "[-1, [2, -3]]"); // "[1.0,[2.0,3.0]]"
    /// ```
    pub fn unary(&self, name: &str, json: &str) -> Result<String, JsValue> {
        let v = parse_value(json)?;
        let out = self.inner.unary_named(name, &v).map_err(to_js)?;
        render_value(&out)
    }

    /// Apply a binary kernel by name, broadcasting both operands.
    ///
    /// # Example (JavaScript)
    /// ```javascript
    /// num.binary("round", "[4.12, 4.67]", "10"); // "[4.1,4.7]"
    /// ```
    pub fn binary(&self, name: &str, json_a: &str, json_b: &str) -> Result<String, JsValue> {
        let a = parse_value(json_a)?;
        let b = parse_value(json_b)?;
        let out = self.inner.binary_named(name, &a, &b).map_err(to_js)?;
        render_value(&out)
    }

    /// Apply a reduction by name.
    pub fn reduce(&self, name: &str, json: &str) -> Result<f64, JsValue> {
        let v = parse_value(json)?;
        self.inner.reduce_named(name, &v).map_err(to_js)
    }

    pub fn reseed(&mut self, seed: u32) {
        self.inner.generator_mut().reseed(seed.into());
    }

    pub fn draw_bounded(&mut self, maximum: i32) -> Result<i32, JsValue> {
        let x = self
            .inner
            .generator_mut()
            .draw_bounded(maximum.into())
            .map_err(to_js)?;
        Ok(x as i32)
    }

    pub fn draw_range(&mut self, lo: i32, hi: i32) -> Result<i32, JsValue> {
        let x = self
            .inner
            .generator_mut()
            .draw_range(lo.into(), hi.into())
            .map_err(to_js)?;
        Ok(x as i32)
    }

    pub fn draw_unit(&mut self) -> f64 {
        self.inner.generator_mut().draw_unit()
    }

    /// `n` unit-interval draws as a typed array.
    ///
    /// # Example (JavaScript)
    /// ```javascript
    /// const noise = num.unit_samples(1024); // Float64Array
    /// ```
    pub fn unit_samples(&mut self, n: usize) -> js_sys::Float64Array {
        let generator = self.inner.generator_mut();
        let samples: Vec<f64> = (0..n).map(|_| generator.draw_unit()).collect();
        js_sys::Float64Array::from(samples.as_slice())
    }

    /// One unit-interval draw per scalar of a JSON template.
    pub fn unit_like(&mut self, json: &str) -> Result<String, JsValue> {
        let template = parse_value(json)?;
        let out = self
            .inner
            .generator_mut()
            .unit_like(&template)
            .map_err(to_js)?;
        render_value(&out)
    }
}

impl Default for WasmNumerics {
    fn default() -> Self {
        Self::new()
    }
}
