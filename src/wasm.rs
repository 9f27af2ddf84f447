//! WebAssembly bindings for picbraille

use crate::{Converter, RenderConfig};
use image::DynamicImage;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmConverter {
    config: RenderConfig,
}

#[wasm_bindgen]
impl WasmConverter {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmConverter {
        WasmConverter { config: RenderConfig::default() }
    }

    #[wasm_bindgen]
    pub fn set_width(&mut self, width: u32) {
        self.config.width = width;
    }

    #[wasm_bindgen]
    pub fn set_height(&mut self, height: u32) {
        self.config.height = height;
    }

    #[wasm_bindgen]
    pub fn set_threshold(&mut self, threshold: f32) {
        self.config.threshold = threshold;
    }

    #[wasm_bindgen]
    pub fn set_invert(&mut self, enabled: bool) {
        self.config.invert = enabled;
    }

    /// Render RGBA pixel data (e.g. from a canvas) to braille text.
    /// Returns `{ text, cols, rows }`.
    #[wasm_bindgen]
    pub fn convert(&self, image_data: &[u8], width: u32, height: u32) -> Result<js_sys::Object, JsValue> {
        let converter = Converter::new(self.config).map_err(to_js)?;

        let img = image::RgbaImage::from_raw(width, height, image_data.to_vec())
            .ok_or_else(|| JsValue::from_str("Invalid image dimensions"))?;
        let image = DynamicImage::ImageRgba8(img);

        let grid = converter.grid_size(&image).map_err(to_js)?;
        let text = converter.convert(&image).map_err(to_js)?;

        let result = js_sys::Object::new();
        js_sys::Reflect::set(&result, &"text".into(), &text.into())?;
        js_sys::Reflect::set(&result, &"cols".into(), &grid.cols.into())?;
        js_sys::Reflect::set(&result, &"rows".into(), &grid.rows.into())?;

        Ok(result)
    }
}

impl Default for WasmConverter {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js(err: crate::BrailleError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
