use wasm_bindgen::prelude::*;

mod handle;

pub use handle::{list_templates, EditorHandle, StateView};

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_err(message: String) -> JsValue {
    JsValue::from_str(&message)
}

/// Editor document owned by the page. State crosses the boundary as JSON.
#[wasm_bindgen]
pub struct WasmEditor {
    inner: EditorHandle,
}

#[wasm_bindgen]
impl WasmEditor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmEditor {
        WasmEditor {
            inner: EditorHandle::new(),
        }
    }

    /// Start from a built-in template
    #[wasm_bindgen(js_name = fromTemplate)]
    pub fn from_template(template_id: &str, title: Option<String>) -> Result<WasmEditor, JsValue> {
        let inner = EditorHandle::from_template(template_id, title).map_err(js_err)?;
        Ok(WasmEditor { inner })
    }

    /// Replace the document with stored content JSON
    #[wasm_bindgen(js_name = loadPortfolio)]
    pub fn load_portfolio(&mut self, json: &str) -> Result<String, JsValue> {
        self.inner.load_portfolio(json).map_err(js_err)
    }

    /// Apply one command (`{ "type": "ADD_SECTION", ... }`) and return the state
    pub fn dispatch(&mut self, command_json: &str) -> Result<String, JsValue> {
        self.inner.dispatch(command_json).map_err(js_err)
    }

    pub fn state(&self) -> Result<String, JsValue> {
        self.inner.state().map_err(js_err)
    }

    /// Persistable content JSON
    pub fn content(&self) -> Result<String, JsValue> {
        self.inner.content().map_err(js_err)
    }

    pub fn palette(&self) -> Result<String, JsValue> {
        self.inner.palette().map_err(js_err)
    }

    #[wasm_bindgen(js_name = dropTargets)]
    pub fn drop_targets(&self) -> Result<String, JsValue> {
        self.inner.drop_targets().map_err(js_err)
    }

    /// Version to hand back to `markSaved` once a save completes
    pub fn version(&self) -> u64 {
        self.inner.document().version()
    }

    #[wasm_bindgen(js_name = markSaved)]
    pub fn mark_saved(&mut self, version: u64) -> bool {
        self.inner.mark_saved(version)
    }

    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.inner.document().can_undo()
    }

    #[wasm_bindgen(js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.inner.document().can_redo()
    }
}

impl Default for WasmEditor {
    fn default() -> Self {
        Self::new()
    }
}

/// Built-in template summaries as JSON
#[wasm_bindgen(js_name = listTemplates)]
pub fn list_templates_js() -> Result<String, JsValue> {
    list_templates().map_err(js_err)
}
