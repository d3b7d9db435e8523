//! Browser adapter for the Folio page engine
//!
//! Binds [`folio_engine::PageEngine`] to a live document. The adapter
//! resolves and measures the page once at mount ([`page::PageDom`]),
//! feeds browser events into the engine, and applies the engine's op
//! buffer back to the DOM after every event and animation frame
//! ([`events`]).
//!
//! The JS side only sees [`PortfolioApp`]:
//!
//! ```js
//! import init, { PortfolioApp } from "./folio_web.js";
//!
//! await init();
//! const app = new PortfolioApp();
//! app.mount();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::console;

use folio_engine::{PageEngine, PageOptions, Severity};

pub mod events;
pub mod page;

pub use page::{MountError, PageDom};

/// The portfolio page, exported to JS
///
/// Constructing it resolves the document; [`PortfolioApp::mount`] starts
/// the page behaviors. Both fail with a string error if the document is
/// not shaped like the portfolio page.
#[wasm_bindgen]
pub struct PortfolioApp {
    engine: Rc<RefCell<PageEngine>>,
    dom: Rc<PageDom>,
}

#[wasm_bindgen]
impl PortfolioApp {
    /// Resolve the document and build an engine with default timings
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<PortfolioApp, JsValue> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let dom = PageDom::resolve().map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self {
            engine: Rc::new(RefCell::new(PageEngine::new(PageOptions::default()))),
            dom: Rc::new(dom),
        })
    }

    /// Measure the page, start the engine, and attach all listeners
    ///
    /// The loading overlay appears immediately; everything else plays out
    /// through the animation-frame loop this starts.
    #[wasm_bindgen]
    pub fn mount(&self) -> Result<(), JsValue> {
        let layout = self.dom.measure_layout();
        let sections = layout.sections.len();
        let cards = layout.cards.len();
        let viewport = self.dom.viewport();
        let now = self.dom.now();

        self.engine
            .borrow_mut()
            .init(layout, viewport, now)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        events::flush(&self.engine, &self.dom);

        events::wire(&self.engine, &self.dom);
        events::start_frame_loop(self.engine.clone(), self.dom.clone());

        self.dom.inject_rainbow_keyframes();
        console::debug_1(&JsValue::from_str(&format!(
            "[app] mounted: {} sections, {} cards wired",
            sections, cards
        )));
        greet();
        probe_service_worker();

        Ok(())
    }

    /// Show a notification from JS
    ///
    /// `severity` is one of `success`, `error`, `warning` or `info`;
    /// anything else falls back to `info`.
    #[wasm_bindgen]
    pub fn notify(&self, message: &str, severity: &str) {
        let now = self.dom.now();
        self.engine
            .borrow_mut()
            .notify(message, parse_severity(severity), now);
        events::flush(&self.engine, &self.dom);
    }

    /// Engine state as a JSON string, for debugging from the console
    #[wasm_bindgen]
    pub fn snapshot_json(&self) -> String {
        let snapshot = self.engine.borrow().snapshot();
        serde_json::to_string(&snapshot).unwrap_or_else(|_| "{}".to_string())
    }
}

fn parse_severity(severity: &str) -> Severity {
    match severity {
        "success" => Severity::Success,
        "error" => Severity::Error,
        "warning" => Severity::Warning,
        _ => Severity::Info,
    }
}

/// Console greeting for anyone who opens devtools
fn greet() {
    console::log_2(
        &JsValue::from_str("%c\u{1f468}\u{200d}\u{1f4bb} Hey there, developer! \u{1f469}\u{200d}\u{1f4bb}"),
        &JsValue::from_str("color: #667eea; font-size: 20px; font-weight: bold;"),
    );
    console::log_2(
        &JsValue::from_str(
            "%cThanks for checking out the code! This portfolio was built with Rust and WebAssembly.",
        ),
        &JsValue::from_str("color: #764ba2; font-size: 14px;"),
    );
    console::log_2(
        &JsValue::from_str(
            "%cIf you have any questions or want to collaborate, feel free to reach out!",
        ),
        &JsValue::from_str("color: #ff6b6b; font-size: 14px;"),
    );
}

/// Placeholder for PWA support; only reports whether the API exists
fn probe_service_worker() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let has_api = js_sys::Reflect::has(window.navigator().as_ref(), &JsValue::from_str("serviceWorker"))
        .unwrap_or(false);
    if has_api {
        console::debug_1(&JsValue::from_str(
            "[app] serviceWorker API available, no worker registered",
        ));
    }
}
