//! Browser event wiring
//!
//! Connects document and window events to the engine and pumps the op
//! buffer back into the page. Listeners live for the whole page session,
//! so every closure is leaked with [`Closure::forget`]. The frame loop
//! keeps itself alive through an `Rc` cycle instead.
//!
//! Timestamps handed to the engine come from `performance.now()`, the
//! same clock `requestAnimationFrame` reports, so event-armed timers and
//! frame ticks compare cleanly.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, AddEventListenerOptions, Window};

use folio_engine::PageEngine;

use crate::page::PageDom;

type RafClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Drain the engine's op buffer and apply every op to the document
pub fn flush(engine: &RefCell<PageEngine>, dom: &PageDom) {
    let ops = engine.borrow_mut().drain_ops();
    for op in &ops {
        dom.apply(op);
    }
}

/// Attach every listener the page responds to
pub fn wire(engine: &Rc<RefCell<PageEngine>>, dom: &Rc<PageDom>) {
    wire_window(engine, dom);
    wire_navigation(engine, dom);
    wire_keyboard(engine, dom);
    wire_form(engine, dom);
    wire_pointer(engine, dom);
}

/// Run the engine's frame tick on every animation frame, forever
pub fn start_frame_loop(engine: Rc<RefCell<PageEngine>>, dom: Rc<PageDom>) {
    let closure: RafClosure = Rc::new(RefCell::new(None));
    let closure_clone = closure.clone();
    let dom_clone = dom.clone();

    *closure.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        engine.borrow_mut().handle_frame(timestamp);
        flush(&engine, &dom_clone);
        schedule_frame(dom_clone.window(), &closure_clone);
    }) as Box<dyn FnMut(f64)>));

    schedule_frame(dom.window(), &closure);
}

fn schedule_frame(window: &Window, closure: &RafClosure) {
    if let Some(cb) = closure.borrow().as_ref() {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

// =============================================================================
// Window: scroll and resize
// =============================================================================

fn wire_window(engine: &Rc<RefCell<PageEngine>>, dom: &Rc<PageDom>) {
    // Scroll is passive: the handler only records the offset and emits
    // style ops, it never blocks the scroll itself
    {
        let engine = engine.clone();
        let dom_clone = dom.clone();
        let closure = Closure::wrap(Box::new(move || {
            let scroll_y = dom_clone.scroll_y();
            engine.borrow_mut().handle_scroll(scroll_y);
            flush(&engine, &dom_clone);
        }) as Box<dyn FnMut()>);

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        let _ = dom
            .window()
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                closure.as_ref().unchecked_ref(),
                &options,
            );
        closure.forget();
    }

    // Element offsets are measured once at mount, so a resize has to
    // re-measure and swap the layout snapshot
    {
        let engine = engine.clone();
        let dom_clone = dom.clone();
        let closure = Closure::wrap(Box::new(move || {
            let layout = dom_clone.measure_layout();
            let viewport = dom_clone.viewport();
            if engine.borrow_mut().refresh_layout(layout, viewport).is_ok() {
                flush(&engine, &dom_clone);
            }
        }) as Box<dyn FnMut()>);

        let _ = dom
            .window()
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

// =============================================================================
// Navigation: links and the mobile menu toggle
// =============================================================================

fn wire_navigation(engine: &Rc<RefCell<PageEngine>>, dom: &Rc<PageDom>) {
    for (link, el) in dom.nav_links().iter().enumerate() {
        let engine = engine.clone();
        let dom = dom.clone();
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            event.prevent_default();
            engine.borrow_mut().handle_nav_click(link);
            flush(&engine, &dom);
        }) as Box<dyn FnMut(web_sys::Event)>);

        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    if let Some(toggle) = dom.menu_toggle() {
        let engine = engine.clone();
        let dom = dom.clone();
        let closure = Closure::wrap(Box::new(move || {
            engine.borrow_mut().handle_menu_toggle();
            flush(&engine, &dom);
        }) as Box<dyn FnMut()>);

        let _ = toggle.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

// =============================================================================
// Keyboard
// =============================================================================

fn wire_keyboard(engine: &Rc<RefCell<PageEngine>>, dom: &Rc<PageDom>) {
    let engine = engine.clone();
    let dom_clone = dom.clone();
    let closure = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
        let now = dom_clone.now();
        engine.borrow_mut().handle_key(event.key_code(), now);
        flush(&engine, &dom_clone);
    }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);

    let _ = dom
        .document()
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

// =============================================================================
// Contact form and resume link
// =============================================================================

fn wire_form(engine: &Rc<RefCell<PageEngine>>, dom: &Rc<PageDom>) {
    if let Some(form) = dom.form() {
        let form_el = form.clone();
        let engine = engine.clone();
        let dom = dom.clone();
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            event.prevent_default();
            let fields = read_fields(&form_el);
            let now = dom.now();
            let _ = engine.borrow_mut().handle_submit(fields, now);
            flush(&engine, &dom);
        }) as Box<dyn FnMut(web_sys::Event)>);

        let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    if let Some(link) = dom.resume_link() {
        let engine = engine.clone();
        let dom = dom.clone();
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            event.prevent_default();
            let now = dom.now();
            engine.borrow_mut().handle_resume_click(now);
            flush(&engine, &dom);
        }) as Box<dyn FnMut(web_sys::Event)>);

        let _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn read_fields(form: &web_sys::HtmlFormElement) -> Vec<(String, String)> {
    let mut fields = Vec::new();
    let Ok(data) = web_sys::FormData::new_with_form(form) else {
        return fields;
    };
    // FormData is a JS iterable of [name, value] pairs
    let Ok(Some(entries)) = js_sys::try_iter(&data) else {
        return fields;
    };
    for entry in entries.flatten() {
        let pair = js_sys::Array::from(&entry);
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            fields.push((name, value));
        }
    }
    fields
}

// =============================================================================
// Pointer: card hover and social links
// =============================================================================

fn wire_pointer(engine: &Rc<RefCell<PageEngine>>, dom: &Rc<PageDom>) {
    for (card, el) in dom.cards().iter().enumerate() {
        // Only project cards get the lift; the other reveal targets do not
        if !el.class_list().contains("project-card") {
            continue;
        }

        for (event_name, lifted) in [("mouseenter", true), ("mouseleave", false)] {
            let engine = engine.clone();
            let dom = dom.clone();
            let closure = Closure::wrap(Box::new(move || {
                engine.borrow_mut().handle_card_hover(card, lifted);
                flush(&engine, &dom);
            }) as Box<dyn FnMut()>);

            let _ =
                el.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    for el in dom.social_links() {
        let platform = el
            .get_attribute("title")
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| "Unknown".to_string());
        let engine = engine.clone();
        let closure = Closure::wrap(Box::new(move || {
            console::log_1(&JsValue::from_str(&format!("Social link clicked: {}", platform)));
            engine.borrow_mut().handle_social_click(&platform);
        }) as Box<dyn FnMut()>);

        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
