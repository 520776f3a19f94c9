//! Browser glue

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlCanvasElement, Window};

use crate::config::ArcadeConfig;
use crate::consts::CONFIG_ATTRIBUTE;
use crate::error::{ArcadeError, ArcadeResult};

pub fn window() -> ArcadeResult<Window> {
    web_sys::window().ok_or(ArcadeError::NoWindow)
}

pub fn document() -> ArcadeResult<Document> {
    window()?.document().ok_or(ArcadeError::NoDocument)
}

pub fn element_by_id(id: &str) -> ArcadeResult<Element> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| ArcadeError::MissingElement { id: id.to_string() })
}

pub fn canvas_by_id(id: &str) -> ArcadeResult<HtmlCanvasElement> {
    element_by_id(id)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| ArcadeError::NotACanvas { id: id.to_string() })
}

/// Config overrides from the canvas `data-config` attribute
pub fn load_config(canvas: &HtmlCanvasElement) -> ArcadeConfig {
    let json = canvas.get_attribute(CONFIG_ATTRIBUTE);
    ArcadeConfig::from_json_or_default(json.as_deref())
}

/// Replace an element's text
pub fn set_text(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Call `frame` once per display refresh, forever
pub fn run_frame_loop<F>(mut frame: F) -> ArcadeResult<()>
where
    F: FnMut(f64) + 'static,
{
    // The closure must reschedule itself, so it holds a handle to its own slot
    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let first = slot.clone();

    *first.borrow_mut() = Some(Closure::new(move |time: f64| {
        frame(time);
        if let Some(callback) = slot.borrow().as_ref() {
            if let Err(e) = request_animation_frame(callback) {
                log::error!("Frame loop stopped: {}", e);
            }
        }
    }));

    let borrowed = first.borrow();
    match borrowed.as_ref() {
        Some(callback) => request_animation_frame(callback),
        None => Ok(()),
    }
}

fn request_animation_frame(callback: &Closure<dyn FnMut(f64)>) -> ArcadeResult<()> {
    window()?.request_animation_frame(callback.as_ref().unchecked_ref())?;
    Ok(())
}
