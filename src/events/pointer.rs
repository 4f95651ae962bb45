use crate::input;
use reveal_core::FrameDriver;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Forward window-wide pointer movement to the driver.
///
/// Listens on the window rather than the canvas: the overlay usually sits
/// above the page with pointer events disabled.
pub fn wire_pointer_tracking(canvas: web::HtmlCanvasElement, driver: Rc<RefCell<FrameDriver>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &canvas);
        if pos.is_finite() {
            driver.borrow_mut().set_pointer(pos);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
