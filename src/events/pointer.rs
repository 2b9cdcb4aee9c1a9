use crate::avoid::AvoidanceController;
use glam::DVec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_avoidance(document: &web::Document, controller: &AvoidanceController) {
    wire_mousemove(document, controller);
    wire_resize(controller);
}

fn wire_mousemove(document: &web::Document, controller: &AvoidanceController) {
    let controller = controller.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pointer = DVec2::new(ev.client_x() as f64, ev.client_y() as f64);
        controller.evaluate(pointer);
    }) as Box<dyn FnMut(_)>);

    _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());

    closure.forget();
}

fn wire_resize(controller: &AvoidanceController) {
    let controller = controller.clone();

    let closure = Closure::wrap(Box::new(move || {
        controller.synchronize();
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
