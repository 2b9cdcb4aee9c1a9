#![cfg(target_arch = "wasm32")]
use crate::avoid::AvoidanceController;
use crate::celebrate::CelebrationSequencer;
use crate::constants::*;
use crate::core::AvoidParams;
use crate::reject::RejectionResponder;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod avoid;
mod background;
mod celebrate;
mod constants;
mod core;
mod dom;
mod events;
mod overlay;
mod reject;
mod render;

fn require_html(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    dom::html_element_by_id(document, id).ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

fn require_element(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("evasive-card starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let no_btn = require_html(&document, NO_BUTTON_ID)?;
    let yes_btn = require_html(&document, YES_BUTTON_ID)?;
    let spacer = require_element(&document, NO_BUTTON_SPACER_ID)?;
    let initial = require_element(&document, INITIAL_PANEL_ID)?;
    let success = require_element(&document, SUCCESS_PANEL_ID)?;

    // Pointer avoidance: park the button, then follow the pointer and resizes
    let avoidance = AvoidanceController::new(spacer, no_btn.clone(), AvoidParams::default());
    events::wire_avoidance(&document, &avoidance);
    avoidance.synchronize();

    let celebration = CelebrationSequencer {
        document: document.clone(),
        decision_panel: initial,
        celebration_panel: success,
        avoided: no_btn.clone(),
    };
    dom::add_click_listener(&yes_btn, move || celebration.trigger());

    let responder = RejectionResponder::new(document.clone());
    dom::add_click_listener(&no_btn, move || responder.on_reject());

    let hearts = background::populate_hearts(&document);
    log::info!("[init] ready, background hearts={}", hearts);
    Ok(())
}
