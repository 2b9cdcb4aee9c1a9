use crate::constants::{REJECT_MESSAGES, REJECT_MESSAGE_ID, REJECT_MESSAGE_VISIBLE_MS};
use crate::core::{message_for, MessageCycle};
use crate::dom;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shows a rotating banner each time the decline button is clicked.
#[derive(Clone)]
pub struct RejectionResponder {
    document: web::Document,
    cycle: Rc<RefCell<MessageCycle>>,
    banner: Rc<RefCell<Option<web::HtmlElement>>>,
}

impl RejectionResponder {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            cycle: Rc::new(RefCell::new(MessageCycle::new())),
            banner: Rc::new(RefCell::new(None)),
        }
    }

    pub fn on_reject(&self) {
        let (index, token) = self.cycle.borrow_mut().advance(REJECT_MESSAGES.len());
        let Some(text) = message_for(REJECT_MESSAGES, index) else {
            return;
        };
        let Some(banner) = self.banner() else {
            log::warn!("[reject] could not create #{}", REJECT_MESSAGE_ID);
            return;
        };
        log::debug!("[reject] click #{}: {}", self.cycle.borrow().clicks(), text);
        banner.set_text_content(Some(text));
        overlay::show(&banner);

        let cycle = self.cycle.clone();
        dom::set_timeout(REJECT_MESSAGE_VISIBLE_MS, move || {
            // A newer click re-armed the banner; its own timer will hide it.
            if cycle.borrow().is_current(token) {
                overlay::hide(&banner);
            }
        });
    }

    /// The banner element, created at the top of `<body>` on first use.
    fn banner(&self) -> Option<web::HtmlElement> {
        if let Some(el) = self.banner.borrow().as_ref() {
            return Some(el.clone());
        }
        let el = match dom::html_element_by_id(&self.document, REJECT_MESSAGE_ID) {
            Some(existing) => existing,
            None => {
                let body = self.document.body()?;
                let el = self
                    .document
                    .create_element("div")
                    .ok()?
                    .dyn_into::<web::HtmlElement>()
                    .ok()?;
                el.set_id(REJECT_MESSAGE_ID);
                el.set_class_name("invalid-choice hidden");
                body.insert_before(&el, body.first_child().as_ref()).ok()?;
                el
            }
        };
        *self.banner.borrow_mut() = Some(el.clone());
        Some(el)
    }
}
