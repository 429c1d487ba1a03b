//! Shared helpers for integration tests.

use std::cell::RefCell;

use trolley::prelude::{CartPageView, CartPayload, CartView};

/// Something the controller asked the view to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    ItemCount(u64),
    Page(CartPageView),
    Success(String),
    Error(String),
}

/// View that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingView {
    events: RefCell<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    pub fn last_item_count(&self) -> Option<u64> {
        self.events.borrow().iter().rev().find_map(|event| match event {
            ViewEvent::ItemCount(count) => Some(*count),
            _ => None,
        })
    }

    pub fn last_page(&self) -> Option<CartPageView> {
        self.events.borrow().iter().rev().find_map(|event| match event {
            ViewEvent::Page(page) => Some(page.clone()),
            _ => None,
        })
    }

    pub fn errors(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                ViewEvent::Error(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn successes(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                ViewEvent::Success(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl CartView for RecordingView {
    fn show_item_count(&self, count: u64) {
        self.events.borrow_mut().push(ViewEvent::ItemCount(count));
    }

    fn show_page(&self, page: CartPageView) {
        self.events.borrow_mut().push(ViewEvent::Page(page));
    }

    fn show_success(&self, message: &str) {
        self.events
            .borrow_mut()
            .push(ViewEvent::Success(message.to_string()));
    }

    fn show_error(&self, message: &str) {
        self.events
            .borrow_mut()
            .push(ViewEvent::Error(message.to_string()));
    }
}

pub const WIDGET_CART_JSON: &str = r#"{
    "total": 19.98,
    "items": {
        "7": {
            "product": {
                "productId": 7,
                "name": "Widget",
                "price": 9.99,
                "description": "d",
                "imageUrl": "w.png"
            },
            "quantity": 2
        }
    }
}"#;

pub const EMPTY_CART_JSON: &str = r#"{"total": 0, "items": {}}"#;

pub fn payload(json: &str) -> Result<CartPayload, serde_json::Error> {
    serde_json::from_str(json)
}
