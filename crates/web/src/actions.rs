//! Cart actions dispatched from the UI.

use std::{future::Future, rc::Rc};

use leptos::{prelude::*, reactive::owner::LocalStorage, task};

use trolley::{
    api::{CartApiError, HttpCartApi},
    controller::CartController,
    products::ProductId,
};

use crate::{dom::Trigger, view::SignalView};

pub(crate) type WebController = CartController<HttpCartApi, SignalView>;

/// Copyable handle that runs controller operations on the local executor.
#[derive(Clone, Copy)]
pub(crate) struct CartActions {
    controller: StoredValue<Rc<WebController>, LocalStorage>,
}

impl CartActions {
    pub(crate) fn new(controller: Rc<WebController>) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
        }
    }

    pub(crate) fn add(self, product_id: ProductId) {
        self.spawn(move |controller| async move { controller.add_to_cart(product_id).await });
    }

    pub(crate) fn update(self, product_id: ProductId, quantity: u32) {
        self.spawn(move |controller| async move {
            controller.update_quantity(product_id, quantity).await
        });
    }

    pub(crate) fn remove(self, product_id: ProductId) {
        self.spawn(move |controller| async move { controller.remove_from_cart(product_id).await });
    }

    pub(crate) fn clear(self) {
        self.spawn(|controller| async move { controller.clear_cart().await });
    }

    pub(crate) fn show_cart(self) {
        if let Some(controller) = self.controller.try_get_value() {
            controller.render_cart_page();
        }
    }

    pub(crate) fn dispatch(self, trigger: Trigger) {
        match trigger {
            Trigger::AddToCart(product_id) => self.add(product_id),
            Trigger::ShowCart => self.show_cart(),
        }
    }

    /// Failures are already shown by the controller, so outcomes are dropped here.
    fn spawn<F, Fut>(self, operation: F)
    where
        F: FnOnce(Rc<WebController>) -> Fut + 'static,
        Fut: Future<Output = Result<(), CartApiError>> + 'static,
    {
        let Some(controller) = self.controller.try_get_value() else {
            return;
        };

        task::spawn_local(async move {
            let _outcome = operation(controller).await;
        });
    }
}
