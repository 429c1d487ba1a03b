//! Host page glue: element lookup, content hand-over and click triggers.

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use trolley::products::ProductId;

/// Badge showing the number of items in the cart.
pub(crate) const ITEM_COUNT_HOST_ID: &str = "cart-items";

/// Container for success notifications.
pub(crate) const MESSAGES_HOST_ID: &str = "messages";

/// Container for error notifications.
pub(crate) const ERRORS_HOST_ID: &str = "errors";

/// Page area taken over by the cart page.
pub(crate) const MAIN_HOST_ID: &str = "main";

const ROOT_ATTRIBUTE: &str = "data-trolley-root";

const ADD_TO_CART_ATTRIBUTE: &str = "data-add-to-cart";

const SHOW_CART_ATTRIBUTE: &str = "data-show-cart";

const TRIGGER_SELECTOR: &str = "[data-add-to-cart], [data-show-cart]";

/// Cart action requested by a click on host page markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Trigger {
    AddToCart(ProductId),
    ShowCart,
}

/// Work out which trigger an element carries, if any.
///
/// An add-to-cart attribute wins over show-cart; an unparseable product id is
/// no trigger at all.
pub(crate) fn parse_trigger(add_to_cart: Option<&str>, show_cart: bool) -> Option<Trigger> {
    match add_to_cart {
        Some(value) => value.trim().parse().ok().map(Trigger::AddToCart),
        None => show_cart.then_some(Trigger::ShowCart),
    }
}

pub(crate) fn document() -> Result<Document, String> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "no document available".to_string())
}

/// Layout of the element a widget part is mounted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RootLayout {
    /// Sits in running text, such as the badge inside a link.
    Inline,

    /// Holds block content such as the page or notification lists.
    Block,
}

impl RootLayout {
    fn tag(self) -> &'static str {
        match self {
            Self::Inline => "span",
            Self::Block => "div",
        }
    }
}

/// Append a widget-owned container to the host element with the given id.
pub(crate) fn widget_root(
    document: &Document,
    host_id: &str,
    layout: RootLayout,
) -> Result<HtmlElement, String> {
    let host = document
        .get_element_by_id(host_id)
        .ok_or_else(|| format!("missing #{host_id} host element"))?;

    let root = document
        .create_element(layout.tag())
        .map_err(js_error)?
        .dyn_into::<HtmlElement>()
        .map_err(|element| format!("<{}> is not an HTML element", element.tag_name()))?;

    root.set_attribute(ROOT_ATTRIBUTE, "").map_err(js_error)?;
    host.append_child(&root).map_err(js_error)?;

    Ok(root)
}

/// Remove every child of a host element that the widget did not mount.
pub(crate) fn release_host(host_id: &str) {
    let Some(host) = document()
        .ok()
        .and_then(|document| document.get_element_by_id(host_id))
    else {
        return;
    };

    let children = host.child_nodes();

    let foreign: Vec<_> = (0..children.length())
        .filter_map(|index| children.item(index))
        .filter(|node| {
            !node
                .dyn_ref::<Element>()
                .is_some_and(|element| element.has_attribute(ROOT_ATTRIBUTE))
        })
        .collect();

    for node in foreign {
        if let Err(error) = host.remove_child(&node) {
            web_sys::console::warn_2(&JsValue::from_str("failed to release host node"), &error);
        }
    }
}

/// Route document clicks on trigger markup to `handler`.
pub(crate) fn on_trigger(
    document: &Document,
    handler: impl Fn(Trigger) + 'static,
) -> Result<(), String> {
    let listener = Closure::<dyn Fn(MouseEvent)>::new(move |event: MouseEvent| {
        let Some(trigger) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|target| target.closest(TRIGGER_SELECTOR).ok().flatten())
            .and_then(|element| {
                parse_trigger(
                    element.get_attribute(ADD_TO_CART_ATTRIBUTE).as_deref(),
                    element.has_attribute(SHOW_CART_ATTRIBUTE),
                )
            })
        else {
            return;
        };

        event.prevent_default();
        handler(trigger);
    });

    document
        .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        .map_err(js_error)?;

    listener.forget();

    Ok(())
}

pub(crate) fn report(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
