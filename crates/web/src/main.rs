//! Trolley browser widget
//!
//! Mounts the cart badge, notification lists and cart page into the host
//! page and wires host markup triggers to the cart controller.

use std::rc::Rc;

use leptos::{prelude::*, task};

use trolley::{
    config::ClientConfig,
    controller::CartController,
    session::{Session, bootstrap},
};

use crate::{
    actions::CartActions,
    dom::{ERRORS_HOST_ID, ITEM_COUNT_HOST_ID, MAIN_HOST_ID, MESSAGES_HOST_ID, RootLayout},
    notifications::{ErrorMessages, ItemCount, SuccessMessages},
    page::CartPageHost,
    session::LocalStorageSession,
    view::SignalView,
};

mod actions;
mod dom;
mod notifications;
mod page;
mod session;
mod timer;
mod view;

const CONFIG_YAML: &str = include_str!("../config/web.yml");

fn mount() -> Result<(), String> {
    let config = ClientConfig::from_yaml(CONFIG_YAML).map_err(|error| error.to_string())?;
    let session = LocalStorageSession::new(config.session_key.clone());

    let api = match session.token() {
        Some(token) => config.api().with_bearer_token(token),
        None => config.api(),
    };

    let signal_view = SignalView::new(config.success_dismiss_delay());
    let controller = Rc::new(CartController::with_renderer(
        api,
        signal_view,
        config.renderer(),
    ));
    let actions = CartActions::new(Rc::clone(&controller));

    let document = dom::document()?;

    let item_count = signal_view.item_count;
    leptos::mount::mount_to(
        dom::widget_root(&document, ITEM_COUNT_HOST_ID, RootLayout::Inline)?,
        move || view! { <ItemCount item_count=item_count /> },
    )
    .forget();
    dom::release_host(ITEM_COUNT_HOST_ID);

    let notifications = signal_view.notifications;
    leptos::mount::mount_to(
        dom::widget_root(&document, MESSAGES_HOST_ID, RootLayout::Block)?,
        move || view! { <SuccessMessages notifications=notifications /> },
    )
    .forget();
    leptos::mount::mount_to(
        dom::widget_root(&document, ERRORS_HOST_ID, RootLayout::Block)?,
        move || view! { <ErrorMessages notifications=notifications /> },
    )
    .forget();

    let page = signal_view.page;
    leptos::mount::mount_to(dom::widget_root(&document, MAIN_HOST_ID, RootLayout::Block)?, move || {
        view! { <CartPageHost page=page actions=actions /> }
    })
    .forget();

    dom::on_trigger(&document, move |trigger| actions.dispatch(trigger))?;

    task::spawn_local(async move {
        let _outcome = bootstrap(&controller, &session).await;
    });

    Ok(())
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(error) = mount() {
        dom::report(&format!("trolley: failed to mount cart widget: {error}"));
    }
}
