//! Trolley prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    api::{CartApi, CartApiError, HttpCartApi},
    cart::{Cart, CartItem, CartPayload},
    config::{ClientConfig, ConfigError},
    controller::{CartAction, CartController, CartView},
    notifications::{
        DismissTimer, Notification, NotificationId, NotificationKind, Notifications,
        SUCCESS_DISMISS_DELAY, expire,
    },
    products::{Product, ProductId},
    render::{
        CartBodyView, CartHeaderView, CartPageView, CartRenderer, CartRowView, format_price,
        format_total, stepper,
    },
    session::{Session, StaticSession, bootstrap},
};
