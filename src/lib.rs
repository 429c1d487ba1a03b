//! Trolley
//!
//! Trolley keeps a client-side shopping cart in step with a remote cart API.
//! The server owns the cart; the client holds the last response it received,
//! renders it, and turns user actions into API calls.

pub mod api;
pub mod cart;
pub mod config;
pub mod controller;
pub mod notifications;
pub mod products;
pub mod render;
pub mod session;

pub mod prelude;
