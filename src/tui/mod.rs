//! Terminal UI: Elm-style event loop, pages and shared widgets.

pub mod app;
pub mod events;
pub mod layout;
pub mod sink;
pub mod theme;
pub mod views;
pub mod widgets;
