//! Interactive history viewer.

mod app_events;
mod app_render;
mod app_state;
mod history_view;

pub use app_state::{App, Mode};
