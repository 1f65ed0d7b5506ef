//! Short-lived status messages drawn over the history viewer.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{NotificationState, Severity};
