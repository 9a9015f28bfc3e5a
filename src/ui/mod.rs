//! UI module: Slint callbacks in, view commands out.
//!
//! Everything runs on the Slint event loop thread. Each callback builds an
//! `Event` and hands it to the shared session, which finishes before the
//! callback returns.

pub mod handlers;
pub mod view;

pub use handlers::{setup_handlers, SharedSession};
pub use view::{SlintView, View};
