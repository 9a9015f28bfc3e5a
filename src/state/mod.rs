//! State management for the image browser.

pub mod event;
pub mod session;

pub use event::{Event, Flow};
pub use session::{Phase, Session};
