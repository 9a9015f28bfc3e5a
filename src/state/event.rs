//! Discrete UI events consumed by the session.

use std::path::PathBuf;

/// Everything the window can ask the session to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The folder field was edited or a folder was picked with the browse dialog.
    FolderSelected(PathBuf),
    /// The file list selection changed; empty when no row is current.
    FileSelected(Vec<String>),
    /// Exit button pressed or window closed.
    ExitRequested,
}

/// Whether the event loop should keep running after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}
