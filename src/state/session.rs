//! Browsing session: the selected folder, its image entries, and the shown file.

use crate::error::{ImageLoadError, Result};
use crate::file_utils::{self, FileSystem, LocalFileSystem};
use crate::image_loader;
use crate::state::{Event, Flow};
use crate::ui::View;
use log::debug;
use std::path::{Path, PathBuf};

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No folder selected yet.
    Idle,
    /// A folder has been selected, even if listing it failed.
    Browsing,
    /// Exit was requested; no further events are processed.
    Terminated,
}

/// Owns the browsing state and pushes updates to a view.
pub struct Session<V: View, F: FileSystem = LocalFileSystem> {
    view: V,
    filesystem: F,
    phase: Phase,
    selected_folder: Option<PathBuf>,
    entries: Vec<String>,
    selected_file: Option<PathBuf>,
}

impl<V: View> Session<V> {
    /// Creates an idle session reading from the local disk.
    pub fn new(view: V) -> Self {
        Self::with_filesystem(view, LocalFileSystem)
    }
}

impl<V: View, F: FileSystem> Session<V, F> {
    pub fn with_filesystem(view: V, filesystem: F) -> Self {
        Self {
            view,
            filesystem,
            phase: Phase::Idle,
            selected_folder: None,
            entries: Vec::new(),
            selected_file: None,
        }
    }

    /// Processes one event to completion.
    pub fn handle(&mut self, event: Event) -> Flow {
        if self.phase == Phase::Terminated {
            debug!("Ignoring {:?} after exit", event);
            return Flow::Exit;
        }

        match event {
            Event::FolderSelected(path) => {
                self.on_folder_selected(path);
                Flow::Continue
            }
            Event::FileSelected(selection) => {
                self.on_file_selected(&selection);
                Flow::Continue
            }
            Event::ExitRequested => {
                self.on_exit_requested();
                Flow::Exit
            }
        }
    }

    /// Lists `path` and replaces the entries wholesale.
    ///
    /// A folder that cannot be listed yields an empty list.
    pub fn on_folder_selected(&mut self, path: PathBuf) {
        let start = std::time::Instant::now();

        let entries = match file_utils::scan_directory(&self.filesystem, &path) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("{}: {}", path.display(), e);
                Vec::new()
            }
        };

        debug!(
            "Listed {} image(s) in {:?} in {:?}",
            entries.len(),
            path,
            start.elapsed()
        );

        self.selected_folder = Some(path);
        self.entries = entries;
        self.phase = Phase::Browsing;
        self.view.set_folder_list(&self.entries);
    }

    /// Shows the first selected entry of the current folder.
    ///
    /// Leaves the view and `selected_file` untouched when nothing can be shown.
    pub fn on_file_selected(&mut self, selection: &[String]) {
        if let Err(e) = self.show_selection(selection) {
            debug!("{}", e);
        }
    }

    /// Stops processing events and releases the view.
    pub fn on_exit_requested(&mut self) {
        self.phase = Phase::Terminated;
        self.view.close();
    }

    fn show_selection(&mut self, selection: &[String]) -> Result<()> {
        let filename = self.resolve_selection(selection)?;
        let image = image_loader::load_image(&filename)?;

        let label = filename.to_string_lossy();
        self.view.set_image_name_label(&label);
        self.view.set_image(&filename, image);
        self.selected_file = Some(filename);
        Ok(())
    }

    /// Joins the selected folder with the first selected name.
    fn resolve_selection(&self, selection: &[String]) -> Result<PathBuf> {
        let folder = self
            .selected_folder
            .as_deref()
            .filter(|folder| !folder.as_os_str().is_empty())
            .ok_or(ImageLoadError::NoFolderSelected)?;
        let name = selection.first().ok_or(ImageLoadError::EmptySelection)?;
        Ok(folder.join(name))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected_folder(&self) -> Option<&Path> {
        self.selected_folder.as_deref()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn selected_file(&self) -> Option<&Path> {
        self.selected_file.as_deref()
    }
}
