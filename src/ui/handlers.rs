//! Event handlers for UI callbacks.
//!
//! Sets up the Logic callbacks (browse_folder, folder_selected, file_selected,
//! exit) and the window close request, translating each into an `Event`.

use crate::state::{Event, Flow, Session};
use crate::ui::SlintView;
use log::{debug, warn};
use rfd::AsyncFileDialog;
use slint::{CloseRequestResponse, ComponentHandle, SharedString};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

/// Session shared between the Slint callbacks.
pub type SharedSession = Rc<RefCell<Session<SlintView>>>;

/// Hands one event to the session and stops the event loop once it exits.
pub fn dispatch(session: &SharedSession, event: Event) {
    let flow = handle(session, event);
    if flow == Flow::Exit {
        if let Err(e) = slint::quit_event_loop() {
            warn!("Failed to quit event loop: {}", e);
        }
    }
}

fn handle(session: &SharedSession, event: Event) -> Flow {
    match session.try_borrow_mut() {
        Ok(mut session) => {
            let flow = session.handle(event);
            debug!(
                "{:?}: folder={:?} entries={} file={:?}",
                session.phase(),
                session.selected_folder(),
                session.entries().len(),
                session.selected_file()
            );
            flow
        }
        Err(_) => {
            warn!("Session busy, dropping {:?}", event);
            Flow::Continue
        }
    }
}

/// Sets up all UI event handlers for the application.
pub fn setup_handlers(ui: &crate::AppWindow, session: SharedSession) {
    let logic = ui.global::<crate::Logic>();

    // Folder field edited by hand
    logic.on_folder_selected({
        let session = session.clone();
        move |text| {
            dispatch(&session, Event::FolderSelected(PathBuf::from(text.as_str())));
        }
    });

    // Browse button; the dialog must run on the UI thread
    logic.on_browse_folder({
        let ui_handle = ui.as_weak();
        let session = session.clone();
        move || {
            let ui_handle = ui_handle.clone();
            let session = session.clone();
            let _ = slint::spawn_local(async move {
                let Some(folder) = AsyncFileDialog::new()
                    .set_title("Image Folder")
                    .pick_folder()
                    .await
                else {
                    debug!("Folder dialog cancelled");
                    return;
                };

                let path = folder.path().to_path_buf();
                if let Some(ui) = ui_handle.upgrade() {
                    ui.global::<crate::ViewState>()
                        .set_folder(SharedString::from(path.to_string_lossy().as_ref()));
                }

                dispatch(&session, Event::FolderSelected(path));
            });
        }
    });

    // File list row changed; an empty name means no current row
    logic.on_file_selected({
        let session = session.clone();
        move |name| {
            let selection = if name.is_empty() {
                Vec::new()
            } else {
                vec![name.to_string()]
            };
            dispatch(&session, Event::FileSelected(selection));
        }
    });

    logic.on_exit({
        let session = session.clone();
        move || {
            dispatch(&session, Event::ExitRequested);
        }
    });

    ui.window().on_close_requested(move || {
        dispatch(&session, Event::ExitRequested);
        CloseRequestResponse::HideWindow
    });
}
