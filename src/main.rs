// Prevent console window in addition to Slint window in Windows release builds when, e.g., starting the app via file manager. Ignored on other platforms.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

slint::include_modules!();

mod config;
mod error;
mod file_utils;
mod image_loader;
mod state;
mod ui;

use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(debug_assertions)]
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let app = AppWindow::new()?;
    app.global::<ViewState>().set_hint(config::IMAGE_HINT.into());

    let session = Rc::new(RefCell::new(state::Session::new(ui::SlintView::new(
        app.as_weak(),
    ))));

    // Setup all UI event handlers
    ui::setup_handlers(&app, session.clone());

    app.run()?;

    // No-op when the window already requested exit
    let flow = session.borrow_mut().handle(state::Event::ExitRequested);
    log::debug!("Event loop finished ({:?})", flow);

    Ok(())
}
