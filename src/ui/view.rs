//! The view boundary and its Slint implementation.

use crate::image_loader::{self, LoadedImage};
use log::debug;
use slint::{ComponentHandle, Image, ModelRc, SharedString, StandardListViewItem, VecModel};
use std::path::Path;

/// Display commands the session issues.
pub trait View {
    /// Replaces the file list contents.
    fn set_folder_list(&mut self, names: &[String]);

    /// Sets the label naming the displayed file.
    fn set_image_name_label(&mut self, text: &str);

    /// Shows `image`, decoded from `path`, replacing whatever was shown before.
    fn set_image(&mut self, path: &Path, image: LoadedImage);

    /// Releases view resources; nothing is shown afterwards.
    fn close(&mut self);
}

/// `View` over the `ViewState` global of the application window.
pub struct SlintView {
    ui: slint::Weak<crate::AppWindow>,
}

impl SlintView {
    pub fn new(ui: slint::Weak<crate::AppWindow>) -> Self {
        Self { ui }
    }
}

impl View for SlintView {
    fn set_folder_list(&mut self, names: &[String]) {
        let Some(ui) = self.ui.upgrade() else {
            return;
        };

        let items: Vec<StandardListViewItem> = names
            .iter()
            .map(|name| StandardListViewItem::from(name.as_str()))
            .collect();

        let view_state = ui.global::<crate::ViewState>();
        view_state.set_file_list(ModelRc::new(VecModel::from(items)));
        view_state.set_current_file_index(-1);
    }

    fn set_image_name_label(&mut self, text: &str) {
        if let Some(ui) = self.ui.upgrade() {
            ui.global::<crate::ViewState>()
                .set_image_name(SharedString::from(text));
        }
    }

    fn set_image(&mut self, path: &Path, image: LoadedImage) {
        let Some(ui) = self.ui.upgrade() else {
            return;
        };

        debug!(
            "Displaying {} ({}x{})",
            path.display(),
            image.width,
            image.height
        );
        // The previous pixel buffer is dropped when the property is replaced.
        ui.global::<crate::ViewState>()
            .set_dynamic_image(image_loader::create_slint_image(image));
    }

    fn close(&mut self) {
        if let Some(ui) = self.ui.upgrade() {
            let view_state = ui.global::<crate::ViewState>();
            view_state.set_dynamic_image(Image::default());
            view_state.set_image_name(SharedString::new());
        }
    }
}
