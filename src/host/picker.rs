//! Native folder picker.

use std::path::{Path, PathBuf};

/// Opens the platform folder picker, blocking until the user chooses or
/// cancels. Returns None on cancel.
pub fn pick_folder(start_dir: Option<&Path>, title: &str) -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new().set_title(title);
    if let Some(dir) = start_dir.filter(|d| d.is_dir()) {
        dialog = dialog.set_directory(dir);
    }
    dialog.pick_folder()
}
