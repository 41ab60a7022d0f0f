/// The file most recently chosen in the picker
///
/// Owned by the shell and only touched from its `update` handler, which
/// iced runs one message at a time on the UI thread. No locking needed:
/// the last pick simply wins.
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectedFile {
    path: Option<PathBuf>,
}

impl SelectedFile {
    /// Start with nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the selection. The file is not checked here.
    pub fn set(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    /// Current selection, or an empty path if nothing was ever picked
    pub fn path(&self) -> &Path {
        self.path.as_deref().unwrap_or_else(|| Path::new(""))
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_none()
    }
}
