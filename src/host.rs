use anyhow::Result;
use crate::index::SearchIndex;
use crate::model::Theme;

/// The page hosting the palette element.
pub trait Page {
    fn find_widget(&mut self, selector: &str) -> Option<&mut dyn Widget>;
}

/// The palette element. Takes ownership of the whole sequence in one assignment.
pub trait Widget {
    fn set_data(&mut self, data: SearchIndex);
}

pub trait Navigator {
    /// Replace the current location with `url`.
    fn navigate(&mut self, url: &str) -> Result<()>;
    /// Open `url` in a new browsing context.
    fn open_new(&mut self, url: &str) -> Result<()>;
}

/// Applies and persists the display theme; persistence is the implementor's concern.
pub trait ThemeSetter {
    fn set_theme(&mut self, theme: Theme) -> Result<()>;
}
