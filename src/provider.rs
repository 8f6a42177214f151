use log::{error, info};
use crate::error::PaletteError;
use crate::host::Page;
use crate::index::SearchIndex;

/// Selector of the palette element on the blog's pages.
pub const DEFAULT_WIDGET: &str = "ninja-keys";

/// Hands the built index to the palette element on a page.
pub struct SearchIndexProvider {
    index: SearchIndex,
    selector: String,
}

impl SearchIndexProvider {
    pub fn new(index: SearchIndex, selector: impl Into<String>) -> Self {
        Self {
            index,
            selector: selector.into(),
        }
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Assigns the full sequence to the widget; returns how many entries were installed.
    pub fn install(&self, page: &mut dyn Page) -> Result<usize, PaletteError> {
        let widget = page
            .find_widget(&self.selector)
            .ok_or_else(|| PaletteError::MissingWidgetTarget { selector: self.selector.clone() })?;
        widget.set_data(self.index.clone());
        Ok(self.index.len())
    }

    /// Start-up entry point. Failures are logged and stay here.
    pub fn init(&self, page: &mut dyn Page) -> bool {
        match self.install(page) {
            Ok(count) => {
                info!("SearchIndexProvider: installed {} entries into '{}'", count, self.selector);
                true
            }
            Err(e) => {
                error!("SearchIndexProvider: search unavailable: {}", e);
                false
            }
        }
    }
}
