use log::info;
use crate::error::PaletteError;
use crate::host::{Page, Widget};
use crate::index::SearchIndex;
use crate::model::{Entry, Section};

/// In-process palette element: holds the installed sequence.
#[derive(Debug, Default)]
pub struct PaletteState {
    data: Option<SearchIndex>,
}

impl PaletteState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.data.is_some()
    }

    pub fn entries(&self) -> &[Entry] {
        self.data.as_ref().map(SearchIndex::entries).unwrap_or(&[])
    }

    /// Entries clustered by section; sections and entries keep first-seen order.
    pub fn grouped(&self) -> Vec<(Section, Vec<&Entry>)> {
        let mut groups: Vec<(Section, Vec<&Entry>)> = Vec::new();
        for entry in self.entries() {
            match groups.iter_mut().find(|(s, _)| *s == entry.section) {
                Some((_, items)) => items.push(entry),
                None => groups.push((entry.section, vec![entry])),
            }
        }
        groups
    }

    pub fn select(&self, id: &str) -> Result<&Entry, PaletteError> {
        self.entries()
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| PaletteError::UnknownEntry(id.to_string()))
    }
}

impl Widget for PaletteState {
    fn set_data(&mut self, data: SearchIndex) {
        info!("PaletteState: received {} entries", data.len());
        self.data = Some(data);
    }
}

/// A page carrying one palette element under a fixed selector.
pub struct SinglePage {
    selector: String,
    pub palette: PaletteState,
}

impl SinglePage {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            palette: PaletteState::new(),
        }
    }
}

impl Page for SinglePage {
    fn find_widget(&mut self, selector: &str) -> Option<&mut dyn Widget> {
        if selector == self.selector {
            Some(&mut self.palette)
        } else {
            None
        }
    }
}
