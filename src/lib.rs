pub mod config;
pub mod console;
pub mod error;
pub mod executor;
pub mod host;
pub mod index;
pub mod model;
pub mod provider;
pub mod state;

pub use error::PaletteError;
pub use index::{IndexBuilder, SearchIndex};
pub use model::{Entry, Handler, Section, Theme};
pub use provider::SearchIndexProvider;
