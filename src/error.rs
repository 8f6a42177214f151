use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("widget target '{selector}' not found on page")]
    MissingWidgetTarget { selector: String },

    #[error("duplicate entry id '{0}'")]
    DuplicateId(String),

    #[error("entry id must not be empty")]
    EmptyId,

    #[error("entry '{id}' has an empty title")]
    EmptyTitle { id: String },

    #[error("unknown section '{0}' (expected Navigation, Posts, Socials or Theme)")]
    UnknownSection(String),

    #[error("unknown theme '{0}' (expected light, dark or system)")]
    UnknownTheme(String),

    #[error("entry '{id}' must set exactly one of navigate/open/theme, found {found}")]
    InvalidHandler { id: String, found: usize },

    #[error("no entry with id '{0}'")]
    UnknownEntry(String),
}
