use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::PaletteError;

/// Display grouping the widget clusters results by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Navigation,
    Posts,
    Socials,
    Theme,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Navigation, Section::Posts, Section::Socials, Section::Theme];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Navigation => "Navigation",
            Section::Posts => "Posts",
            Section::Socials => "Socials",
            Section::Theme => "Theme",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Section {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.label() == s)
            .ok_or_else(|| PaletteError::UnknownSection(s.to_string()))
    }
}

/// Theme preference handed to the external setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(PaletteError::UnknownTheme(other.to_string())),
        }
    }
}

/// What happens when an entry is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Handler {
    /// Replace the current page location.
    NavigateSame { url: String },
    /// Open in a new browsing context, leaving the current page alone.
    NavigateNew { url: String },
    SetTheme { theme: Theme },
}

impl Handler {
    pub fn navigate(url: impl Into<String>) -> Self {
        Handler::NavigateSame { url: url.into() }
    }

    pub fn open(url: impl Into<String>) -> Self {
        Handler::NavigateNew { url: url.into() }
    }

    pub fn theme(theme: Theme) -> Self {
        Handler::SetTheme { theme }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Handler::NavigateSame { url } | Handler::NavigateNew { url } => Some(url),
            Handler::SetTheme { .. } => None,
        }
    }
}

impl fmt::Display for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::NavigateSame { url } => write!(f, "navigate {}", url),
            Handler::NavigateNew { url } => write!(f, "open {}", url),
            Handler::SetTheme { theme } => write!(f, "theme {}", theme),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,                  // Unique key (e.g., "nav-about")
    pub title: String,               // Display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>, // Shown under the title
    pub section: Section,
    pub handler: Handler,
}

impl Entry {
    pub fn new(id: impl Into<String>, title: impl Into<String>, section: Section, handler: Handler) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            section,
            handler,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = if description.is_empty() { None } else { Some(description) };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_labels_parse_back() {
        for section in Section::ALL {
            assert_eq!(section.label().parse::<Section>().unwrap(), section);
        }
        assert!(matches!("Misc".parse::<Section>(), Err(PaletteError::UnknownSection(s)) if s == "Misc"));
    }

    #[test]
    fn theme_values_are_closed() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!(matches!("Dark".parse::<Theme>(), Err(PaletteError::UnknownTheme(_))));
    }

    #[test]
    fn empty_description_is_dropped() {
        let entry = Entry::new("x", "X", Section::Posts, Handler::navigate("/x")).with_description("");
        assert_eq!(entry.description, None);
    }

    #[test]
    fn handler_wire_shape() {
        let json = serde_json::to_value(Handler::theme(Theme::System)).unwrap();
        assert_eq!(json, serde_json::json!({ "action": "set_theme", "theme": "system" }));

        let json = serde_json::to_value(Handler::open("/feed.xml")).unwrap();
        assert_eq!(json, serde_json::json!({ "action": "navigate_new", "url": "/feed.xml" }));
    }
}
