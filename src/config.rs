use serde::Deserialize;
use std::path::{Path, PathBuf};
use directories::ProjectDirs;
use anyhow::Result;
use std::fs;
use log::debug;
use crate::error::PaletteError;
use crate::index::{seed_entries, SearchIndex};
use crate::model::{Entry, Handler, Section, Theme};
use crate::provider::DEFAULT_WIDGET;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub palette: PaletteConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GeneralConfig {
    #[serde(default = "default_widget")]
    pub widget: String,
    #[serde(default)]
    pub opener: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_widget() -> String { DEFAULT_WIDGET.to_string() }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            widget: default_widget(),
            opener: None,
            base_url: None,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct PaletteConfig {
    #[serde(default = "default_true")]
    pub seed: bool,
    #[serde(default)]
    pub items: Vec<StaticEntry>,
}

fn default_true() -> bool { true }

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            seed: true,
            items: vec![],
        }
    }
}

/// Extra entry authored in the config file. Exactly one of `navigate`, `open`, `theme`.
#[derive(Deserialize, Debug, Clone)]
pub struct StaticEntry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub section: String,
    pub navigate: Option<String>,
    pub open: Option<String>,
    pub theme: Option<String>,
}

impl TryFrom<StaticEntry> for Entry {
    type Error = PaletteError;

    fn try_from(item: StaticEntry) -> Result<Self, Self::Error> {
        let section: Section = item.section.parse()?;
        let found = [item.navigate.is_some(), item.open.is_some(), item.theme.is_some()]
            .iter()
            .filter(|set| **set)
            .count();

        let handler = match (item.navigate, item.open, item.theme) {
            (Some(url), None, None) => Handler::navigate(url),
            (None, Some(url), None) => Handler::open(url),
            (None, None, Some(theme)) => Handler::theme(theme.parse::<Theme>()?),
            _ => return Err(PaletteError::InvalidHandler { id: item.id, found }),
        };

        let entry = Entry::new(item.id, item.title, section, handler);
        Ok(match item.description {
            Some(d) => entry.with_description(d),
            None => entry,
        })
    }
}

impl Config {
    /// Seed entries first (when enabled), then configured items in file order.
    pub fn build_index(&self) -> Result<SearchIndex, PaletteError> {
        let mut builder = SearchIndex::builder();
        if self.palette.seed {
            builder = builder.extend(seed_entries());
        }
        for item in &self.palette.items {
            builder = builder.push(Entry::try_from(item.clone())?);
        }
        builder.build()
    }
}

pub fn default_config_path() -> PathBuf {
    let proj_dirs = ProjectDirs::from("org", "palette", "palette");
    if let Some(dirs) = &proj_dirs {
        dirs.config_dir().join("config.toml")
    } else {
        PathBuf::from("config.toml")
    }
}

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path(),
    };

    if !config_path.exists() {
        debug!("No config at {:?}, using defaults", config_path);
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&config_path)?;
    let config: Config = toml::from_str(&content)?;
    debug!("Loaded config from {:?}", config_path);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(src: &str) -> Config {
        toml::from_str(src).unwrap()
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.general.widget, DEFAULT_WIDGET);
        assert!(config.palette.seed);
        assert_eq!(config.build_index().unwrap().len(), 10);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[general]\nwidget = \"#palette\"\nopener = \"xdg-open\"").unwrap();
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.general.widget, "#palette");
        assert_eq!(config.general.opener.as_deref(), Some("xdg-open"));
    }

    #[test]
    fn items_append_after_seed() {
        let config = parse(r#"
            [[palette.items]]
            id = "social-github"
            title = "GitHub"
            section = "Socials"
            open = "https://github.com/someone"
        "#);
        let index = config.build_index().unwrap();
        assert_eq!(index.len(), 11);
        let last = &index.entries()[10];
        assert_eq!(last.id, "social-github");
        assert_eq!(last.handler, Handler::open("https://github.com/someone"));
    }

    #[test]
    fn seed_can_be_disabled() {
        let config = parse(r#"
            [palette]
            seed = false

            [[palette.items]]
            id = "dark"
            title = "Go dark"
            section = "Theme"
            theme = "dark"
        "#);
        let index = config.build_index().unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.entries()[0].handler, Handler::theme(Theme::Dark));
    }

    #[test]
    fn rejects_bad_items() {
        let two_handlers = parse(r#"
            [[palette.items]]
            id = "x"
            title = "X"
            section = "Posts"
            navigate = "/x"
            open = "/x"
        "#);
        assert!(matches!(
            two_handlers.build_index(),
            Err(PaletteError::InvalidHandler { found: 2, .. })
        ));

        let bad_section = parse(r#"
            [[palette.items]]
            id = "x"
            title = "X"
            section = "Elsewhere"
            navigate = "/x"
        "#);
        assert!(matches!(bad_section.build_index(), Err(PaletteError::UnknownSection(_))));

        let bad_theme = parse(r#"
            [[palette.items]]
            id = "x"
            title = "X"
            section = "Theme"
            theme = "sepia"
        "#);
        assert!(matches!(bad_theme.build_index(), Err(PaletteError::UnknownTheme(_))));

        let clash = parse(r#"
            [[palette.items]]
            id = "nav-about"
            title = "About again"
            section = "Navigation"
            navigate = "/about"
        "#);
        assert!(matches!(clash.build_index(), Err(PaletteError::DuplicateId(_))));
    }
}
