use std::collections::HashSet;
use std::sync::Arc;
use log::debug;
use crate::error::PaletteError;
use crate::model::{Entry, Handler, Section, Theme};

/// Validated, immutable entry sequence in insertion order.
///
/// Clones share the same backing slice, so handing one to a widget and keeping
/// another for reporting costs nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchIndex {
    entries: Arc<[Entry]>,
}

impl SearchIndex {
    pub fn builder() -> IndexBuilder {
        IndexBuilder::default()
    }

    /// The authored palette content for the blog.
    pub fn seed() -> Result<Self, PaletteError> {
        Self::builder().extend(seed_entries()).build()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn in_section(&self, section: Section) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(move |e| e.section == section)
    }

    /// Wire form consumed by the widget's `data` property.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self.entries())
        } else {
            serde_json::to_string(self.entries())
        }
    }
}

#[derive(Debug, Default)]
pub struct IndexBuilder {
    entries: Vec<Entry>,
}

impl IndexBuilder {
    pub fn push(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn extend(mut self, entries: impl IntoIterator<Item = Entry>) -> Self {
        self.entries.extend(entries);
        self
    }

    pub fn build(self) -> Result<SearchIndex, PaletteError> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if entry.id.trim().is_empty() {
                return Err(PaletteError::EmptyId);
            }
            if entry.title.trim().is_empty() {
                return Err(PaletteError::EmptyTitle { id: entry.id.clone() });
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(PaletteError::DuplicateId(entry.id.clone()));
            }
        }
        debug!("IndexBuilder: built index with {} entries", self.entries.len());
        Ok(SearchIndex { entries: self.entries.into() })
    }
}

/// Home, blog index, posts, feed and theme switches, in display order.
pub(crate) fn seed_entries() -> Vec<Entry> {
    vec![
        Entry::new("nav-about", "about", Section::Navigation, Handler::navigate("/")),
        Entry::new("nav-blog", "blog", Section::Navigation, Handler::navigate("/blog/")).with_description(""),
        post(
            "post-context-engineering-for-agents-three-levels-of-disclosure",
            "Context Engineering for Agents: Three Levels of Disclosure",
            "/blog/2025/context-engineering-in-practice/",
        ),
        post(
            "post-recursive-language-models-code-execution-60-accuracy-on-browsecomp-plus-no-embeddings",
            "Recursive Language Models + Code Execution: 60% accuracy on BrowseComp Plus (no embeddings)...",
            "/blog/2025/recursive-lm-code-execution/",
        ),
        post(
            "post-recursive-language-models-reduce-context-rot-and-2-5-accuracy-on-browsecomp-plus-at-2-6-latency",
            "Recursive Language Models reduce context rot and 2.5\u{d7} accuracy on BrowseComp\u{2011}Plus (at 2.6\u{d7}...",
            "/blog/2025/recursive-language-models/",
        ),
        post(
            "post-exploring-continuous-learning-reasoning-bank-recursive-language-models",
            "Exploring Continuous Learning: Reasoning Bank + Recursive Language Models",
            "/blog/2025/anti-patterns-as-guardrails/",
        ),
        Entry::new("social-rss", "RSS Feed", Section::Socials, Handler::open("/feed.xml")),
        Entry::new("light-theme", "Change theme to light", Section::Theme, Handler::theme(Theme::Light))
            .with_description("Change the theme of the site to Light"),
        Entry::new("dark-theme", "Change theme to dark", Section::Theme, Handler::theme(Theme::Dark))
            .with_description("Change the theme of the site to Dark"),
        Entry::new("system-theme", "Use system default theme", Section::Theme, Handler::theme(Theme::System))
            .with_description("Change the theme of the site to System Default"),
    ]
}

// Post titles are the generator's truncated form, kept as published.
fn post(id: &str, title: &str, url: &str) -> Entry {
    Entry::new(id, title, Section::Posts, Handler::navigate(url)).with_description("")
}
