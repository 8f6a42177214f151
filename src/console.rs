use std::io::Write;
use std::process::{Command, Stdio};
use anyhow::Result;
use log::info;
use crate::config::GeneralConfig;
use crate::host::{Navigator, ThemeSetter};
use crate::model::Theme;

/// Terminal stand-in for the browser: reports each effect as a line on `out`.
///
/// With an `opener` configured, new-context opens are also handed to that
/// command (e.g. `xdg-open`).
pub struct ConsoleHost<W: Write> {
    base_url: Option<String>,
    opener: Option<String>,
    out: W,
}

impl<W: Write> ConsoleHost<W> {
    pub fn new(general: &GeneralConfig, out: W) -> Self {
        Self {
            base_url: general.base_url.clone(),
            opener: general.opener.clone(),
            out,
        }
    }

    pub fn resolve(&self, url: &str) -> String {
        match &self.base_url {
            Some(base) if url.starts_with('/') => format!("{}{}", base.trim_end_matches('/'), url),
            _ => url.to_string(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn spawn_opener(&self, target: &str) -> Result<()> {
        let Some(opener) = &self.opener else {
            return Ok(());
        };

        let mut parts = opener.split_whitespace();
        let Some(program) = parts.next() else {
            return Ok(());
        };

        Command::new(program)
            .args(parts)
            .arg(target)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        info!("Handed {} to '{}'", target, opener);
        Ok(())
    }
}

impl<W: Write> Navigator for ConsoleHost<W> {
    fn navigate(&mut self, url: &str) -> Result<()> {
        let target = self.resolve(url);
        writeln!(self.out, "navigate {}", target)?;
        Ok(())
    }

    fn open_new(&mut self, url: &str) -> Result<()> {
        let target = self.resolve(url);
        writeln!(self.out, "open {}", target)?;
        self.spawn_opener(&target)
    }
}

impl<W: Write> ThemeSetter for ConsoleHost<W> {
    fn set_theme(&mut self, theme: Theme) -> Result<()> {
        writeln!(self.out, "theme {}", theme)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(base_url: Option<&str>) -> ConsoleHost<Vec<u8>> {
        let general = GeneralConfig {
            base_url: base_url.map(str::to_string),
            ..GeneralConfig::default()
        };
        ConsoleHost::new(&general, Vec::new())
    }

    #[test]
    fn resolves_relative_paths_against_base() {
        let h = host(Some("https://blog.example/"));
        assert_eq!(h.resolve("/feed.xml"), "https://blog.example/feed.xml");
        assert_eq!(h.resolve("https://elsewhere.example"), "https://elsewhere.example");
        assert_eq!(host(None).resolve("/blog"), "/blog");
    }

    #[test]
    fn writes_one_line_per_effect() {
        let mut h = host(None);
        h.navigate("/").unwrap();
        h.open_new("/feed.xml").unwrap();
        h.set_theme(Theme::System).unwrap();
        let out = String::from_utf8(h.into_inner()).unwrap();
        assert_eq!(out, "navigate /\nopen /feed.xml\ntheme system\n");
    }
}
