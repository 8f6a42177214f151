use anyhow::Result;
use log::debug;
use crate::host::{Navigator, ThemeSetter};
use crate::model::{Entry, Handler};

pub fn execute(entry: &Entry, navigator: &mut dyn Navigator, themes: &mut dyn ThemeSetter) -> Result<()> {
    debug!("Executing '{}': {}", entry.id, entry.handler);
    dispatch(&entry.handler, navigator, themes)
}

pub fn dispatch(handler: &Handler, navigator: &mut dyn Navigator, themes: &mut dyn ThemeSetter) -> Result<()> {
    match handler {
        Handler::NavigateSame { url } => navigator.navigate(url),
        Handler::NavigateNew { url } => navigator.open_new(url),
        Handler::SetTheme { theme } => themes.set_theme(*theme),
    }
}
