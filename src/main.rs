use std::io;
use std::path::PathBuf;
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use blog_palette::config::{load_config, GeneralConfig};
use blog_palette::console::ConsoleHost;
use blog_palette::executor;
use blog_palette::model::Section;
use blog_palette::provider::SearchIndexProvider;
use blog_palette::SearchIndex;
use blog_palette::state::SinglePage;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file to use instead of the default location
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Print the palette entries in display order
    List {
        /// Only show entries in this section
        #[arg(short, long)]
        section: Option<String>,
    },
    /// Print the JSON handed to the widget
    Export {
        #[arg(long)]
        compact: bool,
    },
    /// Select an entry and run its handler
    Select {
        id: String,
    },
    /// Validate the palette and summarise it
    Check,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // 1. Load Config & build the index once
    let config = load_config(args.config.as_deref())?;
    let index = config.build_index()?;

    match args.command {
        Cmd::List { section } => {
            let section = section.map(|s| s.parse::<Section>()).transpose()?;
            let page = install(index, &config.general)?;
            for (group, entries) in page.palette.grouped() {
                if section.is_some_and(|s| s != group) {
                    continue;
                }
                println!("{}", group);
                for entry in entries {
                    println!("  {:<40} {}  [{}]", entry.id, entry.title, entry.handler);
                }
            }
        }
        Cmd::Export { compact } => {
            println!("{}", index.to_json(!compact)?);
        }
        Cmd::Select { id } => {
            let page = install(index, &config.general)?;

            // 3. Run the selected handler
            let entry = page.palette.select(&id)?;
            let mut navigator = ConsoleHost::new(&config.general, io::stdout());
            let mut themes = ConsoleHost::new(&config.general, io::stdout());
            executor::execute(entry, &mut navigator, &mut themes)?;
        }
        Cmd::Check => {
            for section in Section::ALL {
                println!("{:<12} {}", section, index.in_section(section).count());
            }
            println!("{} entries OK", index.len());
        }
    }

    Ok(())
}

// 2. Install into the in-process palette
fn install(index: SearchIndex, general: &GeneralConfig) -> Result<SinglePage> {
    let provider = SearchIndexProvider::new(index, general.widget.clone());
    let mut page = SinglePage::new(general.widget.clone());
    if !provider.init(&mut page) {
        bail!("search palette unavailable: no widget '{}'", provider.selector());
    }
    Ok(page)
}
