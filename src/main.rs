mod cli;
mod constants;
mod controller;
mod format;
mod loader;
mod models;
mod ordered_map;
mod prelude;
mod render;
mod search;

use std::fs;
use std::path::Path;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::constants::LOAD_ERROR_MESSAGE;
use crate::controller::{AppState, Event, SectionFilter};
use crate::prelude::*;
use crate::render::{HtmlPage, SectionId, Surface};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Render { ref output } => render_command(&cli.data, output.as_deref()),
        Command::Search { ref term, ref section } => {
            search_command(&cli.data, term, section.as_deref())
        }
    }
}

fn render_command(data: &Path, output: Option<&Path>) -> Result<()> {
    let mut page = HtmlPage::new();

    let document = match loader::load(data) {
        Ok(catalog) => {
            let items = render::render_catalog(&catalog, &mut page);
            info!(items = items.len(), "rendered pricing catalog");
            page.document(&AppState::new().results_count(&items))
        }
        Err(load_error) => {
            error!(error = %load_error, "failed to load pricing document");
            page.show_error(LOAD_ERROR_MESSAGE);
            let document = page.document("");
            write_output(output, &document)?;
            bail!("failed to load pricing document: {load_error}");
        }
    };

    write_output(output, &document)
}

fn search_command(data: &Path, term: &str, section: Option<&str>) -> Result<()> {
    let catalog = loader::load(data).context("failed to load pricing document")?;

    let mut page = HtmlPage::new();
    let items = render::render_catalog(&catalog, &mut page);

    let filter = match section {
        None => SectionFilter::All,
        Some(slug) => {
            let section = SectionId::from_slug(slug)
                .with_context(|| format!("unknown section `{slug}`"))?;
            SectionFilter::Section(section)
        }
    };

    let state = AppState::new()
        .handle_event(Event::FilterSelected(filter))
        .handle_event(Event::SearchInput(term.to_string()));
    info!(term = state.term(), filter = ?state.filter(), "running search pass");

    println!("{}", state.results_count(&items));
    for section in SectionId::ALL {
        if !state.section_visible(section) {
            continue;
        }
        let rows: Vec<_> = items
            .iter()
            .filter(|item| item.section == section && state.is_visible(item))
            .collect();
        if rows.is_empty() {
            continue;
        }
        println!("{}:", section.title());
        for row in rows {
            println!("  {}", row.text);
        }
    }

    Ok(())
}

fn write_output(output: Option<&Path>, document: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, document)
            .with_context(|| format!("failed to write `{}`", path.display())),
        None => {
            println!("{document}");
            Ok(())
        }
    }
}
