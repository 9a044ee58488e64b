use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::catalog::{Catalog, DemoKind, DemoRules};
use crate::config::Config;

/// Terminal gallery of student projects.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
pub struct Cli {
    /// Config file (default: ~/.config/folio/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Catalog file with a `[[projects]]` array. Overrides the config.
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Start with auto-advance disabled.
    #[arg(long)]
    pub no_autoplay: bool,

    /// Log file. Overrides the config.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the catalog with resolved demo slots and exit.
    List {
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.catalog {
            config.catalog.path = Some(path.clone());
        }
        if self.no_autoplay {
            config.carousel.autoplay = false;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }
}

/// One-line description of a demo slot.
pub fn describe_demo(demo: &DemoKind, rules: &DemoRules) -> String {
    match demo {
        DemoKind::Embedded {
            external_id: Some(id),
        } => format!("embedded {}", rules.embed_url(id)),
        DemoKind::Embedded { external_id: None } => "embedded (none)".to_string(),
        DemoKind::ListWidget => "to-do list".to_string(),
        DemoKind::ConceptOnly => "concept only".to_string(),
        DemoKind::OnRequest => "on request".to_string(),
    }
}

pub fn print_catalog(
    out: &mut impl Write,
    catalog: &Catalog,
    rules: &DemoRules,
    json: bool,
) -> io::Result<()> {
    if json {
        let text = serde_json::to_string_pretty(catalog.as_slice()).map_err(io::Error::other)?;
        writeln!(out, "{text}")?;
        return Ok(());
    }

    let title_width = catalog
        .iter()
        .map(|record| record.title.chars().count())
        .max()
        .unwrap_or(0);
    for record in catalog.iter() {
        writeln!(
            out,
            "{:>3}  {:<width$}  [{}]  {}",
            record.id,
            record.title,
            record.category,
            describe_demo(&record.demo, rules),
            width = title_width
        )?;
    }
    Ok(())
}
