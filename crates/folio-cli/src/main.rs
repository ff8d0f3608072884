use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use folio_config::Config;
use folio_engine::{
    Article, CitationIndex, Layout, LayoutStrategy, Placement, Reference, Row, Section,
    layout::move_block_by_id,
};

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Two-column article layout and citation numbering"
)]
struct Cli {
    /// Config file to use instead of ~/.config/folio/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the row or section structure of an article
    Layout(LayoutArgs),

    /// Print the numbered reference list and any unresolved citations
    Refs(ArticleArgs),

    /// Render an article to HTML
    Render(LayoutArgs),

    /// Print the reconciled layout record for an article
    Record(ArticleArgs),

    /// Move a block to a new position and print the updated record
    Move(MoveArgs),

    /// Set a block's placement and print the updated article
    Place(PlaceArgs),
}

#[derive(clap::Args)]
struct ArticleArgs {
    /// Article JSON file
    article: PathBuf,

    /// Layout record file (defaults to <records_dir>/<article stem>.json)
    #[arg(long)]
    record: Option<PathBuf>,
}

#[derive(clap::Args)]
struct LayoutArgs {
    #[command(flatten)]
    source: ArticleArgs,

    /// Layout strategy: strict-grid or independent-stack
    #[arg(short, long)]
    strategy: Option<LayoutStrategy>,

    /// Print the layout as JSON
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args)]
struct MoveArgs {
    #[command(flatten)]
    source: ArticleArgs,

    /// Id of the block to move
    from: String,

    /// Target position, clamped to the end of the article
    to: usize,

    /// Write the updated record back to the record file
    #[arg(long)]
    write: bool,
}

#[derive(clap::Args)]
struct PlaceArgs {
    /// Article JSON file
    article: PathBuf,

    /// Id of the block to place
    id: String,

    #[arg(value_parser = ["left", "right", "full"])]
    placement: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Layout(args) => {
            let (article, _) = load_article(&args.source, &config)?;
            let strategy = args.strategy.unwrap_or(config.layout.strategy);
            let layout = strategy.apply(&article.blocks);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&layout)?);
            } else {
                for line in describe_layout(&layout) {
                    println!("{line}");
                }
            }
        }
        Command::Refs(args) => {
            let (article, _) = load_article(&args, &config)?;
            let index = CitationIndex::build(&article.blocks, &article.references);
            for line in describe_references(&index, &article.references) {
                println!("{line}");
            }
        }
        Command::Render(args) => {
            let (article, _) = load_article(&args.source, &config)?;
            let strategy = args.strategy.unwrap_or(config.layout.strategy);
            println!(
                "{}",
                article.render_html(strategy, &config.render_options())
            );
        }
        Command::Record(args) => {
            let (article, _) = load_article(&args, &config)?;
            println!("{}", article.layout_record().to_json()?);
        }
        Command::Move(args) => {
            let (mut article, record_path) = load_article(&args.source, &config)?;
            if !move_block_by_id(&mut article.blocks, &args.from, args.to) {
                bail!("No block with id '{}'", args.from);
            }
            let json = article.layout_record().to_json()?;
            if args.write {
                let Some(path) = record_path else {
                    bail!("No record file: pass --record or set records_dir in the config");
                };
                write_record(&path, &json)?;
                log::info!("Wrote layout record to {}", path.display());
            }
            println!("{json}");
        }
        Command::Place(args) => {
            let mut article = read_article(&args.article)?;
            let placement = Placement::from_hint(Some(args.placement.as_str()));
            place_block(&mut article, &args.id, placement)?;
            println!("{}", serde_json::to_string_pretty(&article)?);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    match loaded {
        Some(config) => Ok(config),
        None => {
            log::debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn read_article(path: &Path) -> Result<Article> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read article {}", path.display()))?;
    Article::from_json(&json).with_context(|| format!("Invalid article {}", path.display()))
}

/// Reads the article and applies its layout record, returning the record
/// path that was consulted.
fn load_article(args: &ArticleArgs, config: &Config) -> Result<(Article, Option<PathBuf>)> {
    let mut article = read_article(&args.article)?;
    let record_path = args
        .record
        .clone()
        .or_else(|| config.record_path_for(&args.article));

    let record = match &record_path {
        Some(path) if path.exists() => Some(
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read layout record {}", path.display()))?,
        ),
        Some(path) => {
            log::info!("No layout record at {}, using natural order", path.display());
            None
        }
        None => None,
    };
    article.restore_layout(record.as_deref());

    Ok((article, record_path))
}

fn write_record(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json)
        .with_context(|| format!("Failed to write layout record {}", path.display()))
}

fn place_block(article: &mut Article, id: &str, placement: Placement) -> Result<()> {
    let Some(block) = article.blocks.iter_mut().find(|b| b.id.as_str() == id) else {
        bail!("No block with id '{id}'");
    };
    if !block.set_placement(placement) {
        bail!(
            "Block '{id}' is a {} block and always spans the full width",
            block.content.type_name()
        );
    }
    Ok(())
}

fn describe_layout(layout: &Layout) -> Vec<String> {
    match layout {
        Layout::Rows(rows) => rows
            .iter()
            .map(|row| match row {
                Row::Full { id } => format!("full     {id}"),
                Row::Split { left, right } => format!(
                    "split    left={}  right={}",
                    left.as_ref().map_or("-", |id| id.as_str()),
                    right.as_ref().map_or("-", |id| id.as_str()),
                ),
            })
            .collect(),
        Layout::Sections(sections) => sections
            .iter()
            .map(|section| match section {
                Section::Full { block } => format!("full     {}", block.id),
                Section::Columns { left, right } => {
                    let ids = |column: &[&folio_engine::Block]| {
                        column
                            .iter()
                            .map(|b| b.id.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    };
                    format!(
                        "columns  left=[{}]  right=[{}]",
                        ids(left.as_slice()),
                        ids(right.as_slice())
                    )
                }
            })
            .collect(),
    }
}

fn describe_references(index: &CitationIndex, references: &[Reference]) -> Vec<String> {
    let mut lines: Vec<String> = index
        .footer(references)
        .into_iter()
        .map(|(n, reference)| format!("[{n}] {}  {}", reference.id, reference.title))
        .collect();
    if !index.unresolved().is_empty() {
        lines.push(format!("unresolved: {}", index.unresolved().join(", ")));
    }
    lines
}
