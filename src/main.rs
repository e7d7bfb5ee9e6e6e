use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use hubsearch::search::utils::Query;
use hubsearch::{
    check_coverage, search_with_limit, DocumentIndex, IndexError, ManualClock, Panel,
    ScoredDocument, SearchConfig, SearchController, Searcher,
};

mod cli;
use cli::display::{self, bold, dim, rule};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("info")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{}", display::fail(&format!("{:#}", e)));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Search {
            index,
            query,
            limit,
            json,
            page,
        } => run_search(&index, &query, limit, json, &page, config),
        Commands::Render { index, query, page } => run_render(&index, &query, &page, config),
        Commands::Validate { index } => run_validate(&index),
        Commands::Inspect { index } => run_inspect(&index),
        Commands::Coverage { index, site } => run_coverage(&index, &site),
    }
}

fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    match path {
        Some(path) => {
            let config = SearchConfig::from_path(path)?;
            debug!(?config, "loaded config");
            Ok(config)
        }
        None => Ok(SearchConfig::default()),
    }
}

fn load_index(path: &Path) -> Result<DocumentIndex> {
    DocumentIndex::from_path(path).with_context(|| format!("loading {}", path.display()))
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

/// One result line of `search --json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonResult<'a> {
    #[serde(flatten)]
    result: &'a ScoredDocument<'a>,
    href: String,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    query: &'a str,
    results: Vec<JsonResult<'a>>,
}

fn run_search(
    index_path: &Path,
    raw_query: &str,
    limit: Option<usize>,
    json: bool,
    page: &str,
    config: SearchConfig,
) -> Result<()> {
    let index = load_index(index_path)?;
    let query = Query::parse(raw_query);
    let prefix = hubsearch::path_prefix(page);

    // Same gate the search box applies before calling the engine
    let results = if query.char_len() < config.min_query_len {
        debug!(len = query.char_len(), min = config.min_query_len, "query below minimum length");
        Vec::new()
    } else {
        search_with_limit(&index, &query, limit.unwrap_or(config.max_results))
    };

    if json {
        let output = JsonOutput {
            query: raw_query,
            results: results
                .iter()
                .map(|result| JsonResult {
                    result,
                    href: format!("{}{}", prefix, result.doc.url),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results found for \"{}\"", raw_query);
        return Ok(());
    }

    println!();
    println!("{} for \"{}\"", bold(&format!("{} results", results.len())), raw_query);
    println!("{}", rule());
    for (rank, result) in results.iter().enumerate() {
        let doc = result.doc;
        println!(
            "{:>2}. {} {} {}  {}",
            rank + 1,
            display::score(result.score),
            display::subject_badge(&doc.subject),
            bold(&doc.title),
            dim(doc.code.as_deref().unwrap_or("")),
        );
        println!("      {}", dim(&format!("{}{}", prefix, doc.url)));
        println!("      {}", display::truncate(&doc.excerpt, 64));
    }
    println!("{}", rule());
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// RENDER
// ═══════════════════════════════════════════════════════════════════════════

/// Drive a controller through one typed query and print the panel.
fn run_render(index_path: &Path, raw_query: &str, page: &str, config: SearchConfig) -> Result<()> {
    let index = load_index(index_path)?;
    let clock = ManualClock::new();
    let searcher = Searcher::new(Arc::new(index), config);
    let mut controller = SearchController::new(searcher, page, clock.clone());

    controller.on_input(raw_query);
    clock.advance(config.debounce_ms);
    let outcome = controller.poll();
    debug!(?outcome, "render");

    match controller.panel() {
        Panel::Blank => eprintln!(
            "{}",
            dim(&format!(
                "query shorter than {} characters; nothing rendered",
                config.min_query_len
            ))
        ),
        _ => println!("{}", controller.panel_html()),
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// VALIDATE
// ═══════════════════════════════════════════════════════════════════════════

fn run_validate(index_path: &Path) -> Result<()> {
    match DocumentIndex::from_path(index_path) {
        Ok(index) => {
            println!(
                "{}",
                display::ok(&format!("{}: {} documents", index_path.display(), index.len()))
            );
            Ok(())
        }
        Err(IndexError::Invalid(violations)) => {
            for violation in &violations {
                println!("{}", display::fail(&violation.to_string()));
            }
            bail!(
                "{}: {} violation(s)",
                index_path.display(),
                violations.len()
            )
        }
        Err(e) => Err(e).with_context(|| format!("loading {}", index_path.display())),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// INSPECT
// ═══════════════════════════════════════════════════════════════════════════

fn run_inspect(index_path: &Path) -> Result<()> {
    let raw = fs::read(index_path).with_context(|| format!("reading {}", index_path.display()))?;
    let index = load_index(index_path)?;

    let mut by_subject: BTreeMap<&str, BTreeMap<u32, usize>> = BTreeMap::new();
    for doc in &index {
        *by_subject
            .entry(doc.subject.as_str())
            .or_default()
            .entry(doc.block)
            .or_default() += 1;
    }
    let without_code = index.iter().filter(|d| d.code.is_none()).count();
    let keywords: usize = index.iter().map(|d| d.keywords.len()).sum();

    const W: usize = 52;
    println!();
    println!("╔{}╗", "═".repeat(W));
    println!("║{:^w$}║", "HUBSEARCH INDEX", w = W);
    println!("╚{}╝", "═".repeat(W));
    println!("  File:         {}", index_path.display());
    println!("  Size:         {}", format_size(raw.len()));
    println!("  CRC32:        {:#010x}", crc32fast::hash(&raw));
    println!("  Documents:    {}", index.len());
    println!("  Keywords:     {}", keywords);
    println!("  Without code: {}", without_code);
    println!();
    println!("┌─ SUBJECTS {}┐", "─".repeat(W - 11));
    for (subject, blocks) in &by_subject {
        let total: usize = blocks.values().sum();
        let detail = blocks
            .iter()
            .map(|(block, n)| format!("b{}:{}", block, n))
            .collect::<Vec<_>>()
            .join("  ");
        println!("│  {:<18} {:>3}   {}", subject, total, detail);
    }
    println!("└{}┘", "─".repeat(W));
    println!();
    Ok(())
}

fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COVERAGE
// ═══════════════════════════════════════════════════════════════════════════

fn run_coverage(index_path: &Path, site: &Path) -> Result<()> {
    let index = load_index(index_path)?;
    let report = check_coverage(&index, site)
        .with_context(|| format!("scanning {}", site.display()))?;

    if report.is_complete() {
        println!(
            "{}",
            display::ok(&format!(
                "all {} content pages are indexed ({} entries)",
                report.pages.len(),
                report.indexed
            ))
        );
        return Ok(());
    }

    for page in &report.missing {
        println!("{}", display::fail(&format!("not in index: {}", page)));
    }
    bail!(
        "{} of {} content pages missing from the index",
        report.missing.len(),
        report.pages.len()
    )
}
