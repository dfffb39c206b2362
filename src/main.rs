use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use callslice::core::FileScanner;
use callslice::facts::load_fact_files;
use callslice::formatters::JsonCompactFormatter;
use callslice::{CallGraphAnalyzer, GraphConfig};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "callslice",
    version,
    author = "callslice developers",
    about = "Build a cross-file call graph and slice handler contexts"
)]
struct Cli {
    /// Directory of per-file fact JSON produced by the extractor
    #[arg(short, long, value_name = "DIR")]
    facts: PathBuf,

    /// Output file path (stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Call hops to follow from each handler call (overrides config)
    #[arg(short, long, value_name = "N")]
    depth: Option<usize>,

    /// Output format: context, json-compact
    #[arg(long, value_name = "FORMAT", value_enum, default_value_t = OutputFormat::Context)]
    format: OutputFormat,

    /// TOML file with resolution settings
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log dropped calls and fallbacks
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum OutputFormat {
    Context,
    JsonCompact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        facts,
        output,
        depth,
        format,
        config,
        verbose: _,
    } = cli;

    let start_time = Instant::now();

    let mut graph_config = match &config {
        Some(path) => GraphConfig::from_toml_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GraphConfig::default(),
    };
    if let Some(depth) = depth {
        graph_config = graph_config.with_default_depth(depth);
    }

    let scanner = FileScanner::new(&graph_config.skip_dirs);
    let fact_files = scanner
        .scan_directory(&facts)
        .with_context(|| format!("failed to scan {}", facts.display()))?;
    info!("Found {} fact files under {}", fact_files.len(), facts.display());

    let file_facts = load_fact_files(&fact_files);

    let mut analyzer = CallGraphAnalyzer::with_config(graph_config);
    analyzer.build_graph(file_facts);
    info!(
        "Graph ready: {} nodes, {} edges",
        analyzer.node_count(),
        analyzer.edge_count()
    );

    let rendered = match format {
        OutputFormat::Context => analyzer.route_report(),
        OutputFormat::JsonCompact => {
            JsonCompactFormatter::new().format_graph(analyzer.snapshot())?
        }
    };

    match &output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => print!("{rendered}"),
    }

    info!(
        "Total execution time: {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}
