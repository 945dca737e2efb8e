use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use pbfroute_cli::output::OutputFormat;

mod commands;

use commands::info::{handle_info_command, InfoSource};
use commands::route::{handle_map_route_command, handle_route_command, TraceArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest-path queries over weighted graphs and road maps")]
struct Cli {
    /// Output format for command results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug, Clone, Copy)]
struct TraceOptions {
    /// Record the order in which nodes are settled.
    #[arg(long)]
    trace: bool,
    /// Cap the number of recorded settle events (implies --trace).
    #[arg(long, value_name = "COUNT")]
    max_explored: Option<usize>,
}

impl From<TraceOptions> for TraceArgs {
    fn from(options: TraceOptions) -> Self {
        Self {
            trace: options.trace || options.max_explored.is_some(),
            max_explored: options.max_explored,
        }
    }
}

/// Exactly one input for `info`.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct InfoInput {
    /// Graph document to inspect.
    #[arg(long)]
    graph: Option<PathBuf>,
    /// Road map to inspect.
    #[arg(long)]
    map: Option<PathBuf>,
}

impl InfoInput {
    fn source(&self) -> Result<InfoSource<'_>> {
        match (&self.graph, &self.map) {
            (Some(path), None) => Ok(InfoSource::Graph(path)),
            (None, Some(path)) => Ok(InfoSource::Map(path)),
            _ => Err(anyhow!("pass exactly one of --graph or --map")),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the least-cost path between two nodes of a JSON graph document.
    Route {
        /// Graph document (`{"node_count": N, "edges": [...]}`).
        #[arg(long)]
        graph: PathBuf,
        /// Source node id.
        #[arg(long = "from")]
        from: usize,
        /// Target node id.
        #[arg(long = "to")]
        to: usize,
        #[command(flatten)]
        trace: TraceOptions,
    },
    /// Compute the shortest road route between two map node ids.
    MapRoute {
        /// Road map document (`{"nodes": [...], "ways": [...]}`).
        #[arg(long)]
        map: PathBuf,
        /// Source map node id.
        #[arg(long = "from", allow_negative_numbers = true)]
        from: i64,
        /// Target map node id.
        #[arg(long = "to", allow_negative_numbers = true)]
        to: i64,
        #[command(flatten)]
        trace: TraceOptions,
    },
    /// Report node and edge counts of a graph document or road map.
    Info {
        #[command(flatten)]
        input: InfoInput,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Route {
            graph,
            from,
            to,
            trace,
        } => handle_route_command(&graph, from, to, trace.into(), cli.format),
        Command::MapRoute {
            map,
            from,
            to,
            trace,
        } => handle_map_route_command(&map, from, to, trace.into(), cli.format),
        Command::Info { input } => handle_info_command(input.source()?, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
