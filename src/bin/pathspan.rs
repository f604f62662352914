//! CLI entry point for the `pathspan` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use pathspan::cli::commands;
use pathspan::config::{load_config, RunConfig};
use pathspan::engine::{Algorithm, AnalysisParams};
use pathspan::{GraphError, GraphResult};

#[derive(Parser)]
#[command(
    name = "pathspan",
    about = "pathspan CLI — shortest paths and minimum spanning trees over weighted graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long)]
    format: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// TOML file with default settings
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display information about a graph file
    Info {
        /// Path to the JSON graph file
        file: PathBuf,
    },
    /// Run one algorithm on a graph
    Run {
        /// Path to the JSON graph file
        file: PathBuf,
        /// Algorithm: dijkstra, bellman-ford, prim, kruskal
        #[arg(long)]
        algorithm: Option<String>,
        /// Source node ID (shortest-path algorithms)
        #[arg(long)]
        source: Option<String>,
        /// Destination node ID (shortest-path algorithms)
        #[arg(long)]
        destination: Option<String>,
    },
    /// Print every node's distance from a source
    Distances {
        /// Path to the JSON graph file
        file: PathBuf,
        /// Source node ID
        #[arg(long)]
        source: Option<String>,
        /// Algorithm: dijkstra or bellman-ford
        #[arg(long)]
        algorithm: Option<String>,
    },
    /// List the available algorithms
    Algorithms,
}

fn init_logging(config: &RunConfig, verbose: bool) {
    let level = if verbose { "debug" } else { config.log_level.as_str() };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn execute(cli: Cli, config: RunConfig) -> GraphResult<()> {
    let json = match &cli.format {
        Some(f) => f.eq_ignore_ascii_case("json"),
        None => config.json(),
    };
    let pretty = cli.pretty || config.pretty;

    match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Run {
            file,
            algorithm,
            source,
            destination,
        } => {
            let algorithm: Algorithm = algorithm
                .as_deref()
                .unwrap_or(config.algorithm.as_str())
                .parse()?;
            let params = AnalysisParams {
                algorithm,
                source: source.or(config.source),
                destination: destination.or(config.destination),
            };
            commands::cmd_run(&file, params, json, pretty)
        }
        Commands::Distances {
            file,
            source,
            algorithm,
        } => {
            let algorithm: Algorithm = algorithm
                .as_deref()
                .unwrap_or(config.algorithm.as_str())
                .parse()?;
            let source = source.or(config.source).ok_or(GraphError::MissingEndpoint {
                algorithm: algorithm.name(),
                endpoint: "source",
            })?;
            commands::cmd_distances(&file, algorithm, &source, json, pretty)
        }
        Commands::Algorithms => commands::cmd_algorithms(json),
    }
}

fn exit_code(e: &GraphError) -> i32 {
    match e {
        GraphError::Io(_) => 1,
        GraphError::Json(_) | GraphError::Config(_) => 2,
        GraphError::UnknownAlgorithm(_)
        | GraphError::NotShortestPath(_)
        | GraphError::MissingEndpoint { .. } => 3,
        GraphError::NodeNotFound(_)
        | GraphError::DuplicateNode(_)
        | GraphError::InvalidEdgeReference { .. }
        | GraphError::SelfEdge(_) => 4,
        _ => 5,
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match cli.config.as_deref().map(load_config) {
        Some(Ok(c)) => c,
        Some(Err(e)) => {
            eprintln!("Error: {}", e);
            process::exit(exit_code(&e));
        }
        None => RunConfig::default(),
    };
    init_logging(&config, cli.verbose);

    if let Err(e) = execute(cli, config) {
        eprintln!("Error: {}", e);
        process::exit(exit_code(&e));
    }
}
