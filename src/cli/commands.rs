//! CLI command implementations.

use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use crate::engine::{Algorithm, AnalysisEngine, AnalysisParams, AnalysisReport, DistanceTable};
use crate::format::GraphReader;
use crate::types::GraphResult;

/// Print a value as JSON, optionally pretty.
fn print_json<T: Serialize>(value: &T, pretty: bool) -> GraphResult<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", text);
    Ok(())
}

/// Display information about a graph document.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let components = graph.component_count();
    let negative = graph.has_negative_weight();

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "components": components,
            "negative_weights": negative,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("File: {}", path.display());
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
        println!("Components: {}", components);
        println!("Negative weights: {}", if negative { "yes" } else { "no" });
    }
    Ok(())
}

/// Run one algorithm and print its report.
pub fn cmd_run(path: &Path, params: AnalysisParams, json: bool, pretty: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let engine = AnalysisEngine::new();

    let started = Instant::now();
    let report = engine.run(&graph, params)?;
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    if json {
        return print_json(
            &serde_json::json!({
                "result": report,
                "execution_time_ms": elapsed_ms,
            }),
            pretty,
        );
    }

    match &report {
        AnalysisReport::Path(r) => {
            println!("Algorithm: {}", r.algorithm);
            println!("Distance {} -> {}: {}", r.source, r.destination, r.distance);
            if r.path.is_empty() {
                println!("No path from {} to {}", r.source, r.destination);
            } else {
                println!("Path: {}", r.path.join(" -> "));
            }
            if let Some(cycle) = r.has_negative_cycle {
                println!("Negative cycle: {}", if cycle { "yes" } else { "no" });
            }
        }
        AnalysisReport::Mst(r) => {
            println!("Algorithm: {}", r.algorithm);
            println!("Edges:");
            for edge in &r.tree.edges {
                println!("  {} {} - {} ({})", edge.id, edge.from, edge.to, edge.weight);
            }
            println!("Total weight: {}", r.tree.total_weight);
            if !r.spanning {
                println!("Graph is disconnected: result is a spanning forest");
            }
        }
    }
    println!("Execution time: {:.3} ms", elapsed_ms);
    Ok(())
}

/// Print the full distance table from a source node.
pub fn cmd_distances(
    path: &Path,
    algorithm: Algorithm,
    source: &str,
    json: bool,
    pretty: bool,
) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let table: DistanceTable = AnalysisEngine::new().shortest_paths(&graph, algorithm, source)?;

    if json {
        return print_json(&table, pretty);
    }

    println!("Algorithm: {}", table.algorithm);
    println!("Source: {}", table.paths.source_id());
    for node in graph.nodes() {
        let distance = table.paths.distance(&node.id).unwrap_or_default();
        let via = table.paths.previous(&node.id).unwrap_or("-");
        println!("  {:<12} {:>10}  via {}", node.label, distance.to_string(), via);
    }
    if let Some(cycle) = table.has_negative_cycle {
        println!("Negative cycle: {}", if cycle { "yes" } else { "no" });
    }
    Ok(())
}

/// List the available algorithms.
pub fn cmd_algorithms(json: bool) -> GraphResult<()> {
    if json {
        let list: Vec<_> = Algorithm::ALL
            .iter()
            .map(|a| {
                serde_json::json!({
                    "name": a.name(),
                    "kind": if a.is_shortest_path() { "path" } else { "mst" },
                })
            })
            .collect();
        return print_json(&list, false);
    }

    for algorithm in Algorithm::ALL {
        let kind = if algorithm.is_shortest_path() {
            "shortest path"
        } else {
            "spanning tree"
        };
        println!("{:<14} {}", algorithm.name(), kind);
    }
    Ok(())
}
