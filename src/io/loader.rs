use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::graph::{DirectedGraph, Graph};
use crate::{Error, Result};

/// File names making up one instance directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceLayout {
    /// File holding the node count `N`
    pub node_count_file: String,
    /// Edge list candidates, the first one present is read
    pub edge_files: Vec<String>,
}

impl Default for InstanceLayout {
    fn default() -> Self {
        InstanceLayout {
            node_count_file: "nodos.txt".to_string(),
            edge_files: vec!["arcos.txt".to_string(), "arcos.dat".to_string()],
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            Error::MissingInput(path.to_path_buf())
        } else {
            Error::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Loads the graph stored in `dir`
pub fn load_instance(dir: &Path, layout: &InstanceLayout) -> Result<DirectedGraph<u64>> {
    let node_path = dir.join(&layout.node_count_file);
    let node_count = parse_node_count(&read_file(&node_path)?, &node_path)?;

    let edge_path = layout
        .edge_files
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
        .ok_or_else(|| {
            Error::MissingInput(dir.join(layout.edge_files.first().map_or("", String::as_str)))
        })?;
    let graph = parse_edges(&read_file(&edge_path)?, &edge_path, node_count)?;

    log::debug!(
        "loaded {}: {} nodes, {} edges",
        dir.display(),
        node_count,
        graph.edge_count()
    );
    Ok(graph)
}

/// Parses an in-memory node count and edge list
pub fn parse_graph(node_count_text: &str, edge_text: &str) -> Result<DirectedGraph<u64>> {
    let origin = PathBuf::from("<input>");
    let node_count = parse_node_count(node_count_text, &origin)?;
    parse_edges(edge_text, &origin, node_count)
}

/// Parses the single integer of a node count file
pub fn parse_node_count(text: &str, origin: &Path) -> Result<usize> {
    let trimmed = text.trim();
    trimmed.parse().map_err(|_| Error::Parse {
        path: origin.to_path_buf(),
        line: 1,
        message: format!("expected a node count, found {:?}", trimmed),
    })
}

/// One `from to weight` record
fn parse_edge_line(line: &str) -> std::result::Result<(usize, usize, i64), String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [from, to, weight] = fields.as_slice() else {
        return Err(format!("expected `from to weight`, found {:?}", line.trim()));
    };
    let node = |field: &str| {
        field
            .parse::<usize>()
            .map_err(|_| format!("invalid node ID {:?}", field))
    };
    let weight = weight
        .parse::<i64>()
        .map_err(|_| format!("invalid weight {:?}", weight))?;
    Ok((node(*from)?, node(*to)?, weight))
}

/// End-of-list marker such as `-1 -1 -1`: three integers with a non-positive
/// origin node
fn is_terminator(line: &str) -> bool {
    let fields: Vec<&str> = line.split_whitespace().collect();
    match fields.as_slice() {
        [from, to, weight] => {
            from.parse::<i64>().map_or(false, |from| from <= 0)
                && to.parse::<i64>().is_ok()
                && weight.parse::<i64>().is_ok()
        }
        _ => false,
    }
}

/// Parses an edge list into a graph with nodes `1..=node_count`
///
/// Blank lines are skipped. The last record may be a terminator such as
/// `-1 -1 -1`; any other line that does not parse, the last one included, is
/// an error.
pub fn parse_edges(text: &str, origin: &Path, node_count: usize) -> Result<DirectedGraph<u64>> {
    let mut graph = DirectedGraph::with_nodes(node_count);

    let records: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| (index + 1, line))
        .collect();
    let last = records.len().checked_sub(1);

    for (position, &(line_number, line)) in records.iter().enumerate() {
        if Some(position) == last && is_terminator(line) {
            log::debug!(
                "{}:{}: terminator {:?} skipped",
                origin.display(),
                line_number,
                line.trim()
            );
            break;
        }

        let (from, to, weight) = match parse_edge_line(line) {
            Ok(edge) => edge,
            Err(message) => {
                return Err(Error::Parse {
                    path: origin.to_path_buf(),
                    line: line_number,
                    message,
                })
            }
        };

        let weight = u64::try_from(weight).map_err(|_| Error::NegativeWeight(weight))?;
        graph.add_edge(from, to, weight)?;
    }

    Ok(graph)
}
