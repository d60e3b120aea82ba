use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::algorithm::array_scan::ArrayScan;
use crate::algorithm::dial::Dial;
use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{LabelStore, ShortestPathAlgorithm};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Selects one of the interchangeable shortest path strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Strategy {
    /// Dial's bucket queue
    #[default]
    Dial,
    /// Binary-heap Dijkstra
    Dijkstra,
    /// O(V²) array-scan Dijkstra
    ArrayScan,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Dial, Strategy::Dijkstra, Strategy::ArrayScan];

    /// Runs the selected strategy
    pub fn run<W, G>(self, graph: &G, source: usize) -> Result<LabelStore<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        match self {
            Strategy::Dial => Dial::new().compute_shortest_paths(graph, source),
            Strategy::Dijkstra => Dijkstra::new().compute_shortest_paths(graph, source),
            Strategy::ArrayScan => ArrayScan::new().compute_shortest_paths(graph, source),
        }
    }

    /// Runs the selected strategy and measures it
    pub fn run_timed<W, G>(self, graph: &G, source: usize) -> Result<(LabelStore<W>, Duration)>
    where
        W: Weight,
        G: Graph<W>,
    {
        match self {
            Strategy::Dial => Dial::new().compute_timed(graph, source),
            Strategy::Dijkstra => Dijkstra::new().compute_timed(graph, source),
            Strategy::ArrayScan => ArrayScan::new().compute_timed(graph, source),
        }
    }

    /// Result file written into each instance directory by default
    pub fn default_output_name(self) -> &'static str {
        match self {
            Strategy::Dial => "salidaDial.txt",
            Strategy::Dijkstra => "salidaDijkstra.txt",
            Strategy::ArrayScan => "salidaArrayScan.txt",
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Strategy::Dial => "dial",
            Strategy::Dijkstra => "dijkstra",
            Strategy::ArrayScan => "array-scan",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "dial" => Ok(Strategy::Dial),
            "dijkstra" => Ok(Strategy::Dijkstra),
            "array-scan" => Ok(Strategy::ArrayScan),
            other => Err(Error::AlgorithmError(format!("unknown strategy: {}", other))),
        }
    }
}
