//! Runs one strategy over every instance directory under a root
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rayon::prelude::*;

use crate::algorithm::Strategy;
use crate::graph::Graph;
use crate::io::{load_instance, persist, InstanceLayout, OutputFormat};
use crate::{Error, Result};

/// Configuration for a batch run
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Directory whose immediate subdirectories are instances
    pub instances_dir: PathBuf,
    pub strategy: Strategy,
    /// Result file name inside each instance, defaults per strategy
    pub output_name: Option<String>,
    pub format: OutputFormat,
    /// Process instances on the rayon thread pool
    pub parallel: bool,
    pub layout: InstanceLayout,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            instances_dir: PathBuf::from("instancias"),
            strategy: Strategy::default(),
            output_name: None,
            format: OutputFormat::default(),
            parallel: false,
            layout: InstanceLayout::default(),
        }
    }
}

impl DriverConfig {
    pub fn output_name(&self) -> &str {
        self.output_name
            .as_deref()
            .unwrap_or_else(|| self.strategy.default_output_name())
    }
}

/// What a successful instance produced
#[derive(Debug, Clone)]
pub struct InstanceSummary {
    pub node_count: usize,
    pub reached: usize,
    /// Time spent in the strategy, loading and writing excluded
    pub elapsed: Duration,
    pub output: PathBuf,
}

/// Outcome of one instance in a batch
#[derive(Debug)]
pub struct InstanceReport {
    pub name: String,
    pub outcome: Result<InstanceSummary>,
}

impl InstanceReport {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Immediate subdirectories of `root`, sorted by name
pub fn discover_instances(root: &Path) -> Result<Vec<PathBuf>> {
    let io_err = |source| Error::Io {
        path: root.to_path_buf(),
        source,
    };

    let mut instances = Vec::new();
    for entry in fs::read_dir(root).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        if entry.file_type().map_err(io_err)?.is_dir() {
            instances.push(entry.path());
        }
    }
    instances.sort();
    Ok(instances)
}

/// Loads, solves and persists a single instance
///
/// Nothing is written when loading or solving fails.
pub fn solve_instance(dir: &Path, config: &DriverConfig, source: usize) -> Result<InstanceSummary> {
    let graph = load_instance(dir, &config.layout)?;
    let (labels, elapsed) = config.strategy.run_timed::<u64, _>(&graph, source)?;

    let output = dir.join(config.output_name());
    persist(&output, &labels, config.format)?;

    Ok(InstanceSummary {
        node_count: graph.node_count(),
        reached: labels.reached_count(),
        elapsed,
        output,
    })
}

fn report_for(dir: &Path, config: &DriverConfig, source: usize) -> InstanceReport {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string());

    let outcome = solve_instance(dir, config, source);
    match &outcome {
        Ok(summary) => log::info!(
            "{} [{}] nodes={} source={} reached={} time={:.6}s",
            name,
            config.strategy,
            summary.node_count,
            source,
            summary.reached,
            summary.elapsed.as_secs_f64()
        ),
        Err(err) => log::error!("{} [{}] failed: {}", name, config.strategy, err),
    }

    InstanceReport { name, outcome }
}

/// Runs the configured strategy from `source` on every instance
///
/// A failing instance is reported and does not stop the others. Reports are
/// returned in instance order whether or not the batch ran in parallel.
pub fn run_batch(config: &DriverConfig, source: usize) -> Result<Vec<InstanceReport>> {
    let instances = discover_instances(&config.instances_dir)?;
    log::debug!(
        "{} instances under {}",
        instances.len(),
        config.instances_dir.display()
    );

    let reports: Vec<InstanceReport> = if config.parallel {
        instances
            .par_iter()
            .map(|dir| report_for(dir, config, source))
            .collect()
    } else {
        instances
            .iter()
            .map(|dir| report_for(dir, config, source))
            .collect()
    };
    Ok(reports)
}
