use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use crate::algorithm::{LabelRow, LabelStore, UNREACHED_DISTANCE};
use crate::graph::Weight;
use crate::{Error, Result};

/// Result file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `<source>` then `<node> <predecessor> <distance>` per line
    #[default]
    Text,
    /// JSON document with the same rows
    Json,
}

/// Writes the source line followed by one `<node> <predecessor> <distance>`
/// line per node in ascending order. Unreached nodes read `<node> 0 -1`.
pub fn write_text<W, O>(out: &mut O, labels: &LabelStore<W>) -> io::Result<()>
where
    W: Weight,
    O: Write,
{
    writeln!(out, "{}", labels.source())?;
    for row in labels.rows() {
        match row.distance {
            Some(distance) => writeln!(out, "{} {} {}", row.node, row.predecessor, distance)?,
            None => writeln!(out, "{} {} {}", row.node, row.predecessor, UNREACHED_DISTANCE)?,
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<W: Weight + Serialize> {
    source: usize,
    nodes: Vec<JsonRow<W>>,
}

#[derive(Serialize)]
struct JsonRow<W: Weight + Serialize> {
    node: usize,
    predecessor: usize,
    #[serde(serialize_with = "distance_or_sentinel")]
    distance: Option<W>,
}

fn distance_or_sentinel<W, S>(
    distance: &Option<W>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    W: Serialize,
    S: Serializer,
{
    match distance {
        Some(distance) => distance.serialize(serializer),
        None => serializer.serialize_i64(UNREACHED_DISTANCE),
    }
}

/// Writes the labels as `{"source": s, "nodes": [{"node", "predecessor", "distance"}]}`
pub fn write_json<W, O>(out: &mut O, labels: &LabelStore<W>) -> io::Result<()>
where
    W: Weight + Serialize,
    O: Write,
{
    let report = JsonReport {
        source: labels.source(),
        nodes: labels
            .rows()
            .map(|LabelRow { node, predecessor, distance }| JsonRow {
                node,
                predecessor,
                distance,
            })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Writes the labels to `path` in the given format
///
/// The report goes to a `.tmp` sibling first and is renamed over `path` once
/// complete, so readers never observe a partial file.
pub fn persist<W>(path: &Path, labels: &LabelStore<W>, format: OutputFormat) -> Result<()>
where
    W: Weight + Serialize,
{
    let staging = staging_path(path);
    let io_err = |source: io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let written = File::create(&staging).and_then(|file| {
        let mut writer = BufWriter::new(file);
        match format {
            OutputFormat::Text => write_text(&mut writer, labels)?,
            OutputFormat::Json => write_json(&mut writer, labels)?,
        }
        writer.flush()
    });
    if let Err(source) = written {
        let _ = fs::remove_file(&staging);
        return Err(io_err(source));
    }

    fs::rename(&staging, path).map_err(|source| {
        let _ = fs::remove_file(&staging);
        io_err(source)
    })
}
