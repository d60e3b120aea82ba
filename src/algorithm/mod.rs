pub mod traits;
pub mod labels;
pub mod dial;
pub mod dijkstra;
pub mod array_scan;
pub mod strategy;

pub use labels::{LabelRow, LabelStore, NO_PREDECESSOR, UNREACHED_DISTANCE};
pub use strategy::Strategy;
pub use traits::ShortestPathAlgorithm;
