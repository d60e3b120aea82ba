//! Reading graph instances and writing labels
pub mod emitter;
pub mod loader;

pub use emitter::{persist, write_json, write_text, OutputFormat};
pub use loader::{load_instance, parse_graph, InstanceLayout};
