//! JSON graph document input.

pub mod reader;

pub use reader::{GraphDocument, GraphReader};
