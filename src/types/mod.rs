//! All data types for the pathspan library.

pub mod distance;
pub mod edge;
pub mod error;
pub mod node;

pub use distance::Distance;
pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use node::Node;

/// Dense position of a node in its graph's enumeration order.
pub type NodeIndex = usize;
